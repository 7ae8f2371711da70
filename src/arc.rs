//! Asset archive packing
//!
//! The runtime loads assets from a flat archive: a directory table of
//! 16-byte entries (12-byte NUL-padded name + u32 little-endian data
//! offset) followed by the file contents, each aligned to a 16-byte
//! boundary. Sizes are not stored; consumers read up to the next entry's
//! offset. File names longer than 12 bytes are truncated with a warning.

use log::{debug, warn};

/// Directory entry name length, fixed by the runtime's loader
pub const NAME_LEN: usize = 12;

/// Data block alignment in the archive
const ALIGN: usize = 16;

/// One file to be packed into an archive
pub struct ArcEntry {
    /// Name stored in the directory (base file name, no path)
    pub name: String,
    /// File contents
    pub data: Vec<u8>,
}

#[inline]
fn align_up(x: usize) -> usize {
    (x + ALIGN - 1) & !(ALIGN - 1)
}

/// Pack entries into a single archive blob.
///
/// The directory comes first (16 bytes per entry), so the first data block
/// starts at `16 * entries.len()`; each subsequent block starts at the
/// previous block's end rounded up to 16 bytes, with zero padding between.
pub fn pack_archive(entries: &[ArcEntry]) -> Vec<u8> {
    // Lay out data block positions
    let mut positions = Vec::with_capacity(entries.len());
    let mut pos = ALIGN * entries.len();
    for entry in entries {
        positions.push(pos);
        pos = align_up(pos + entry.data.len());
    }

    let total = positions
        .last()
        .map(|&p| p + entries.last().unwrap().data.len())
        .unwrap_or(0);
    let mut out = Vec::with_capacity(total);

    // Directory
    for (entry, &pos) in entries.iter().zip(&positions) {
        let name = entry.name.as_bytes();
        if name.len() > NAME_LEN {
            warn!(
                "{} name is longer than {} characters, truncating",
                entry.name, NAME_LEN
            );
        }
        let mut field = [0u8; NAME_LEN];
        let n = name.len().min(NAME_LEN);
        field[..n].copy_from_slice(&name[..n]);
        out.extend_from_slice(&field);
        out.extend_from_slice(&(pos as u32).to_le_bytes());
    }

    // Data blocks, zero-padded up to each position
    for (entry, &pos) in entries.iter().zip(&positions) {
        out.resize(pos, 0);
        out.extend_from_slice(&entry.data);
    }

    debug!("packed {} files into {} bytes", entries.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, data: &[u8]) -> ArcEntry {
        ArcEntry {
            name: name.to_string(),
            data: data.to_vec(),
        }
    }

    fn read_u32(blob: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(blob[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn test_directory_layout() {
        let blob = pack_archive(&[entry("a.tim", &[1, 2, 3]), entry("b.tim", &[4])]);

        // Two 16-byte directory entries, first data block right after
        assert_eq!(&blob[0..5], b"a.tim");
        assert_eq!(&blob[5..12], &[0u8; 7]);
        assert_eq!(read_u32(&blob, 12), 32);
        assert_eq!(&blob[16..21], b"b.tim");
        // Second block aligned up from 32 + 3
        assert_eq!(read_u32(&blob, 28), 48);

        assert_eq!(&blob[32..35], &[1, 2, 3]);
        // Alignment padding is zeroed
        assert_eq!(&blob[35..48], &[0u8; 13]);
        assert_eq!(blob[48], 4);
        assert_eq!(blob.len(), 49);
    }

    #[test]
    fn test_aligned_entry_needs_no_padding() {
        let blob = pack_archive(&[entry("a", &[9u8; 16]), entry("b", &[7])]);
        assert_eq!(read_u32(&blob, 12), 32);
        assert_eq!(read_u32(&blob, 28), 48);
        assert_eq!(blob[48], 7);
    }

    #[test]
    fn test_long_name_truncated() {
        let blob = pack_archive(&[entry("averylongfilename.tim", &[])]);
        assert_eq!(&blob[0..NAME_LEN], b"averylongfil");
    }

    #[test]
    fn test_empty_archive() {
        assert!(pack_archive(&[]).is_empty());
    }
}
