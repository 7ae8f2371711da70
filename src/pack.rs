//! Palette index packing
//!
//! Serializes the quantizer's index sequence into the pixel section payload
//! at the configured density. The pairing convention for 4-bpp is fixed:
//! for a pair `(a, b)` met consecutively in scan order, the packed byte is
//! `(b << 4) | a` (first texel in the low nibble). This is pinned by a
//! golden-byte test and must not be swapped for the opposite nibble order.

use crate::params::BitDepth;

/// Number of payload bytes for a raster of the given size and depth
#[inline]
pub fn packed_len(width: usize, height: usize, depth: BitDepth) -> usize {
    ((width << 1) >> depth.width_shift()) * height
}

/// Pack palette indices into the pixel section payload.
///
/// 8-bpp is an identity mapping, one byte per index. 4-bpp packs two
/// consecutive indices per byte, low nibble first. The caller has already
/// validated the width, so 4-bpp rows always span whole bytes.
pub fn pack(indices: &[u8], width: usize, height: usize, depth: BitDepth) -> Vec<u8> {
    let mut out = Vec::with_capacity(packed_len(width, height, depth));

    match depth {
        BitDepth::Bpp4 => {
            for pair in indices.chunks_exact(2) {
                out.push((pair[1] << 4) | (pair[0] & 0x0F));
            }
        }
        BitDepth::Bpp8 => out.extend_from_slice(indices),
    }

    out
}

/// Unpack a pixel section payload back into palette indices.
///
/// Inverse of [`pack`]; used by round-trip tests and asset inspection.
pub fn unpack(packed: &[u8], width: usize, height: usize, depth: BitDepth) -> Vec<u8> {
    match depth {
        BitDepth::Bpp4 => {
            let mut out = Vec::with_capacity(width * height);
            for &byte in packed {
                out.push(byte & 0x0F);
                out.push(byte >> 4);
            }
            out
        }
        BitDepth::Bpp8 => packed.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_convention_golden_byte() {
        // 2x1 image, indices 0 then 1 in scan order: low nibble holds the
        // first texel, so the single packed byte is 0x10.
        let packed = pack(&[0, 1], 2, 1, BitDepth::Bpp4);
        assert_eq!(packed, vec![0x10]);
    }

    #[test]
    fn test_pack_4bpp_rows() {
        let indices = [1, 2, 3, 4, 5, 6, 7, 8];
        let packed = pack(&indices, 4, 2, BitDepth::Bpp4);
        assert_eq!(packed, vec![0x21, 0x43, 0x65, 0x87]);
        assert_eq!(packed.len(), packed_len(4, 2, BitDepth::Bpp4));
    }

    #[test]
    fn test_pack_8bpp_identity() {
        let indices = [0, 1, 254, 255];
        let packed = pack(&indices, 4, 1, BitDepth::Bpp8);
        assert_eq!(packed, indices.to_vec());
        assert_eq!(packed.len(), packed_len(4, 1, BitDepth::Bpp8));
    }

    #[test]
    fn test_packed_len() {
        // 4-bpp: half a byte per pixel; 8-bpp: one byte per pixel
        assert_eq!(packed_len(64, 32, BitDepth::Bpp4), 64 / 2 * 32);
        assert_eq!(packed_len(64, 32, BitDepth::Bpp8), 64 * 32);
        // Odd width at 8-bpp still packs one byte per pixel
        assert_eq!(packed_len(63, 2, BitDepth::Bpp8), 126);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let indices = [15, 0, 7, 8, 1, 14, 2, 13];
        let packed = pack(&indices, 8, 1, BitDepth::Bpp4);
        assert_eq!(unpack(&packed, 8, 1, BitDepth::Bpp4), indices.to_vec());

        let packed = pack(&indices, 8, 1, BitDepth::Bpp8);
        assert_eq!(unpack(&packed, 8, 1, BitDepth::Bpp8), indices.to_vec());
    }
}
