//! Streaming color quantization for TIM indexed textures
//!
//! This is exact deduplication under a fixed 8→5-bit truncation, not
//! perceptual clustering: each texel maps to one packed 16-bit value, the
//! palette keeps distinct values in first-occurrence order, and exceeding
//! the CLUT capacity is a hard failure rather than an approximation.

use log::debug;

use crate::color::TimColor;
use crate::error::ConvertError;

/// Result of quantizing an image: the insertion-ordered palette and one
/// palette index per texel, in scan order.
#[derive(Debug)]
pub struct QuantizeResult {
    /// Distinct packed colors, first occurrence first, length <= max_colours
    pub palette: Vec<TimColor>,
    /// One index per source texel, each < palette.len()
    pub indices: Vec<u8>,
}

/// Quantize an RGBA-8888 raster to palette indices.
///
/// Scans texels in forward raster order (row-major, left to right, top to
/// bottom). Each texel derives a [`TimColor`] and is matched against the
/// palette by exact packed-value equality with a linear scan in insertion
/// order; first match wins. A miss appends a new entry, or fails with
/// [`ConvertError::PaletteOverflow`] once the palette holds `max_colours`.
///
/// The linear lookup is correctness-critical, not a shortcut: first-match
/// order defines which index number downstream consumers see.
pub fn quantize(rgba_pixels: &[u8], max_colours: usize) -> Result<QuantizeResult, ConvertError> {
    let mut palette: Vec<TimColor> = Vec::with_capacity(max_colours);
    let mut indices: Vec<u8> = Vec::with_capacity(rgba_pixels.len() / 4);

    for texel in rgba_pixels.chunks_exact(4) {
        let rep = TimColor::from_rgba8888(texel[0], texel[1], texel[2], texel[3]);

        let index = match palette.iter().position(|&c| c == rep) {
            Some(i) => i,
            None => {
                if palette.len() >= max_colours {
                    return Err(ConvertError::PaletteOverflow { max_colours });
                }
                palette.push(rep);
                palette.len() - 1
            }
        };
        indices.push(index as u8);
    }

    debug!(
        "quantized {} texels to {} palette entries",
        indices.len(),
        palette.len()
    );

    Ok(QuantizeResult { palette, indices })
}
