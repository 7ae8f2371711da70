//! TIM container emission and the conversion pipeline
//!
//! The container is a fixed 8-byte header followed by two length-prefixed
//! sections, CLUT then pixels. Every multi-byte field is little-endian
//! regardless of host byte order; the writers below spell that out rather
//! than assuming anything about the host.
//!
//! Layout:
//! - Header: magic 0x10, 3 reserved zero bytes, format code (0x08 = 4-bpp,
//!   0x09 = 8-bpp), 3 reserved zero bytes.
//! - CLUT section: u32 length `12 + 2 * max_colours`, u16 pal_x, u16 pal_y,
//!   u16 entry count, u16 constant 1, then the packed color entries.
//! - Pixel section: u32 length `12 + payload`, u16 tex_x, u16 tex_y,
//!   u16 halfword row width, u16 height, then the packed bitstream.

use log::debug;

use crate::color::TimColor;
use crate::error::ConvertError;
use crate::pack::pack;
use crate::params::TimParams;
use crate::quantize::quantize;

/// TIM file magic tag
const TIM_MAGIC: u8 = 0x10;

/// Fixed value of the CLUT section's trailing count field (one CLUT per
/// file); a hardware format requirement, not configurable
const CLUT_COUNT: u16 = 1;

#[inline]
fn push_u16(out: &mut Vec<u8>, x: u16) {
    out.extend_from_slice(&x.to_le_bytes());
}

#[inline]
fn push_u32(out: &mut Vec<u8>, x: u32) {
    out.extend_from_slice(&x.to_le_bytes());
}

/// Emit a complete TIM blob from already-quantized data.
///
/// The palette is padded with zero entries up to the depth's CLUT capacity;
/// the entry count field always reports the full capacity.
pub fn write_tim(
    params: &TimParams,
    palette: &[TimColor],
    packed: &[u8],
    width: usize,
    height: usize,
) -> Vec<u8> {
    let max_colours = params.depth.max_colours();
    let clut_length = 12 + 2 * max_colours as u32;
    let pixel_length = 12 + packed.len() as u32;

    let mut out = Vec::with_capacity(8 + clut_length as usize + pixel_length as usize);

    // Header
    out.extend_from_slice(&[TIM_MAGIC, 0, 0, 0]);
    out.extend_from_slice(&[params.depth.format_code(), 0, 0, 0]);

    // CLUT section
    push_u32(&mut out, clut_length);
    push_u16(&mut out, params.pal_x);
    push_u16(&mut out, params.pal_y);
    push_u16(&mut out, max_colours as u16);
    push_u16(&mut out, CLUT_COUNT);
    for &color in palette {
        push_u16(&mut out, color.0);
    }
    for _ in palette.len()..max_colours {
        push_u16(&mut out, TimColor::TRANSPARENT.0);
    }

    // Pixel section
    push_u32(&mut out, pixel_length);
    push_u16(&mut out, params.tex_x);
    push_u16(&mut out, params.tex_y);
    push_u16(&mut out, (width >> params.depth.width_shift()) as u16);
    push_u16(&mut out, height as u16);
    out.extend_from_slice(packed);

    out
}

/// Convert an RGBA-8888 raster plus placement metadata into a TIM blob.
///
/// Runs the whole pipeline: width validation, quantization, index packing,
/// container emission. All-or-nothing: no bytes are produced unless every
/// stage succeeds, so a failed conversion never leaves partial output.
pub fn convert(
    params: &TimParams,
    width: usize,
    height: usize,
    rgba_pixels: &[u8],
) -> Result<Vec<u8>, ConvertError> {
    if !params.depth.supports_width(width) {
        return Err(ConvertError::UnsupportedWidth {
            width,
            bpp: params.depth.bits_per_pixel(),
        });
    }

    let quantized = quantize(rgba_pixels, params.depth.max_colours())?;
    let packed = pack(&quantized.indices, width, height, params.depth);

    debug!(
        "writing TIM: {}x{} at {} bpp, {} packed bytes",
        width,
        height,
        params.depth.bits_per_pixel(),
        packed.len()
    );

    Ok(write_tim(params, &quantized.palette, &packed, width, height))
}
