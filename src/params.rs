//! Placement metadata and bit depth selection
//!
//! Each input image carries a sidecar text descriptor with five integers:
//! texture X/Y, palette X/Y, and bits per pixel. The descriptor fixes where
//! the texture and its CLUT land in VRAM and which packing density is used.

use crate::error::ConvertError;

/// CLUT bit depth, the only two densities the texture unit defines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// 4-bit indexed (16 colors), two pixels per byte
    Bpp4,
    /// 8-bit indexed (256 colors), one pixel per byte
    Bpp8,
}

impl BitDepth {
    /// Parse the descriptor's bpp field
    pub fn from_bpp(bpp: u32) -> Result<Self, ConvertError> {
        match bpp {
            4 => Ok(BitDepth::Bpp4),
            8 => Ok(BitDepth::Bpp8),
            other => Err(ConvertError::UnsupportedBitDepth(other)),
        }
    }

    /// Number of CLUT entries at this depth
    #[inline]
    pub fn max_colours(self) -> usize {
        match self {
            BitDepth::Bpp4 => 16,
            BitDepth::Bpp8 => 256,
        }
    }

    /// Bits per pixel
    #[inline]
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            BitDepth::Bpp4 => 4,
            BitDepth::Bpp8 => 8,
        }
    }

    /// log2 of how many 16-bit VRAM units one row pixel count spans:
    /// the pixel section stores its row width as `width >> width_shift`
    #[inline]
    pub fn width_shift(self) -> u32 {
        match self {
            BitDepth::Bpp4 => 2,
            BitDepth::Bpp8 => 1,
        }
    }

    /// Format code stored in the TIM header
    #[inline]
    pub fn format_code(self) -> u8 {
        match self {
            BitDepth::Bpp4 => 0x08,
            BitDepth::Bpp8 => 0x09,
        }
    }

    /// Check that rows pack onto whole bytes at this depth.
    ///
    /// 4-bpp packs two pixels per byte, so the width must be even; 8-bpp
    /// accepts any width.
    pub fn supports_width(self, width: usize) -> bool {
        match self {
            BitDepth::Bpp4 => width % 2 == 0,
            BitDepth::Bpp8 => true,
        }
    }
}

/// Placement and format parameters for one texture, parsed from the sidecar
/// descriptor. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimParams {
    /// VRAM X coordinate of the pixel data
    pub tex_x: u16,
    /// VRAM Y coordinate of the pixel data
    pub tex_y: u16,
    /// VRAM X coordinate of the CLUT
    pub pal_x: u16,
    /// VRAM Y coordinate of the CLUT
    pub pal_y: u16,
    /// Packing density (4 or 8 bpp)
    pub depth: BitDepth,
}

impl TimParams {
    /// Parse a sidecar descriptor: five whitespace-separated integers in
    /// fixed order `tex_x tex_y pal_x pal_y bpp`.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut tokens = text.split_whitespace();
        let mut next = |name: &str| -> Result<u32, ConvertError> {
            let tok = tokens
                .next()
                .ok_or_else(|| ConvertError::MalformedMetadata(format!("missing {}", name)))?;
            tok.parse::<u32>().map_err(|_| {
                ConvertError::MalformedMetadata(format!("{} is not a number: {:?}", name, tok))
            })
        };

        let tex_x = next("tex_x")? as u16;
        let tex_y = next("tex_y")? as u16;
        let pal_x = next("pal_x")? as u16;
        let pal_y = next("pal_y")? as u16;
        let depth = BitDepth::from_bpp(next("bpp")?)?;

        Ok(Self {
            tex_x,
            tex_y,
            pal_x,
            pal_y,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let params = TimParams::parse("320 0 0 480 4").unwrap();
        assert_eq!(params.tex_x, 320);
        assert_eq!(params.tex_y, 0);
        assert_eq!(params.pal_x, 0);
        assert_eq!(params.pal_y, 480);
        assert_eq!(params.depth, BitDepth::Bpp4);
    }

    #[test]
    fn test_parse_accepts_newlines() {
        let params = TimParams::parse("640 256\n0 481\n8\n").unwrap();
        assert_eq!(params.depth, BitDepth::Bpp8);
    }

    #[test]
    fn test_parse_too_few_tokens() {
        let err = TimParams::parse("320 0 0 480").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedMetadata(_)));
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = TimParams::parse("320 0 zero 480 4").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedMetadata(_)));
    }

    #[test]
    fn test_parse_bad_bpp() {
        let err = TimParams::parse("0 0 0 0 16").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedBitDepth(16)));
    }

    #[test]
    fn test_depth_derived_values() {
        assert_eq!(BitDepth::Bpp4.max_colours(), 16);
        assert_eq!(BitDepth::Bpp4.width_shift(), 2);
        assert_eq!(BitDepth::Bpp4.format_code(), 0x08);
        assert_eq!(BitDepth::Bpp8.max_colours(), 256);
        assert_eq!(BitDepth::Bpp8.width_shift(), 1);
        assert_eq!(BitDepth::Bpp8.format_code(), 0x09);
    }

    #[test]
    fn test_width_support() {
        assert!(BitDepth::Bpp4.supports_width(64));
        assert!(!BitDepth::Bpp4.supports_width(63));
        assert!(BitDepth::Bpp8.supports_width(63));
    }
}
