//! 16-bit TIM palette color
//!
//! The PS1 texture unit stores CLUT entries as one VRAM halfword:
//!
//! Format: `fBBBBBGG GGGRRRRR` (shown big-endian for clarity)
//! - Bits 4-0: Red (0-31)
//! - Bits 9-5: Green (0-31)
//! - Bits 14-10: Blue (0-31)
//! - Bit 15 (f): Draw flag (1 = drawn, 0 = transparent color key)
//!
//! Special value: 0x0000 = fully transparent, never drawn.

/// A packed CLUT entry. Two entries are equal exactly when their packed
/// 16-bit values are equal; the source RGBA they were derived from does
/// not participate in equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimColor(pub u16);

impl TimColor {
    /// Fully transparent entry (color key, not drawn)
    pub const TRANSPARENT: TimColor = TimColor(0x0000);

    /// Create from 5-bit RGB values (0-31 each) with the draw flag set
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let r = (r.min(31)) as u16;
        let g = (g.min(31) as u16) << 5;
        let b = (b.min(31) as u16) << 10;
        TimColor(0x8000 | r | g | b)
    }

    /// Create from an RGBA-8888 texel.
    ///
    /// Alpha strictly above 128 yields a drawable color with each channel
    /// truncated from 8 to 5 bits (no rounding); anything else collapses
    /// to the single transparent value 0x0000.
    #[inline]
    pub fn from_rgba8888(r: u8, g: u8, b: u8, a: u8) -> Self {
        if a > 128 {
            Self::new(r >> 3, g >> 3, b >> 3)
        } else {
            Self::TRANSPARENT
        }
    }

    /// Check if this is the transparent color key
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.0 == 0x0000
    }

    /// Get red channel as 5-bit value (0-31)
    #[inline]
    pub fn r5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Get green channel as 5-bit value (0-31)
    #[inline]
    pub fn g5(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    /// Get blue channel as 5-bit value (0-31)
    #[inline]
    pub fn b5(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    /// Get the draw flag bit
    #[inline]
    pub fn flag(self) -> bool {
        self.0 & 0x8000 != 0
    }
}
