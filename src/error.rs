//! Error taxonomy for the conversion and packing pipelines
//!
//! Every variant is terminal for the current invocation: these are
//! deterministic input-validation failures, never transient conditions.

use std::io;
use thiserror::Error;

/// Errors produced while converting an image to a TIM texture.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The sidecar descriptor was missing tokens or contained non-numeric ones.
    #[error("malformed metadata descriptor: {0}")]
    MalformedMetadata(String),

    /// Only 4-bpp and 8-bpp are defined by the target hardware.
    #[error("unsupported bit depth {0}, expected 4 or 8")]
    UnsupportedBitDepth(u32),

    /// The image width cannot be packed at the requested bit depth.
    #[error("width {width} can't be represented at {bpp} bpp")]
    UnsupportedWidth { width: usize, bpp: u32 },

    /// The image has more distinct colors than the CLUT can hold.
    #[error("image has more than {max_colours} colours")]
    PaletteOverflow { max_colours: usize },

    /// The external image decoder rejected the input file.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
