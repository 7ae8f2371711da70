//! timpak: image-to-TIM conversion and asset archive packing
//!
//! Converts truecolor images into the PS1's indexed-color TIM texture
//! container, and packs converted assets into the flat archive format the
//! runtime loads from. The conversion is a single synchronous pipeline:
//!
//! 1. Parse the sidecar placement descriptor ([`TimParams`])
//! 2. Decode the source image to RGBA-8888 (binaries, via the `image` crate)
//! 3. Quantize to an insertion-ordered bounded palette ([`quantize::quantize`])
//! 4. Pack palette indices at 4 or 8 bpp ([`pack::pack`])
//! 5. Emit the byte-exact container ([`tim::convert`])
//!
//! Quantization is exact deduplication under 8→5-bit truncation, never
//! nearest-color approximation: too many distinct colors is a hard error.

pub mod arc;
pub mod color;
pub mod error;
pub mod pack;
pub mod params;
pub mod quantize;
pub mod tim;

pub use arc::{pack_archive, ArcEntry};
pub use color::TimColor;
pub use error::ConvertError;
pub use params::{BitDepth, TimParams};
pub use quantize::{quantize, QuantizeResult};
pub use tim::{convert, write_tim};
