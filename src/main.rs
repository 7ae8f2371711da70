//! timpak CLI: convert an image file to a TIM texture
//!
//! Usage: `timpak out.tim in.png`. Placement metadata is read from the
//! sidecar descriptor `in.png.txt` (five integers: tex_x tex_y pal_x pal_y
//! bpp). On any failure the process exits non-zero with a one-line
//! diagnostic and writes no output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use timpak::{convert, TimParams};

#[derive(Parser, Debug)]
#[command(version, about = "Convert an image to a PS1 TIM texture")]
struct Args {
    /// Output TIM file
    out: PathBuf,

    /// Input image (PNG, JPEG or BMP); `<input>.txt` must hold the
    /// placement descriptor
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut descriptor_os = args.input.clone().into_os_string();
    descriptor_os.push(".txt");
    let descriptor_path = PathBuf::from(descriptor_os);
    let descriptor = fs::read_to_string(&descriptor_path)
        .with_context(|| format!("failed to read {}", descriptor_path.display()))?;
    let params = TimParams::parse(&descriptor)
        .with_context(|| format!("failed to parse {}", descriptor_path.display()))?;

    let image = image::open(&args.input)
        .with_context(|| format!("failed to read texture data from {}", args.input.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();

    let blob = convert(&params, width as usize, height as usize, image.as_raw())
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    fs::write(&args.out, &blob)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        "wrote {} ({} bytes, {}x{})",
        args.out.display(),
        blob.len(),
        width,
        height
    );

    Ok(())
}
