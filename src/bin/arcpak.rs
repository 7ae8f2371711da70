//! arcpak CLI: pack files into a runtime asset archive
//!
//! Usage: `arcpak out.arc a.tim b.tim ...`. Directory names are the base
//! file names; order on the command line is the order in the archive.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use timpak::{pack_archive, ArcEntry};

#[derive(Parser, Debug)]
#[command(version, about = "Pack files into an asset archive")]
struct Args {
    /// Output archive file
    out: PathBuf,

    /// Files to pack, in directory order
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut entries = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            bail!("{} has no usable file name", path.display());
        };
        let data =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        entries.push(ArcEntry {
            name: name.to_string(),
            data,
        });
    }

    let blob = pack_archive(&entries);
    fs::write(&args.out, &blob)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        "packed {} files into {} ({} bytes)",
        entries.len(),
        args.out.display(),
        blob.len()
    );

    Ok(())
}
