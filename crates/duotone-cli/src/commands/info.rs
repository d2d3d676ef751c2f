use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use duotone_core::consts::{DEFAULT_MAX_LONGEST_EDGE, DEFAULT_MIN_SHORTEST_EDGE};
use duotone_core::filters::histogram::Histogram;
use duotone_core::io::image_io::load_image;
use duotone_core::resize::target_dimensions;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let target = target_dimensions(
        image.width(),
        image.height(),
        DEFAULT_MAX_LONGEST_EDGE,
        DEFAULT_MIN_SHORTEST_EDGE,
    )?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}", image.dimensions());
    println!("Renders at:  {}", target);
    println!("Greyscale:   {}", if image.is_greyscale() { "yes" } else { "no" });

    let alpha = Histogram::from_channel(&image, 3);
    let opaque = alpha.counts()[255] == alpha.total();
    println!("Opaque:      {}", if opaque { "yes" } else { "no" });

    if image.is_greyscale() {
        let grey = Histogram::from_channel(&image, 0);
        if let (Some(lo), Some(hi)) = (grey.min_value(), grey.max_value()) {
            println!("Grey range:  {lo}..={hi}");
        }
    }

    let size_mb = image.pixels().len() as f64 / (1024.0 * 1024.0);
    println!("RGBA size:   {:.1} MB", size_mb);

    Ok(())
}
