use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use duotone_core::color::{duotone, hex_to_rgb};
use duotone_core::filters::greyscale::greyscale;
use duotone_core::filters::histogram::auto_contrast_reported;
use duotone_core::filters::levels::midtone_contrast;
use duotone_core::io::image_io::{load_image, save_image};
use duotone_core::resize::resize;

#[derive(Args)]
pub struct FilterArgs {
    /// Input image file
    pub file: PathBuf,

    /// Bounded resize: "max_longest,min_shortest" (e.g. "1000,300")
    #[arg(long)]
    pub resize: Option<String>,

    /// Convert to BT.709 greyscale
    #[arg(long)]
    pub greyscale: bool,

    /// Stretch the histogram to the full 0-255 range
    #[arg(long)]
    pub auto_contrast: bool,

    /// Midtone contrast factor (1.0 = no change, >1.0 = more contrast)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Duotone colors: "dark,light" (e.g. "#1b602f,#f784c5")
    #[arg(long)]
    pub duotone: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "filtered.png")]
    pub output: PathBuf,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let mut image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {} image", image.dimensions());

    if let Some(ref resize_str) = args.resize {
        let parts: Vec<u32> = resize_str
            .split(',')
            .map(|s| s.trim().parse::<u32>())
            .collect::<std::result::Result<_, _>>()
            .context("Invalid resize format (expected 'max_longest,min_shortest')")?;
        if parts.len() != 2 {
            anyhow::bail!("Resize requires exactly 2 values: max_longest,min_shortest");
        }
        image = resize(image, parts[0], parts[1])?;
        println!("Resized to {}", image.dimensions());
    }

    if args.greyscale {
        println!("Applying greyscale");
        image = greyscale(image);
    }

    if args.auto_contrast {
        let (stretched, applied) = auto_contrast_reported(image);
        image = stretched;
        if applied {
            println!("Applied auto contrast");
        } else {
            println!("Auto contrast skipped: image has a single tone");
        }
    }

    if let Some(factor) = args.contrast {
        println!("Applying midtone contrast: {}", factor);
        image = midtone_contrast(image, factor)?;
    }

    if let Some(ref duotone_str) = args.duotone {
        let (dark, light) = duotone_str
            .split_once(',')
            .context("Invalid duotone format (expected 'dark,light')")?;
        let dark = hex_to_rgb(dark)?;
        let light = hex_to_rgb(light)?;
        if !image.is_greyscale() {
            println!("Note: duotone keys on the red channel; use --greyscale for luminance");
        }
        println!("Applying duotone {} → {}", dark, light);
        image = duotone(image, dark, light);
    }

    save_image(&image, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
