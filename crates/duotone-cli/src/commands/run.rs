use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use duotone_core::color::Rgb;
use duotone_core::io::image_io::{load_image, save_image};
use duotone_core::pipeline::config::PipelineConfig;
use duotone_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::print_run_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Input image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Longest edge is scaled down to this many pixels
    #[arg(long)]
    pub max_longest: Option<u32>,

    /// Shortest edge is scaled up to at least this many pixels
    #[arg(long)]
    pub min_shortest: Option<u32>,

    /// Midtone contrast factor (> 0, 1.0 = no change)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Shadow color as hex (e.g. "#1b602f")
    #[arg(long)]
    pub dark: Option<Rgb>,

    /// Highlight color as hex (e.g. "#f784c5")
    #[arg(long)]
    pub light: Option<Rgb>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output file name prefix (defaults to the input file stem)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Drives an indicatif bar from pipeline stage events.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.pb.inc(1);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    config.validate().context("Invalid pipeline config")?;

    let prefix = args.prefix.clone().unwrap_or_else(|| {
        args.file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("duotone")
            .to_string()
    });
    let paths = OutputPaths::new(&args.output, &prefix);

    print_run_summary(&config, &args.file, &paths.all());

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let pb = ProgressBar::new(PipelineStage::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { pb: pb.clone() });

    let output = run_pipeline_reported(image, &config, reporter)?;
    pb.finish_with_message("Done");

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for (image, path) in [
        (&output.resized, &paths.original),
        (&output.normal, &paths.normal),
        (&output.inverted, &paths.inverted),
    ] {
        save_image(image, path).with_context(|| format!("Failed to save {}", path.display()))?;
    }

    println!();
    println!("Rendered at {}", output.resized.dimensions());
    for path in paths.all() {
        println!("  {}", path.display());
    }

    Ok(())
}

/// Config file (if any) with command-line overrides applied on top.
fn build_config(args: &RunArgs) -> Result<PipelineConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        PipelineConfig::default()
    };

    if let Some(max_longest) = args.max_longest {
        config.resize.max_longest_edge = max_longest;
    }
    if let Some(min_shortest) = args.min_shortest {
        config.resize.min_shortest_edge = min_shortest;
    }
    if let Some(contrast) = args.contrast {
        config.contrast_factor = contrast;
    }
    if let Some(dark) = args.dark {
        config.dark_color = dark;
    }
    if let Some(light) = args.light {
        config.light_color = light;
    }
    Ok(config)
}

struct OutputPaths {
    original: PathBuf,
    normal: PathBuf,
    inverted: PathBuf,
}

impl OutputPaths {
    fn new(dir: &Path, prefix: &str) -> Self {
        Self {
            original: dir.join(format!("{prefix}-original.png")),
            normal: dir.join(format!("{prefix}-duotone.png")),
            inverted: dir.join(format!("{prefix}-inverted.png")),
        }
    }

    fn all(&self) -> [&Path; 3] {
        [
            self.original.as_path(),
            self.normal.as_path(),
            self.inverted.as_path(),
        ]
    }
}
