use std::sync::Arc;

use tracing::info;

use crate::color::{duotone, Rgb};
use crate::error::Result;
use crate::filters::greyscale::greyscale;
use crate::filters::histogram::auto_contrast;
use crate::filters::levels::midtone_contrast;
use crate::raster::RasterImage;
use crate::resize::resize;

use super::config::{PipelineConfig, ResizeConfig};
use super::types::{DuotoneOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// Run the full pipeline with a thread-safe progress reporter.
///
/// resize → greyscale → auto contrast → midtone contrast → duotone (normal and
/// inverted). The resized buffer is cloned before greyscale so it can be
/// returned untouched, and the toned buffer is cloned once to feed both duotones.
pub fn run_pipeline_reported(
    image: RasterImage,
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<DuotoneOutput> {
    config.validate()?;
    info!(
        source = %image.dimensions(),
        max_longest_edge = config.resize.max_longest_edge,
        min_shortest_edge = config.resize.min_shortest_edge,
        contrast_factor = config.contrast_factor,
        dark = %config.dark_color,
        light = %config.light_color,
        "Running duotone pipeline"
    );

    reporter.begin_stage(PipelineStage::Resizing);
    let resized = resize(
        image,
        config.resize.max_longest_edge,
        config.resize.min_shortest_edge,
    )?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Greyscale);
    let grey = greyscale(resized.clone());
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::AutoContrast);
    let stretched = auto_contrast(grey);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::MidtoneContrast);
    let toned = midtone_contrast(stretched, config.contrast_factor)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Duotone);
    let normal = duotone(toned.clone(), config.dark_color, config.light_color);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::InvertedDuotone);
    let inverted = duotone(toned, config.light_color, config.dark_color);
    reporter.finish_stage();

    info!(output = %resized.dimensions(), "Duotone pipeline complete");
    Ok(DuotoneOutput {
        resized,
        normal,
        inverted,
    })
}

/// Run the full pipeline.
pub fn run_pipeline(image: RasterImage, config: &PipelineConfig) -> Result<DuotoneOutput> {
    run_pipeline_reported(image, config, Arc::new(NoOpReporter))
}

/// Render the resized original, normal duotone and inverted duotone of `image`.
pub fn render_duotone(
    image: RasterImage,
    max_longest_edge: u32,
    min_shortest_edge: u32,
    contrast_factor: f32,
    dark_color: Rgb,
    light_color: Rgb,
) -> Result<DuotoneOutput> {
    let config = PipelineConfig {
        resize: ResizeConfig {
            max_longest_edge,
            min_shortest_edge,
        },
        contrast_factor,
        dark_color,
        light_color,
    };
    run_pipeline(image, &config)
}
