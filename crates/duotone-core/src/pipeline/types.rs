use crate::raster::RasterImage;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Resizing,
    Greyscale,
    AutoContrast,
    MidtoneContrast,
    Duotone,
    InvertedDuotone,
}

impl PipelineStage {
    /// Every stage, in execution order.
    pub const ALL: [PipelineStage; 6] = [
        Self::Resizing,
        Self::Greyscale,
        Self::AutoContrast,
        Self::MidtoneContrast,
        Self::Duotone,
        Self::InvertedDuotone,
    ];
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resizing => write!(f, "Resizing"),
            Self::Greyscale => write!(f, "Greyscale"),
            Self::AutoContrast => write!(f, "Auto contrast"),
            Self::MidtoneContrast => write!(f, "Midtone contrast"),
            Self::Duotone => write!(f, "Duotone"),
            Self::InvertedDuotone => write!(f, "Inverted duotone"),
        }
    }
}

/// The three buffers produced by one pipeline run.
#[derive(Clone, Debug)]
pub struct DuotoneOutput {
    /// The resized source, before any tone adjustment.
    pub resized: RasterImage,
    /// Duotone with shadows in the dark color and highlights in the light color.
    pub normal: RasterImage,
    /// Same tone-adjusted source with the two colors swapped.
    pub inverted: RasterImage,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
