pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{render_duotone, run_pipeline, run_pipeline_reported};
pub use types::{DuotoneOutput, PipelineStage, ProgressReporter};
