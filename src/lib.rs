#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod export;
pub mod pipeline;
pub mod raster;
pub mod types;

// Stage modules – public for tooling and tests, but considered internals.
pub mod angle;
pub mod cleaner;
pub mod corners;
pub mod labeling;
pub mod merge;
pub mod skeleton;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::config::VectorizerConfig;
pub use crate::export::RoadGraph;
pub use crate::pipeline::{PipelineReport, RoadVectorizer, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::raster::Mask;
    pub use crate::{RoadGraph, RoadVectorizer, VectorizerConfig};
}
