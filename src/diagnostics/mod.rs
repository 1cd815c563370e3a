//! Diagnostics returned alongside every extracted graph.
//!
//! [`ExtractionTrace`] bundles the input description, per-stage wall-clock
//! timings and the statistics each stage reports. It serializes to camelCase
//! JSON so the CLI can write it next to the graph.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{ExtractionTrace, InputDescriptor};
pub use stages::{
    ClassificationStage, ComponentStage, ContourStage, MeshStage, PruningStage,
    SimplificationStage, TriangulationStage,
};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
