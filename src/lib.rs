#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod image;
pub mod types;

// Stage-level building blocks – public for tools and tests, but considered
// internals of the extractor.
pub mod config;
pub mod contours;
pub mod distance;
pub mod mesh;
pub mod morphology;
pub mod triangles;
pub mod triangulate;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::error::{ExtractionError, TriangulationError};
pub use crate::extractor::{ExtractorParams, NetworkExtractor};
pub use crate::graph::{FilamentGraph, GraphSummary, Redundancy};
pub use crate::types::{ExtractionReport, GraphExport, LevelGraph, SliceInput};

// Diagnostics returned with every report.
pub use crate::diagnostics::ExtractionTrace;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use filament_network::prelude::*;
///
/// # fn main() -> Result<(), ExtractionError> {
/// let (w, h) = (64usize, 32usize);
/// let mut mask = MaskU8::new(w, h);
/// for x in 8..56 {
///     mask.set(x, 16, 255);
/// }
///
/// let extractor = NetworkExtractor::new(ExtractorParams {
///     redundancy: Redundancy::All,
///     ..Default::default()
/// });
///
/// let report = extractor.process_mask(mask.as_view())?;
/// println!("nodes={} edges={}", report.graph.node_count(), report.graph.edge_count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8, MaskU8};
    pub use crate::{
        ExtractionError, ExtractionReport, ExtractorParams, FilamentGraph, NetworkExtractor,
        Redundancy,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::contours::{extract_contours, threshold_contours, ContourApproximation};
    pub use crate::distance::euclidean_distance_transform;
    pub use crate::graph::{build_graph, remove_redundant_nodes, AdjacencyMatrix};
    pub use crate::mesh::{build_mesh, find_interior_point, round_trip_connect, JitterParams};
    pub use crate::morphology::{invert_mask, smooth_mask};
    pub use crate::triangles::{bruteforce_pruning, build_triangles, Triangle, TriangleKind};
    pub use crate::triangulate::{triangulate, Triangulation};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        ClassificationStage, ComponentStage, ContourStage, InputDescriptor, MeshStage,
        PruningStage, SimplificationStage, StageTiming, TimingBreakdown, TriangulationStage,
    };
}
