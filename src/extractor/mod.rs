//! Extraction pipeline from binary mask to simplified filament graph.
//!
//! Stages, in order:
//! - [`crate::contours`]: boundary tracing and thresholding.
//! - [`crate::mesh`]: jitter, outer boundary selection and hole markers.
//! - [`crate::triangulate`]: constrained triangulation with holes carved out.
//! - [`crate::triangles`]: classification, radius sampling and pruning.
//! - [`crate::graph`]: graph construction, degree-2 collapse and largest
//!   component selection.
//!
//! Slices are processed single-threaded; [`NetworkExtractor::process_batch`]
//! fans a stack of slices out over the rayon pool.

mod batch;
pub mod params;
mod pipeline;

pub use params::ExtractorParams;
pub use pipeline::NetworkExtractor;
