//! Parameters of the extraction pipeline.
//!
//! Every field has a default so partial JSON configs deserialize cleanly.

use crate::contours::ContourApproximation;
use crate::graph::Redundancy;
use crate::mesh::JitterParams;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorParams {
    /// Pruning order P: rounds of end-triangle removal.
    pub pruning: usize,
    /// Collapse mode for degree-2 nodes.
    pub redundancy: Redundancy,
    /// Boundary vertices kept per traced contour.
    pub approximation: ContourApproximation,
    /// Contours with fewer points are discarded before meshing.
    pub min_contour_points: usize,
    pub jitter: JitterParams,
    /// Distance from the contour vertex at which fallback interior points
    /// are probed (pixels).
    pub interior_offset: f64,
    /// Report only the largest connected component of the final graph.
    pub keep_largest_component: bool,
    /// Also derive the graph of every level coarser than `redundancy`
    /// (see [`Redundancy::emitted`]).
    pub coarser_levels: bool,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            pruning: 5,
            redundancy: Redundancy::Half,
            approximation: ContourApproximation::default(),
            min_contour_points: 4,
            jitter: JitterParams::default(),
            interior_offset: 0.5,
            keep_largest_component: true,
            coarser_levels: false,
        }
    }
}

impl ExtractorParams {
    /// Copy with the jitter seed advanced by `offset`, so slices of a batch
    /// draw independent but reproducible perturbations.
    pub fn for_slice(&self, offset: usize) -> Self {
        let mut params = self.clone();
        params.jitter.seed = self.jitter.seed.map(|s| s.wrapping_add(offset as u64));
        params
    }
}
