//! Closed boundary curves of the foreground regions of a binary mask.
//!
//! Boundaries are traced on the pixel-centre lattice: every contour vertex sits
//! halfway between a foreground pixel and a 4-adjacent background pixel, and
//! the raster is padded with background so regions touching the border close
//! cleanly. Outer boundaries and hole boundaries are returned alike, each as a
//! simple polygon with an implicit closing edge.

mod dominant;
mod marching;

pub use dominant::dominant_points;
pub use marching::trace_boundaries;

use crate::image::ImageU8;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Ordered closed sequence of points; the edge `last -> first` is implied.
pub type Contour = Vec<Point2<f64>>;

/// Straight-run spacing used by the default approximation (lattice steps).
pub const DEFAULT_MAX_GAP: usize = 2;

fn default_max_gap() -> usize {
    DEFAULT_MAX_GAP
}

/// How many boundary vertices a traced contour keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ContourApproximation {
    /// Every lattice vertex of the boundary.
    Full,
    /// Staircase corners plus one vertex every `max_gap` steps of a straight
    /// run. Flat branch tips shrink to a few vertices, which keeps pruning
    /// from leaving forks there.
    DominantPoints {
        #[serde(default = "default_max_gap")]
        max_gap: usize,
    },
}

impl Default for ContourApproximation {
    fn default() -> Self {
        ContourApproximation::DominantPoints {
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

/// Trace every foreground boundary of `mask` and apply the approximation.
pub fn extract_contours(mask: &ImageU8, approximation: ContourApproximation) -> Vec<Contour> {
    let raw = trace_boundaries(mask);
    match approximation {
        ContourApproximation::Full => raw,
        ContourApproximation::DominantPoints { max_gap } => raw
            .iter()
            .map(|c| dominant_points(c, max_gap))
            .collect(),
    }
}

/// Keep only contours with at least `min_points` points. Order is preserved.
pub fn threshold_contours(contours: Vec<Contour>, min_points: usize) -> Vec<Contour> {
    contours
        .into_iter()
        .filter(|c| c.len() >= min_points)
        .collect()
}
