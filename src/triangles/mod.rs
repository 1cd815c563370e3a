//! Triangle records of the carved triangulation and their classification.
//!
//! The triangles of a filament form a strip whose dual is the skeleton: a
//! triangle sharing three edges with others is a branch point, two a segment
//! of a branch, one the tip of a branch.

mod classify;
mod prune;

pub use classify::{build_triangles, count_kinds, relabel, sample_radii, KindCounts};
pub use prune::{bruteforce_pruning, PruneOutcome};

use nalgebra::Point2;
use serde::Serialize;

/// Number of edges a triangle shares with other triangles of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TriangleKind {
    /// Three shared edges.
    Junction,
    /// Two shared edges.
    Normal,
    /// One shared edge.
    End,
    /// No shared edge.
    Isolated,
}

impl TriangleKind {
    pub fn from_shared_edges(shared: usize) -> Self {
        match shared {
            0 => TriangleKind::Isolated,
            1 => TriangleKind::End,
            2 => TriangleKind::Normal,
            _ => TriangleKind::Junction,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Triangle {
    /// Indices into the triangulation points.
    pub vertices: [usize; 3],
    pub corners: [Point2<f64>; 3],
    pub kind: TriangleKind,
    /// Centroid of the corners.
    pub center: Point2<f64>,
    /// Distance-map value at the centre; 0 when the centre falls outside it.
    pub radius: f64,
}

impl Triangle {
    pub fn new(vertices: [usize; 3], corners: [Point2<f64>; 3]) -> Self {
        let center = Point2::from((corners[0].coords + corners[1].coords + corners[2].coords) / 3.0);
        Self {
            vertices,
            corners,
            kind: TriangleKind::Isolated,
            center,
            radius: 0.0,
        }
    }

    /// Undirected edges as sorted vertex-index pairs.
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [sorted(a, b), sorted(b, c), sorted(c, a)]
    }
}

#[inline]
fn sorted(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
