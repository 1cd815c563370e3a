//! Statistics recorded by the individual extraction stages.

use crate::graph::{Redundancy, SimplifyOutcome};
use crate::triangles::KindCounts;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourStage {
    /// Boundaries traced in the mask.
    pub traced: usize,
    /// Boundaries left after dropping short ones.
    pub kept: usize,
    pub points: usize,
    pub min_points: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStage {
    pub points: usize,
    pub facets: usize,
    pub holes: usize,
    /// Index of the contour used as outer boundary.
    pub outer_contour: usize,
    /// Hole contours dropped for lack of an interior point.
    pub dropped_contours: Vec<usize>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangulationStage {
    pub triangles: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStage {
    pub counts: KindCounts,
    pub isolated_dropped: usize,
    /// Centres outside the distance map, given radius 0.
    pub defaulted_radii: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PruningStage {
    pub order: usize,
    pub rounds: usize,
    pub removed: usize,
    pub isolated_dropped: usize,
    pub defaulted_radii: usize,
    /// Kinds of the surviving triangles.
    pub counts: KindCounts,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationStage {
    pub mode: Redundancy,
    pub nodes_before: usize,
    pub edges_before: usize,
    #[serde(flatten)]
    pub outcome: SimplifyOutcome,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStage {
    pub components: usize,
    pub kept_nodes: usize,
    pub discarded_nodes: usize,
}
