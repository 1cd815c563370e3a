use super::stages::{
    ClassificationStage, ComponentStage, ContourStage, MeshStage, PruningStage,
    SimplificationStage, TriangulationStage,
};
use super::TimingBreakdown;
use serde::Serialize;

/// Record of everything the extractor did for one slice.
///
/// Stages that did not run (because the slice was empty or an earlier stage
/// failed) are left as `None`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<ContourStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangulation: Option<TriangulationStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pruning: Option<PruningStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplification: Option<SimplificationStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentStage>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub foreground_pixels: usize,
}
