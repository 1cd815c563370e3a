use crate::diagnostics::ExtractionTrace;
use crate::graph::{EdgeRecord, FilamentGraph, GraphSummary, NodeRecord, Redundancy};
use crate::image::{ImageF32, ImageU8};
use serde::Serialize;

/// Graph and trace produced for one slice.
#[derive(Clone, Debug)]
pub struct ExtractionReport {
    /// Graph at the requested redundancy level.
    pub graph: FilamentGraph,
    pub redundancy: Redundancy,
    /// Coarser levels, finest first. Empty unless requested.
    pub coarser: Vec<LevelGraph>,
    pub trace: ExtractionTrace,
}

/// Graph of one redundancy level.
#[derive(Clone, Debug)]
pub struct LevelGraph {
    pub redundancy: Redundancy,
    pub graph: FilamentGraph,
}

impl ExtractionReport {
    /// Serializable view of the report.
    pub fn export(&self) -> GraphExport<'_> {
        GraphExport::new(&self.graph, &self.trace)
    }

    /// Graph at `redundancy`, if the report carries that level.
    pub fn graph_at(&self, redundancy: Redundancy) -> Option<&FilamentGraph> {
        if redundancy == self.redundancy {
            return Some(&self.graph);
        }
        self.coarser
            .iter()
            .find(|l| l.redundancy == redundancy)
            .map(|l| &l.graph)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphExport<'a> {
    pub summary: GraphSummary,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub trace: &'a ExtractionTrace,
}

impl<'a> GraphExport<'a> {
    pub fn new(graph: &FilamentGraph, trace: &'a ExtractionTrace) -> Self {
        Self {
            summary: graph.summary(),
            nodes: graph.nodes(),
            edges: graph.edges(),
            trace,
        }
    }
}

/// One slice of a batch. Without a distance map the extractor computes it.
#[derive(Clone, Copy, Debug)]
pub struct SliceInput<'a> {
    pub mask: ImageU8<'a>,
    pub distance: Option<&'a ImageF32>,
}

impl<'a> SliceInput<'a> {
    pub fn new(mask: ImageU8<'a>) -> Self {
        Self {
            mask,
            distance: None,
        }
    }

    pub fn with_distance(mask: ImageU8<'a>, distance: &'a ImageF32) -> Self {
        Self {
            mask,
            distance: Some(distance),
        }
    }
}
