//! Attributed filament graph.
//!
//! Nodes are triangle centres with the local filament radius as conductivity;
//! edges join adjacent triangles and carry their centre distance as weight.
//! Node ids are assigned once, in triangle-list order, and stay valid while
//! other nodes are removed.

mod build;
mod components;
mod simplify;

pub use build::{build_graph, AdjacencyMatrix};
pub use simplify::{remove_redundant_nodes, Redundancy, SimplifyOutcome};

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeAttrs {
    pub x: f64,
    pub y: f64,
    pub conductivity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeAttrs {
    /// Path length along the filament (pixels).
    pub weight: f64,
    pub conductivity: f64,
}

/// Undirected graph with stable node ids.
#[derive(Clone, Debug, Default)]
pub struct FilamentGraph {
    inner: StableUnGraph<NodeAttrs, EdgeAttrs>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: usize,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub source: usize,
    pub target: usize,
    #[serde(flatten)]
    pub attrs: EdgeAttrs,
}

/// Compact description of a graph for reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes of degree 1.
    pub endpoints: usize,
    /// Nodes of degree 3 or more.
    pub branch_points: usize,
    pub total_weight: f64,
    /// Degree -> number of nodes.
    pub degree_histogram: BTreeMap<usize, usize>,
}

impl FilamentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            inner: StableUnGraph::with_capacity(nodes, edges),
        }
    }

    pub fn add_node(&mut self, attrs: NodeAttrs) -> usize {
        self.inner.add_node(attrs).index()
    }

    /// Insert the edge `a - b`, or overwrite its attributes if present.
    pub fn update_edge(&mut self, a: usize, b: usize, attrs: EdgeAttrs) {
        self.inner
            .update_edge(NodeIndex::new(a), NodeIndex::new(b), attrs);
    }

    pub fn remove_node(&mut self, id: usize) -> Option<NodeAttrs> {
        self.inner.remove_node(NodeIndex::new(id))
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    pub fn contains_node(&self, id: usize) -> bool {
        self.inner.contains_node(NodeIndex::new(id))
    }

    pub fn node(&self, id: usize) -> Option<&NodeAttrs> {
        self.inner.node_weight(NodeIndex::new(id))
    }

    pub fn edge(&self, a: usize, b: usize) -> Option<&EdgeAttrs> {
        let e = self.inner.find_edge(NodeIndex::new(a), NodeIndex::new(b))?;
        self.inner.edge_weight(e)
    }

    /// Live node ids in ascending order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.inner.node_indices().map(|n| n.index()).collect()
    }

    pub fn degree(&self, id: usize) -> usize {
        self.inner.edges(NodeIndex::new(id)).count()
    }

    /// Neighbour ids in ascending order.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .inner
            .neighbors(NodeIndex::new(id))
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> Vec<NodeRecord> {
        self.inner
            .node_indices()
            .filter_map(|n| {
                self.inner.node_weight(n).map(|attrs| NodeRecord {
                    id: n.index(),
                    attrs: *attrs,
                })
            })
            .collect()
    }

    /// Edges with `source < target`, sorted by endpoints.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        let mut out: Vec<EdgeRecord> = self
            .inner
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                EdgeRecord {
                    source: a.min(b),
                    target: a.max(b),
                    attrs: *e.weight(),
                }
            })
            .collect();
        out.sort_by_key(|e| (e.source, e.target));
        out
    }

    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            total_weight: self.inner.edge_references().map(|e| e.weight().weight).sum(),
            ..GraphSummary::default()
        };
        for n in self.inner.node_indices() {
            let degree = self.degree(n.index());
            *summary.degree_histogram.entry(degree).or_insert(0) += 1;
            if degree == 1 {
                summary.endpoints += 1;
            } else if degree >= 3 {
                summary.branch_points += 1;
            }
        }
        summary
    }
}
