//! Removal of redundant (degree-2) nodes.

use super::{EdgeAttrs, FilamentGraph};
use log::debug;
use serde::{Deserialize, Serialize};

/// How aggressively degree-2 nodes are collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Redundancy {
    /// Collapse until no pass removes anything.
    All,
    /// At most three passes; keeps some intermediate nodes on long branches.
    #[default]
    Half,
    /// Leave the graph untouched.
    Keep,
}

impl Redundancy {
    /// Numeric level used in output names: 0 = All, 1 = Half, 2 = Keep.
    pub fn level(self) -> u8 {
        match self {
            Redundancy::All => 0,
            Redundancy::Half => 1,
            Redundancy::Keep => 2,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Redundancy::All),
            1 => Some(Redundancy::Half),
            2 => Some(Redundancy::Keep),
            _ => None,
        }
    }

    /// Levels written for this mode, finest first: the mode itself followed
    /// by every coarser one.
    pub fn emitted(self) -> &'static [Redundancy] {
        match self {
            Redundancy::Keep => &[Redundancy::Keep, Redundancy::Half, Redundancy::All],
            Redundancy::Half => &[Redundancy::Half, Redundancy::All],
            Redundancy::All => &[Redundancy::All],
        }
    }

    fn max_passes(self) -> usize {
        match self {
            Redundancy::All => usize::MAX,
            Redundancy::Half => 3,
            Redundancy::Keep => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyOutcome {
    /// Passes that removed at least one node.
    pub passes: usize,
    pub removed: usize,
    /// Nodes removed by each productive pass.
    pub removed_per_pass: Vec<usize>,
}

/// Collapse degree-2 nodes according to `mode`.
///
/// A node `v` with neighbours `n1`, `n2` is replaced by a direct edge
/// `n1 - n2` whose weight is `w1 + w2` and whose conductivity is the
/// length-weighted mean `(c1 w1 + c2 w2) / (w1 + w2)` (the plain sum when the
/// weights add up to zero). Collapsed nodes are only removed at the end of a
/// pass, and a node next to one already collapsed in the same pass is left for
/// the next pass.
pub fn remove_redundant_nodes(graph: &mut FilamentGraph, mode: Redundancy) -> SimplifyOutcome {
    let mut outcome = SimplifyOutcome::default();
    let max_passes = mode.max_passes();
    let mut pass = 0;
    while pass < max_passes {
        pass += 1;
        let removed = collapse_pass(graph);
        if removed == 0 {
            break;
        }
        outcome.passes += 1;
        outcome.removed += removed;
        outcome.removed_per_pass.push(removed);
    }
    debug!(
        "GraphSimplifier: mode={:?} passes={} removed={} nodes={}",
        mode,
        outcome.passes,
        outcome.removed,
        graph.node_count()
    );
    outcome
}

fn collapse_pass(graph: &mut FilamentGraph) -> usize {
    let ids = graph.node_ids();
    let mut marked = vec![false; ids.last().map_or(0, |&m| m + 1)];
    let mut order = Vec::new();

    for &v in &ids {
        if graph.degree(v) != 2 {
            continue;
        }
        let nbrs = graph.neighbors(v);
        let (n1, n2) = (nbrs[0], nbrs[1]);
        if marked[n1] || marked[n2] {
            continue;
        }
        let (Some(&e1), Some(&e2)) = (graph.edge(v, n1), graph.edge(v, n2)) else {
            continue;
        };
        graph.update_edge(n1, n2, merge(e1, e2));
        marked[v] = true;
        order.push(v);
    }

    // Unreachable: a marked node keeps two distinct unmarked neighbours, so
    // at least two nodes survive every pass. Guards that state only.
    if order.len() + 1 == ids.len() {
        order.truncate(1);
    }
    for &v in &order {
        graph.remove_node(v);
    }
    order.len()
}

fn merge(e1: EdgeAttrs, e2: EdgeAttrs) -> EdgeAttrs {
    let weight = e1.weight + e2.weight;
    let denom = if weight == 0.0 { 1.0 } else { weight };
    EdgeAttrs {
        weight,
        conductivity: (e1.conductivity * e1.weight + e2.conductivity * e2.weight) / denom,
    }
}
