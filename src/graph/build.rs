use super::{EdgeAttrs, FilamentGraph, NodeAttrs};
use crate::triangles::Triangle;
use log::debug;
use std::collections::HashMap;

/// Sparse symmetric adjacency of triangles sharing an edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Sorted neighbour list per triangle.
    rows: Vec<Vec<usize>>,
}

impl AdjacencyMatrix {
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut owners: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (i, tri) in triangles.iter().enumerate() {
            for e in tri.edges() {
                owners.entry(e).or_default().push(i);
            }
        }
        let mut rows = vec![Vec::new(); triangles.len()];
        for list in owners.values() {
            for (k, &i) in list.iter().enumerate() {
                for &j in &list[k + 1..] {
                    rows[i].push(j);
                    rows[j].push(i);
                }
            }
        }
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .is_some_and(|row| row.binary_search(&j).is_ok())
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    /// Pairs `(i, j)` with `i < j`, row by row.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }
}

/// One node per triangle (id = list position) and one edge per adjacent pair.
///
/// Node conductivity is the triangle radius; an edge takes the mean of its
/// endpoint conductivities and the distance between the two centres as
/// weight.
pub fn build_graph(triangles: &[Triangle]) -> FilamentGraph {
    let adjacency = AdjacencyMatrix::from_triangles(triangles);
    let mut graph = FilamentGraph::with_capacity(triangles.len(), triangles.len() * 3 / 2);
    for tri in triangles {
        graph.add_node(NodeAttrs {
            x: tri.center.x,
            y: tri.center.y,
            conductivity: tri.radius,
        });
    }
    for (i, j) in adjacency.pairs() {
        let (a, b) = (&triangles[i], &triangles[j]);
        graph.update_edge(
            i,
            j,
            EdgeAttrs {
                weight: (a.center - b.center).norm(),
                conductivity: 0.5 * (a.radius + b.radius),
            },
        );
    }
    debug!(
        "GraphBuilder: nodes={} edges={}",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn tri(v: [usize; 3], x: f64, radius: f64) -> Triangle {
        let corners = [
            Point2::new(x, 0.0),
            Point2::new(x + 3.0, 0.0),
            Point2::new(x, 3.0),
        ];
        let mut t = Triangle::new(v, corners);
        t.radius = radius;
        t
    }

    #[test]
    fn adjacency_is_symmetric_and_sparse() {
        let tris = vec![tri([0, 1, 2], 0.0, 1.0), tri([1, 2, 3], 3.0, 1.0), tri([4, 5, 6], 9.0, 1.0)];
        let adj = AdjacencyMatrix::from_triangles(&tris);
        assert!(adj.get(0, 1) && adj.get(1, 0));
        assert!(!adj.get(0, 2) && !adj.get(2, 2));
        assert_eq!(adj.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn edges_carry_distance_and_mean_conductivity() {
        let tris = vec![tri([0, 1, 2], 0.0, 2.0), tri([1, 2, 3], 3.0, 4.0)];
        let g = build_graph(&tris);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node(1).map(|n| n.conductivity), Some(4.0));
        let e = g.edge(0, 1).copied().expect("edge");
        assert!((e.weight - 3.0).abs() < 1e-12);
        assert_eq!(e.conductivity, 3.0);
    }
}
