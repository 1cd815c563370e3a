use super::FilamentGraph;
use std::collections::VecDeque;

impl FilamentGraph {
    /// Connected components as sorted id lists, in order of discovery when
    /// scanning ids upwards.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let ids = self.node_ids();
        let mut seen = vec![false; ids.last().map_or(0, |&m| m + 1)];
        let mut out = Vec::new();
        for &start in &ids {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut members = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(v) = queue.pop_front() {
                for n in self.neighbors(v) {
                    if !seen[n] {
                        seen[n] = true;
                        members.push(n);
                        queue.push_back(n);
                    }
                }
            }
            members.sort_unstable();
            out.push(members);
        }
        out
    }

    /// Drop every node outside the largest connected component. Ties go to the
    /// component containing the smallest id. Returns the number of components
    /// found before trimming.
    pub fn retain_largest_component(&mut self) -> usize {
        let components = self.components();
        let mut best = 0;
        for (i, c) in components.iter().enumerate() {
            if c.len() > components[best].len() {
                best = i;
            }
        }
        for (i, c) in components.iter().enumerate() {
            if i != best {
                for &v in c {
                    self.remove_node(v);
                }
            }
        }
        components.len()
    }

    /// Copy of the graph restricted to its largest connected component.
    pub fn largest_component(&self) -> FilamentGraph {
        let mut g = self.clone();
        g.retain_largest_component();
        g
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{EdgeAttrs, FilamentGraph, NodeAttrs};

    fn graph(n: usize, edges: &[(usize, usize)]) -> FilamentGraph {
        let mut g = FilamentGraph::new();
        for i in 0..n {
            g.add_node(NodeAttrs {
                x: i as f64,
                y: 0.0,
                conductivity: 1.0,
            });
        }
        for &(a, b) in edges {
            g.update_edge(
                a,
                b,
                EdgeAttrs {
                    weight: 1.0,
                    conductivity: 1.0,
                },
            );
        }
        g
    }

    #[test]
    fn keeps_biggest_component() {
        let g = graph(7, &[(0, 1), (2, 3), (3, 4), (4, 5)]);
        let kept = g.largest_component();
        assert_eq!(kept.node_ids(), vec![2, 3, 4, 5]);
        assert_eq!(kept.edge_count(), 3);
    }

    #[test]
    fn ties_go_to_first_discovered() {
        let mut g = graph(6, &[(3, 4), (0, 5), (1, 2)]);
        assert_eq!(g.components(), vec![vec![0, 5], vec![1, 2], vec![3, 4]]);
        assert_eq!(g.retain_largest_component(), 3);
        assert_eq!(g.node_ids(), vec![0, 5]);
    }

    #[test]
    fn empty_graph_stays_empty() {
        let mut g = FilamentGraph::new();
        assert_eq!(g.retain_largest_component(), 0);
        assert!(g.is_empty());
    }
}
