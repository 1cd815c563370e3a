use super::{relabel, Triangle, TriangleKind};
use log::debug;

/// Result of [`bruteforce_pruning`].
#[derive(Clone, Debug)]
pub struct PruneOutcome {
    pub triangles: Vec<Triangle>,
    /// Rounds that removed at least one triangle.
    pub rounds: usize,
    pub removed: usize,
}

/// Peel up to `order` layers of end triangles off the branch tips.
///
/// Each round removes every triangle currently labelled [`TriangleKind::End`]
/// and relabels the rest. Pruning stops early once no end triangle is left,
/// so a junction-free loop survives untouched. Order 0 returns the input as
/// is.
pub fn bruteforce_pruning(mut triangles: Vec<Triangle>, order: usize) -> PruneOutcome {
    let before = triangles.len();
    let mut rounds = 0;
    for _ in 0..order {
        if !triangles.iter().any(|t| t.kind == TriangleKind::End) {
            break;
        }
        triangles.retain(|t| t.kind != TriangleKind::End);
        relabel(&mut triangles);
        rounds += 1;
    }
    let removed = before - triangles.len();
    debug!(
        "BranchPruner: order={} rounds={} removed={} remaining={}",
        order,
        rounds,
        removed,
        triangles.len()
    );
    PruneOutcome {
        triangles,
        rounds,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangles::build_triangles;
    use crate::triangulate::Triangulation;
    use nalgebra::Point2;

    /// Strip of `n` triangles over a zigzag of `n + 2` points.
    fn strip(n: usize) -> Vec<Triangle> {
        let points = (0..n + 2)
            .map(|i| Point2::new(i as f64, (i % 2) as f64))
            .collect();
        let triangles = (0..n).map(|i| [i, i + 1, i + 2]).collect();
        build_triangles(&Triangulation { points, triangles })
    }

    #[test]
    fn order_zero_is_identity() {
        let tris = strip(6);
        let out = bruteforce_pruning(tris.clone(), 0);
        assert_eq!(out.triangles.len(), tris.len());
        assert_eq!(out.rounds, 0);
        for (a, b) in out.triangles.iter().zip(&tris) {
            assert_eq!(a.vertices, b.vertices);
            assert_eq!(a.kind, b.kind);
        }
    }

    #[test]
    fn each_round_peels_both_tips() {
        let out = bruteforce_pruning(strip(10), 3);
        assert_eq!(out.rounds, 3);
        assert_eq!(out.removed, 6);
        let vertices: Vec<[usize; 3]> = out.triangles.iter().map(|t| t.vertices).collect();
        assert_eq!(vertices.first(), Some(&[3, 4, 5]));
        assert_eq!(out.triangles[0].kind, TriangleKind::End);
    }

    #[test]
    fn stops_when_no_end_is_left() {
        let out = bruteforce_pruning(strip(3), 10);
        // 3 -> 1 (isolated) after one round, nothing more to peel.
        assert_eq!(out.rounds, 1);
        assert_eq!(out.triangles.len(), 1);
        assert_eq!(out.triangles[0].kind, TriangleKind::Isolated);
    }
}
