use super::{Triangle, TriangleKind};
use crate::image::ImageF32;
use crate::triangulate::Triangulation;
use serde::Serialize;
use std::collections::HashMap;

/// Triangle records for every triangle of `triangulation`, labelled against
/// each other. Radii are not sampled yet.
pub fn build_triangles(triangulation: &Triangulation) -> Vec<Triangle> {
    let mut triangles: Vec<Triangle> = (0..triangulation.len())
        .map(|i| Triangle::new(triangulation.triangles[i], triangulation.corners(i)))
        .collect();
    relabel(&mut triangles);
    triangles
}

/// Recompute every kind from the edges shared within `triangles`.
pub fn relabel(triangles: &mut [Triangle]) {
    let mut uses: HashMap<(usize, usize), u32> = HashMap::with_capacity(triangles.len() * 2);
    for tri in triangles.iter() {
        for e in tri.edges() {
            *uses.entry(e).or_insert(0) += 1;
        }
    }
    for tri in triangles.iter_mut() {
        let shared = tri
            .edges()
            .iter()
            .filter(|e| uses.get(*e).copied().unwrap_or(0) > 1)
            .count();
        tri.kind = TriangleKind::from_shared_edges(shared);
    }
}

/// Sample the distance map at each centre (nearest pixel). Returns how many
/// centres fell outside the map and were given radius 0.
pub fn sample_radii(triangles: &mut [Triangle], distance: &ImageF32) -> usize {
    let mut defaulted = 0;
    for tri in triangles.iter_mut() {
        tri.radius = match distance.sample_nearest(tri.center.x, tri.center.y) {
            Some(r) => f64::from(r),
            None => {
                defaulted += 1;
                0.0
            }
        };
    }
    defaulted
}

/// Histogram of triangle kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCounts {
    pub junction: usize,
    pub normal: usize,
    pub end: usize,
    pub isolated: usize,
}

pub fn count_kinds(triangles: &[Triangle]) -> KindCounts {
    let mut counts = KindCounts::default();
    for tri in triangles {
        match tri.kind {
            TriangleKind::Junction => counts.junction += 1,
            TriangleKind::Normal => counts.normal += 1,
            TriangleKind::End => counts.end += 1,
            TriangleKind::Isolated => counts.isolated += 1,
        }
    }
    counts
}
