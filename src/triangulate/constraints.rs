//! Facet recovery by cavity retriangulation.
//!
//! The triangles crossed by a missing facet are removed. The vertices they
//! leave on either side of the facet form two pseudo-polygons, each of which
//! is retriangulated Delaunay-wise with the facet as its base.

use super::delaunay::{edge_key, TriMesh};
use super::predicates::{in_circle, orient2d, strictly_between};
use crate::error::TriangulationError;
use nalgebra::Point2;

impl TriMesh {
    /// Make `(a, b)` an edge of the triangulation and mark it constrained.
    ///
    /// Vertices lying exactly on the segment split it; each piece is recovered
    /// and constrained on its own.
    pub fn insert_constraint(&mut self, a: usize, b: usize) -> Result<(), TriangulationError> {
        let mut from = a;
        let mut pieces = 0usize;
        while from != b {
            let reached = self.recover_segment(from, b, (a, b))?;
            self.constrained.insert(edge_key(from, reached));
            from = reached;
            pieces += 1;
            if pieces > self.n_real {
                return Err(TriangulationError::IntersectingFacets { a, b });
            }
        }
        Ok(())
    }

    /// Recover the segment from `s` towards `b`, stopping at the first vertex
    /// on it. Returns the vertex reached.
    fn recover_segment(
        &mut self,
        s: usize,
        b: usize,
        facet: (usize, usize),
    ) -> Result<usize, TriangulationError> {
        let (ps, pb) = (self.pts[s], self.pts[b]);
        let crossing = TriangulationError::IntersectingFacets {
            a: facet.0,
            b: facet.1,
        };

        let mut entry = None;
        for (t, slot) in self.fan(s)? {
            let (u, w) = self.tris[t].edge(slot);
            for x in [u, w] {
                if x == b || strictly_between(&ps, &pb, &self.pts[x]) {
                    return Ok(x);
                }
            }
            if orient2d(&ps, &self.pts[u], &pb) > 0.0 && orient2d(&ps, &self.pts[w], &pb) < 0.0 {
                entry = Some((t, u, w));
            }
        }
        let (first, mut r, mut l) = entry.ok_or(TriangulationError::LocateFailed {
            x: ps.x,
            y: ps.y,
        })?;

        let mut crossed = vec![first];
        let mut right = vec![r];
        let mut left = vec![l];
        let mut cur = first;
        let end = loop {
            if self.is_constrained(r, l) {
                return Err(crossing);
            }
            let slot = self.tris[cur]
                .slot_of_edge(r, l)
                .ok_or(TriangulationError::LocateFailed { x: ps.x, y: ps.y })?;
            let next = self.tris[cur].n[slot].ok_or(TriangulationError::LocateFailed {
                x: ps.x,
                y: ps.y,
            })?;
            let x = self.tris[next]
                .v
                .into_iter()
                .find(|&v| v != r && v != l)
                .ok_or(TriangulationError::LocateFailed { x: ps.x, y: ps.y })?;
            crossed.push(next);
            cur = next;
            if x == b || strictly_between(&ps, &pb, &self.pts[x]) {
                break x;
            }
            if orient2d(&ps, &pb, &self.pts[x]) > 0.0 {
                left.push(x);
                l = x;
            } else {
                right.push(x);
                r = x;
            }
            if crossed.len() > self.tris.len() {
                return Err(crossing);
            }
        };

        let mut fresh = Vec::with_capacity(crossed.len());
        fill_pseudo_polygon(&self.pts, s, end, &left, &mut fresh);
        right.reverse();
        fill_pseudo_polygon(&self.pts, end, s, &right, &mut fresh);
        self.replace_region(&crossed, fresh)?;
        Ok(end)
    }
}

/// Delaunay triangulation of the pseudo-polygon with base `(a, b)` and the
/// chain of vertices to the left of it, ordered from the `a` side to `b`.
fn fill_pseudo_polygon(
    pts: &[Point2<f64>],
    a: usize,
    b: usize,
    chain: &[usize],
    out: &mut Vec<[usize; 3]>,
) {
    if chain.is_empty() {
        return;
    }
    let (pa, pb) = (pts[a], pts[b]);
    let mut c = 0;
    for k in 1..chain.len() {
        if in_circle(&pa, &pb, &pts[chain[c]], &pts[chain[k]]) > 0.0 {
            c = k;
        }
    }
    fill_pseudo_polygon(pts, a, chain[c], &chain[..c], out);
    fill_pseudo_polygon(pts, chain[c], b, &chain[c + 1..], out);
    out.push([a, b, chain[c]]);
}
