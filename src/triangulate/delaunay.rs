//! Incremental Delaunay triangulation with explicit neighbour links.

use super::predicates::{in_circle, orient2d};
use crate::error::TriangulationError;
use nalgebra::Point2;
use std::collections::{HashMap, HashSet};

const UNSET: usize = usize::MAX;

/// Triangle with counter-clockwise vertices; `n[i]` is the neighbour across
/// the edge opposite `v[i]`.
#[derive(Clone, Debug)]
pub(super) struct Tri {
    pub v: [usize; 3],
    pub n: [Option<usize>; 3],
    pub alive: bool,
}

impl Tri {
    /// Directed edge opposite vertex slot `i`.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.v[(i + 1) % 3], self.v[(i + 2) % 3])
    }

    /// Slot whose opposite edge is the directed edge `(a, b)`.
    #[inline]
    pub fn slot_of_edge(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&i| self.edge(i) == (a, b))
    }

    #[inline]
    pub fn slot_of_vertex(&self, v: usize) -> Option<usize> {
        self.v.iter().position(|&x| x == v)
    }
}

/// Working triangulation: the input points followed by three super-triangle
/// vertices enclosing all of them.
pub(super) struct TriMesh {
    pub pts: Vec<Point2<f64>>,
    pub tris: Vec<Tri>,
    pub n_real: usize,
    pub constrained: HashSet<(usize, usize)>,
    vert_tri: Vec<usize>,
    last: usize,
}

#[inline]
pub(super) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl TriMesh {
    pub fn new(points: &[Point2<f64>]) -> Self {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let d = (max_x - min_x).max(max_y - min_y).max(1.0);
        let (cx, cy) = (0.5 * (min_x + max_x), 0.5 * (min_y + max_y));

        let n_real = points.len();
        let mut pts = points.to_vec();
        pts.push(Point2::new(cx - 20.0 * d, cy - 10.0 * d));
        pts.push(Point2::new(cx + 20.0 * d, cy - 10.0 * d));
        pts.push(Point2::new(cx, cy + 20.0 * d));

        let mut vert_tri = vec![UNSET; n_real + 3];
        vert_tri[n_real..].fill(0);
        Self {
            pts,
            tris: vec![Tri {
                v: [n_real, n_real + 1, n_real + 2],
                n: [None; 3],
                alive: true,
            }],
            n_real,
            constrained: HashSet::new(),
            vert_tri,
            last: 0,
        }
    }

    #[inline]
    pub fn is_super(&self, v: usize) -> bool {
        v >= self.n_real
    }

    #[inline]
    pub fn is_constrained(&self, a: usize, b: usize) -> bool {
        self.constrained.contains(&edge_key(a, b))
    }

    fn locate_failed(p: &Point2<f64>) -> TriangulationError {
        TriangulationError::LocateFailed { x: p.x, y: p.y }
    }

    /// Triangle containing `p` (interior or boundary).
    ///
    /// Visibility walk from the most recently created triangle, with a linear
    /// scan when the walk cycles.
    pub fn locate(&self, p: &Point2<f64>) -> Result<usize, TriangulationError> {
        let mut t = self.last;
        if !self.tris[t].alive {
            t = self
                .tris
                .iter()
                .position(|tri| tri.alive)
                .ok_or_else(|| Self::locate_failed(p))?;
        }
        let max_steps = self.tris.len() + 3;
        'walk: for _ in 0..max_steps {
            let tri = &self.tris[t];
            for i in 0..3 {
                let (a, b) = tri.edge(i);
                if orient2d(&self.pts[a], &self.pts[b], p) < 0.0 {
                    match tri.n[i] {
                        Some(nb) => {
                            t = nb;
                            continue 'walk;
                        }
                        None => return Err(Self::locate_failed(p)),
                    }
                }
            }
            return Ok(t);
        }
        self.tris
            .iter()
            .position(|tri| tri.alive && self.contains(tri, p))
            .ok_or_else(|| Self::locate_failed(p))
    }

    fn contains(&self, tri: &Tri, p: &Point2<f64>) -> bool {
        (0..3).all(|i| {
            let (a, b) = tri.edge(i);
            orient2d(&self.pts[a], &self.pts[b], p) >= 0.0
        })
    }

    fn circumcircle_contains(&self, t: usize, p: &Point2<f64>) -> bool {
        let [a, b, c] = self.tris[t].v;
        in_circle(&self.pts[a], &self.pts[b], &self.pts[c], p) > 0.0
    }

    /// Insert point `idx`. Returns the index of an existing vertex at the same
    /// location instead of inserting a duplicate.
    pub fn insert(&mut self, idx: usize) -> Result<Option<usize>, TriangulationError> {
        let p = self.pts[idx];
        let start = self.locate(&p)?;
        if let Some(&v) = self.tris[start].v.iter().find(|&&v| self.pts[v] == p) {
            return Ok(Some(v));
        }

        let mut in_cavity: HashSet<usize> = HashSet::from([start]);
        let mut cavity = vec![start];
        let mut stack = vec![start];
        while let Some(t) = stack.pop() {
            for nb in self.tris[t].n.into_iter().flatten() {
                if !in_cavity.contains(&nb) && self.circumcircle_contains(nb, &p) {
                    in_cavity.insert(nb);
                    cavity.push(nb);
                    stack.push(nb);
                }
            }
        }

        // Every boundary edge must see `p` on its left for the fan to be valid.
        loop {
            let mut grown = false;
            for k in 0..cavity.len() {
                let tri = self.tris[cavity[k]].clone();
                for i in 0..3 {
                    if tri.n[i].is_some_and(|nb| in_cavity.contains(&nb)) {
                        continue;
                    }
                    let (a, b) = tri.edge(i);
                    if orient2d(&self.pts[a], &self.pts[b], &p) <= 0.0 {
                        let nb = tri.n[i].ok_or_else(|| Self::locate_failed(&p))?;
                        in_cavity.insert(nb);
                        cavity.push(nb);
                        grown = true;
                    }
                }
            }
            if !grown {
                break;
            }
        }

        let mut fan = Vec::new();
        let mut rim = HashSet::new();
        for &t in &cavity {
            let tri = &self.tris[t];
            for i in 0..3 {
                if tri.n[i].is_some_and(|nb| in_cavity.contains(&nb)) {
                    continue;
                }
                let (a, b) = tri.edge(i);
                rim.insert(a);
                rim.insert(b);
                fan.push([a, b, idx]);
            }
        }
        let swallowed = cavity
            .iter()
            .flat_map(|&t| self.tris[t].v)
            .any(|v| !rim.contains(&v));
        if swallowed {
            return Err(Self::locate_failed(&p));
        }
        self.replace_region(&cavity, fan)?;
        Ok(None)
    }

    /// Replace the triangles `old` by `new`, which must cover the same region
    /// with counter-clockwise triangles. Neighbour links are rebuilt locally.
    pub fn replace_region(
        &mut self,
        old: &[usize],
        new: Vec<[usize; 3]>,
    ) -> Result<(), TriangulationError> {
        let old_set: HashSet<usize> = old.iter().copied().collect();
        let mut rim: HashMap<(usize, usize), Option<usize>> = HashMap::new();
        for &t in old {
            let tri = &self.tris[t];
            for i in 0..3 {
                if tri.n[i].is_some_and(|nb| old_set.contains(&nb)) {
                    continue;
                }
                rim.insert(tri.edge(i), tri.n[i]);
            }
        }
        for &t in old {
            self.tris[t].alive = false;
        }

        let base = self.tris.len();
        let mut edges: HashMap<(usize, usize), usize> = HashMap::with_capacity(new.len() * 3);
        for (k, v) in new.iter().enumerate() {
            let tri = Tri {
                v: *v,
                n: [None; 3],
                alive: true,
            };
            for i in 0..3 {
                edges.insert(tri.edge(i), base + k);
            }
            self.tris.push(tri);
        }

        let mut matched = 0usize;
        for id in base..self.tris.len() {
            for i in 0..3 {
                let (a, b) = self.tris[id].edge(i);
                if let Some(&other) = edges.get(&(b, a)) {
                    self.tris[id].n[i] = Some(other);
                } else if let Some(&outer) = rim.get(&(a, b)) {
                    matched += 1;
                    self.tris[id].n[i] = outer;
                    if let Some(nb) = outer {
                        let j = self.tris[nb]
                            .slot_of_edge(b, a)
                            .ok_or_else(|| Self::locate_failed(&self.pts[a]))?;
                        self.tris[nb].n[j] = Some(id);
                    }
                } else {
                    return Err(Self::locate_failed(&self.pts[a]));
                }
            }
            for v in self.tris[id].v {
                self.vert_tri[v] = id;
            }
        }
        if matched != rim.len() {
            let p = self.pts[old.first().map_or(0, |&t| self.tris[t].v[0])];
            return Err(Self::locate_failed(&p));
        }
        self.last = base;
        Ok(())
    }

    /// Some alive triangle incident to vertex `v`.
    pub fn triangle_of(&self, v: usize) -> Result<usize, TriangulationError> {
        let t = self.vert_tri[v];
        if t != UNSET && self.tris[t].alive && self.tris[t].slot_of_vertex(v).is_some() {
            return Ok(t);
        }
        self.tris
            .iter()
            .position(|tri| tri.alive && tri.slot_of_vertex(v).is_some())
            .ok_or_else(|| Self::locate_failed(&self.pts[v]))
    }

    /// Triangles around vertex `v` in rotation order, with the slot of `v`.
    pub fn fan(&self, v: usize) -> Result<Vec<(usize, usize)>, TriangulationError> {
        let start = self.triangle_of(v)?;
        let mut out = Vec::new();
        let mut t = start;
        loop {
            let slot = self.tris[t]
                .slot_of_vertex(v)
                .ok_or_else(|| Self::locate_failed(&self.pts[v]))?;
            out.push((t, slot));
            t = self.tris[t].n[(slot + 2) % 3].ok_or_else(|| Self::locate_failed(&self.pts[v]))?;
            if t == start {
                return Ok(out);
            }
            if out.len() > self.tris.len() {
                return Err(Self::locate_failed(&self.pts[v]));
            }
        }
    }
}
