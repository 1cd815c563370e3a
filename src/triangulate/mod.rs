//! Constrained triangulation of a planar straight-line graph with holes.
//!
//! No points are added and no quality constraints are applied: the output
//! uses exactly the input points, contains every facet as an edge, and omits
//! triangles outside the outer boundary or inside a hole.
//!
//! Points are inserted Bowyer–Watson style inside an enclosing super
//! triangle, facets are then forced in by retriangulating the cavities they
//! cross, and finally triangles reachable from the super triangle or from a
//! hole marker without crossing a facet are removed.

mod carve;
mod constraints;
mod delaunay;
mod predicates;

use crate::error::TriangulationError;
use crate::mesh::Mesh;
use delaunay::TriMesh;
use log::debug;
use nalgebra::Point2;

/// Triangles over `points`; every triangle is counter-clockwise.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    pub points: Vec<Point2<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Corner coordinates of triangle `i`.
    pub fn corners(&self, i: usize) -> [Point2<f64>; 3] {
        self.triangles[i].map(|v| self.points[v])
    }
}

/// Triangulate a [`Mesh`].
pub fn triangulate_mesh(mesh: &Mesh) -> Result<Triangulation, TriangulationError> {
    triangulate(&mesh.points, &mesh.facets, &mesh.holes)
}

/// Constrained triangulation of `points` honouring `facets` and `holes`.
pub fn triangulate(
    points: &[Point2<f64>],
    facets: &[[usize; 2]],
    holes: &[Point2<f64>],
) -> Result<Triangulation, TriangulationError> {
    validate(points, facets)?;

    let mut mesh = TriMesh::new(points);
    let mut alias: Vec<usize> = (0..points.len()).collect();
    let mut duplicates = 0usize;
    for i in 0..points.len() {
        if let Some(existing) = mesh.insert(i)? {
            alias[i] = existing;
            duplicates += 1;
        }
    }

    for (f, &[a, b]) in facets.iter().enumerate() {
        let (a, b) = (alias[a], alias[b]);
        if a == b {
            return Err(TriangulationError::DegenerateFacet { facet: f });
        }
        mesh.insert_constraint(a, b)?;
    }

    let eaten = mesh.carve(holes)?;
    let triangles: Vec<[usize; 3]> = mesh
        .tris
        .iter()
        .zip(&eaten)
        .filter(|(tri, &gone)| tri.alive && !gone)
        .map(|(tri, _)| tri.v)
        .collect();

    debug!(
        "Triangulator: points={} facets={} holes={} duplicates={} triangles={}",
        points.len(),
        facets.len(),
        holes.len(),
        duplicates,
        triangles.len()
    );
    Ok(Triangulation {
        points: points.to_vec(),
        triangles,
    })
}

fn validate(points: &[Point2<f64>], facets: &[[usize; 2]]) -> Result<(), TriangulationError> {
    if points.len() < 3 {
        return Err(TriangulationError::TooFewPoints(points.len()));
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(TriangulationError::NonFinitePoint { index });
    }
    for (facet, &[a, b]) in facets.iter().enumerate() {
        for point in [a, b] {
            if point >= points.len() {
                return Err(TriangulationError::InvalidFacet {
                    facet,
                    point,
                    len: points.len(),
                });
            }
        }
        if points[a] == points[b] {
            return Err(TriangulationError::DegenerateFacet { facet });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::predicates::orient2d;
    use std::collections::HashSet;

    fn has_edge(t: &Triangulation, a: usize, b: usize) -> bool {
        t.triangles
            .iter()
            .any(|tri| tri.contains(&a) && tri.contains(&b))
    }

    fn total_area(t: &Triangulation) -> f64 {
        (0..t.len())
            .map(|i| {
                let [a, b, c] = t.corners(i);
                0.5 * orient2d(&a, &b, &c)
            })
            .sum()
    }

    fn shoelace(pts: &[Point2<f64>]) -> f64 {
        let n = pts.len();
        0.5 * (0..n)
            .map(|i| {
                let (a, b) = (pts[i], pts[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>()
    }

    fn ring(points: &[(f64, f64)], offset: usize) -> (Vec<Point2<f64>>, Vec<[usize; 2]>) {
        let pts = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let n = points.len();
        let facets = (0..n).map(|i| [offset + i, offset + (i + 1) % n]).collect();
        (pts, facets)
    }

    #[test]
    fn square_gives_two_triangles() {
        let (pts, facets) = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], 0);
        let t = triangulate(&pts, &facets, &[]).expect("triangulation");
        assert_eq!(t.len(), 2);
        assert!((total_area(&t) - 1.0).abs() < 1e-12);
        for tri in &t.triangles {
            let [a, b, c] = tri.map(|v| t.points[v]);
            assert!(orient2d(&a, &b, &c) > 0.0);
        }
    }

    #[test]
    fn concave_polygon_keeps_its_boundary() {
        // U shape: the notch must not be triangulated.
        let (pts, facets) = ring(
            &[
                (0.0, 0.0),
                (6.0, 0.0),
                (6.0, 6.0),
                (4.1, 6.0),
                (4.0, 1.3),
                (2.0, 1.2),
                (1.9, 6.0),
                (0.0, 6.0),
            ],
            0,
        );
        let t = triangulate(&pts, &facets, &[]).expect("triangulation");
        assert_eq!(t.len(), pts.len() - 2);
        for f in &facets {
            assert!(has_edge(&t, f[0], f[1]), "missing facet {:?}", f);
        }
        assert!((total_area(&t) - shoelace(&pts)).abs() < 1e-9);
    }

    #[test]
    fn long_thin_facets_are_recovered() {
        // A thin sliver whose long edges are not Delaunay on their own.
        let mut coords = Vec::new();
        for i in 0..=20 {
            coords.push((i as f64 * 5.0, 0.03 * (i % 2) as f64));
        }
        coords.push((100.0, 1.0));
        coords.push((0.0, 1.0));
        let (pts, facets) = ring(&coords, 0);
        let t = triangulate(&pts, &facets, &[]).expect("triangulation");
        for f in &facets {
            assert!(has_edge(&t, f[0], f[1]), "missing facet {:?}", f);
        }
        assert_eq!(t.len(), pts.len() - 2);
    }

    #[test]
    fn holes_are_removed() {
        let (mut pts, mut facets) =
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], 0);
        let (hole_pts, hole_facets) =
            ring(&[(4.0, 4.0), (6.0, 4.1), (6.1, 6.0), (4.1, 5.9)], 4);
        pts.extend(hole_pts);
        facets.extend(hole_facets);
        let t = triangulate(&pts, &facets, &[Point2::new(5.0, 5.0)]).expect("triangulation");
        let hole_area = 0.5
            * orient2d(&pts[4], &pts[5], &pts[6]).abs()
            + 0.5 * orient2d(&pts[4], &pts[6], &pts[7]).abs();
        assert!((total_area(&t) - (100.0 - hole_area)).abs() < 1e-9);
        // Annulus with 8 vertices and one hole: 2n - 2 + 2h - ... = 8 triangles.
        assert_eq!(t.len(), 8);
        let used: HashSet<usize> = t.triangles.iter().flatten().copied().collect();
        assert_eq!(used.len(), 8);
    }

    #[test]
    fn crossing_facets_are_rejected() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 4.1),
            Point2::new(4.0, 0.0),
            Point2::new(0.1, 4.0),
        ];
        let err = triangulate(&pts, &[[0, 1], [2, 3]], &[]).unwrap_err();
        assert_eq!(err, TriangulationError::IntersectingFacets { a: 2, b: 3 });
    }

    #[test]
    fn invalid_input_is_rejected() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(
            triangulate(&pts, &[], &[]).unwrap_err(),
            TriangulationError::TooFewPoints(2)
        );
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, f64::NAN),
        ];
        assert_eq!(
            triangulate(&pts, &[], &[]).unwrap_err(),
            TriangulationError::NonFinitePoint { index: 2 }
        );
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(
            triangulate(&pts, &[[0, 3]], &[]).unwrap_err(),
            TriangulationError::InvalidFacet {
                facet: 0,
                point: 3,
                len: 3
            }
        );
        assert_eq!(
            triangulate(&pts, &[[1, 1]], &[]).unwrap_err(),
            TriangulationError::DegenerateFacet { facet: 0 }
        );
    }
}
