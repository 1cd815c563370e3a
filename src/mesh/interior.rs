//! Interior point search for hole contours.

use crate::error::ExtractionError;
use nalgebra::{Point2, Rotation2, Vector2};

/// Even-odd point-in-polygon test that rejects points on the boundary.
pub fn contains_strictly(polygon: &[Point2<f64>], p: &Point2<f64>) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if on_segment(&a, &b, p) {
            return false;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> bool {
    let ab = b - a;
    let ap = p - a;
    let cross = ab.perp(&ap);
    let scale = ab.norm().max(1.0);
    if cross.abs() > 1e-12 * scale * scale {
        return false;
    }
    let t = ap.dot(&ab);
    t >= 0.0 && t <= ab.norm_squared()
}

/// A point strictly inside `contour`.
///
/// The centroid is tried first. Otherwise candidates are placed at distance
/// `offset` from the second vertex `cp`, along the direction `cp -> p2`
/// rotated by plus and then minus half the turning angle at `cp`. Failing
/// both, the direction is swept through a full turn in 1° steps.
pub fn find_interior_point(
    contour: &[Point2<f64>],
    offset: f64,
    index: usize,
) -> Result<Point2<f64>, ExtractionError> {
    let unresolved = ExtractionError::UnresolvedInteriorPoint {
        contour: index,
        points: contour.len(),
    };
    if contour.len() < 3 {
        return Err(unresolved);
    }

    let sum = contour
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.coords);
    let centroid = Point2::from(sum / contour.len() as f64);
    if contains_strictly(contour, &centroid) {
        return Ok(centroid);
    }

    let (p1, cp, p2) = (contour[0], contour[1], contour[2]);
    let seg1 = cp - p1;
    let seg2 = p2 - cp;
    let Some(dir) = seg2.try_normalize(f64::EPSILON) else {
        return Err(unresolved);
    };
    let turn = (std::f64::consts::PI - seg2.y.atan2(seg2.x) + seg1.y.atan2(seg1.x))
        .rem_euclid(2.0 * std::f64::consts::PI);

    let candidate = |angle: f64| cp + Rotation2::new(angle) * dir * offset;
    for angle in [0.5 * turn, -0.5 * turn] {
        let p = candidate(angle);
        if contains_strictly(contour, &p) {
            return Ok(p);
        }
    }
    for deg in 0..=360 {
        let p = candidate(f64::from(deg).to_radians());
        if contains_strictly(contour, &p) {
            return Ok(p);
        }
    }
    Err(unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn boundary_points_are_not_inside() {
        let sq = square();
        assert!(contains_strictly(&sq, &Point2::new(2.0, 2.0)));
        assert!(!contains_strictly(&sq, &Point2::new(4.0, 2.0)));
        assert!(!contains_strictly(&sq, &Point2::new(0.0, 0.0)));
        assert!(!contains_strictly(&sq, &Point2::new(5.0, 2.0)));
    }

    #[test]
    fn convex_contour_uses_centroid() {
        let p = find_interior_point(&square(), 0.5, 0).expect("interior point");
        assert_eq!(p, Point2::new(2.0, 2.0));
    }

    #[test]
    fn c_shape_falls_back_to_bisector() {
        // Thin C whose centroid lies in the notch.
        let c = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 5.0),
            Point2::new(6.0, 5.0),
            Point2::new(6.0, 6.0),
            Point2::new(0.0, 6.0),
        ];
        let p = find_interior_point(&c, 0.5, 3).expect("interior point");
        assert!(contains_strictly(&c, &p));
        assert!((p - c[1]).norm() <= 0.5 + 1e-9);
    }

    #[test]
    fn degenerate_contour_is_unresolved() {
        let line = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        let err = find_interior_point(&line, 0.5, 7).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UnresolvedInteriorPoint {
                contour: 7,
                points: 4
            }
        );
    }
}
