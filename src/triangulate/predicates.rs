//! Floating-point orientation and in-circle tests.

use nalgebra::Point2;

/// Twice the signed area of `(a, b, c)`; positive when counter-clockwise.
#[inline]
pub fn orient2d(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Positive when `d` lies inside the circumcircle of the counter-clockwise
/// triangle `(a, b, c)`.
#[inline]
pub fn in_circle(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>, d: &Point2<f64>) -> f64 {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);
    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;
    alift * (bdx * cdy - cdx * bdy) + blift * (cdx * ady - adx * cdy) + clift * (adx * bdy - bdx * ady)
}

/// True when `p` lies on the open segment `(a, b)` up to a relative tolerance.
pub fn strictly_between(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return false;
    }
    if orient2d(a, b, p).abs() > 1e-10 * len2 {
        return false;
    }
    let t = ap.dot(&ab);
    t > 0.0 && t < len2
}
