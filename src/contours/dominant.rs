use super::Contour;
use nalgebra::Point2;

/// Reduce a lattice contour to its dominant points.
///
/// Every vertex where the boundary turns is kept, so the corners of pixel
/// staircases survive. Inside straight runs one vertex is kept every `max_gap`
/// lattice steps. A `max_gap` of 0 or 1 returns the contour unchanged.
///
/// Collinearity is tested exactly, so the input must still sit on the
/// half-pixel lattice (before jitter). The output starts at the first corner.
pub fn dominant_points(contour: &[Point2<f64>], max_gap: usize) -> Contour {
    let n = contour.len();
    if n < 3 || max_gap <= 1 {
        return contour.to_vec();
    }
    let corner: Vec<bool> = (0..n)
        .map(|i| {
            let prev = contour[(i + n - 1) % n];
            let next = contour[(i + 1) % n];
            (contour[i] - prev).perp(&(next - contour[i])) != 0.0
        })
        .collect();
    let Some(start) = corner.iter().position(|&c| c) else {
        return contour.to_vec();
    };

    let mut out = Vec::with_capacity(n / max_gap + 8);
    let mut since_kept = 0usize;
    for k in 0..n {
        let i = (start + k) % n;
        if corner[i] {
            out.push(contour[i]);
            since_kept = 0;
        } else {
            since_kept += 1;
            if since_kept >= max_gap {
                out.push(contour[i]);
                since_kept = 0;
            }
        }
    }
    out
}
