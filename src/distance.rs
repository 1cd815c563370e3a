//! Exact Euclidean distance transform of binary masks.
//!
//! Every foreground pixel receives its distance to the nearest background
//! pixel; background pixels are 0. Pixels outside the image are not treated
//! as background, so a fully foreground mask has no finite distances and is
//! filled with the image diagonal instead.
//!
//! Separable lower-envelope passes (Felzenszwalb & Huttenlocher): first along
//! columns, then along rows, both on squared distances.

use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

const FAR: f64 = 1.0e12;

/// Euclidean distance from each foreground pixel to the closest background pixel.
pub fn euclidean_distance_transform(mask: &ImageU8) -> ImageF32 {
    let (w, h) = (mask.width(), mask.height());
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let mut sq = vec![0.0f64; w * h];
    for (y, row) in mask.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            sq[y * w + x] = if v > 0 { FAR } else { 0.0 };
        }
    }

    let n = w.max(h);
    let mut f = vec![0.0f64; n];
    let mut d = vec![0.0f64; n];
    let mut v = vec![0usize; n];
    let mut z = vec![0.0f64; n + 1];

    for x in 0..w {
        for y in 0..h {
            f[y] = sq[y * w + x];
        }
        lower_envelope(&f[..h], &mut d[..h], &mut v, &mut z);
        for y in 0..h {
            sq[y * w + x] = d[y];
        }
    }

    for y in 0..h {
        f[..w].copy_from_slice(&sq[y * w..(y + 1) * w]);
        lower_envelope(&f[..w], &mut d[..w], &mut v, &mut z);
        sq[y * w..(y + 1) * w].copy_from_slice(&d[..w]);
    }

    let diagonal = ((w * w + h * h) as f64).sqrt() as f32;
    for y in 0..h {
        let row = out.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let s = sq[y * w + x];
            *px = if s >= FAR { diagonal } else { s.sqrt() as f32 };
        }
    }
    out
}

/// 1-D squared distance transform of the sampled function `f`.
fn lower_envelope(f: &[f64], d: &mut [f64], v: &mut [usize], z: &mut [f64]) {
    let n = f.len();
    if n == 0 {
        return;
    }
    let mut k = 0usize;
    v[0] = 0;
    z[0] = f64::NEG_INFINITY;
    z[1] = f64::INFINITY;
    for q in 1..n {
        let mut s = intersection(f, q, v[k]);
        while s <= z[k] {
            k -= 1;
            s = intersection(f, q, v[k]);
        }
        k += 1;
        v[k] = q;
        z[k] = s;
        z[k + 1] = f64::INFINITY;
    }
    k = 0;
    for (q, out) in d.iter_mut().enumerate() {
        while z[k + 1] < q as f64 {
            k += 1;
        }
        let dq = q as f64 - v[k] as f64;
        *out = dq * dq + f[v[k]];
    }
}

#[inline]
fn intersection(f: &[f64], q: usize, p: usize) -> f64 {
    let (qf, pf) = (q as f64, p as f64);
    ((f[q] + qf * qf) - (f[p] + pf * pf)) / (2.0 * qf - 2.0 * pf)
}
