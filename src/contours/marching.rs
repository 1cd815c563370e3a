use super::Contour;
use crate::image::ImageU8;
use nalgebra::Point2;

const NONE: usize = usize::MAX;

/// Lattice vertices are keyed by the pixel pair they separate: a horizontal
/// pair `(x, y)-(x+1, y)` or a vertical pair `(x, y)-(x, y+1)`, with `x` and `y`
/// ranging over the padded raster `-1..=w` and `-1..=h`.
struct VertexKeys {
    cols: usize,
}

impl VertexKeys {
    #[inline]
    fn horizontal(&self, x: isize, y: isize) -> usize {
        (((y + 1) as usize * self.cols) + (x + 1) as usize) * 2
    }

    #[inline]
    fn vertical(&self, x: isize, y: isize) -> usize {
        self.horizontal(x, y) + 1
    }

    fn position(&self, key: usize) -> Point2<f64> {
        let cell = key / 2;
        let x = (cell % self.cols) as f64 - 1.0;
        let y = (cell / self.cols) as f64 - 1.0;
        if key % 2 == 0 {
            Point2::new(x + 0.5, y)
        } else {
            Point2::new(x, y + 0.5)
        }
    }
}

/// Marching squares over every 2x2 cell of the padded raster.
///
/// Going round a cell's corners (top-left, top-right, bottom-right,
/// bottom-left) each side either enters the foreground or leaves it. Every
/// entering crossing links to the leaving crossing preceding it, which keeps
/// diagonal foreground pixels connected at saddle cells and orients all
/// segments with the foreground on the same side. Each lattice vertex ends up
/// with exactly one successor, so the links decompose into disjoint cycles.
pub fn trace_boundaries(mask: &ImageU8) -> Vec<Contour> {
    let (w, h) = (mask.w as isize, mask.h as isize);
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let keys = VertexKeys {
        cols: mask.w + 2,
    };
    let mut next = vec![NONE; (mask.w + 2) * (mask.h + 2) * 2];

    let mut crossings: Vec<(usize, bool)> = Vec::with_capacity(4);
    for cy in -1..h {
        for cx in -1..w {
            let corners = [
                mask.is_foreground(cx, cy),
                mask.is_foreground(cx + 1, cy),
                mask.is_foreground(cx + 1, cy + 1),
                mask.is_foreground(cx, cy + 1),
            ];
            if corners.iter().all(|&c| c) || corners.iter().all(|&c| !c) {
                continue;
            }
            let sides = [
                keys.horizontal(cx, cy),
                keys.vertical(cx + 1, cy),
                keys.horizontal(cx, cy + 1),
                keys.vertical(cx, cy),
            ];
            crossings.clear();
            for i in 0..4 {
                let (from, to) = (corners[i], corners[(i + 1) % 4]);
                if from != to {
                    crossings.push((sides[i], to));
                }
            }
            let n = crossings.len();
            for i in 0..n {
                let (key, entering) = crossings[i];
                if entering {
                    next[key] = crossings[(i + n - 1) % n].0;
                }
            }
        }
    }

    let mut contours = Vec::new();
    for start in 0..next.len() {
        if next[start] == NONE {
            continue;
        }
        let mut contour = Vec::new();
        let mut key = start;
        while next[key] != NONE {
            contour.push(keys.position(key));
            let succ = next[key];
            next[key] = NONE;
            key = succ;
        }
        contours.push(contour);
    }
    contours
}
