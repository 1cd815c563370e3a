//! Owned single-channel f32 raster, row-major and tightly packed.
//!
//! Holds distance maps. Triangle radii are read from it by rounding the
//! triangle centre to the nearest pixel.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-filled raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.w + x] = v;
    }

    /// Value at the pixel nearest to the sub-pixel location `(x, y)`, or
    /// `None` when that pixel lies outside the image.
    pub fn sample_nearest(&self, x: f64, y: f64) -> Option<f32> {
        let (xr, yr) = (x.round(), y.round());
        if !xr.is_finite() || !yr.is_finite() || xr < 0.0 || yr < 0.0 {
            return None;
        }
        let (xi, yi) = (xr as usize, yr as usize);
        (xi < self.w && yi < self.h).then(|| self.get(xi, yi))
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}
