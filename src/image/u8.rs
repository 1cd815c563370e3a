//! 8-bit single-channel rasters used for binary masks.
//!
//! [`ImageU8`] is a borrowed view (what the extractor consumes); [`MaskU8`]
//! owns its pixels and is what preprocessing and disk loading produce.

use super::traits::ImageView;

/// Borrowed 8-bit raster. Any value `> 0` counts as foreground.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Foreground test that treats every pixel outside the raster as background.
    #[inline]
    pub fn is_foreground(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return false;
        }
        self.get(x as usize, y as usize) > 0
    }

    pub fn foreground_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v > 0).count())
            .sum()
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed 8-bit mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl MaskU8 {
    /// Zero-initialised (all background) mask.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }

    /// Borrow as a read-only [`ImageU8`] view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::new(self.w, self.h, &self.data)
    }
}
