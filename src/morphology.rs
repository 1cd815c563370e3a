//! Binary mask preprocessing applied before extraction.
//!
//! Pixels are treated as binary with threshold `> 0`; outputs are `0` or
//! `255`. Pixels outside the image never take part in a neighbourhood, so
//! erosion does not eat into the image border.

use crate::image::{ImageU8, ImageView, MaskU8};

/// Bitwise inversion, for acquisitions with a white background.
pub fn invert_mask(src: &ImageU8) -> MaskU8 {
    let mut out = MaskU8::new(src.width(), src.height());
    for (y, row) in src.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out.set(x, y, !v);
        }
    }
    out
}

/// Opening followed by closing with a disk of the given radius.
///
/// Removes specks and fills pinholes smaller than the disk. A radius of 0 only
/// binarizes the mask.
pub fn smooth_mask(src: &ImageU8, radius: usize) -> MaskU8 {
    let disk = disk_offsets(radius);
    let opened = dilate(&erode(src, &disk).as_view(), &disk);
    erode(&dilate(&opened.as_view(), &disk).as_view(), &disk)
}

/// Offsets of a discrete disk `dx² + dy² <= r²`.
fn disk_offsets(radius: usize) -> Vec<(isize, isize)> {
    let r = radius as isize;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

fn erode(src: &ImageU8, disk: &[(isize, isize)]) -> MaskU8 {
    morph(src, disk, true)
}

fn dilate(src: &ImageU8, disk: &[(isize, isize)]) -> MaskU8 {
    morph(src, disk, false)
}

fn morph(src: &ImageU8, disk: &[(isize, isize)], all: bool) -> MaskU8 {
    let (w, h) = (src.width() as isize, src.height() as isize);
    let mut out = MaskU8::new(src.width(), src.height());
    for y in 0..h {
        for x in 0..w {
            let mut hit = all;
            for &(dx, dy) in disk {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let set = src.get(nx as usize, ny as usize) > 0;
                if all && !set {
                    hit = false;
                    break;
                }
                if !all && set {
                    hit = true;
                    break;
                }
            }
            out.set(x as usize, y as usize, if hit { 255 } else { 0 });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{invert_mask, smooth_mask};
    use crate::image::MaskU8;

    #[test]
    fn smoothing_removes_single_pixel_speck() {
        let mut mask = MaskU8::new(7, 7);
        mask.set(3, 3, 255);
        let out = smooth_mask(&mask.as_view(), 1);
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn smoothing_fills_single_pixel_hole() {
        let mut mask = MaskU8::from_vec(9, 9, vec![255; 81]).expect("valid mask");
        mask.set(4, 4, 0);
        let out = smooth_mask(&mask.as_view(), 1);
        assert_eq!(out.get(4, 4), 255);
        assert_eq!(out.get(0, 0), 255);
    }

    #[test]
    fn inversion_swaps_foreground_and_background() {
        let mask = MaskU8::from_vec(2, 1, vec![0, 255]).expect("valid mask");
        let out = invert_mask(&mask.as_view());
        assert_eq!(out.data, vec![255, 0]);
    }
}
