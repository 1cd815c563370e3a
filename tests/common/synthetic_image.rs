#![allow(dead_code)]

use filament_network::image::MaskU8;

/// Mask with a horizontal 1-pixel-wide line of `length` pixels starting at
/// `(x0, y)`.
pub fn line_mask(width: usize, height: usize, x0: usize, y: usize, length: usize) -> MaskU8 {
    assert!(x0 + length <= width && y < height, "line must fit the image");
    let mut mask = MaskU8::new(width, height);
    for x in x0..x0 + length {
        mask.set(x, y, 255);
    }
    mask
}

/// Fill the axis-aligned rectangle `[x0, x1) x [y0, y1)`.
pub fn fill_rect(mask: &mut MaskU8, x0: usize, y0: usize, x1: usize, y1: usize) {
    for y in y0..y1.min(mask.h) {
        for x in x0..x1.min(mask.w) {
            mask.set(x, y, 255);
        }
    }
}

/// Three arms of width `2 * half_width + 1` meeting at `(cx, cy)`: one to the
/// left, one to the right and one downwards, each `arm` pixels long.
pub fn three_arm_mask(
    width: usize,
    height: usize,
    cx: usize,
    cy: usize,
    arm: usize,
    half_width: usize,
) -> MaskU8 {
    assert!(cx >= arm && cx + arm < width, "horizontal arms must fit");
    assert!(cy >= half_width && cy + arm < height, "vertical arm must fit");
    let mut mask = MaskU8::new(width, height);
    fill_rect(
        &mut mask,
        cx - arm,
        cy - half_width,
        cx + arm + 1,
        cy + half_width + 1,
    );
    fill_rect(&mut mask, cx - half_width, cy, cx + half_width + 1, cy + arm + 1);
    mask
}

/// Annulus centred at `(cx, cy)` with the given inner and outer radii.
pub fn ring_mask(width: usize, height: usize, cx: f64, cy: f64, inner: f64, outer: f64) -> MaskU8 {
    let mut mask = MaskU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            if d >= inner && d <= outer {
                mask.set(x, y, 255);
            }
        }
    }
    mask
}
