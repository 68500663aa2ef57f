//! Procedural double-arrow sprites for the resize cursor indicator.

use crate::core::CursorImage;

/// Coverage masks for one indicator image, `size * size` each, rows top-down.
pub(super) struct Sprite {
    pub(super) size: usize,
    pub(super) fill: Vec<u8>,
    pub(super) outline: Vec<u8>,
}

impl Sprite {
    pub(super) fn fill_at(&self, x: usize, y: usize) -> u8 {
        self.fill.get(y * self.size + x).copied().unwrap_or(0)
    }

    pub(super) fn outline_at(&self, x: usize, y: usize) -> u8 {
        self.outline.get(y * self.size + x).copied().unwrap_or(0)
    }
}

type Segment = ((f32, f32), (f32, f32));

/// Rasterizes `image` into a `size`-pixel square sprite.
///
/// Returns `None` for the transparent image or an empty size.
pub(super) fn rasterize(image: CursorImage, size: usize) -> Option<Sprite> {
    if size == 0 {
        return None;
    }
    let (tail, tip) = arrow_axis(image, size as f32)?;
    let segments = double_arrow(tail, tip, size as f32 * 0.25);
    let half_width = (size as f32 / 16.0).max(1.0);

    let mut fill = vec![0u8; size * size];
    let mut outline = vec![0u8; size * size];
    for y in 0..size {
        for x in 0..size {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let distance = segments
                .iter()
                .map(|&segment| segment_distance(p, segment))
                .fold(f32::INFINITY, f32::min);
            fill[y * size + x] = coverage(distance, half_width);
            outline[y * size + x] = coverage(distance, half_width + 1.0);
        }
    }
    Some(Sprite {
        size,
        fill,
        outline,
    })
}

/// Arrow endpoints in sprite pixels (y down).
fn arrow_axis(image: CursorImage, size: f32) -> Option<((f32, f32), (f32, f32))> {
    let margin = size * 0.1;
    let near = margin;
    let far = size - margin;
    let mid = size / 2.0;
    match image {
        CursorImage::Transparent => None,
        CursorImage::Horizontal => Some(((near, mid), (far, mid))),
        CursorImage::Vertical => Some(((mid, near), (mid, far))),
        CursorImage::DiagonalNwse => Some(((near, near), (far, far))),
        CursorImage::DiagonalNesw => Some(((near, far), (far, near))),
    }
}

/// Shaft plus two barbs at each end.
fn double_arrow(a: (f32, f32), b: (f32, f32), head: f32) -> Vec<Segment> {
    let mut segments = vec![(a, b)];
    for (tip, toward) in [(a, b), (b, a)] {
        let (dx, dy) = (toward.0 - tip.0, toward.1 - tip.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            continue;
        }
        let (ux, uy) = (dx / len, dy / len);
        let c = std::f32::consts::FRAC_1_SQRT_2;
        for sign in [1.0f32, -1.0] {
            let rx = ux * c - sign * uy * c;
            let ry = sign * ux * c + uy * c;
            segments.push((tip, (tip.0 + rx * head, tip.1 + ry * head)));
        }
    }
    segments
}

fn segment_distance(p: (f32, f32), (a, b): Segment) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (apx, apy) = (p.0 - a.0, p.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + abx * t - p.0, a.1 + aby * t - p.1);
    (cx * cx + cy * cy).sqrt()
}

/// Anti-aliased coverage of a stroke `half_width` wide at `distance`.
fn coverage(distance: f32, half_width: f32) -> u8 {
    let alpha = (half_width + 0.5 - distance).clamp(0.0, 1.0);
    (alpha * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../../tests/unit/gui_renderer_cursor_sprite.rs"]
mod tests;
