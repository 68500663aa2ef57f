use crate::core::Rect;

/// Mutable view of a softbuffer frame.
pub(in crate::gui) struct RenderTarget<'a> {
    pub(in crate::gui) buffer: &'a mut [u32],
    pub(in crate::gui) width: usize,
    pub(in crate::gui) height: usize,
}

impl RenderTarget<'_> {
    /// Writes `color` at `(x, y)` blended with `alpha`; out-of-bounds is a no-op.
    pub(super) fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if let Some(pixel) = self.buffer.get_mut(idx) {
            *pixel = super::blend_rgb(*pixel, color, alpha);
        }
    }
}

/// Pixel rectangle with a top-left origin, as the surface stores rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct PixelRect {
    pub(super) x: i32,
    pub(super) y: i32,
    pub(super) width: u32,
    pub(super) height: u32,
}

impl PixelRect {
    /// Flips a scene rect (y up) into a surface `surface_height` pixels tall.
    pub(super) fn from_scene(rect: Rect, surface_height: usize) -> Self {
        let flip = |y: f64| (surface_height as f64 - y).round() as i32;
        let left = rect.x.round() as i32;
        let right = rect.right().round() as i32;
        let top = flip(rect.top());
        let bottom = flip(rect.y);
        Self {
            x: left,
            y: top,
            width: right.saturating_sub(left).max(0) as u32,
            height: bottom.saturating_sub(top).max(0) as u32,
        }
    }
}

pub(super) struct GlyphBitmap {
    pub(super) data: Vec<u8>,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) left: i32,
    pub(super) top: i32,
    pub(super) advance: f32,
}
