mod cpu;
mod cursor_sprite;
mod types;

pub(super) use cpu::CpuRenderer;
pub(super) use types::RenderTarget;

/// Sidebar fill, the demo's blue column.
pub(super) const SIDEBAR_BG: u32 = 0x0000FF;

/// Button fill at rest.
pub(super) const BUTTON_BG: u32 = 0x585858;

/// Button fill while held down.
pub(super) const BUTTON_PRESSED_BG: u32 = 0x33A5E5;

/// Label and button text.
pub(super) const TEXT_COLOR: u32 = 0xFFFFFF;

/// Cursor indicator arrow body.
pub(super) const INDICATOR_FILL: u32 = 0xFFFFFF;

/// Cursor indicator arrow outline, keeps the arrow readable on light widgets.
pub(super) const INDICATOR_OUTLINE: u32 = 0x000000;

/// Sanitizes a DPI scale factor to a safe, finite range.
///
/// Returns `1.0` for non-finite inputs, otherwise clamps to `[0.75, 4.0]`.
pub(super) fn sanitize_scale(scale_factor: f64) -> f64 {
    if scale_factor.is_finite() {
        scale_factor.clamp(0.75, 4.0)
    } else {
        1.0
    }
}

/// Returns `true` when the new scale differs meaningfully from the old scale.
pub(super) fn scale_changed(old: f64, new: f64) -> bool {
    (old - new).abs() >= 1e-6
}

/// Blends `src` over `dst` with `alpha` in 0..=255 (both colors are 0xRRGGBB).
pub(super) fn blend_rgb(dst: u32, src: u32, alpha: u8) -> u32 {
    match alpha {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let a = alpha as u32;
    let inv = 255 - a;
    let channel = |shift: u32| {
        let d = (dst >> shift) & 0xFF;
        let s = (src >> shift) & 0xFF;
        ((s * a + d * inv + 127) / 255) << shift
    };
    channel(16) | channel(8) | channel(0)
}
