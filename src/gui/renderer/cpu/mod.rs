mod primitives;
mod scene;

use std::collections::HashMap;

use fontdue::{Font, FontSettings};
use tracing::warn;

use crate::core::CursorImage;

use super::cursor_sprite::Sprite;
use super::types::GlyphBitmap;

/// CPU-based software renderer using softbuffer pixel buffers.
pub struct CpuRenderer {
    pub(in crate::gui::renderer) font: Option<Font>,
    /// Font size before scaling, in logical pixels.
    base_font_size: f32,
    ui_scale: f64,
    pub(in crate::gui::renderer) glyph_cache: HashMap<char, GlyphBitmap>,
    /// `None` entries remember images that have nothing to draw.
    pub(in crate::gui::renderer) sprite_cache: HashMap<(CursorImage, usize), Option<Sprite>>,
}

impl CpuRenderer {
    /// Builds a renderer; text is skipped when `font_data` is absent or unreadable.
    pub fn new(font_data: Option<&[u8]>, font_size: f32, scale_factor: f64) -> Self {
        let font = font_data.and_then(|data| {
            Font::from_bytes(data, FontSettings::default())
                .map_err(|err| warn!("font load failed: {err}"))
                .ok()
        });
        CpuRenderer {
            font,
            base_font_size: font_size,
            ui_scale: super::sanitize_scale(scale_factor),
            glyph_cache: HashMap::new(),
            sprite_cache: HashMap::new(),
        }
    }

    pub fn set_scale(&mut self, scale_factor: f64) {
        let scale = super::sanitize_scale(scale_factor);
        if !super::scale_changed(self.ui_scale, scale) {
            return;
        }
        self.ui_scale = scale;
        self.glyph_cache.clear();
        self.sprite_cache.clear();
    }

    pub(in crate::gui::renderer) fn font_size(&self) -> f32 {
        self.base_font_size * self.ui_scale as f32
    }
}
