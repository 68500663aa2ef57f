use std::collections::hash_map::Entry;

use super::super::cursor_sprite::{self, Sprite};
use super::super::types::{GlyphBitmap, PixelRect, RenderTarget};
use super::super::{INDICATOR_FILL, INDICATOR_OUTLINE};
use super::CpuRenderer;
use crate::core::CursorImage;

impl CpuRenderer {
    pub(in crate::gui::renderer) fn fill_rect(
        target: &mut RenderTarget<'_>,
        rect: PixelRect,
        color: u32,
    ) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = ((rect.x as i64 + rect.width as i64).max(0) as usize).min(target.width);
        let y1 = ((rect.y as i64 + rect.height as i64).max(0) as usize).min(target.height);
        if x0 >= x1 {
            return;
        }
        for row in y0..y1 {
            let start = row * target.width;
            target.buffer[start + x0..start + x1].fill(color);
        }
    }

    /// Draws `text` on one line centered inside `rect`.
    pub(in crate::gui::renderer) fn draw_text_centered(
        &mut self,
        target: &mut RenderTarget<'_>,
        rect: PixelRect,
        text: &str,
        color: u32,
    ) {
        let Some((ascent, descent)) = self.line_metrics() else {
            return;
        };
        for ch in text.chars() {
            self.cache_glyph(ch);
        }

        let width: f32 = text
            .chars()
            .filter_map(|ch| self.glyph_cache.get(&ch))
            .map(|glyph| glyph.advance)
            .sum();
        let mut pen_x = rect.x as f32 + (rect.width as f32 - width) / 2.0;
        let line_height = ascent - descent;
        let baseline = rect.y as f32 + (rect.height as f32 - line_height) / 2.0 + ascent;

        for ch in text.chars() {
            let Some(glyph) = self.glyph_cache.get(&ch) else {
                continue;
            };
            let left = pen_x.round() as i32 + glyph.left;
            let top = baseline.round() as i32 - glyph.top;
            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let alpha = glyph.data[gy * glyph.width + gx];
                    if alpha > 0 {
                        target.blend_pixel(left + gx as i32, top + gy as i32, color, alpha);
                    }
                }
            }
            pen_x += glyph.advance;
        }
    }

    /// Blits the indicator sprite for `image` with its top-left at `(x, y)`.
    pub(in crate::gui::renderer) fn draw_indicator(
        &mut self,
        target: &mut RenderTarget<'_>,
        image: CursorImage,
        size: usize,
        x: i32,
        y: i32,
    ) {
        let Some(sprite) = self.sprite(image, size) else {
            return;
        };
        for sy in 0..sprite.size {
            for sx in 0..sprite.size {
                let (px, py) = (x + sx as i32, y + sy as i32);
                let outline = sprite.outline_at(sx, sy);
                if outline > 0 {
                    target.blend_pixel(px, py, INDICATOR_OUTLINE, outline);
                }
                let fill = sprite.fill_at(sx, sy);
                if fill > 0 {
                    target.blend_pixel(px, py, INDICATOR_FILL, fill);
                }
            }
        }
    }

    fn sprite(&mut self, image: CursorImage, size: usize) -> Option<&Sprite> {
        self.sprite_cache
            .entry((image, size))
            .or_insert_with(|| cursor_sprite::rasterize(image, size))
            .as_ref()
    }

    /// Ascent and descent (negative) of the scaled font.
    fn line_metrics(&self) -> Option<(f32, f32)> {
        let font = self.font.as_ref()?;
        let metrics = font.horizontal_line_metrics(self.font_size())?;
        Some((metrics.ascent, metrics.descent))
    }

    fn cache_glyph(&mut self, ch: char) {
        let font_size = self.font_size();
        let Some(font) = self.font.as_ref() else {
            return;
        };
        if let Entry::Vacant(entry) = self.glyph_cache.entry(ch) {
            let (metrics, bitmap) = font.rasterize(ch, font_size);
            entry.insert(GlyphBitmap {
                data: bitmap,
                width: metrics.width,
                height: metrics.height,
                left: metrics.xmin,
                top: metrics.height as i32 + metrics.ymin,
                advance: metrics.advance_width,
            });
        }
    }
}
