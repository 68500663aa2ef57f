use crate::gui::widgets::{WidgetKind, WidgetTree};

use super::super::types::{PixelRect, RenderTarget};
use super::super::{BUTTON_BG, BUTTON_PRESSED_BG, TEXT_COLOR};
use super::CpuRenderer;

impl CpuRenderer {
    /// Clears the frame, paints widgets back to front, then the indicators.
    pub(in crate::gui) fn draw_scene(
        &mut self,
        target: &mut RenderTarget<'_>,
        tree: &WidgetTree,
        clear: u32,
    ) {
        target.buffer.fill(clear);

        for id in tree.paint_order() {
            let Some(widget) = tree.get(id) else {
                continue;
            };
            let rect = PixelRect::from_scene(widget.frame.rect, target.height);
            let background = match widget.kind {
                WidgetKind::Button if widget.pressed => Some(BUTTON_PRESSED_BG),
                WidgetKind::Button => Some(widget.background.unwrap_or(BUTTON_BG)),
                _ => widget.background,
            };
            if let Some(color) = background {
                Self::fill_rect(target, rect, color);
            }
            if !widget.text.is_empty() {
                self.draw_text_centered(target, rect, &widget.text, TEXT_COLOR);
            }
        }

        for indicator in tree.visible_indicators() {
            let Some(origin) = indicator.origin() else {
                continue;
            };
            let size = indicator.size().round().max(0.0) as usize;
            let x = origin.x.round() as i32;
            let y = (target.height as f64 - origin.y - indicator.size()).round() as i32;
            self.draw_indicator(target, indicator.image(), size, x, y);
        }
    }
}
