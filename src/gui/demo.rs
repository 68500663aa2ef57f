use tracing::debug;

use crate::config::{AppConfig, WidgetSpec};
use crate::core::{Rect, ResizeSettings, cm};

use super::layout::layout;
use super::renderer::SIDEBAR_BG;
use super::widgets::{Widget, WidgetId, WidgetKind, WidgetTree};

/// The demo widget tree plus the handles its size bindings need.
pub(super) struct DemoScene {
    pub(super) tree: WidgetTree,
    sidebar: WidgetId,
    content: WidgetId,
}

impl DemoScene {
    /// Builds the scene at `scale` (physical pixels per logical pixel).
    pub(super) fn build(config: &AppConfig, scale: f64, bounds: Rect) -> Self {
        let demo = &config.demo;
        let settings = |spec: &WidgetSpec| ResizeSettings {
            sides: spec.sides,
            border: cm(spec.border_cm.unwrap_or(config.resize.border_cm), scale),
            dont_move: spec.dont_move,
        };
        let indicator_size = cm(config.resize.indicator_size_cm, scale);

        let mut tree = WidgetTree::new(Widget::new(WidgetKind::Float));
        let root_stack = tree.add(
            WidgetTree::ROOT,
            Widget::new(WidgetKind::Stack).with_size_hint(Some(1.0), Some(1.0)),
        );

        let sidebar = tree.add(
            root_stack,
            Widget::new(WidgetKind::Stack)
                .with_background(SIDEBAR_BG)
                .with_rect(Rect::new(0.0, 0.0, cm(demo.sidebar.width_cm, scale), 0.0))
                .with_size_hint(None, Some(1.0)),
        );
        tree.make_resizable(sidebar, settings(&demo.sidebar), indicator_size);

        let content = tree.add(
            root_stack,
            Widget::new(WidgetKind::Stack).with_size_hint(None, Some(1.0)),
        );

        let side_label = tree.add(
            sidebar,
            Widget::new(WidgetKind::Label)
                .with_text("SideLabel")
                .with_rect(Rect::new(0.0, 0.0, 0.0, cm(demo.side_label.height_cm, scale)))
                .with_size_hint(Some(1.0), None),
        );
        tree.make_resizable(side_label, settings(&demo.side_label), indicator_size);

        let filler_height = cm(demo.filler_label_height_cm, scale);
        for n in 1..=demo.filler_labels {
            tree.add(
                sidebar,
                Widget::new(WidgetKind::Label)
                    .with_text(format!("X {n}"))
                    .with_rect(Rect::new(0.0, 0.0, 0.0, filler_height))
                    .with_size_hint(Some(1.0), None),
            );
        }

        let stack_button = tree.add(
            content,
            Widget::new(WidgetKind::Button).with_text("RButton").with_rect(Rect::new(
                0.0,
                0.0,
                cm(demo.stack_button.width_cm, scale),
                cm(demo.stack_button.height_cm, scale),
            )),
        );
        tree.make_resizable(stack_button, settings(&demo.stack_button), indicator_size);

        let floating_button = tree.add(
            WidgetTree::ROOT,
            Widget::new(WidgetKind::Button).with_text("4 Sides").with_rect(Rect::new(
                0.0,
                0.0,
                cm(demo.floating_button.width_cm, scale),
                cm(demo.floating_button.height_cm, scale),
            )),
        );
        tree.make_resizable(floating_button, settings(&demo.floating_button), indicator_size);

        let mut scene = Self {
            tree,
            sidebar,
            content,
        };
        scene.relayout(bounds);
        scene
    }

    /// Re-applies bindings and layout for the window `bounds`.
    pub(super) fn relayout(&mut self, bounds: Rect) {
        let sidebar_width = self
            .tree
            .get(self.sidebar)
            .map_or(0.0, |w| w.frame.rect.width);
        if let Some(content) = self.tree.get_mut(self.content) {
            content.frame.rect.width = (bounds.width - sidebar_width).max(0.0);
        }
        layout(&mut self.tree, bounds);
        debug!(sidebar_width, "scene laid out");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_demo.rs"]
mod tests;
