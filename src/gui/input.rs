use crate::gui::widgets::WidgetTree;
use crate::gui::*;

/// Pointer position used once the cursor leaves the window.
const OFFSCREEN: Point = Point::new(-1.0e6, -1.0e6);

/// Converts a winit position (y down) into scene coordinates (y up).
pub(super) fn scene_point(x: f64, y: f64, window_height: u32) -> Point {
    Point::new(x, window_height as f64 - y)
}

/// Routes left-button pointer events to resize controllers and buttons.
///
/// A press goes to the first controller that takes it; only when none does
/// is it treated as a button press. The widget that took a press receives
/// every move and the release until the button goes up.
#[derive(Debug)]
pub(super) struct PointerRouter {
    pointer: Point,
    drag_owner: Option<WidgetId>,
    pressed_button: Option<WidgetId>,
}

impl PointerRouter {
    pub(super) fn new() -> Self {
        Self {
            pointer: OFFSCREEN,
            drag_owner: None,
            pressed_button: None,
        }
    }

    pub(super) fn pointer(&self) -> Point {
        self.pointer
    }

    pub(super) fn drag_owner(&self) -> Option<WidgetId> {
        self.drag_owner
    }

    pub(super) fn moved(&mut self, tree: &mut WidgetTree, system: &mut SystemCursor, to: Point) {
        self.pointer = to;
        tree.pointer_move(system, to);
        if let Some(owner) = self.drag_owner {
            tree.drag_move(owner, to);
        }
    }

    /// The cursor left the window. A running drag keeps its last position.
    pub(super) fn left_window(&mut self, tree: &mut WidgetTree, system: &mut SystemCursor) {
        if self.drag_owner.is_none() {
            self.moved(tree, system, OFFSCREEN);
        }
    }

    pub(super) fn pressed(&mut self, tree: &mut WidgetTree, system: &mut SystemCursor) {
        if let Some(owner) = tree.drag_start(system) {
            debug!(widget = owner, "resize drag started");
            self.drag_owner = Some(owner);
            return;
        }
        let Some(id) = tree.button_at(self.pointer) else {
            return;
        };
        if let Some(button) = tree.get_mut(id) {
            button.pressed = true;
            self.pressed_button = Some(id);
        }
    }

    /// Ends a drag or releases the pressed button, returning that button.
    pub(super) fn released(
        &mut self,
        tree: &mut WidgetTree,
        system: &mut SystemCursor,
    ) -> Option<WidgetId> {
        if let Some(owner) = self.drag_owner.take() {
            tree.drag_end(owner, system);
            debug!(widget = owner, "resize drag finished");
            // Re-evaluate edges where the drag left the pointer.
            tree.pointer_move(system, self.pointer);
            return None;
        }
        let id = self.pressed_button.take()?;
        let button = tree.get_mut(id)?;
        button.pressed = false;
        info!(button = %button.text, "button released");
        Some(id)
    }

    /// Forgets drag and press targets after the scene was rebuilt.
    pub(super) fn reset(&mut self) {
        self.drag_owner = None;
        self.pressed_button = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_input.rs"]
mod tests;
