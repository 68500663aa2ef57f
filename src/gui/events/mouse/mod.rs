mod input;

use crate::gui::*;

impl DemoWindow {
    pub(crate) fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let pointer = scene_point(x, y, self.window.inner_size().height);
        self.input.moved(&mut self.scene.tree, &mut self.system_cursor, pointer);
    }

    pub(crate) fn on_cursor_left(&mut self) {
        self.input.left_window(&mut self.scene.tree, &mut self.system_cursor);
    }

    /// Mirrors controller-owned cursor visibility onto the platform cursor.
    pub(in crate::gui) fn sync_cursor_visibility(&mut self) {
        let visible = self.system_cursor.is_visible();
        if visible == self.cursor_visible {
            return;
        }
        self.window.set_cursor_visible(visible);
        self.cursor_visible = visible;
        debug!(visible, owner = ?self.system_cursor.owner(), "system cursor");
    }

    /// Bookkeeping shared by every handled window event.
    pub(crate) fn after_event(&mut self) {
        if self.scene.tree.take_geometry_changes() {
            self.pending_relayout = true;
        }
        self.sync_cursor_visibility();
        self.window.request_redraw();
    }
}
