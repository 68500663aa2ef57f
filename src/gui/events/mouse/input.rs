use crate::gui::*;

impl DemoWindow {
    pub(crate) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        self.apply_pending_relayout();

        if button != MouseButton::Left {
            return;
        }
        let tree = &mut self.scene.tree;
        match state {
            ElementState::Pressed => self.input.pressed(tree, &mut self.system_cursor),
            ElementState::Released => {
                self.input.released(tree, &mut self.system_cursor);
            }
        }
    }
}
