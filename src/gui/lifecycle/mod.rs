use crate::gui::*;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open_window(event_loop) {
            error!("{err:#}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        if win.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("close requested");
                event_loop.exit();
                return;
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => win.on_cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => win.on_mouse_input(state, button),
            WindowEvent::Resized(size) => win.on_resized(size),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                win.on_scale_factor_changed(scale_factor, &self.config);
            }
            WindowEvent::RedrawRequested => {
                win.on_redraw_requested();
                return;
            }
            _ => return,
        }
        win.after_event();
    }
}
