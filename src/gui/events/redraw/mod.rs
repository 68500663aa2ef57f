use crate::gui::*;

impl DemoWindow {
    pub(in crate::gui) fn apply_pending_relayout(&mut self) {
        if std::mem::take(&mut self.pending_relayout) {
            self.scene.relayout(self.bounds());
        }
    }

    pub(crate) fn on_resized(&mut self, size: PhysicalSize<u32>) {
        // Coalesce rapid OS resize events and lay out once on redraw.
        debug!(width = size.width, height = size.height, "window resized");
        self.pending_relayout = true;
    }

    pub(crate) fn on_scale_factor_changed(&mut self, scale_factor: f64, config: &AppConfig) {
        let scale = sanitize_scale(scale_factor);
        if !scale_changed(self.scale, scale) {
            return;
        }
        info!(from = self.scale, to = scale, "scale factor changed");
        self.scale = scale;
        self.renderer.set_scale(scale);

        // Controller ids restart with the new tree, so drop all ownership.
        self.scene = DemoScene::build(config, scale, self.bounds());
        self.system_cursor = SystemCursor::default();
        self.input.reset();
        let pointer = self.input.pointer();
        self.input.moved(&mut self.scene.tree, &mut self.system_cursor, pointer);
    }

    pub(crate) fn on_redraw_requested(&mut self) {
        self.apply_pending_relayout();

        let size = self.window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if let Err(err) = self.surface.resize(width, height) {
            warn!("surface resize failed: {err}");
            return;
        }
        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                warn!("failed to map frame buffer: {err}");
                return;
            }
        };

        let mut target = RenderTarget {
            buffer: &mut buffer,
            width: size.width as usize,
            height: size.height as usize,
        };
        self.renderer.draw_scene(&mut target, &self.scene.tree, self.clear_color);

        if let Err(err) = buffer.present() {
            warn!("failed to present frame: {err}");
        }
    }
}
