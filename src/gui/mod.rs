mod demo;
mod events;
mod input;
mod layout;
mod lifecycle;
mod renderer;
mod state;
mod widgets;

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::anyhow;
use softbuffer::{Context, Surface};
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop, OwnedDisplayHandle};
use winit::window::{Window, WindowId};

use crate::config::{AppConfig, font_data, load_config};
use crate::core::{Point, Rect, SystemCursor};

use self::demo::DemoScene;
use self::input::{PointerRouter, scene_point};
use self::renderer::{CpuRenderer, RenderTarget, sanitize_scale, scale_changed};
use self::state::{App, DemoWindow};
use self::widgets::WidgetId;

impl DemoWindow {
    /// Wraps an already-created window with its surface, renderer and scene.
    fn new(
        window: Arc<Window>,
        context: &Context<OwnedDisplayHandle>,
        config: &AppConfig,
        font: Option<&[u8]>,
    ) -> anyhow::Result<Self> {
        let surface = Surface::new(context, window.clone())
            .map_err(|err| anyhow!("failed to create surface: {err}"))?;
        let scale = sanitize_scale(window.scale_factor());
        let renderer = CpuRenderer::new(font, config.font.size, scale);
        let scene = DemoScene::build(config, scale, bounds_of(window.inner_size()));
        debug!(scale, "demo window created");

        Ok(DemoWindow {
            window,
            surface,
            renderer,
            scene,
            system_cursor: SystemCursor::default(),
            cursor_visible: true,
            input: PointerRouter::new(),
            pending_relayout: false,
            scale,
            clear_color: config.window.background,
        })
    }

    fn bounds(&self) -> Rect {
        bounds_of(self.window.inner_size())
    }
}

/// Scene rect covering a window of `size` physical pixels.
fn bounds_of(size: PhysicalSize<u32>) -> Rect {
    Rect::new(0.0, 0.0, size.width as f64, size.height as f64)
}

impl App {
    fn new() -> Self {
        let config = load_config();
        let font = font_data(&config.font);
        App {
            config,
            context: None,
            window: None,
            font,
            error: None,
        }
    }

    /// Creates the demo window and its rendering context.
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let context = match self.context.take() {
            Some(context) => context,
            None => Context::new(event_loop.owned_display_handle())
                .map_err(|err| anyhow!("failed to create rendering context: {err}"))?,
        };

        let window_config = &self.config.window;
        let attrs = Window::default_attributes()
            .with_title(window_config.title.as_str())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));
        let window = event_loop
            .create_window(attrs)
            .map_err(|err| anyhow!("failed to create window: {err}"))?;

        let demo = DemoWindow::new(
            Arc::new(window),
            &context,
            &self.config,
            self.font.as_deref(),
        )?;
        demo.window.request_redraw();
        info!(
            width = window_config.width,
            height = window_config.height,
            "window opened"
        );

        self.context = Some(context);
        self.window = Some(demo);
        Ok(())
    }
}

/// Runs the demo until its window is closed.
pub fn run() -> anyhow::Result<()> {
    let event_loop =
        EventLoop::new().map_err(|err| anyhow!("failed to create event loop: {err}"))?;
    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .map_err(|err| anyhow!("application error: {err}"))?;
    app.error.take().map_or(Ok(()), Err)
}
