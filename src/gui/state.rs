use crate::gui::*;

/// Application-wide state driven by the winit event loop.
pub(super) struct App {
    pub(super) config: AppConfig,
    pub(super) context: Option<Context<OwnedDisplayHandle>>,
    pub(super) window: Option<DemoWindow>,
    /// Font bytes found at startup; `None` renders labels without text.
    pub(super) font: Option<Vec<u8>>,
    /// Fatal error raised inside the event loop, reported once it returns.
    pub(super) error: Option<anyhow::Error>,
}

/// The demo window: surface, renderer, widget scene and pointer routing.
pub(super) struct DemoWindow {
    pub(super) window: Arc<Window>,
    pub(super) surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    pub(super) renderer: CpuRenderer,
    pub(super) scene: DemoScene,
    pub(super) system_cursor: SystemCursor,
    /// Visibility last applied to the platform cursor.
    pub(super) cursor_visible: bool,
    pub(super) input: PointerRouter,
    /// Set by window resizes and widget geometry changes; applied on redraw.
    pub(super) pending_relayout: bool,
    pub(super) scale: f64,
    pub(super) clear_color: u32,
}
