use crate::core::{
    ControllerId, CursorIndicator, EventResult, Point, Rect, ResizeController, ResizeHost,
    ResizeSettings, SystemCursor,
};

/// Index of a widget inside its [`WidgetTree`].
pub(super) type WidgetId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum WidgetKind {
    /// Keeps child positions, applies size hints only.
    Float,
    /// Lays children left-to-right, top-to-bottom.
    Stack,
    Label,
    Button,
}

/// Fraction of the parent's size a widget takes; `None` keeps its own size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) struct SizeHint {
    pub(super) width: Option<f64>,
    pub(super) height: Option<f64>,
}

/// The geometry part of a widget, handed to its resize controller.
#[derive(Debug, Default)]
pub(super) struct WidgetFrame {
    pub(super) rect: Rect,
    pub(super) size_hint: SizeHint,
    pub(super) geometry_dirty: bool,
}

impl ResizeHost for WidgetFrame {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn geometry_changed(&mut self, _rect: Rect) {
        self.geometry_dirty = true;
    }
}

pub(super) struct Widget {
    pub(super) kind: WidgetKind,
    pub(super) text: String,
    pub(super) background: Option<u32>,
    pub(super) pressed: bool,
    pub(super) frame: WidgetFrame,
    pub(super) resize: Option<ResizeController>,
    pub(super) children: Vec<WidgetId>,
}

impl Widget {
    pub(super) fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            text: String::new(),
            background: None,
            pressed: false,
            frame: WidgetFrame::default(),
            resize: None,
            children: Vec::new(),
        }
    }

    pub(super) fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub(super) fn with_background(mut self, color: u32) -> Self {
        self.background = Some(color);
        self
    }

    pub(super) fn with_rect(mut self, rect: Rect) -> Self {
        self.frame.rect = rect;
        self
    }

    pub(super) fn with_size_hint(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.frame.size_hint = SizeHint { width, height };
        self
    }
}

/// Arena of widgets rooted at index 0.
pub(super) struct WidgetTree {
    widgets: Vec<Widget>,
    next_controller_id: ControllerId,
    /// Widget whose controller is resizing; it alone sees pointer moves.
    dragging: Option<WidgetId>,
}

impl WidgetTree {
    pub(super) const ROOT: WidgetId = 0;

    pub(super) fn new(root: Widget) -> Self {
        Self {
            widgets: vec![root],
            next_controller_id: 1,
            dragging: None,
        }
    }

    pub(super) fn add(&mut self, parent: WidgetId, widget: Widget) -> WidgetId {
        let id = self.widgets.len();
        self.widgets.push(widget);
        if let Some(parent) = self.widgets.get_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    /// Attaches a resize controller to `id`, returning its controller id.
    pub(super) fn make_resizable(
        &mut self,
        id: WidgetId,
        settings: ResizeSettings,
        indicator_size: f64,
    ) -> Option<ControllerId> {
        let widget = self.widgets.get_mut(id)?;
        let controller_id = self.next_controller_id;
        self.next_controller_id += 1;
        widget.resize = Some(ResizeController::new(controller_id, settings, indicator_size));
        Some(controller_id)
    }

    pub(super) fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub(super) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Pre-order walk: parents before children, earlier siblings first.
    pub(super) fn paint_order(&self) -> Vec<WidgetId> {
        let mut order = Vec::with_capacity(self.widgets.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(widget) = self.widgets.get(id) {
                stack.extend(widget.children.iter().rev());
            }
        }
        order
    }

    /// Press routing order: topmost sibling first, each widget before its
    /// children.
    pub(super) fn dispatch_order(&self) -> Vec<WidgetId> {
        let mut order = Vec::with_capacity(self.widgets.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(widget) = self.widgets.get(id) {
                stack.extend(widget.children.iter());
            }
        }
        order
    }

    /// Delivers a pointer move to every controller, or only to the drag
    /// owner while a resize is running.
    pub(super) fn pointer_move(&mut self, system: &mut SystemCursor, pointer: Point) {
        let dragging = self.dragging;
        for (id, widget) in self.widgets.iter_mut().enumerate() {
            if dragging.is_some_and(|owner| owner != id) {
                continue;
            }
            if let Some(resize) = widget.resize.as_mut() {
                resize.on_pointer_move(&mut widget.frame, system, pointer);
            }
        }
    }

    /// Offers a press to every controller; returns the widget that took it.
    pub(super) fn drag_start(&mut self, system: &mut SystemCursor) -> Option<WidgetId> {
        for id in self.dispatch_order() {
            let Some(widget) = self.widgets.get_mut(id) else {
                continue;
            };
            let Some(resize) = widget.resize.as_mut() else {
                continue;
            };
            if resize.on_drag_start(&widget.frame, system).is_consumed() {
                self.dragging = Some(id);
                return Some(id);
            }
        }
        None
    }

    pub(super) fn drag_move(&mut self, id: WidgetId, pointer: Point) -> EventResult {
        match self.widgets.get_mut(id) {
            Some(Widget {
                resize: Some(resize),
                frame,
                ..
            }) => resize.on_drag_move(frame, pointer),
            _ => EventResult::PassThrough,
        }
    }

    pub(super) fn drag_end(&mut self, id: WidgetId, system: &mut SystemCursor) -> EventResult {
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        match self.widgets.get_mut(id) {
            Some(Widget {
                resize: Some(resize),
                ..
            }) => resize.on_drag_end(system),
            _ => EventResult::PassThrough,
        }
    }

    /// Topmost button under `pointer`.
    pub(super) fn button_at(&self, pointer: Point) -> Option<WidgetId> {
        self.dispatch_order().into_iter().find(|&id| {
            self.widgets
                .get(id)
                .is_some_and(|w| w.kind == WidgetKind::Button && w.frame.rect.contains(pointer))
        })
    }

    /// Returns `true` once per batch of controller-driven geometry changes.
    pub(super) fn take_geometry_changes(&mut self) -> bool {
        let mut changed = false;
        for widget in &mut self.widgets {
            changed |= std::mem::take(&mut widget.frame.geometry_dirty);
        }
        changed
    }

    /// Visible cursor indicators, in paint order.
    pub(super) fn visible_indicators(&self) -> Vec<&CursorIndicator> {
        self.paint_order()
            .into_iter()
            .filter_map(|id| self.widgets.get(id)?.resize.as_ref())
            .map(ResizeController::cursor)
            .filter(|cursor| !cursor.is_hidden())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_widgets.rs"]
mod tests;
