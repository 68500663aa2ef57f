//! Per-widget drag-to-resize state machine.
//!
//! The controller never owns the widget. Every handler receives the host
//! through [`ResizeHost`] plus the shared [`SystemCursor`], and reports
//! whether it consumed the event so the caller can fall back to the
//! widget's own press/release handling.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::cursor_indicator::CursorIndicator;
use super::edges::{EdgeFlags, ResizableSides, detect};
use super::geometry::{Point, Rect, cm};
use super::system_cursor::{ControllerId, SystemCursor};

/// Minimum widget extent, in multiples of the border.
const MIN_SIZE_BORDERS: f64 = 3.0;

/// Edge zone thickness when none is configured, at scale 1.
const DEFAULT_BORDER_CM: f64 = 0.5;

/// Geometry access the controller needs from a widget.
pub trait ResizeHost {
    fn rect(&self) -> Rect;

    fn set_rect(&mut self, rect: Rect);

    fn collide_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    /// Called after the controller changed the rect during a drag.
    fn geometry_changed(&mut self, _rect: Rect) {}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResizeState {
    Idle,
    Hover,
    HoverEdge,
    Resizing,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventResult {
    Consumed,
    PassThrough,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Rect captured when a drag starts; left/down resizes are measured from it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DragSnapshot {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    pub sides: ResizableSides,
    /// Edge zone thickness, in the host rect's units.
    pub border: f64,
    /// Grow left/down edges without moving the widget (for layout children).
    pub dont_move: bool,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            sides: ResizableSides::NONE,
            border: cm(DEFAULT_BORDER_CM, 1.0),
            dont_move: false,
        }
    }
}

pub struct ResizeController {
    id: ControllerId,
    settings: ResizeSettings,
    state: ResizeState,
    edges: EdgeFlags,
    snapshot: Option<DragSnapshot>,
    cursor: CursorIndicator,
}

impl ResizeController {
    pub fn new(id: ControllerId, settings: ResizeSettings, indicator_size: f64) -> Self {
        Self {
            id,
            settings,
            state: ResizeState::Idle,
            edges: EdgeFlags::NONE,
            snapshot: None,
            cursor: CursorIndicator::new(indicator_size),
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn settings(&self) -> &ResizeSettings {
        &self.settings
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn edges(&self) -> EdgeFlags {
        self.edges
    }

    pub fn snapshot(&self) -> Option<DragSnapshot> {
        self.snapshot
    }

    pub fn cursor(&self) -> &CursorIndicator {
        &self.cursor
    }

    pub fn on_pointer_move(
        &mut self,
        host: &mut dyn ResizeHost,
        system: &mut SystemCursor,
        pointer: Point,
    ) {
        match self.state {
            ResizeState::Idle => {
                if host.collide_point(pointer) {
                    self.enter(host.rect(), system, pointer);
                }
            }
            ResizeState::Resizing => self.cursor.follow_pointer(pointer),
            ResizeState::Hover | ResizeState::HoverEdge => {
                self.cursor.follow_pointer(pointer);
                if host.collide_point(pointer) {
                    self.refresh_edges(host.rect(), system, pointer);
                } else {
                    self.leave(system);
                }
            }
        }
    }

    pub fn on_drag_start(
        &mut self,
        host: &dyn ResizeHost,
        system: &mut SystemCursor,
    ) -> EventResult {
        if self.state != ResizeState::HoverEdge || !self.edges.any() {
            return EventResult::PassThrough;
        }
        self.snapshot = Some(DragSnapshot { rect: host.rect() });
        self.set_state(ResizeState::Resizing);
        system.hide_for(self.id);
        EventResult::Consumed
    }

    pub fn on_drag_move(&mut self, host: &mut dyn ResizeHost, pointer: Point) -> EventResult {
        if self.state != ResizeState::Resizing {
            return EventResult::PassThrough;
        }
        let Some(snapshot) = self.snapshot else {
            return EventResult::PassThrough;
        };

        let current = host.rect();
        let resized = self.resized_rect(current, snapshot.rect, pointer);
        if resized != current {
            host.set_rect(resized);
            host.geometry_changed(resized);
        }
        EventResult::Consumed
    }

    pub fn on_drag_end(&mut self, system: &mut SystemCursor) -> EventResult {
        if self.state != ResizeState::Resizing {
            return EventResult::PassThrough;
        }
        self.snapshot = None;
        self.edges = EdgeFlags::NONE;
        self.cursor.change_side(EdgeFlags::NONE);
        system.release(self.id);
        self.set_state(ResizeState::Hover);
        EventResult::Consumed
    }

    fn enter(&mut self, rect: Rect, system: &mut SystemCursor, pointer: Point) {
        self.set_state(ResizeState::Hover);
        system.hide_for(self.id);
        self.cursor.set_hidden(false);
        self.cursor.follow_pointer(pointer);
        self.refresh_edges(rect, system, pointer);
    }

    fn leave(&mut self, system: &mut SystemCursor) {
        self.set_state(ResizeState::Idle);
        self.edges = EdgeFlags::NONE;
        self.cursor.set_hidden(true);
        system.release(self.id);
    }

    fn refresh_edges(&mut self, rect: Rect, system: &mut SystemCursor, pointer: Point) {
        self.edges = detect(rect, self.settings.border, self.settings.sides, pointer);
        let on_edge = self.edges.any();

        match (self.state, on_edge) {
            (ResizeState::Hover, true) => {
                self.set_state(ResizeState::HoverEdge);
                system.hide_for(self.id);
                self.cursor.set_hidden(false);
            }
            (ResizeState::HoverEdge, false) => {
                self.set_state(ResizeState::Hover);
                system.release(self.id);
                self.cursor.set_hidden(true);
            }
            _ => {}
        }

        if self.cursor.change_side(self.edges) {
            trace!(
                controller = self.id,
                image = ?self.cursor.image(),
                "cursor image changed"
            );
        }
    }

    fn resized_rect(&self, current: Rect, origin: Rect, pointer: Point) -> Rect {
        let ResizeSettings {
            border, dont_move, ..
        } = self.settings;
        let min = border * MIN_SIZE_BORDERS;
        let mut rect = current;

        if self.edges.right {
            if pointer.x > rect.x + min {
                rect.width = pointer.x - rect.x;
            }
        } else if self.edges.left && pointer.x < origin.right() - min {
            if dont_move {
                rect.width = (pointer.x - rect.x).abs().max(min);
            } else {
                rect.x = pointer.x;
                rect.width = origin.x - pointer.x + origin.width;
            }
        }

        if self.edges.down {
            if pointer.y < origin.top() - min {
                if dont_move {
                    rect.height = (pointer.y - rect.y).abs().max(min);
                } else {
                    rect.y = pointer.y;
                    rect.height = origin.y - pointer.y + origin.height;
                }
            }
        } else if self.edges.up && pointer.y > rect.y + min {
            rect.height = pointer.y - rect.y;
        }

        rect
    }

    fn set_state(&mut self, state: ResizeState) {
        if self.state != state {
            debug!(controller = self.id, from = ?self.state, to = ?state, "resize state");
            self.state = state;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_resize.rs"]
mod tests;
