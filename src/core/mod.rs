mod cursor_indicator;
mod edges;
mod geometry;
mod resize;
mod system_cursor;

pub use cursor_indicator::{CursorImage, CursorIndicator};
pub use edges::ResizableSides;
pub use geometry::{Point, Rect, cm};
pub use resize::{EventResult, ResizeController, ResizeHost, ResizeSettings};
#[cfg(test)]
pub use resize::ResizeState;
pub use system_cursor::{ControllerId, SystemCursor};
