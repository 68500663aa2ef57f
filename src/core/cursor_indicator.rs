use super::edges::EdgeFlags;
use super::geometry::Point;

/// Image shown by the cursor indicator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CursorImage {
    #[default]
    Transparent,
    /// Left/right edge.
    Horizontal,
    /// Up/down edge.
    Vertical,
    /// Top-left or bottom-right corner (left+up, right+down).
    DiagonalNwse,
    /// Bottom-left or top-right corner (left+down, right+up).
    DiagonalNesw,
}

impl CursorImage {
    pub fn for_edges(edges: EdgeFlags) -> Self {
        let EdgeFlags {
            left,
            right,
            up,
            down,
        } = edges;
        if (left && up) || (right && down) {
            CursorImage::DiagonalNwse
        } else if (left && down) || (right && up) {
            CursorImage::DiagonalNesw
        } else if left || right {
            CursorImage::Horizontal
        } else if up || down {
            CursorImage::Vertical
        } else {
            CursorImage::Transparent
        }
    }
}

/// Overlay that replaces the system pointer while a resize edge is hovered.
///
/// Follows the pointer centered on it while visible. Image changes are only
/// accepted while visible and only when the edge set actually changed.
#[derive(Debug)]
pub struct CursorIndicator {
    size: f64,
    hidden: bool,
    image: CursorImage,
    /// Edge set the current image was chosen for.
    applied_edges: Option<EdgeFlags>,
    last_pointer: Point,
    origin: Point,
}

impl CursorIndicator {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            hidden: true,
            image: CursorImage::Transparent,
            applied_edges: None,
            last_pointer: Point::default(),
            origin: Point::default(),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn image(&self) -> CursorImage {
        self.image
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Bottom-left corner of the indicator, or `None` while hidden.
    pub fn origin(&self) -> Option<Point> {
        (!self.hidden).then_some(self.origin)
    }

    pub fn follow_pointer(&mut self, pointer: Point) {
        self.last_pointer = pointer;
        if !self.hidden {
            self.origin = Point::new(pointer.x - self.size / 2.0, pointer.y - self.size / 2.0);
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.follow_pointer(self.last_pointer);
    }

    /// Picks the image for `edges`. Returns `true` if the edge set was applied.
    pub fn change_side(&mut self, edges: EdgeFlags) -> bool {
        if self.hidden || self.applied_edges == Some(edges) {
            return false;
        }
        self.image = CursorImage::for_edges(edges);
        self.applied_edges = Some(edges);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_cursor_indicator.rs"]
mod tests;
