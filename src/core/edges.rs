//! Edge hit detection for drag-to-resize.
//!
//! Coordinates are y-up: the `down` edge sits at `rect.y`, the `up` edge at
//! `rect.y + rect.height`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// Edges a widget accepts resize drags on.
///
/// Written as a string of `l`, `r`, `u`, `d` in any order (e.g. `"rd"`).
/// Any other character is ignored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResizableSides {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ResizableSides {
    pub const NONE: ResizableSides = ResizableSides {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub const ALL: ResizableSides = ResizableSides {
        left: true,
        right: true,
        up: true,
        down: true,
    };

    pub fn parse(sides: &str) -> Self {
        let mut parsed = Self::NONE;
        for ch in sides.chars() {
            match ch {
                'l' => parsed.left = true,
                'r' => parsed.right = true,
                'u' => parsed.up = true,
                'd' => parsed.down = true,
                _ => {}
            }
        }
        parsed
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl From<&str> for ResizableSides {
    fn from(sides: &str) -> Self {
        Self::parse(sides)
    }
}

impl From<String> for ResizableSides {
    fn from(sides: String) -> Self {
        Self::parse(&sides)
    }
}

impl From<ResizableSides> for String {
    fn from(sides: ResizableSides) -> Self {
        sides.to_string()
    }
}

impl fmt::Display for ResizableSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (enabled, ch) in [
            (self.left, 'l'),
            (self.right, 'r'),
            (self.up, 'u'),
            (self.down, 'd'),
        ] {
            if enabled {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Edges currently under the pointer.
///
/// `left`/`right` are never both set, nor `up`/`down`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EdgeFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Resolves which enabled edges the pointer is on.
///
/// Each edge zone is the open interval `border` wide just inside the rect.
/// Left wins over right and down wins over up when zones overlap (narrow
/// rects or oversized borders). A non-positive or NaN border matches nothing.
pub fn detect(rect: Rect, border: f64, sides: ResizableSides, pointer: Point) -> EdgeFlags {
    let left = sides.left && pointer.x > rect.x && pointer.x < rect.x + border;
    let right = sides.right
        && !left
        && pointer.x < rect.right()
        && pointer.x > rect.right() - border;
    let down = sides.down && pointer.y > rect.y && pointer.y < rect.y + border;
    let up = sides.up && !down && pointer.y < rect.top() && pointer.y > rect.top() - border;

    EdgeFlags {
        left,
        right,
        up,
        down,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_edges.rs"]
mod tests;
