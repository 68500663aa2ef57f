/// Logical pixels per inch used when converting centimetre lengths.
pub const DEFAULT_DPI: f64 = 96.0;

/// Converts centimetres to logical pixels, then applies the window scale factor.
pub fn cm(value: f64, scale: f64) -> f64 {
    value * DEFAULT_DPI / 2.54 * scale
}

/// A pointer position in widget-space coordinates (y grows upward).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `(x, y)` is the bottom-left corner.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test, matching toolkit collision semantics.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }
}
