/// An axis-aligned rectangle in virtual-screen coordinates.
///
/// Edges follow the Win32 `RECT` layout: `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent in pixels.
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent in pixels.
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns `true` if `(x, y)` lies inside the rectangle.
    ///
    /// The left and top edges are inside, the right and bottom edges are not,
    /// so adjacent monitors never both claim a point on their shared edge.
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Information about a connected display monitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monitor {
    /// Full monitor rectangle in virtual-screen space.
    pub bounds: Rect,
    /// Usable area, excluding the taskbar and docked app bars.
    pub work_area: Rect,
    /// Whether Windows designates this monitor as the primary display.
    pub is_primary: bool,
    /// Device name reported by Windows (e.g. `\\.\DISPLAY1`).
    pub device_name: String,
}
