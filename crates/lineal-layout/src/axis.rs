//! Axis policy: the handful of projections that distinguish a row from a column

use lineal_geometry::{Point, Size};

/// The main axis of a line.
///
/// Every difference between row and column layout is captured by the
/// operations on this enum; the line engine itself is axis-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal main axis (a row).
    /// Children advance left to right; alignment acts top to bottom.
    Horizontal,

    /// Vertical main axis (a column).
    /// Children advance top to bottom; alignment acts left to right.
    Vertical,
}

impl Axis {
    /// Returns the orthogonal axis.
    #[inline]
    pub fn orthogonal(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Main-axis component of a size.
    #[inline]
    pub fn length(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Cross-axis component of a size.
    #[inline]
    pub fn breadth(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Builds a size from main-axis length and cross-axis breadth.
    #[inline]
    pub fn size(self, length: f32, breadth: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(length, breadth),
            Axis::Vertical => Size::new(breadth, length),
        }
    }

    /// Moves a position along the main axis.
    #[inline]
    pub fn advance_main(self, position: Point, delta: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(position.x + delta, position.y),
            Axis::Vertical => Point::new(position.x, position.y + delta),
        }
    }

    /// Moves a position along the cross axis.
    #[inline]
    pub fn offset_cross(self, position: Point, delta: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(position.x, position.y + delta),
            Axis::Vertical => Point::new(position.x + delta, position.y),
        }
    }

    /// Folds one cell into a running total: lengths and spacing add up along
    /// the main axis, breadths take the maximum across it.
    pub fn accumulate_size(self, total: Size, cell: Size, spacing: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(
                total.width + cell.width + spacing,
                total.height.max(cell.height),
            ),
            Axis::Vertical => Size::new(
                total.width.max(cell.width),
                total.height + cell.height + spacing,
            ),
        }
    }
}
