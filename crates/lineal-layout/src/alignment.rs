//! Cross-axis alignment of a child within its cell

/// How a child is placed across the axis of the line that contains it.
///
/// A row aligns its children vertically; a column aligns them horizontally.
/// In an overlay the same variants apply to both axes independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Place the child at the leading edge of the cell.
    #[default]
    Leading,
    /// Center the child within the cell.
    Center,
    /// Place the child at the trailing edge of the cell.
    Trailing,
    /// Stretch the child to fill the cell.
    Fill,
}

impl Alignment {
    /// Offset from the leading edge given the unused breadth of the cell.
    ///
    /// `remaining` may be negative when the child is larger than its cell;
    /// the offset is not clamped so an oversized trailing child overhangs
    /// the leading edge rather than the trailing one.
    pub(crate) fn offset(self, remaining: f32) -> f32 {
        match self {
            Alignment::Leading | Alignment::Fill => 0.0,
            Alignment::Center => remaining / 2.0,
            Alignment::Trailing => remaining,
        }
    }
}
