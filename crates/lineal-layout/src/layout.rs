//! Top-level entry points for the two passes

use crate::context::{LayoutContext, DEFAULT_SPACING};
use crate::element::Element;
use lineal_geometry::{Rect, Size};

/// Preferred size of the whole tree, measured within `available_bounds`.
///
/// Pure; hosts call this to size windows and scroll extents before
/// committing anything.
pub fn compute_preferred_size(root: &Element, available_bounds: Rect) -> Size {
    root.measure(&LayoutContext::root(DEFAULT_SPACING), available_bounds)
}

/// Commits final geometry for the whole tree into `final_bounds`.
///
/// Walks every element, visible or not, handing each widget its rectangle
/// and effective visibility.
pub fn perform_layout(root: &mut Element, final_bounds: Rect) {
    root.arrange(&LayoutContext::root(DEFAULT_SPACING), final_bounds);
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
