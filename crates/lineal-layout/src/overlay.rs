//! Overlay container: children stacked within the same bounds

use crate::alignment::Alignment;
use crate::context::LayoutContext;
use crate::element::Element;
use lineal_geometry::{Rect, Size};
use log::trace;

/// Stacks its children on top of each other instead of in sequence.
///
/// Each child is aligned within the overlay's bounds per axis using its
/// own alignment; `Fill` spans both axes. Useful for badges over content
/// and for swapping panels in place.
pub(crate) struct Overlay {
    pub(crate) children: Vec<Element>,
}

impl Overlay {
    pub(crate) fn new(children: Vec<Element>) -> Self {
        Self { children }
    }

    pub(crate) fn measure(
        &self,
        context: &LayoutContext,
        parent_bounds: Rect,
        self_visible: bool,
    ) -> Size {
        let child_context = Self::child_context(context, self_visible);
        if !child_context.is_parent_visible {
            return Size::ZERO;
        }
        let mut size = Size::ZERO;
        for child in &self.children {
            let child_size = child.measure(&child_context, parent_bounds);
            size.width = size.width.max(child_size.width);
            size.height = size.height.max(child_size.height);
        }
        size
    }

    pub(crate) fn arrange(&mut self, context: &LayoutContext, bounds: Rect, self_visible: bool) {
        trace!(
            "{pad:depth$}overlay layout with bounds {bounds:?}",
            pad = "",
            depth = context.depth,
        );
        let child_context = Self::child_context(context, self_visible);
        for child in &mut self.children {
            let child_bounds = if child.alignment == Alignment::Fill {
                bounds
            } else {
                let preferred = child.measure(&child_context, bounds);
                Rect::new(
                    bounds.x + child.alignment.offset(bounds.width - preferred.width),
                    bounds.y + child.alignment.offset(bounds.height - preferred.height),
                    preferred.width,
                    preferred.height,
                )
            };
            child.arrange(&child_context, child_bounds);
        }
    }

    /// Cell tables never cross an overlay boundary: a line inside an
    /// overlay starts from a clean context.
    fn child_context(context: &LayoutContext, self_visible: bool) -> LayoutContext {
        LayoutContext {
            cell_lengths: None,
            cell_scaling: None,
            depth: context.depth + 1,
            is_parent_visible: context.is_parent_visible && self_visible,
            ..context.clone()
        }
    }
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;
