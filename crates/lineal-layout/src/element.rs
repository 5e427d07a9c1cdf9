//! The element tree: widget leaves, lines, overlays

use crate::alignment::Alignment;
use crate::axis::Axis;
use crate::context::LayoutContext;
use crate::line::Line;
use crate::overlay::Overlay;
use lineal_geometry::{EdgeInsets, Rect, Size};

/// Capability contract for the things being laid out.
///
/// An implementation reports a preferred size and accepts a final
/// rectangle; the engine asks nothing else of it. `preferred_size` must be
/// free of observable effects, as the engine may call it several times per
/// pass.
pub trait Widget {
    /// Natural size of this widget's content.
    fn preferred_size(&self, context: &LayoutContext, bounds: Rect) -> Size;

    /// Commits the final rectangle. `visible` is false when this widget or
    /// any ancestor is hidden; backends use it to hide the native control.
    fn place(&mut self, bounds: Rect, visible: bool);
}

/// An empty widget with zero natural size.
///
/// With a size hint it is a fixed gap; with `scale` it becomes a filler
/// that absorbs the leftover space of its line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spacer;

impl Widget for Spacer {
    fn preferred_size(&self, _context: &LayoutContext, _bounds: Rect) -> Size {
        Size::ZERO
    }

    fn place(&mut self, _bounds: Rect, _visible: bool) {}
}

pub(crate) struct WidgetCell {
    widget: Box<dyn Widget>,
    width: Option<f32>,
    height: Option<f32>,
}

impl WidgetCell {
    fn preferred_size(&self, context: &LayoutContext, bounds: Rect) -> Size {
        let mut size = self.widget.preferred_size(context, bounds);
        if let Some(width) = self.width {
            size.width = width;
        }
        if let Some(height) = self.height {
            size.height = height;
        }
        size
    }
}

pub(crate) enum Kind {
    Widget(WidgetCell),
    Line(Line),
    Overlay(Overlay),
}

/// One node of a layout tree.
///
/// Every node carries the attributes its parent consults when slotting it
/// into a cell: visibility, cross-axis alignment, participation in
/// extra-space scaling, and an optional spacing override. Trees are built
/// once and never restructured; the only mutation the engine performs is
/// committing final rectangles during [`Element::arrange`].
pub struct Element {
    pub(crate) kind: Kind,
    pub(crate) visible: bool,
    pub(crate) alignment: Alignment,
    pub(crate) scale: bool,
    pub(crate) spacing_after: Option<f32>,
}

impl Element {
    fn with_kind(kind: Kind) -> Self {
        Self {
            kind,
            visible: true,
            alignment: Alignment::default(),
            scale: false,
            spacing_after: None,
        }
    }

    /// Wraps a widget as a leaf element.
    pub fn widget(widget: impl Widget + 'static) -> Self {
        Self::with_kind(Kind::Widget(WidgetCell {
            widget: Box::new(widget),
            width: None,
            height: None,
        }))
    }

    /// An empty leaf; see [`Spacer`].
    pub fn spacer() -> Self {
        Self::widget(Spacer)
    }

    /// A line that arranges `children` left to right.
    pub fn row(children: impl IntoIterator<Item = Element>) -> Self {
        Self::with_kind(Kind::Line(Line::new(
            Axis::Horizontal,
            children.into_iter().collect(),
        )))
    }

    /// A line that arranges `children` top to bottom.
    pub fn column(children: impl IntoIterator<Item = Element>) -> Self {
        Self::with_kind(Kind::Line(Line::new(
            Axis::Vertical,
            children.into_iter().collect(),
        )))
    }

    /// A container whose children all occupy the same bounds, stacked.
    pub fn overlay(children: impl IntoIterator<Item = Element>) -> Self {
        Self::with_kind(Kind::Overlay(Overlay::new(children.into_iter().collect())))
    }

    /// Shows or hides this subtree. Hidden elements measure zero, contribute
    /// no spacing, and are still arranged so widgets learn they are hidden.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Cross-axis placement within the cell the parent allots.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Lets this element take an equal share of its line's leftover
    /// main-axis space.
    pub fn scale(mut self) -> Self {
        self.scale = true;
        self
    }

    /// Overrides the spacing between this element and the next one.
    pub fn spacing_after(mut self, spacing: f32) -> Self {
        self.spacing_after = Some(spacing);
        self
    }

    /// Fixed preferred width for a widget leaf.
    ///
    /// # Panics
    /// Panics when called on a row, column, or overlay.
    pub fn width(mut self, width: f32) -> Self {
        match &mut self.kind {
            Kind::Widget(cell) => cell.width = Some(width),
            _ => panic!("width hints apply to widget leaves only"),
        }
        self
    }

    /// Fixed preferred height for a widget leaf.
    ///
    /// # Panics
    /// Panics when called on a row, column, or overlay.
    pub fn height(mut self, height: f32) -> Self {
        match &mut self.kind {
            Kind::Widget(cell) => cell.height = Some(height),
            _ => panic!("height hints apply to widget leaves only"),
        }
        self
    }

    /// Padding between a line's bounds and its cells.
    ///
    /// # Panics
    /// Panics when called on anything but a row or column.
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        match &mut self.kind {
            Kind::Line(line) => line.padding = Some(padding),
            _ => panic!("padding applies to rows and columns only"),
        }
        self
    }

    /// Spacing between this line's cells, overriding the inherited default.
    ///
    /// # Panics
    /// Panics when called on anything but a row or column.
    pub fn spacing(mut self, spacing: f32) -> Self {
        match &mut self.kind {
            Kind::Line(line) => line.spacing = Some(spacing),
            _ => panic!("spacing applies to rows and columns only"),
        }
        self
    }

    /// Unifies this line's cell sizes with sibling lines of the orthogonal
    /// kind, so that rows in a column (or columns in a row) form a table
    /// with shared cell boundaries.
    ///
    /// # Panics
    /// Panics when called on anything but a row or column.
    pub fn aligned(mut self) -> Self {
        match &mut self.kind {
            Kind::Line(line) => line.aligned = true,
            _ => panic!("aligned applies to rows and columns only"),
        }
        self
    }

    /// Whether this element takes part in layout.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Cross-axis placement within the element's cell.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Whether this element takes a share of leftover main-axis space.
    pub fn scales(&self) -> bool {
        self.scale
    }

    /// Preferred size of this subtree. Pure: safe to call any number of
    /// times, commits nothing.
    pub fn measure(&self, context: &LayoutContext, parent_bounds: Rect) -> Size {
        match &self.kind {
            Kind::Widget(cell) => {
                if !self.visible || !context.is_parent_visible {
                    return Size::ZERO;
                }
                cell.preferred_size(context, parent_bounds)
            }
            Kind::Line(line) => line.measure(context, parent_bounds, self.visible),
            Kind::Overlay(overlay) => overlay.measure(context, parent_bounds, self.visible),
        }
    }

    /// Commits final geometry to this subtree.
    ///
    /// Containers recurse into every child, including hidden ones, so each
    /// widget learns its effective visibility.
    pub fn arrange(&mut self, context: &LayoutContext, bounds: Rect) {
        match &mut self.kind {
            Kind::Widget(cell) => cell
                .widget
                .place(bounds, self.visible && context.is_parent_visible),
            Kind::Line(line) => line.arrange(context, bounds, self.visible),
            Kind::Overlay(overlay) => overlay.arrange(context, bounds, self.visible),
        }
    }

    /// This element viewed as an aligned line with the given main axis.
    pub(crate) fn as_aligned_line(&self, axis: Axis) -> Option<&Line> {
        match &self.kind {
            Kind::Line(line) if line.axis == axis && line.aligned => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/element_tests.rs"]
mod tests;
