//! The axis-generic engine behind rows and columns

use crate::alignment::Alignment;
use crate::axis::Axis;
use crate::context::{CellLengths, CellScaling, LayoutContext};
use crate::element::Element;
use lineal_geometry::{EdgeInsets, Point, Rect, Size};
use log::trace;

/// A sequence of cells along one axis. `Axis::Horizontal` makes it a row,
/// `Axis::Vertical` a column; all axis-dependent arithmetic goes through
/// [`Axis`], the control flow is shared.
pub(crate) struct Line {
    pub(crate) axis: Axis,
    pub(crate) children: Vec<Element>,
    pub(crate) padding: Option<EdgeInsets>,
    pub(crate) spacing: Option<f32>,
    pub(crate) aligned: bool,
}

impl Line {
    pub(crate) fn new(axis: Axis, children: Vec<Element>) -> Self {
        Self {
            axis,
            children,
            padding: None,
            spacing: None,
            aligned: false,
        }
    }

    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "row",
            Axis::Vertical => "column",
        }
    }

    pub(crate) fn measure(
        &self,
        context: &LayoutContext,
        parent_bounds: Rect,
        self_visible: bool,
    ) -> Size {
        let bounds = self.inner_bounds(parent_bounds);
        let child_context = self.child_context(context, bounds, self_visible);
        if !child_context.is_parent_visible {
            return Size::ZERO;
        }
        let (mut cell_lengths, cell_scaling) = self.initial_cells(context, &child_context, bounds);
        unify_scaling_lengths(&mut cell_lengths, &cell_scaling);
        let mut size = Size::ZERO;
        for (i, child) in self.children.iter().enumerate() {
            let child_size = child.measure(&child_context, bounds);
            let cell_size = self.axis.size(cell_lengths[i], self.axis.breadth(child_size));
            size = self
                .axis
                .accumulate_size(size, cell_size, self.spacing_for(i, context));
        }
        if let Some(padding) = self.padding {
            size.width += padding.horizontal_sum();
            size.height += padding.vertical_sum();
        }
        size
    }

    pub(crate) fn arrange(
        &mut self,
        context: &LayoutContext,
        bounds: Rect,
        self_visible: bool,
    ) {
        trace!(
            "{pad:depth$}{name} layout with bounds {bounds:?}",
            pad = "",
            depth = context.depth,
            name = self.name(),
        );
        let bounds = self.inner_bounds(bounds);
        let child_context = self.child_context(context, bounds, self_visible);
        let (mut cell_lengths, cell_scaling) = self.initial_cells(context, &child_context, bounds);
        self.scale_cells_to_bounds(&mut cell_lengths, &cell_scaling, bounds, context);

        // The cell is the slot a child may occupy: the child always fills
        // it along the main axis, while its breadth and cross-axis offset
        // follow the child's alignment.
        let mut cell_origin = bounds.origin();
        for i in 0..self.children.len() {
            let cell_size = self
                .axis
                .size(cell_lengths[i], self.axis.breadth(bounds.size()));
            let (child_size, child_origin) =
                self.child_cell_geometry(&self.children[i], &child_context, cell_size, cell_origin);
            self.children[i].arrange(
                &child_context,
                Rect::from_origin_size(child_origin, child_size),
            );
            cell_origin = self.axis.advance_main(
                cell_origin,
                self.axis.length(child_size) + self.spacing_for(i, context),
            );
        }
    }

    fn inner_bounds(&self, bounds: Rect) -> Rect {
        match self.padding {
            Some(padding) => bounds.inset(padding),
            None => bounds,
        }
    }

    fn child_cell_geometry(
        &self,
        child: &Element,
        child_context: &LayoutContext,
        cell_size: Size,
        cell_origin: Point,
    ) -> (Size, Point) {
        let breadth = self.axis.breadth(if child.alignment == Alignment::Fill {
            cell_size
        } else {
            child.measure(
                child_context,
                Rect::from_origin_size(cell_origin, cell_size),
            )
        });
        let remaining = self.axis.breadth(cell_size) - breadth;
        let child_size = self.axis.size(self.axis.length(cell_size), breadth);
        let child_origin = self
            .axis
            .offset_cross(cell_origin, child.alignment.offset(remaining));
        (child_size, child_origin)
    }

    /// Spacing after cell `i`: zero when the cell itself is hidden or only
    /// hidden cells follow it, otherwise the child's override, this line's
    /// spacing, or the inherited default, in that order.
    fn spacing_for(&self, i: usize, context: &LayoutContext) -> f32 {
        if self.children[i + 1..].iter().all(|child| !child.visible) {
            return 0.0;
        }
        if !self.children[i].visible {
            return 0.0;
        }
        self.children[i]
            .spacing_after
            .or(self.spacing)
            .unwrap_or(context.default_spacing)
    }

    /// Per-cell main-axis preferred lengths and scale flags.
    ///
    /// An aligned line whose parent precomputed a unified cell table takes
    /// that table verbatim, so aligned siblings agree on cell boundaries no
    /// matter which of them is processed first. Everything else measures
    /// its own children, under a context marked as a cell-length query.
    fn initial_cells(
        &self,
        context: &LayoutContext,
        child_context: &LayoutContext,
        bounds: Rect,
    ) -> (CellLengths, CellScaling) {
        if self.aligned {
            if let (Some(lengths), Some(scaling)) =
                (&context.cell_lengths, &context.cell_scaling)
            {
                debug_assert!(
                    lengths.len() >= self.children.len()
                        && scaling.len() >= self.children.len(),
                    "unified cell table shorter than the consuming line"
                );
                return (lengths.clone(), scaling.clone());
            }
        }
        let query_context = child_context.for_cell_length_query();
        let mut lengths = CellLengths::new();
        let mut scaling = CellScaling::new();
        for child in &self.children {
            lengths.push(self.axis.length(child.measure(&query_context, bounds)));
            scaling.push(child.visible && child.scale);
        }
        (lengths, scaling)
    }

    /// Gives every scaling cell an equal share of the length left over once
    /// fixed cells and spacing are paid for. Never shrinks: when nothing is
    /// left over the preferred lengths stand, even if they overflow.
    fn scale_cells_to_bounds(
        &self,
        cell_lengths: &mut CellLengths,
        cell_scaling: &CellScaling,
        bounds: Rect,
        context: &LayoutContext,
    ) {
        let scale_count = cell_scaling.iter().filter(|scales| **scales).count();
        if scale_count == 0 {
            return;
        }
        let mut excess = self.axis.length(bounds.size());
        for i in 0..self.children.len() {
            if !cell_scaling[i] {
                excess -= cell_lengths[i];
            }
            excess -= self.spacing_for(i, context);
        }
        if excess <= 0.0 {
            return;
        }
        // Whole-unit split so integral bounds are conserved exactly: the
        // first `extra` scaling cells get one unit more than the rest.
        let share = excess as i32 / scale_count as i32;
        let mut extra = excess as i32 % scale_count as i32;
        for i in 0..self.children.len() {
            if cell_scaling[i] {
                cell_lengths[i] = if extra > 0 {
                    extra -= 1;
                    (share + 1) as f32
                } else {
                    share as f32
                };
            }
        }
    }

    /// Context handed to every child: one level deeper, visibility combined
    /// with this line's own, and the unified cell table for aligned
    /// children of the orthogonal kind (or none, clearing any table meant
    /// for this line itself).
    fn child_context(
        &self,
        context: &LayoutContext,
        bounds: Rect,
        self_visible: bool,
    ) -> LayoutContext {
        let (cell_lengths, cell_scaling) = self.unified_cells(context, bounds);
        LayoutContext {
            cell_lengths,
            cell_scaling,
            depth: context.depth + 1,
            is_parent_visible: context.is_parent_visible && self_visible,
            ..context.clone()
        }
    }

    /// Precomputes the shared cell table for children that are aligned
    /// lines of the orthogonal kind: per cell index, the maximum preferred
    /// breadth and the OR of the scale flags across all such children.
    /// Aligned children consuming the table then get identical cell sizes.
    fn unified_cells(
        &self,
        context: &LayoutContext,
        bounds: Rect,
    ) -> (Option<CellLengths>, Option<CellScaling>) {
        let orthogonal = self.axis.orthogonal();
        let mut lengths = CellLengths::new();
        let mut scaling = CellScaling::new();
        let mut any_aligned = false;
        for child in &self.children {
            let Some(opposite) = child.as_aligned_line(orthogonal) else {
                continue;
            };
            any_aligned = true;
            for (i, cell) in opposite.children.iter().enumerate() {
                if lengths.len() <= i {
                    lengths.push(0.0);
                    scaling.push(false);
                }
                let preferred = self.axis.breadth(cell.measure(context, bounds));
                lengths[i] = lengths[i].max(preferred);
                scaling[i] = scaling[i] || cell.scale;
            }
        }
        if any_aligned {
            (Some(lengths), Some(scaling))
        } else {
            (None, None)
        }
    }
}

/// All scaling cells end up the same length once extra space is shared, so
/// the largest preferred length among them is the preferred length of each.
fn unify_scaling_lengths(cell_lengths: &mut CellLengths, cell_scaling: &CellScaling) {
    if !cell_scaling.iter().any(|scales| *scales) {
        return;
    }
    let mut max_scaling = 0.0_f32;
    for (length, scales) in cell_lengths.iter().zip(cell_scaling) {
        if *scales {
            max_scaling = max_scaling.max(*length);
        }
    }
    for (length, scales) in cell_lengths.iter_mut().zip(cell_scaling) {
        if *scales {
            *length = max_scaling;
        }
    }
}

#[cfg(test)]
#[path = "tests/line_tests.rs"]
mod tests;
