//! Per-recursion-level layout context

use smallvec::SmallVec;

/// Inter-cell spacing used when neither a child nor its line specifies one.
pub const DEFAULT_SPACING: f32 = 10.0;

pub(crate) type CellLengths = SmallVec<[f32; 8]>;
pub(crate) type CellScaling = SmallVec<[bool; 8]>;

/// Inherited state for one level of a layout pass.
///
/// A container never mutates the context it receives; it derives a fresh
/// value for its children and discards it when the call returns, so sibling
/// subtrees cannot observe each other's derivations.
#[derive(Clone, Debug)]
pub struct LayoutContext {
    /// Main-axis cell lengths a parent precomputed for an aligned line.
    pub(crate) cell_lengths: Option<CellLengths>,
    /// Scaling flags matching `cell_lengths` index-wise.
    pub(crate) cell_scaling: Option<CellScaling>,
    pub(crate) depth: usize,
    pub(crate) default_spacing: f32,
    pub(crate) is_parent_visible: bool,
    pub(crate) is_cell_length_query: bool,
}

impl LayoutContext {
    /// Context seeding the root of a layout pass.
    pub fn root(default_spacing: f32) -> Self {
        Self {
            cell_lengths: None,
            cell_scaling: None,
            depth: 0,
            default_spacing,
            is_parent_visible: true,
            is_cell_length_query: false,
        }
    }

    /// Nesting depth of the current container, starting at 0 for the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Inter-cell spacing inherited from the root of the pass.
    pub fn default_spacing(&self) -> f32 {
        self.default_spacing
    }

    /// False when any ancestor is invisible; everything below measures zero.
    pub fn is_parent_visible(&self) -> bool {
        self.is_parent_visible
    }

    /// True while a line sweeps its children for their preferred main-axis
    /// lengths. Widgets whose width and height trade off against each other
    /// (wrapping text) should report their unconstrained size here.
    pub fn is_cell_length_query(&self) -> bool {
        self.is_cell_length_query
    }

    /// Cell lengths imposed by the parent, if it precomputed any.
    pub fn cell_lengths(&self) -> Option<&[f32]> {
        self.cell_lengths.as_deref()
    }

    /// Cell scaling flags imposed by the parent, if it precomputed any.
    pub fn cell_scaling(&self) -> Option<&[bool]> {
        self.cell_scaling.as_deref()
    }

    /// Copy of this context flagged as a cell-length query.
    pub(crate) fn for_cell_length_query(&self) -> Self {
        Self {
            is_cell_length_query: true,
            ..self.clone()
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::root(DEFAULT_SPACING)
    }
}
