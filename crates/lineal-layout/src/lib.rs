//! Two-pass row/column layout with cross-line cell alignment.
//!
//! Trees of [`Element`]s are measured with [`compute_preferred_size`] and
//! committed with [`perform_layout`]. Rows and columns share one engine
//! parameterized by [`Axis`]; marking sibling lines [`Element::aligned`]
//! unifies their cell boundaries into a table.

mod alignment;
mod axis;
mod context;
mod element;
mod layout;
mod line;
mod overlay;

pub use alignment::*;
pub use axis::*;
pub use context::*;
pub use element::*;
pub use layout::*;

pub mod prelude {
    pub use crate::alignment::Alignment;
    pub use crate::context::{LayoutContext, DEFAULT_SPACING};
    pub use crate::element::{Element, Spacer, Widget};
    pub use crate::layout::{compute_preferred_size, perform_layout};
    pub use lineal_geometry::{EdgeInsets, Point, Rect, Size};
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;
