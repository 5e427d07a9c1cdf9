//! Instrumented widgets for asserting on engine behavior
//!
//! A [`Probe`] is a widget with a fixed preferred size that records every
//! interaction the engine has with it. The tree takes ownership of the
//! widget, so observations flow through a shared [`ProbeHandle`]:
//!
//! ```
//! use lineal_layout::prelude::*;
//! use lineal_testing::probed;
//!
//! let (leaf, handle) = probed(40.0, 20.0);
//! let mut root = Element::row([leaf]);
//! perform_layout(&mut root, Rect::from_size(Size::new(100.0, 100.0)));
//! assert_eq!(handle.placed().width, 40.0);
//! ```

use lineal_geometry::{Rect, Size};
use lineal_layout::{Element, LayoutContext, Widget};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a [`Probe`] observed across the two passes.
#[derive(Clone, Debug, Default)]
pub struct ProbeRecord {
    /// How many times the engine asked for the preferred size.
    pub measure_calls: usize,
    /// How many of those calls happened during a cell-length query.
    pub cell_length_queries: usize,
    /// The committed rectangle, if the arrangement pass ran.
    pub placed: Option<Rect>,
    /// The effective visibility passed along with the rectangle.
    pub placed_visible: Option<bool>,
}

/// Widget with a fixed preferred size that records engine interactions.
pub struct Probe {
    size: Size,
    record: Rc<RefCell<ProbeRecord>>,
}

impl Probe {
    pub fn new(width: f32, height: f32) -> (Self, ProbeHandle) {
        let record = Rc::new(RefCell::new(ProbeRecord::default()));
        let probe = Self {
            size: Size::new(width, height),
            record: Rc::clone(&record),
        };
        (probe, ProbeHandle { record })
    }
}

impl Widget for Probe {
    fn preferred_size(&self, context: &LayoutContext, _bounds: Rect) -> Size {
        let mut record = self.record.borrow_mut();
        record.measure_calls += 1;
        if context.is_cell_length_query() {
            record.cell_length_queries += 1;
        }
        self.size
    }

    fn place(&mut self, bounds: Rect, visible: bool) {
        let mut record = self.record.borrow_mut();
        record.placed = Some(bounds);
        record.placed_visible = Some(visible);
    }
}

/// Shared view of a probe's record, valid after the tree takes ownership
/// of the widget itself.
#[derive(Clone)]
pub struct ProbeHandle {
    record: Rc<RefCell<ProbeRecord>>,
}

impl ProbeHandle {
    /// Snapshot of everything recorded so far.
    pub fn record(&self) -> ProbeRecord {
        self.record.borrow().clone()
    }

    /// The committed rectangle. Panics if the probe was never placed.
    pub fn placed(&self) -> Rect {
        self.record.borrow().placed.expect("probe was never placed")
    }

    /// The committed visibility. Panics if the probe was never placed.
    pub fn placed_visible(&self) -> bool {
        self.record
            .borrow()
            .placed_visible
            .expect("probe was never placed")
    }

    pub fn measure_calls(&self) -> usize {
        self.record.borrow().measure_calls
    }
}

/// Leaf element wrapping a fresh probe; returns the element together with
/// the handle for assertions.
pub fn probed(width: f32, height: f32) -> (Element, ProbeHandle) {
    let (probe, handle) = Probe::new(width, height);
    (Element::widget(probe), handle)
}

/// Leaf element with a fixed preferred size and no instrumentation.
pub fn fixed(width: f32, height: f32) -> Element {
    Element::spacer().width(width).height(height)
}
