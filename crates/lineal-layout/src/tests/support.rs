use crate::{Element, LayoutContext, Widget};
use lineal_geometry::{Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct MockState {
    measure_calls: usize,
    cell_length_queries: usize,
    placed: Option<(Rect, bool)>,
}

/// Widget with a fixed preferred size that records how the engine drives it.
pub(crate) struct MockWidget {
    size: Size,
    state: Rc<RefCell<MockState>>,
}

impl Widget for MockWidget {
    fn preferred_size(&self, context: &LayoutContext, _bounds: Rect) -> Size {
        let mut state = self.state.borrow_mut();
        state.measure_calls += 1;
        if context.is_cell_length_query() {
            state.cell_length_queries += 1;
        }
        self.size
    }

    fn place(&mut self, bounds: Rect, visible: bool) {
        self.state.borrow_mut().placed = Some((bounds, visible));
    }
}

pub(crate) struct MockHandle {
    state: Rc<RefCell<MockState>>,
}

impl MockHandle {
    pub(crate) fn placed(&self) -> Rect {
        self.state.borrow().placed.expect("widget was never placed").0
    }

    pub(crate) fn placed_visible(&self) -> bool {
        self.state.borrow().placed.expect("widget was never placed").1
    }

    pub(crate) fn was_placed(&self) -> bool {
        self.state.borrow().placed.is_some()
    }

    pub(crate) fn measure_calls(&self) -> usize {
        self.state.borrow().measure_calls
    }

    pub(crate) fn cell_length_queries(&self) -> usize {
        self.state.borrow().cell_length_queries
    }
}

pub(crate) fn mock(width: f32, height: f32) -> (Element, MockHandle) {
    let state = Rc::new(RefCell::new(MockState::default()));
    let widget = MockWidget {
        size: Size::new(width, height),
        state: Rc::clone(&state),
    };
    (Element::widget(widget), MockHandle { state })
}

pub(crate) fn fixed(width: f32, height: f32) -> Element {
    Element::spacer().width(width).height(height)
}
