use lineal_geometry::{EdgeInsets, Rect, Size};
use lineal_layout::{
    compute_preferred_size, perform_layout, Alignment, Element, LayoutContext, Widget,
};
use log::info;

/// Fixed-metric text stand-in; a real backend would consult font metrics.
struct Label {
    text: &'static str,
}

impl Label {
    fn new(text: &'static str) -> Element {
        Element::widget(Self { text })
    }
}

impl Widget for Label {
    fn preferred_size(&self, _context: &LayoutContext, _bounds: Rect) -> Size {
        Size::new(self.text.len() as f32 * 7.0, 18.0)
    }

    fn place(&mut self, bounds: Rect, visible: bool) {
        info!(
            "label {:?} placed at {bounds:?} (visible: {visible})",
            self.text
        );
    }
}

/// Single-line input stand-in.
struct Field {
    name: &'static str,
}

impl Field {
    fn new(name: &'static str) -> Element {
        Element::widget(Self { name })
    }
}

impl Widget for Field {
    fn preferred_size(&self, _context: &LayoutContext, _bounds: Rect) -> Size {
        Size::new(120.0, 24.0)
    }

    fn place(&mut self, bounds: Rect, visible: bool) {
        info!(
            "field {:?} placed at {bounds:?} (visible: {visible})",
            self.name
        );
    }
}

/// One form line: label column and field column stay aligned across rows
/// because every row shares the same cell table.
fn form_row(label: &'static str, field: &'static str) -> Element {
    Element::row([
        Label::new(label).align(Alignment::Center),
        Field::new(field).align(Alignment::Fill).scale(),
    ])
    .aligned()
    .align(Alignment::Fill)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Lineal Form Demo ===");
    println!("A label/field form laid out into a 480x320 window:");
    println!("  - Label cells align across rows");
    println!("  - Fields share the leftover width");
    println!("  - The button row is pushed to the bottom by a scaled spacer");
    println!();
    println!("Run with RUST_LOG=trace to watch the passes walk the tree.");
    println!();

    let mut form = Element::column([
        form_row("Name", "name"),
        form_row("Email address", "email"),
        form_row("Organization", "org"),
        Element::spacer().scale(),
        Element::row([
            Element::spacer().scale(),
            Label::new("Cancel"),
            Label::new("OK"),
        ])
        .align(Alignment::Fill),
    ])
    .padding(EdgeInsets::symmetric(12.0, 10.0));

    let window = Rect::from_size(Size::new(480.0, 320.0));
    let preferred = compute_preferred_size(&form, window);
    info!("form prefers {preferred:?} within {window:?}");

    perform_layout(&mut form, window);
}
