use crate::support::{fixed, mock};
use crate::{compute_preferred_size, perform_layout, Alignment, Element};
use lineal_geometry::{EdgeInsets, Rect, Size};

fn bounds(width: f32, height: f32) -> Rect {
    Rect::from_size(Size::new(width, height))
}

#[test]
fn size_hints_replace_natural_components() {
    let (leaf, _) = mock(40.0, 20.0);
    let root = leaf.width(100.0);
    assert_eq!(
        compute_preferred_size(&root, bounds(200.0, 200.0)),
        Size::new(100.0, 20.0)
    );

    let (leaf, _) = mock(40.0, 20.0);
    let root = leaf.width(100.0).height(5.0);
    assert_eq!(
        compute_preferred_size(&root, bounds(200.0, 200.0)),
        Size::new(100.0, 5.0)
    );
}

#[test]
fn hidden_leaves_measure_zero_despite_hints() {
    let root = fixed(100.0, 50.0).visible(false);
    assert_eq!(
        compute_preferred_size(&root, bounds(200.0, 200.0)),
        Size::ZERO
    );
}

#[test]
fn spacer_measures_zero_until_hinted() {
    assert_eq!(
        compute_preferred_size(&Element::spacer(), bounds(200.0, 200.0)),
        Size::ZERO
    );
    assert_eq!(
        compute_preferred_size(&fixed(30.0, 40.0), bounds(200.0, 200.0)),
        Size::new(30.0, 40.0)
    );
}

#[test]
fn builder_flags_are_readable_back() {
    let element = Element::spacer()
        .visible(false)
        .align(Alignment::Trailing)
        .scale();
    assert!(!element.is_visible());
    assert_eq!(element.alignment(), Alignment::Trailing);
    assert!(element.scales());

    let defaulted = Element::row([]);
    assert!(defaulted.is_visible());
    assert_eq!(defaulted.alignment(), Alignment::Leading);
    assert!(!defaulted.scales());
}

#[test]
fn scaled_spacer_absorbs_excess() {
    let (tail, handle) = mock(10.0, 10.0);
    let mut root = Element::row([
        fixed(30.0, 10.0),
        Element::spacer().scale(),
        tail,
    ])
    .spacing(0.0);

    perform_layout(&mut root, bounds(100.0, 100.0));
    assert_eq!(handle.placed().x, 90.0);
}

#[test]
#[should_panic(expected = "padding applies to rows and columns only")]
fn padding_on_a_leaf_panics() {
    let _ = Element::spacer().padding(EdgeInsets::uniform(5.0));
}

#[test]
#[should_panic(expected = "width hints apply to widget leaves only")]
fn width_hint_on_a_row_panics() {
    let _ = Element::row([]).width(10.0);
}

#[test]
#[should_panic(expected = "aligned applies to rows and columns only")]
fn aligned_on_an_overlay_panics() {
    let _ = Element::overlay([]).aligned();
}
