use super::*;
use crate::gui::widgets::Widget;

#[test]
fn hinted_size_scales_only_hinted_axes() {
    let parent = Rect::new(0.0, 0.0, 200.0, 100.0);
    let rect = Rect::new(0.0, 0.0, 30.0, 40.0);

    let hint = SizeHint {
        width: Some(0.5),
        height: None,
    };
    assert_eq!(hinted_size(rect, hint, parent), (100.0, 40.0));
    assert_eq!(hinted_size(rect, SizeHint::default(), parent), (30.0, 40.0));
}

#[test]
fn stack_places_children_from_top_left() {
    let parent = Rect::new(10.0, 0.0, 100.0, 80.0);
    let origins = stack_origins(parent, &[(40.0, 20.0), (40.0, 30.0)]);

    assert_eq!(origins, vec![Point::new(10.0, 60.0), Point::new(50.0, 50.0)]);
}

#[test]
fn stack_wraps_below_tallest_child_of_row() {
    let parent = Rect::new(0.0, 0.0, 100.0, 100.0);
    let origins = stack_origins(parent, &[(60.0, 10.0), (30.0, 25.0), (50.0, 5.0)]);

    assert_eq!(origins[2], Point::new(0.0, 70.0));
}

#[test]
fn oversized_first_child_stays_on_its_row() {
    let parent = Rect::new(0.0, 0.0, 100.0, 100.0);
    let origins = stack_origins(parent, &[(150.0, 10.0), (10.0, 10.0)]);

    assert_eq!(origins[0], Point::new(0.0, 90.0));
    assert_eq!(origins[1], Point::new(0.0, 80.0));
}

#[test]
fn layout_applies_hints_and_keeps_float_positions() {
    let mut tree = WidgetTree::new(Widget::new(WidgetKind::Float));
    let stack = tree.add(
        WidgetTree::ROOT,
        Widget::new(WidgetKind::Stack).with_size_hint(Some(1.0), Some(1.0)),
    );
    let row = tree.add(
        stack,
        Widget::new(WidgetKind::Label)
            .with_rect(Rect::new(0.0, 0.0, 0.0, 20.0))
            .with_size_hint(Some(1.0), None),
    );
    let floating = tree.add(
        WidgetTree::ROOT,
        Widget::new(WidgetKind::Button).with_rect(Rect::new(5.0, 6.0, 30.0, 30.0)),
    );

    layout(&mut tree, Rect::new(0.0, 0.0, 300.0, 200.0));

    assert_eq!(tree.get(stack).unwrap().frame.rect, Rect::new(0.0, 0.0, 300.0, 200.0));
    assert_eq!(tree.get(row).unwrap().frame.rect, Rect::new(0.0, 180.0, 300.0, 20.0));
    assert_eq!(tree.get(floating).unwrap().frame.rect, Rect::new(5.0, 6.0, 30.0, 30.0));
}
