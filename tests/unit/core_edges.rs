use super::*;

const SQUARE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn at(x: f64, y: f64) -> EdgeFlags {
    detect(SQUARE, 10.0, ResizableSides::ALL, Point::new(x, y))
}

#[test]
fn left_edge_zone_is_detected() {
    assert_eq!(
        at(5.0, 50.0),
        EdgeFlags {
            left: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn right_edge_zone_is_detected() {
    assert_eq!(
        at(95.0, 50.0),
        EdgeFlags {
            right: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn down_edge_is_at_rect_origin() {
    assert_eq!(
        at(50.0, 5.0),
        EdgeFlags {
            down: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn up_edge_is_at_rect_top() {
    assert_eq!(
        at(50.0, 95.0),
        EdgeFlags {
            up: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn corner_reports_both_axes() {
    assert_eq!(
        at(5.0, 5.0),
        EdgeFlags {
            left: true,
            down: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn interior_reports_no_edge() {
    let flags = at(50.0, 50.0);
    assert_eq!(flags, EdgeFlags::NONE);
    assert!(!flags.any());
}

#[test]
fn zone_boundaries_are_exclusive() {
    assert_eq!(at(0.0, 50.0), EdgeFlags::NONE);
    assert_eq!(at(10.0, 50.0), EdgeFlags::NONE);
    assert_eq!(at(90.0, 50.0), EdgeFlags::NONE);
    assert_eq!(at(100.0, 50.0), EdgeFlags::NONE);
    assert_eq!(at(50.0, 0.0), EdgeFlags::NONE);
    assert_eq!(at(50.0, 100.0), EdgeFlags::NONE);
}

#[test]
fn disabled_sides_are_never_reported() {
    let sides = ResizableSides::parse("r");
    let flags = detect(SQUARE, 10.0, sides, Point::new(5.0, 5.0));
    assert_eq!(flags, EdgeFlags::NONE);
    let flags = detect(SQUARE, 10.0, sides, Point::new(95.0, 5.0));
    assert_eq!(
        flags,
        EdgeFlags {
            right: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn left_beats_right_and_down_beats_up_when_zones_overlap() {
    let narrow = Rect::new(0.0, 0.0, 10.0, 10.0);
    let flags = detect(narrow, 8.0, ResizableSides::ALL, Point::new(5.0, 5.0));
    assert_eq!(
        flags,
        EdgeFlags {
            left: true,
            down: true,
            ..EdgeFlags::NONE
        }
    );
}

#[test]
fn opposite_edges_are_mutually_exclusive_everywhere() {
    let rects = [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(-20.0, 40.0, 15.0, 7.5),
        Rect::new(3.0, 3.0, 1.0, 200.0),
    ];
    for rect in rects {
        for border in [0.5, 4.0, 10.0, 60.0, 500.0] {
            for ix in -5..=25 {
                for iy in -5..=25 {
                    let pointer = Point::new(
                        rect.x + rect.width * ix as f64 / 20.0,
                        rect.y + rect.height * iy as f64 / 20.0,
                    );
                    let flags = detect(rect, border, ResizableSides::ALL, pointer);
                    assert!(!(flags.left && flags.right), "{rect:?} {border} {pointer:?}");
                    assert!(!(flags.up && flags.down), "{rect:?} {border} {pointer:?}");
                }
            }
        }
    }
}

#[test]
fn non_positive_border_matches_nothing() {
    for border in [0.0, -10.0, f64::NAN] {
        for (x, y) in [(0.5, 50.0), (99.5, 50.0), (50.0, 0.5), (50.0, 99.5)] {
            let flags = detect(SQUARE, border, ResizableSides::ALL, Point::new(x, y));
            assert_eq!(flags, EdgeFlags::NONE, "border {border} at ({x}, {y})");
        }
    }
}

#[test]
fn sides_parse_ignores_unknown_characters() {
    let sides = ResizableSides::parse("rxd?Lz");
    assert_eq!(
        sides,
        ResizableSides {
            right: true,
            down: true,
            ..ResizableSides::NONE
        }
    );
    assert!(ResizableSides::parse("").is_empty());
    assert!(ResizableSides::parse("xyz").is_empty());
}

#[test]
fn sides_order_does_not_matter() {
    assert_eq!(ResizableSides::parse("rdlu"), ResizableSides::ALL);
    assert_eq!(ResizableSides::parse("lrud"), ResizableSides::ALL);
    assert_eq!(ResizableSides::ALL.to_string(), "lrud");
}

#[test]
fn sides_serialize_as_letter_string() {
    let sides = ResizableSides::parse("dr");
    let serialized = ron::to_string(&sides).expect("serialize");
    assert_eq!(serialized, "\"rd\"");
    let parsed: ResizableSides = ron::from_str("\"ul\"").expect("deserialize");
    assert_eq!(
        parsed,
        ResizableSides {
            left: true,
            up: true,
            ..ResizableSides::NONE
        }
    );
}
