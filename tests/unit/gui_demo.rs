use super::*;
use crate::core::{Point, SystemCursor};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn rect_of(scene: &DemoScene, id: WidgetId) -> Rect {
    scene.tree.get(id).map(|w| w.frame.rect).unwrap()
}

fn find_text(scene: &DemoScene, text: &str) -> WidgetId {
    scene
        .tree
        .paint_order()
        .into_iter()
        .find(|&id| scene.tree.get(id).is_some_and(|w| w.text == text))
        .unwrap()
}

#[test]
fn default_scene_splits_sidebar_and_content() {
    let scene = DemoScene::build(&AppConfig::default(), 1.0, BOUNDS);
    let sidebar = rect_of(&scene, scene.sidebar);
    let content = rect_of(&scene, scene.content);

    assert!(close(sidebar.width, cm(3.0, 1.0)));
    assert!(close(sidebar.height, 600.0));
    assert!(close(content.x, sidebar.right()));
    assert!(close(content.width, 800.0 - sidebar.width));
    assert!(close(content.y, 0.0));
}

#[test]
fn sidebar_rows_start_at_the_top() {
    let scene = DemoScene::build(&AppConfig::default(), 1.0, BOUNDS);
    let label = rect_of(&scene, find_text(&scene, "SideLabel"));
    let first_filler = rect_of(&scene, find_text(&scene, "X 1"));

    assert!(close(label.top(), 600.0));
    assert!(close(label.width, cm(3.0, 1.0)));
    assert!(close(first_filler.top(), label.y));
}

#[test]
fn scene_is_scaled_by_the_window_factor() {
    let scene = DemoScene::build(&AppConfig::default(), 2.0, BOUNDS);
    let button = rect_of(&scene, find_text(&scene, "RButton"));

    assert!(close(button.width, cm(4.0, 2.0)));
    assert!(close(button.top(), 600.0));
}

#[test]
fn floating_button_stays_at_origin() {
    let scene = DemoScene::build(&AppConfig::default(), 1.0, BOUNDS);
    let button = rect_of(&scene, find_text(&scene, "4 Sides"));

    assert_eq!((button.x, button.y), (0.0, 0.0));
    assert!(close(button.width, cm(2.0, 1.0)));
}

#[test]
fn content_follows_sidebar_resize() {
    let mut scene = DemoScene::build(&AppConfig::default(), 1.0, BOUNDS);
    let mut system = SystemCursor::default();
    let edge_x = rect_of(&scene, scene.sidebar).right() - 2.0;

    // The floating button covers the bottom-left corner; stay well above it.
    scene.tree.pointer_move(&mut system, Point::new(edge_x, 300.0));
    let owner = scene.tree.drag_start(&mut system);
    assert_eq!(owner, Some(scene.sidebar));

    scene.tree.drag_move(scene.sidebar, Point::new(250.0, 300.0));
    assert!(scene.tree.take_geometry_changes());
    scene.relayout(BOUNDS);

    let content = rect_of(&scene, scene.content);
    assert!(close(content.x, 250.0));
    assert!(close(content.width, 550.0));
    let label = rect_of(&scene, find_text(&scene, "SideLabel"));
    assert!(close(label.width, 250.0));
}

#[test]
fn resizable_widgets_get_configured_borders() {
    let mut config = AppConfig::default();
    config.demo.stack_button.border_cm = Some(1.0);
    let scene = DemoScene::build(&config, 1.0, BOUNDS);

    let border = |id: WidgetId| {
        scene
            .tree
            .get(id)
            .and_then(|w| w.resize.as_ref())
            .map(|r| r.settings().border)
    };
    assert_eq!(border(find_text(&scene, "RButton")), Some(cm(1.0, 1.0)));
    assert_eq!(border(find_text(&scene, "SideLabel")), Some(cm(0.5, 1.0)));
    assert_eq!(border(scene.content), None);
}
