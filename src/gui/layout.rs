//! Minimal float/stack layout for the demo scene (y-up coordinates).

use crate::core::{Point, Rect};

use super::widgets::{SizeHint, WidgetId, WidgetKind, WidgetTree};

/// Overflow below this is rounding noise, not a reason to wrap.
const WRAP_EPSILON: f64 = 1e-6;

/// Applies `hint` against the parent size, keeping unhinted dimensions.
pub(super) fn hinted_size(rect: Rect, hint: SizeHint, parent: Rect) -> (f64, f64) {
    let width = hint.width.map_or(rect.width, |w| parent.width * w);
    let height = hint.height.map_or(rect.height, |h| parent.height * h);
    (width, height)
}

/// Bottom-left origins for children of a left-to-right, top-to-bottom stack.
///
/// A child that would overflow the right edge starts a new row below the
/// tallest child of the current row. A row's first child is never wrapped.
pub(super) fn stack_origins(parent: Rect, sizes: &[(f64, f64)]) -> Vec<Point> {
    let mut origins = Vec::with_capacity(sizes.len());
    let mut x = parent.x;
    let mut row_top = parent.top();
    let mut row_height: f64 = 0.0;

    for &(width, height) in sizes {
        if x > parent.x && x + width > parent.right() + WRAP_EPSILON {
            row_top -= row_height;
            x = parent.x;
            row_height = 0.0;
        }
        origins.push(Point::new(x, row_top - height));
        x += width;
        row_height = row_height.max(height);
    }
    origins
}

/// Lays out the whole tree inside `bounds`.
pub(super) fn layout(tree: &mut WidgetTree, bounds: Rect) {
    if let Some(root) = tree.get_mut(WidgetTree::ROOT) {
        root.frame.rect = bounds;
    }
    layout_children(tree, WidgetTree::ROOT);
}

fn layout_children(tree: &mut WidgetTree, parent: WidgetId) {
    let Some(widget) = tree.get(parent) else {
        return;
    };
    let parent_rect = widget.frame.rect;
    let kind = widget.kind;
    let children = widget.children.clone();

    let sizes: Vec<(f64, f64)> = children
        .iter()
        .filter_map(|&id| tree.get(id))
        .map(|child| hinted_size(child.frame.rect, child.frame.size_hint, parent_rect))
        .collect();

    let origins = match kind {
        WidgetKind::Stack => Some(stack_origins(parent_rect, &sizes)),
        WidgetKind::Float | WidgetKind::Label | WidgetKind::Button => None,
    };

    for (index, (&child, &(width, height))) in children.iter().zip(&sizes).enumerate() {
        let Some(widget) = tree.get_mut(child) else {
            continue;
        };
        let rect = &mut widget.frame.rect;
        rect.width = width;
        rect.height = height;
        if let Some(origin) = origins.as_ref().and_then(|o| o.get(index)) {
            rect.x = origin.x;
            rect.y = origin.y;
        }
    }

    for child in children {
        layout_children(tree, child);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_layout.rs"]
mod tests;
