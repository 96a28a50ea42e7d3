use crate::element::{find_element_mut, Element};
use crate::markup::{NavItem, ACTIVE_CLASS};
use crate::scroll::BoundaryState;

/// Write arrow enablement for `boundary` onto both arrows.
pub fn render_arrows(root: &mut Element, arrows: (&str, &str), boundary: BoundaryState) {
    let (left, right) = arrows;
    set_disabled(root, left, boundary.at_start);
    set_disabled(root, right, boundary.at_end);
}

fn set_disabled(root: &mut Element, id: &str, disabled: bool) {
    let Some(arrow) = find_element_mut(root, id) else {
        return;
    };
    arrow.disabled = disabled;
    arrow.set_attribute("aria-disabled", if disabled { "true" } else { "false" });
}

/// Mark `items` active or inactive according to `flags` (same order).
pub fn render_active(root: &mut Element, items: &[NavItem], flags: &[bool]) {
    for (item, active) in items.iter().zip(flags) {
        let Some(element) = find_element_mut(root, &item.id) else {
            continue;
        };
        if *active {
            element.add_class(ACTIVE_CLASS);
            element.set_attribute("aria-current", "page");
        } else {
            element.remove_class(ACTIVE_CLASS);
            element.remove_attribute("aria-current");
        }
    }
}

/// Cursor feedback for a pointer drag on the region.
pub fn render_drag_cursor(root: &mut Element, nav: &str, dragging: bool) {
    let Some(nav) = find_element_mut(root, nav) else {
        return;
    };
    if dragging {
        nav.set_style("cursor", "grabbing");
        nav.set_style("user-select", "none");
    } else {
        nav.set_style("cursor", "grab");
        nav.remove_style("user-select");
    }
}

/// Move focus to `id`, clearing it everywhere else.
pub fn render_focus(root: &mut Element, id: &str) {
    fn walk(element: &mut Element, id: &str) {
        element.focused = element.id == id;
        if let crate::element::Content::Children(children) = &mut element.content {
            for child in children {
                walk(child, id);
            }
        }
    }
    walk(root, id);
}
