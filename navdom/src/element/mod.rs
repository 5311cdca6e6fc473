mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    for child in root.child_elements() {
        if child.id == id {
            return Some(root);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }

    None
}

/// The propagation path for an event targeted at `id`: the target first,
/// then each ancestor up to and including `root`.
///
/// Returns `None` if `id` is not in the tree.
pub fn ancestor_path(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if path_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_recursive(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    if element.id == id {
        path.push(element.id.clone());
        return true;
    }

    for child in element.child_elements() {
        if path_recursive(child, id, path) {
            path.push(element.id.clone());
            return true;
        }
    }

    false
}

/// Whether `id` is `ancestor` itself or one of its descendants
/// (the semantics of `Node.contains`).
pub fn contains(ancestor: &Element, id: &str) -> bool {
    find_element(ancestor, id).is_some()
}

/// Whether the element is rendered: it exists and neither it nor any of its
/// ancestors has `display: none`.
pub fn is_rendered(root: &Element, id: &str) -> bool {
    fn walk(element: &Element, id: &str) -> Option<bool> {
        if element.id == id {
            return Some(!element.is_hidden());
        }
        for child in element.child_elements() {
            if let Some(visible) = walk(child, id) {
                return Some(visible && !element.is_hidden());
            }
        }
        None
    }

    walk(root, id).unwrap_or(false)
}

/// IDs of all descendants of `scope` matching `selector`, in document order.
/// `scope` itself is never included (the semantics of `querySelectorAll`).
pub fn query_all(scope: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    for child in scope.child_elements() {
        query_recursive(child, selector, &mut result);
    }
    result
}

fn query_recursive(element: &Element, selector: &Selector, result: &mut Vec<String>) {
    if selector.matches(element) {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        query_recursive(child, selector, result);
    }
}

/// ID of the first descendant of `scope` matching `selector`.
pub fn query_first(scope: &Element, selector: &Selector) -> Option<String> {
    fn first<'a>(element: &'a Element, selector: &Selector) -> Option<&'a Element> {
        if selector.matches(element) {
            return Some(element);
        }
        element
            .child_elements()
            .iter()
            .find_map(|child| first(child, selector))
    }

    scope
        .child_elements()
        .iter()
        .find_map(|child| first(child, selector))
        .map(|el| el.id.clone())
}
