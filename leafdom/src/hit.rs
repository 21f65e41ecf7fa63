use crate::element::{find_element, Element};

/// Resolve a click target by id.
///
/// Returns the element when it exists, is clickable and is not disabled.
pub fn hit_test<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_element(root, id).filter(|element| element.clickable && !element.disabled)
}

/// Ids of all enabled clickable elements, in document order.
pub fn collect_clickable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect(root, &mut ids);
    ids
}

fn collect(element: &Element, ids: &mut Vec<String>) {
    if element.clickable && !element.disabled {
        ids.push(element.id.clone());
    }
    for child in element.content.children() {
        collect(child, ids);
    }
}
