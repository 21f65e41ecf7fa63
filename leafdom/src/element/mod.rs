mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element matching `predicate`, in document order.
pub fn find_all<'a, F>(root: &'a Element, predicate: F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let mut found = Vec::new();
    walk(root, &predicate, &mut found);
    found
}

fn walk<'a, F>(element: &'a Element, predicate: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if predicate(element) {
        found.push(element);
    }
    for child in element.content.children() {
        walk(child, predicate, found);
    }
}
