use leafdom::{collect_clickable, find_all, find_element, hit_test, Element, Event, Tag};

fn sample_tree() -> Element {
    Element::div()
        .id("root")
        .child(Element::button().id("open").clickable(true))
        .child(
            Element::div()
                .id("panel")
                .child(Element::anchor("#a").id("link-a"))
                .child(Element::button().id("close").clickable(true)),
        )
        .child(
            Element::button()
                .id("frozen")
                .clickable(true)
                .disabled(true),
        )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_searches_nested_children() {
    let root = sample_tree();

    assert_eq!(find_element(&root, "root").map(|e| e.tag), Some(Tag::Div));
    assert_eq!(find_element(&root, "link-a").map(|e| e.tag), Some(Tag::Anchor));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_all_returns_document_order() {
    let root = sample_tree();
    let buttons: Vec<&str> = find_all(&root, |e| e.tag == Tag::Button)
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(buttons, vec!["open", "close", "frozen"]);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_requires_clickable() {
    let root = sample_tree();

    assert!(hit_test(&root, "open").is_some());
    assert!(hit_test(&root, "close").is_some());
    // Exists but not clickable
    assert!(hit_test(&root, "panel").is_none());
    assert!(hit_test(&root, "nowhere").is_none());
}

#[test]
fn test_hit_test_skips_disabled() {
    let root = sample_tree();
    assert!(hit_test(&root, "frozen").is_none());
}

#[test]
fn test_collect_clickable_lists_enabled_targets() {
    let root = sample_tree();
    assert_eq!(collect_clickable(&root), vec!["open", "close"]);
}

#[test]
fn test_event_target() {
    let event = Event::click("open");
    assert_eq!(event.target(), "open");
    assert_eq!(
        event,
        Event::Click {
            target: "open".to_string()
        }
    );
}
