use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ClassList, Icon, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Set once `id()` is called. Generated ids stay internal and are never
    /// written to the markup.
    pub explicit_id: bool,

    // Markup
    pub tag: Tag,
    pub content: Content,
    pub classes: ClassList,
    /// Extra attributes in insertion order.
    pub attributes: Vec<(String, String)>,

    // Interaction
    pub clickable: bool,
    /// Disabled elements don't receive clicks.
    pub disabled: bool,

    // Custom data, rendered as `data-*` attributes
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            explicit_id: false,
            tag: Tag::Div,
            content: Content::None,
            classes: ClassList::new(),
            attributes: Vec::new(),
            clickable: false,
            disabled: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(match tag {
                Tag::Text => "text",
                other => other.as_str(),
            }),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Text)
        }
    }

    /// Inline text that can carry classes.
    pub fn span(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Span)
        }
    }

    pub fn nav() -> Self {
        Self::new(Tag::Nav)
    }

    pub fn main() -> Self {
        Self::new(Tag::Main)
    }

    pub fn heading(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::H1)
        }
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(Tag::Anchor).attr("href", href)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button).attr("type", "button")
    }

    pub fn icon(icon: Icon) -> Self {
        Self {
            content: Content::Icon(icon),
            ..Self::new(Tag::Svg)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.explicit_id = true;
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    // Markup
    /// Append whitespace separated class tokens.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.extend_str(classes.as_ref());
        self
    }

    /// Set an attribute, replacing an earlier value of the same name in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Leaf content is replaced by the child list
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Add a child only when `condition` holds.
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Element) -> Self {
        if condition {
            self.child(child())
        } else {
            self
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None | Content::Icon(_) => {}
    }
}
