mod document;

pub use document::Document;

use maud::Render;

use crate::element::{Content, Element};

/// Serialize an element tree to markup.
///
/// Output is compact: no whitespace is inserted between tags. Text and
/// attribute values are escaped, attribute names are written as given.
pub fn render_markup(root: &Element) -> String {
    let mut buf = String::new();
    write_element(root, &mut buf);
    log::trace!("rendered {} ({} bytes)", root.id, buf.len());
    buf
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        write_element(self, buffer);
    }
}

fn write_element(element: &Element, buf: &mut String) {
    if element.tag.is_text() {
        if let Content::Text(text) = &element.content {
            text.as_str().render_to(buf);
        }
        return;
    }

    let tag = element.tag.as_str();
    buf.push('<');
    buf.push_str(tag);

    if element.explicit_id {
        write_attr(buf, "id", &element.id);
    }
    if !element.classes.is_empty() {
        write_attr(buf, "class", &element.classes.to_string());
    }
    for (name, value) in &element.attributes {
        write_attr(buf, name, value);
    }
    for (key, value) in &element.data {
        write_attr(buf, &format!("data-{key}"), value);
    }
    if let Content::Icon(icon) = &element.content {
        let dimension = icon.dimension();
        write_attr(buf, "data-icon", &icon.name);
        write_attr(buf, "width", &dimension);
        write_attr(buf, "height", &dimension);
        write_attr(buf, "aria-hidden", "true");
    }
    if element.disabled {
        buf.push_str(" disabled");
    } else if element.clickable {
        write_attr(buf, "data-action", "click");
    }
    buf.push('>');

    match &element.content {
        Content::Text(text) => text.as_str().render_to(buf),
        Content::Children(children) => {
            for child in children {
                write_element(child, buf);
            }
        }
        Content::None | Content::Icon(_) => {}
    }

    buf.push_str("</");
    buf.push_str(tag);
    buf.push('>');
}

fn write_attr(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    value.render_to(buf);
    buf.push('"');
}
