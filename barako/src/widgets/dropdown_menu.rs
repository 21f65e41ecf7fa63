//! Dropdown menu adapter over a menu primitive.
//!
//! [`DropdownMenu`] exposes six sub-roles (root, trigger, content, label,
//! separator, checkbox item) and forwards each call verbatim to a
//! [`MenuPrimitive`]. The only thing it adds is the default
//! `dropdown-menu-content` class on the content role. Focus handling,
//! keyboard navigation and overlay placement belong to the primitive.

use std::fmt;

use leafdom::{Element, class_names};

use crate::{Handler, HandlerRegistry};

/// Default class applied to the content role.
pub const CONTENT_CLASS: &str = "dropdown-menu-content";

/// Configuration for a checkbox item, forwarded as-is to the primitive.
#[derive(Clone, Default)]
pub struct CheckboxItemProps {
    pub id: Option<String>,
    pub checked: bool,
    pub disabled: bool,
    pub class: Option<String>,
    pub children: Vec<Element>,
    pub on_checked_change: Option<Handler>,
}

impl CheckboxItemProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn on_checked_change(mut self, handler: Handler) -> Self {
        self.on_checked_change = Some(handler);
        self
    }
}

impl fmt::Debug for CheckboxItemProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxItemProps")
            .field("id", &self.id)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("class", &self.class)
            .field("children", &self.children.len())
            .field("on_checked_change", &self.on_checked_change.is_some())
            .finish()
    }
}

/// A menu primitive library: one method per sub-role.
pub trait MenuPrimitive: Send + Sync {
    fn root(&self, children: Vec<Element>) -> Element;
    fn trigger(&self, as_child: bool, children: Vec<Element>) -> Element;
    fn content(&self, class: &str, children: Vec<Element>) -> Element;
    fn label(&self, children: Vec<Element>) -> Element;
    fn separator(&self) -> Element;
    fn checkbox_item(&self, props: CheckboxItemProps, registry: &HandlerRegistry) -> Element;
}

/// Renders each role as plain markup with ARIA roles and `data-menu-role`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupMenuPrimitive;

impl MenuPrimitive for MarkupMenuPrimitive {
    fn root(&self, children: Vec<Element>) -> Element {
        Element::div().data("menu-role", "root").children(children)
    }

    fn trigger(&self, as_child: bool, mut children: Vec<Element>) -> Element {
        let trigger = if as_child && children.len() == 1 {
            // The single child becomes the trigger itself
            children.remove(0)
        } else {
            Element::button().children(children)
        };
        trigger
            .attr("aria-haspopup", "menu")
            .data("menu-role", "trigger")
    }

    fn content(&self, class: &str, children: Vec<Element>) -> Element {
        Element::div()
            .class(class)
            .attr("role", "menu")
            .data("menu-role", "content")
            .children(children)
    }

    fn label(&self, children: Vec<Element>) -> Element {
        Element::div().data("menu-role", "label").children(children)
    }

    fn separator(&self) -> Element {
        Element::div()
            .attr("role", "separator")
            .attr("aria-orientation", "horizontal")
            .data("menu-role", "separator")
    }

    fn checkbox_item(&self, props: CheckboxItemProps, registry: &HandlerRegistry) -> Element {
        let state = if props.checked { "checked" } else { "unchecked" };
        let mut elem = Element::div()
            .attr("role", "menuitemcheckbox")
            .attr("aria-checked", props.checked.to_string())
            .data("menu-role", "checkbox-item")
            .data("state", state)
            .disabled(props.disabled);
        if let Some(class) = &props.class {
            elem = elem.class(class);
        }
        if let Some(id) = &props.id {
            elem = elem.id(id);
        }
        if let Some(handler) = props.on_checked_change.filter(|_| !props.disabled) {
            registry.register(&elem.id, "on_click", handler);
            elem = elem.clickable(true);
        }
        elem.children(props.children)
    }
}

/// Pass-through adapter over a [`MenuPrimitive`].
///
/// # Example
///
/// ```ignore
/// let menu = DropdownMenu::new();
/// menu.root(vec![
///     menu.trigger(true, vec![Element::button().child(Element::text("Open"))]),
///     menu.content(Some("w-56"), vec![
///         menu.label(vec![Element::text("View")]),
///         menu.separator(),
///         menu.checkbox_item(CheckboxItemProps::new().checked(true), registry),
///     ]),
/// ])
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropdownMenu<P = MarkupMenuPrimitive> {
    primitive: P,
}

impl DropdownMenu<MarkupMenuPrimitive> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MenuPrimitive> DropdownMenu<P> {
    /// Use a specific primitive implementation.
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn root(&self, children: Vec<Element>) -> Element {
        self.primitive.root(children)
    }

    pub fn trigger(&self, as_child: bool, children: Vec<Element>) -> Element {
        self.primitive.trigger(as_child, children)
    }

    /// Content role. `class` is appended after [`CONTENT_CLASS`].
    pub fn content(&self, class: Option<&str>, children: Vec<Element>) -> Element {
        let class = class_names([CONTENT_CLASS, class.unwrap_or_default()]);
        self.primitive.content(&class, children)
    }

    pub fn label(&self, children: Vec<Element>) -> Element {
        self.primitive.label(children)
    }

    pub fn separator(&self) -> Element {
        self.primitive.separator()
    }

    pub fn checkbox_item(&self, props: CheckboxItemProps, registry: &HandlerRegistry) -> Element {
        self.primitive.checkbox_item(props, registry)
    }
}
