//! ToggleButton widget.

use leafdom::{Element, class_names};

use crate::{HandlerRegistry, WidgetHandlers};

const BASE_CLASSES: &str = "px-4 py-2 rounded focus:outline-none";

/// Visual variant of a [`ToggleButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-blue-500 text-white",
            ButtonVariant::Outline => "border border-gray-500",
        }
    }
}

/// Text size of a [`ToggleButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "text-sm",
            ButtonSize::Medium => "text-base",
            ButtonSize::Large => "text-lg",
        }
    }
}

/// A button widget builder.
///
/// Stateless: attributes and children are forwarded to the `<button>`
/// element unchanged and the class string is computed from the variant and
/// size alone. The only behaviour is whatever `on_click` handler the caller
/// supplies.
///
/// # Example
///
/// ```ignore
/// let mut handlers = WidgetHandlers::new();
/// handlers.insert("on_click", Arc::new(|hx| hx.cx().alert("clicked")));
///
/// ToggleButton::new()
///     .id("save")
///     .variant(ButtonVariant::Outline)
///     .size(ButtonSize::Small)
///     .label("Save")
///     .build(registry, &handlers)
/// ```
#[derive(Clone, Debug, Default)]
pub struct ToggleButton {
    id: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    class: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    disabled: bool,
}

impl ToggleButton {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Extra classes appended after the computed ones.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Forward an attribute to the button element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a text label child.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.children.push(Element::text(label));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark the button as disabled.
    ///
    /// Disabled buttons are not clickable and don't register handlers.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The class string for this variant/size/extra combination.
    pub fn class_string(&self) -> String {
        class_names([
            BASE_CLASSES,
            self.variant.classes(),
            self.size.classes(),
            self.class.as_deref().unwrap_or_default(),
        ])
    }

    /// Build the button element.
    ///
    /// Registers the `on_click` handler if provided and not disabled.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let classes = self.class_string();
        let on_click = handlers.get("on_click").filter(|_| !self.disabled);

        let mut elem = Element::button();
        if let Some(id) = self.id {
            elem = elem.id(id);
        }
        let id = elem.id.clone();
        elem = elem
            .class(classes)
            .clickable(on_click.is_some())
            .disabled(self.disabled);
        for (name, value) in self.attributes {
            elem = elem.attr(name, value);
        }
        elem = elem.children(self.children);

        if let Some(handler) = on_click {
            registry.register(&id, "on_click", handler.clone());
        }

        elem
    }
}
