//! Self-contained dropdown listing the upload step anchors.

use std::sync::Arc;

use barako::{Handler, HandlerRegistry, State};
use leafdom::{Element, Icon};

pub const DEFAULT_ID: &str = "steps-dropdown";

/// The fixed entries shown while the dropdown is open.
pub const STEP_LINKS: [(&str, &str); 3] = [
    ("Step 1", "#step1"),
    ("Step 2", "#step2"),
    ("Step 3", "#step3"),
];

const TRIGGER_CLASSES: &str = "flex items-center p-2 text-gray-800 dark:text-gray-200 \
     hover:text-gray-600 dark:hover:text-gray-400";
const MENU_CLASSES: &str = "absolute right-0 mt-2 w-48 bg-white dark:bg-gray-800 border \
     border-gray-200 dark:border-gray-700 rounded-lg shadow-lg";
const LINK_CLASSES: &str = "block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-700";

/// A trigger button with an optional icon and a chevron, plus the step list.
#[derive(Debug, Clone)]
pub struct Dropdown {
    id: String,
    open: State<bool>,
    icon: Option<Icon>,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown {
    pub fn new() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            open: State::new(false),
            icon: None,
        }
    }

    /// Set the element id. The trigger and menu ids derive from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Icon shown before the chevron.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        let open = self.open.toggle();
        log::debug!("{} {}", self.id, if open { "opened" } else { "closed" });
    }

    /// Return to the initial closed state.
    pub fn reset(&self) {
        self.open.set(false);
    }

    pub fn element(&self, registry: &HandlerRegistry) -> Element {
        let open = self.is_open();
        let trigger_id = self.trigger_id();

        let dropdown = self.clone();
        let on_click: Handler = Arc::new(move |_hx| dropdown.toggle());
        registry.register(&trigger_id, "on_click", on_click);

        let chevron = if open { "FaChevronUp" } else { "FaChevronDown" };
        let mut trigger = Element::button()
            .id(&trigger_id)
            .class(TRIGGER_CLASSES)
            .attr("aria-expanded", open.to_string())
            .clickable(true);
        if let Some(icon) = &self.icon {
            trigger = trigger.child(Element::icon(icon.clone()));
        }
        trigger = trigger.child(Element::icon(Icon::new(chevron)).class("ml-2"));

        Element::div()
            .id(&self.id)
            .class("relative")
            .child(trigger)
            .child_if(open, || {
                Element::div()
                    .id(self.menu_id())
                    .class(MENU_CLASSES)
                    .children(STEP_LINKS.iter().map(|(label, href)| {
                        Element::anchor(*href)
                            .class(LINK_CLASSES)
                            .child(Element::text(*label))
                    }))
            })
    }
}
