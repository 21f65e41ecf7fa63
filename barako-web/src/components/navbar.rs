//! Navigation bar with a mobile slide-in menu.
//!
//! The menu flag is owned here. Every change to it is reported through the
//! optional `on_toggle` callback; the owner of the callback keeps its own
//! flag and never reads this one.

use std::fmt;
use std::sync::Arc;

use barako::{Handler, HandlerRegistry, State};
use leafdom::{Element, Icon, class_names};
use serde::Deserialize;

pub const NAVBAR_ID: &str = "navbar";
pub const TOGGLE_ID: &str = "navbar-toggle";
pub const PANEL_ID: &str = "navbar-panel";
pub const CLOSE_ID: &str = "navbar-close";

pub const TITLE: &str = "BarakoBama ☕🍃";

const NAV_CLASSES: &str =
    "absolute top-0 left-0 w-full flex items-center justify-between py-10 px-10";
const TITLE_CLASSES: &str =
    "text-2xl font-extrabold text-emerald-800 underline underline-offset-8 decoration-orange-950";
const TOGGLE_CLASSES: &str = "block lg:hidden p-2 text-amber-900 hover:text-amber-600";
const PANEL_BASE_CLASSES: &str = "fixed top-0 left-0 w-full h-full bg-zinc-50 dark:bg-zinc-900 \
     transition-transform duration-300 ease-in-out";
const PANEL_LG_CLASSES: &str = "lg:translate-x-0 lg:relative lg:flex lg:items-center \
     lg:justify-between lg:bg-transparent lg:p-0 lg:w-auto";
const LINKS_CLASSES: &str =
    "flex flex-col lg:flex-row lg:space-x-4 lg:items-center lg:ml-auto lg:mt-0 mt-16";
const LINK_CLASSES: &str = "text-amber-900 hover:text-amber-600 rounded-lg px-4 py-2";
const CLOSE_CLASSES: &str =
    "lg:hidden absolute top-4 right-4 p-2 text-amber-900 hover:text-amber-600";

const ICON_SIZE: u16 = 24;

/// Zero-argument notification fired after every menu change.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The stock links. All three point at the site root.
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Diseases", "/"),
        NavLink::new("About Us", "/"),
    ]
}

/// Visibility of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => f.write_str("closed"),
            MenuState::Open => f.write_str("open"),
        }
    }
}

/// Navigation bar component.
///
/// Starts `Closed`. [`toggle`](Self::toggle) is self-inverse and always
/// notifies; [`close`](Self::close) notifies only when it actually closes
/// an open menu.
#[derive(Clone)]
pub struct NavbarMenu {
    open: State<bool>,
    on_toggle: Option<Callback>,
    links: Vec<NavLink>,
}

impl Default for NavbarMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl NavbarMenu {
    pub fn new() -> Self {
        Self {
            open: State::new(false),
            on_toggle: None,
            links: default_nav_links(),
        }
    }

    /// Set the notification callback.
    pub fn on_toggle<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(callback));
        self
    }

    pub fn links(mut self, links: Vec<NavLink>) -> Self {
        self.links = links;
        self
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn state(&self) -> MenuState {
        MenuState::from(self.is_open())
    }

    /// Flip the menu, then notify.
    pub fn toggle(&self) {
        let open = self.open.toggle();
        log::debug!("navbar menu {}", MenuState::from(open));
        self.notify();
    }

    /// Close the menu if it is open, then notify.
    pub fn close(&self) {
        if !self.is_open() {
            log::debug!("navbar menu already closed");
            return;
        }
        self.open.set(false);
        log::debug!("navbar menu {}", MenuState::Closed);
        self.notify();
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_toggle {
            callback();
        }
    }

    /// Build the navbar element and register its two click handlers.
    pub fn element(&self, registry: &HandlerRegistry) -> Element {
        let open = self.is_open();

        let toggle = self.clone();
        let on_toggle: Handler = Arc::new(move |_hx| toggle.toggle());
        registry.register(TOGGLE_ID, "on_click", on_toggle);

        let close = self.clone();
        let on_close: Handler = Arc::new(move |_hx| close.close());
        registry.register(CLOSE_ID, "on_click", on_close);

        let toggle_icon = if open { "FaTimes" } else { "FaBars" };

        let links = self.links.iter().map(|link| {
            Element::anchor(&link.href)
                .class(LINK_CLASSES)
                .child(Element::text(&link.label))
        });

        let panel = Element::div()
            .id(PANEL_ID)
            .class(class_names([
                PANEL_BASE_CLASSES,
                if open { "translate-x-0" } else { "translate-x-full" },
                PANEL_LG_CLASSES,
            ]))
            .child(Element::div().class(LINKS_CLASSES).children(links))
            .child(
                Element::button()
                    .id(CLOSE_ID)
                    .class(CLOSE_CLASSES)
                    .attr("aria-label", "Close menu")
                    .clickable(true)
                    .child(Element::icon(Icon::new("FaTimes").size(ICON_SIZE))),
            );

        Element::nav()
            .id(NAVBAR_ID)
            .class(NAV_CLASSES)
            .child(Element::heading(TITLE).class(TITLE_CLASSES))
            .child(
                Element::button()
                    .id(TOGGLE_ID)
                    .class(TOGGLE_CLASSES)
                    .attr("aria-expanded", open.to_string())
                    .attr("aria-controls", PANEL_ID)
                    .clickable(true)
                    .child(Element::icon(Icon::new(toggle_icon).size(ICON_SIZE))),
            )
            .child(panel)
    }
}

impl fmt::Debug for NavbarMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavbarMenu")
            .field("state", &self.state())
            .field("on_toggle", &self.on_toggle.is_some())
            .field("links", &self.links)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leafdom::{Content, find_element};

    fn counting_menu() -> (NavbarMenu, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let menu = NavbarMenu::new().on_toggle(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (menu, calls)
    }

    fn icon_name(root: &Element, id: &str) -> String {
        let button = find_element(root, id).expect("button rendered");
        match &button.content.children()[0].content {
            Content::Icon(icon) => icon.name.to_string(),
            other => panic!("expected icon, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(NavbarMenu::new().state(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_parity() {
        let menu = NavbarMenu::new();
        for n in 1..=6 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_each_toggle_notifies_once() {
        let (menu, calls) = counting_menu();
        menu.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        menu.toggle();
        menu.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_toggle_without_callback_still_flips() {
        let menu = NavbarMenu::new();
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn test_flag_flips_before_notification() {
        let seen = Arc::new(State::new(false));
        let menu_flag = State::new(false);
        let menu = NavbarMenu {
            open: menu_flag.clone(),
            on_toggle: None,
            links: Vec::new(),
        };
        let observer = Arc::clone(&seen);
        let menu = menu.on_toggle(move || observer.set(menu_flag.get()));

        menu.toggle();
        assert!(seen.get(), "callback must observe the new state");
    }

    #[test]
    fn test_close_only_notifies_on_change() {
        let (menu, calls) = counting_menu();

        menu.close();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(menu.state(), MenuState::Closed);

        menu.toggle();
        menu.close();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_render_follows_state() {
        let menu = NavbarMenu::new();
        let registry = HandlerRegistry::new();

        let closed = menu.element(&registry);
        let panel = find_element(&closed, PANEL_ID).unwrap();
        assert!(panel.classes.contains("translate-x-full"));
        assert!(!panel.classes.contains("translate-x-0"));
        assert_eq!(icon_name(&closed, TOGGLE_ID), "FaBars");

        menu.toggle();
        let open = menu.element(&registry);
        let panel = find_element(&open, PANEL_ID).unwrap();
        assert!(panel.classes.contains("translate-x-0"));
        assert!(!panel.classes.contains("translate-x-full"));
        assert_eq!(icon_name(&open, TOGGLE_ID), "FaTimes");
        assert_eq!(icon_name(&open, CLOSE_ID), "FaTimes");
    }

    #[test]
    fn test_registers_toggle_and_close_handlers() {
        let registry = HandlerRegistry::new();
        NavbarMenu::new().element(&registry);
        assert!(registry.get(TOGGLE_ID, "on_click").is_some());
        assert!(registry.get(CLOSE_ID, "on_click").is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_default_links_all_point_home() {
        let labels: Vec<_> = default_nav_links()
            .into_iter()
            .map(|l| (l.label, l.href))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Home".to_string(), "/".to_string()),
                ("Diseases".to_string(), "/".to_string()),
                ("About Us".to_string(), "/".to_string()),
            ]
        );
    }
}
