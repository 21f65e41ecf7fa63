//! Page layout: aurora background, navbar and the gated content block.

use barako::{HandlerRegistry, Page, State};
use leafdom::{Element, Icon};

use super::cards::{instructions_card, showcase_card};
use super::dropdown::Dropdown;
use super::navbar::{NavLink, NavbarMenu, default_nav_links};

pub const CONTENT_ID: &str = "page-content";

const CONTENT_CLASSES: &str = "flex flex-col md:flex-row justify-center items-center h-full \
     pt-20 space-y-4 md:space-y-0 md:space-x-8";
const AURORA_CONTAINER_CLASSES: &str = "relative flex flex-col h-[100vh] items-center \
     justify-center bg-zinc-50 dark:bg-zinc-900 text-slate-950 transition-bg";
const AURORA_LAYER_CLASSES: &str = "[--aurora:repeating-linear-gradient(100deg,var(--blue-500)_10%,\
var(--indigo-300)_15%,var(--blue-300)_20%,var(--violet-200)_25%,var(--blue-400)_30%)] \
     [background-image:var(--aurora)] [background-size:300%,_200%] \
     [background-position:50%_50%,50%_50%] filter blur-[10px] after:animate-aurora \
     pointer-events-none absolute -inset-[10px] opacity-50 will-change-transform";

/// Wrap `children` in the animated aurora backdrop.
pub fn aurora_background(children: impl IntoIterator<Item = Element>) -> Element {
    Element::main().child(
        Element::div()
            .class(AURORA_CONTAINER_CLASSES)
            .child(
                Element::div()
                    .class("absolute inset-0 overflow-hidden")
                    .child(Element::div().class(AURORA_LAYER_CLASSES)),
            )
            .children(children),
    )
}

fn flip_menu_flag(menu_open: &State<bool>) {
    let hidden = menu_open.toggle();
    log::debug!(
        "page content {}",
        if hidden { "hidden" } else { "shown" }
    );
}

/// The page root.
///
/// Keeps its own `menu_open` flag, flipped by the navbar's notification
/// callback. The main content block is left out of the tree entirely while
/// the flag is set.
#[derive(Debug)]
pub struct PageShell {
    menu_open: State<bool>,
    navbar: NavbarMenu,
    dropdown: Dropdown,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new()
    }
}

impl PageShell {
    pub fn new() -> Self {
        Self::with_nav_links(default_nav_links())
    }

    pub fn with_nav_links(links: Vec<NavLink>) -> Self {
        let menu_open = State::new(false);
        let gate = menu_open.clone();
        let navbar = NavbarMenu::new()
            .links(links)
            .on_toggle(move || flip_menu_flag(&gate));

        Self {
            menu_open,
            navbar,
            dropdown: Dropdown::new().icon(Icon::new("GiHamburgerMenu").size(24)),
        }
    }

    /// Notification target for the navbar.
    pub fn on_menu_toggled(&self) {
        flip_menu_flag(&self.menu_open);
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn navbar(&self) -> &NavbarMenu {
        &self.navbar
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }
}

impl Page for PageShell {
    fn name(&self) -> &'static str {
        "page-shell"
    }

    fn element(&self, registry: &HandlerRegistry) -> Element {
        let content_visible = !self.is_menu_open();
        if !content_visible {
            // Omitted content is unmounted; its dropdown comes back closed
            self.dropdown.reset();
        }

        let body = aurora_background(
            std::iter::once(self.navbar.element(registry)).chain(content_visible.then(|| {
                Element::div()
                    .id(CONTENT_ID)
                    .class(CONTENT_CLASSES)
                    .child(instructions_card())
                    .child(showcase_card(&self.dropdown, registry))
            })),
        );

        Element::div().class("relative min-h-screen").child(body)
    }
}
