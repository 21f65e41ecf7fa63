//! Render/dispatch loop for a single page.
//!
//! There is no event loop of its own: the host feeds events in one at a
//! time, each handler runs to completion, and the page is re-rendered
//! before the next event is accepted.

mod dispatch;

use leafdom::{Element, collect_clickable};
use thiserror::Error;

use crate::alert::Alert;
use crate::context::PageContext;
use crate::handler_context::HandlerRegistry;
use crate::page::Page;

/// Runtime error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// No handler is registered for the element in the current render.
    #[error("no clickable element with id '{0}'")]
    UnknownTarget(String),
    /// The element exists but is disabled.
    #[error("element '{0}' is disabled")]
    Disabled(String),
}

/// Owns a page, its handler registry and its latest render.
pub struct Runtime<P: Page> {
    page: P,
    cx: PageContext,
    registry: HandlerRegistry,
    root: Element,
}

impl<P: Page> Runtime<P> {
    /// Create a runtime and perform the initial render.
    pub fn new(page: P) -> Self {
        let registry = HandlerRegistry::new();
        let root = page.element(&registry);
        log::debug!(
            "{}: initial render, {} handlers",
            page.name(),
            registry.len()
        );
        Self {
            page,
            cx: PageContext::new(),
            registry,
            root,
        }
    }

    /// Rebuild the element tree from current state.
    pub fn render(&mut self) -> &Element {
        self.registry.clear();
        self.root = self.page.element(&self.registry);
        log::trace!(
            "{}: rendered, {} handlers",
            self.page.name(),
            self.registry.len()
        );
        &self.root
    }

    /// The latest render.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn context(&self) -> &PageContext {
        &self.cx
    }

    /// Ids that can currently be clicked.
    pub fn targets(&self) -> Vec<String> {
        collect_clickable(&self.root)
            .into_iter()
            .filter(|id| self.registry.get(id, "on_click").is_some())
            .collect()
    }

    /// Drain alerts raised by handlers since the last call.
    pub fn take_alerts(&self) -> Vec<Alert> {
        self.cx.take_alerts()
    }
}

impl<P: Page + std::fmt::Debug> std::fmt::Debug for Runtime<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("page", &self.page)
            .field("registry", &self.registry)
            .finish()
    }
}
