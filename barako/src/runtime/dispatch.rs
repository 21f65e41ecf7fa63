//! Event dispatch for the runtime.

use leafdom::{Event, find_element, hit_test};

use super::{Runtime, RuntimeError};
use crate::handler_context::HandlerContext;
use crate::page::Page;

impl<P: Page> Runtime<P> {
    /// Dispatch an event to the handler registered for its target, then
    /// re-render.
    pub fn dispatch(&mut self, event: &Event) -> Result<(), RuntimeError> {
        match event {
            Event::Click { target } => self.click(target),
        }
    }

    /// Click the element with the given id.
    pub fn click(&mut self, id: &str) -> Result<(), RuntimeError> {
        if hit_test(&self.root, id).is_none() {
            let disabled = find_element(&self.root, id).is_some_and(|e| e.disabled);
            return Err(if disabled {
                RuntimeError::Disabled(id.to_string())
            } else {
                RuntimeError::UnknownTarget(id.to_string())
            });
        }
        let handler = self
            .registry
            .get(id, "on_click")
            .ok_or_else(|| RuntimeError::UnknownTarget(id.to_string()))?;

        log::debug!("{}: click on '{}'", self.page.name(), id);
        handler(&HandlerContext::new(&self.cx, id));

        self.render();
        Ok(())
    }
}
