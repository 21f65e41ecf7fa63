use leafdom::Element;

use crate::handler_context::HandlerRegistry;

/// A top-level page driven by the [`Runtime`](crate::Runtime).
///
/// `element` is called once per render with a freshly cleared registry.
/// Implementations read their `State` values, build the element tree and
/// register a handler for every interactive element they emit.
pub trait Page: Send + Sync {
    /// Name used in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Build the element tree for the current state.
    fn element(&self, registry: &HandlerRegistry) -> Element;
}
