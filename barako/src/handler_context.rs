//! Handler context bundle and handler registry.
//!
//! This module provides:
//! - `Handler`: closure type for widget event handlers
//! - `WidgetHandlers`: named handlers passed to widget builders
//! - `HandlerRegistry`: handlers of the current render by element and event
//! - `HandlerContext`: what a handler receives when it runs

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::context::PageContext;

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
///
/// The closure captures whatever state it mutates at creation time, usually
/// a clone of a [`State`](crate::State).
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Map of handler names to handlers, used for passing callbacks to widgets.
///
/// Standard handler names:
/// - `"on_click"` - button or trigger activated
/// - `"on_checked_change"` - checkbox item toggled
pub type WidgetHandlers = HashMap<&'static str, Handler>;

// =============================================================================
// HandlerRegistry
// =============================================================================

type Table = HashMap<String, HashMap<String, Handler>>;

/// Handlers of the current render, grouped by element id then event name.
///
/// The runtime clears it before every render, so only elements present in
/// the latest tree can be reached. Clones share one table.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    table: Arc<RwLock<Table>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `handler` for `event` on `element_id`, replacing any
    /// previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        self.write()
            .entry(element_id.to_owned())
            .or_default()
            .insert(event.to_owned(), handler);
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.read().get(element_id)?.get(event).cloned()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total handlers across all elements.
    pub fn len(&self) -> usize {
        self.read().values().map(HashMap::len).sum()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (elements, handlers) = {
            let table = self.read();
            (table.len(), table.values().map(HashMap::len).sum::<usize>())
        };
        f.debug_struct("HandlerRegistry")
            .field("elements", &elements)
            .field("handlers", &handlers)
            .finish()
    }
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to every handler invocation.
pub struct HandlerContext<'a> {
    cx: &'a PageContext,
    target: &'a str,
}

impl<'a> HandlerContext<'a> {
    pub fn new(cx: &'a PageContext, target: &'a str) -> Self {
        Self { cx, target }
    }

    /// Get the page context.
    pub fn cx(&self) -> &PageContext {
        self.cx
    }

    /// Id of the element the event was dispatched to.
    pub fn target(&self) -> &str {
        self.target
    }
}
