pub mod alert;
pub mod context;
pub mod handler_context;
pub mod page;
pub mod runtime;
pub mod state;
pub mod widgets;

pub use alert::Alert;
pub use context::PageContext;
pub use handler_context::{Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
pub use page::Page;
pub use runtime::{Runtime, RuntimeError};
pub use state::State;

pub mod prelude {
    pub use crate::alert::Alert;
    pub use crate::context::PageContext;
    pub use crate::handler_context::{Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
    pub use crate::page::Page;
    pub use crate::runtime::{Runtime, RuntimeError};
    pub use crate::state::State;
    pub use crate::widgets::*;

    pub use leafdom::{Element, Icon, Tag, class_names};
}
