pub mod element;
pub mod event;
pub mod hit;
pub mod render;
pub mod types;

pub use element::{find_all, find_element, Content, Element};
pub use event::Event;
pub use hit::{collect_clickable, hit_test};
pub use render::{render_markup, Document};
pub use types::*;
