//! Built-in widgets for barako.
//!
//! Each widget is a builder that produces a leafdom Element. Interactive
//! widgets take the page's [`HandlerRegistry`](crate::HandlerRegistry) and
//! register their handlers under the id of the element they emit; the
//! runtime later looks handlers up by that id when an event arrives.

pub mod button;
pub mod card;
pub mod dropdown_menu;

pub use button::{ButtonSize, ButtonVariant, ToggleButton};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use dropdown_menu::{CheckboxItemProps, DropdownMenu, MarkupMenuPrimitive, MenuPrimitive};
