pub mod cards;
pub mod dropdown;
pub mod navbar;
pub mod shell;

pub use dropdown::Dropdown;
pub use navbar::{MenuState, NavLink, NavbarMenu, default_nav_links};
pub use shell::PageShell;
