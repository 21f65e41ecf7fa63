mod classes;
mod enums;
mod icon;

pub use classes::{class_names, ClassList};
pub use enums::Tag;
pub use icon::Icon;
