use crate::types::Icon;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    Icon(Icon),
}

impl Content {
    /// Child elements, or an empty slice for leaf content.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
