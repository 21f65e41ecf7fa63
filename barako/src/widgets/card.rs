//! Card widgets - containers for grouped content.
//!
//! Each part has fixed default classes; classes passed by the caller are
//! appended after them with [`class_names`].

use leafdom::{Element, Tag, class_names};

macro_rules! card_part {
    ($(#[$meta:meta])* $name:ident, $tag:expr, $classes:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            id: Option<String>,
            class: Option<String>,
            children: Vec<Element>,
        }

        impl $name {
            pub const DEFAULT_CLASSES: &'static str = $classes;

            pub fn new() -> Self {
                Self::default()
            }

            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            /// Extra classes appended after the defaults.
            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.class = Some(class.into());
                self
            }

            pub fn child(mut self, child: Element) -> Self {
                self.children.push(child);
                self
            }

            pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
                self.children.extend(children);
                self
            }

            /// Add a text child.
            pub fn text(self, text: impl Into<String>) -> Self {
                self.child(Element::text(text))
            }

            pub fn build(self) -> Element {
                let mut elem = Element::new($tag).class(class_names([
                    Self::DEFAULT_CLASSES,
                    self.class.as_deref().unwrap_or_default(),
                ]));
                if let Some(id) = self.id {
                    elem = elem.id(id);
                }
                elem.children(self.children)
            }
        }
    };
}

card_part!(
    /// Outer card container.
    Card,
    Tag::Div,
    "rounded-lg border bg-card text-card-foreground shadow-sm"
);
card_part!(
    /// Header area holding titles and descriptions.
    CardHeader,
    Tag::Div,
    "flex flex-col space-y-1.5 p-6"
);
card_part!(CardTitle, Tag::H3, "text-2xl font-semibold leading-none tracking-tight");
card_part!(CardDescription, Tag::Div, "text-sm text-muted-foreground");
card_part!(CardContent, Tag::Div, "p-6 pt-0");
card_part!(CardFooter, Tag::Div, "flex items-center p-6 pt-0");
