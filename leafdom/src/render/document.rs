use maud::{html, DOCTYPE};

use crate::element::Element;

/// HTML document shell around a rendered element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub lang: String,
    pub stylesheet: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: "en".into(),
            stylesheet: None,
        }
    }
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Render a complete document with `root` as the body content.
    pub fn render(&self, root: &Element) -> String {
        html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    @if let Some(href) = &self.stylesheet {
                        link rel="stylesheet" href=(href);
                    }
                }
                body { (root) }
            }
        }
        .into_string()
    }
}
