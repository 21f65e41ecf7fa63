/// Markup tag of an element.
///
/// `Text` is a bare text node: it renders only its escaped text and ignores
/// classes and attributes. Use `Span` for styled inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Text,
    Span,
    Nav,
    Main,
    H1,
    H3,
    Anchor,
    Button,
    Svg,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Text => "",
            Tag::Span => "span",
            Tag::Nav => "nav",
            Tag::Main => "main",
            Tag::H1 => "h1",
            Tag::H3 => "h3",
            Tag::Anchor => "a",
            Tag::Button => "button",
            Tag::Svg => "svg",
        }
    }

    /// Whether this is a bare text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Tag::Text)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
