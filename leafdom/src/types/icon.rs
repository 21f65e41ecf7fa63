use std::borrow::Cow;

/// A named vector icon.
///
/// Icons are only referenced: the renderer emits a placeholder carrying the
/// name and size, and the glyph itself comes from whatever icon set the
/// embedding document loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: Cow<'static, str>,
    /// Pixel size. `None` means the icon follows the font size (`1em`).
    pub size: Option<u16>,
}

impl Icon {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    /// The rendered `width`/`height` value.
    pub fn dimension(&self) -> String {
        match self.size {
            Some(px) => px.to_string(),
            None => "1em".to_string(),
        }
    }
}
