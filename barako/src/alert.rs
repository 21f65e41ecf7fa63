use std::fmt;

/// A blocking confirmation message raised by a handler.
///
/// The page itself never shows alerts; the embedding host drains them from
/// the [`PageContext`](crate::PageContext) after each dispatch and presents
/// them however it likes.
///
/// # Example
///
/// ```ignore
/// registry.register("save", "on_click", Arc::new(|hx| {
///     hx.cx().alert("Saved!");
/// }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// The message text.
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<String> for Alert {
    fn from(message: String) -> Self {
        Alert::new(message)
    }
}

impl From<&str> for Alert {
    fn from(message: &str) -> Self {
        Alert::new(message)
    }
}
