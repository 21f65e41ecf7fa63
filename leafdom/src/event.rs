/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click or keyboard activation of the target element
    Click { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    /// The id of the element this event is aimed at.
    pub fn target(&self) -> &str {
        match self {
            Event::Click { target } => target,
        }
    }
}
