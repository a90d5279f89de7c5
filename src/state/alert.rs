//! Modal alert raised by screen actions.

/// A titled message shown in a modal dialog until dismissed.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}
