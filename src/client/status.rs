use std::fmt::{self, Display};

/// The line of feedback shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    /// The service refused a request, e.g. an illegal move.
    Rejected(String),
    /// A request could not be completed at all.
    Failed(String),
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Status::Info(text.into())
    }

    pub fn rejected(text: impl Into<String>) -> Self {
        Status::Rejected(text.into())
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Status::Failed(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Rejected(text) | Status::Failed(text) => text,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
