use crate::NetworkError;
use std::fmt;

/// Notification raised when a fetch fails.
///
/// Every failure looks the same to the user: the cause is only logged.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Alert {
    /// Short heading.
    title: &'static str,
    /// What went wrong, in user terms.
    message: &'static str,
}

impl Alert {
    /// Returns the alert for a failed fetch of `what`.
    pub(crate) fn connection(what: &str, cause: &NetworkError) -> Self {
        tracing::warn!(%cause, "cannot fetch {what}");

        Self {
            title: "Error",
            message: "Error connecting to the server",
        }
    }

    /// Returns the alert heading.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Returns the alert message.
    pub fn message(&self) -> &str {
        self.message
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
