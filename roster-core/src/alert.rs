use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long an alert stays on screen unless stated otherwise.
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_millis(4500);

/// Timeout used for failures the user should have time to read.
pub const ERROR_ALERT_TIMEOUT: Duration = Duration::from_millis(7000);

/// Contextual style of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    /// Suffix of the `alert-*` CSS class.
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_suffix())
    }
}

/// A dismissible message reporting the outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Alert {
    pub kind: AlertKind,
    /// Plain text; escaped when rendered.
    pub message: String,
    /// Auto-dismiss delay. `None` keeps the alert until closed.
    pub timeout: Option<Duration>,
}

impl Alert {
    /// An alert with the default timeout.
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timeout: Some(DEFAULT_ALERT_TIMEOUT),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Danger, message)
    }

    /// Overrides the auto-dismiss delay.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Auto-dismiss delay in milliseconds, if any.
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u128> {
        self.timeout.map(|t| t.as_millis())
    }
}
