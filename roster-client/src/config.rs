//! Client configuration and endpoint URLs.

use std::time::Duration;

use roster_core::StudentId;
use serde::{Deserialize, Serialize};

use crate::ClientError;

/// API the roster talks to when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "https://proweb.leoproti.com.br";

/// Path of the student collection below the base URL.
pub const STUDENTS_PATH: &str = "/alunos";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the student API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Scheme and authority (plus optional path prefix), without a trailing slash.
    pub base_url: String,

    /// Upper bound for a single request, connect included.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default timeout.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidConfig`] if the URL is not `http(s)://`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let has_host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ClientError::InvalidConfig(format!(
                "base url '{base_url}' must start with http:// or https:// and name a host"
            )));
        }
        Ok(Self {
            base_url: base_url.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `ROSTER_API_BASE` and `ROSTER_API_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidConfig`] if either variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ClientError> {
        let base = std::env::var("ROSTER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
        let config = Self::new(&base)?;
        match std::env::var("ROSTER_API_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    ClientError::InvalidConfig(format!("ROSTER_API_TIMEOUT_SECS='{raw}': {e}"))
                })?;
                if secs == 0 {
                    return Err(ClientError::InvalidConfig(
                        "ROSTER_API_TIMEOUT_SECS must be greater than zero".to_owned(),
                    ));
                }
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            Err(_) => Ok(config),
        }
    }

    /// URL of the student collection.
    #[must_use]
    pub fn students_url(&self) -> String {
        format!("{}{STUDENTS_PATH}", self.base_url)
    }

    /// URL of a single student.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidId`] if `id` is not a single literal
    /// path segment, so a request never escapes `/alunos/`.
    pub fn student_url(&self, id: &StudentId) -> Result<String, ClientError> {
        id.check_path_segment().map_err(|reason| ClientError::InvalidId {
            id: id.to_string(),
            reason,
        })?;
        Ok(format!("{}{STUDENTS_PATH}/{id}", self.base_url))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
