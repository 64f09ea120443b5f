use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Identifier of a student record, assigned by the remote API.
///
/// The API is free to send ids as JSON numbers or strings. Both decode to
/// the same textual form, which is shown verbatim in the table. Only ids
/// that pass [`StudentId::check_path_segment`] are ever put into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Parses and validates an id taken from user input or a URL segment.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidStudentId`] if the value is empty or
    /// would not stay a single URL path segment.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let id = Self(value.trim().to_owned());
        id.check_path_segment().map_err(|reason| CoreError::InvalidStudentId {
            value: value.to_owned(),
            reason,
        })?;
        Ok(id)
    }

    /// Returns the textual id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be appended to `/alunos/` unchanged.
    #[must_use]
    pub fn is_path_safe(&self) -> bool {
        self.check_path_segment().is_ok()
    }

    /// Checks that the id is a single, literal URL path segment.
    ///
    /// Rejects the empty id, the dot segments `.` and `..`, and any of
    /// `/ ? # %` or whitespace.
    ///
    /// # Errors
    /// Returns the reason the id cannot be used in a path.
    pub fn check_path_segment(&self) -> Result<(), String> {
        match self.0.as_str() {
            "" => return Err("must not be empty".to_owned()),
            "." | ".." => return Err("dot segments are not ids".to_owned()),
            _ => {}
        }
        match self
            .0
            .chars()
            .find(|&c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
        {
            Some(c) => Err(format!("unexpected character {c:?}")),
            None => Ok(()),
        }
    }
}

impl FromStr for StudentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StudentId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Int(n) => Ok(Self(n.to_string())),
            Wire::Float(f) => Ok(Self(f.to_string())),
            Wire::Text(s) => Ok(Self(s)),
        }
    }
}
