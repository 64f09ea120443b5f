//! Core types for the student roster client.
//!
//! Defines the student record as the remote API serves it, the
//! create/update draft with its form validation, user-facing alerts,
//! and HTML escaping for everything rendered from API data.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod alert;
pub mod error;
pub mod form;
pub mod html;
pub mod id;
pub mod student;

pub use alert::{Alert, AlertKind, DEFAULT_ALERT_TIMEOUT, ERROR_ALERT_TIMEOUT};
pub use error::CoreError;
pub use form::{Field, FieldErrors, StudentDraft};
pub use html::escape_html;
pub use id::StudentId;
pub use student::{decode_student, decode_student_list, Student};
