//! HTTP client for the remote student REST API.
//!
//! Wraps the four CRUD calls of the roster (plus a single-record get)
//! behind the [`StudentApi`] trait and implements it over hyper.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::StudentApi;
pub use config::{ClientConfig, DEFAULT_API_BASE, STUDENTS_PATH};
pub use error::ClientError;
pub use http::HttpStudentApi;
