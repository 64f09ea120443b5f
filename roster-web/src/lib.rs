//! Web front end for the student roster.
//!
//! Renders the student table and the create/edit modal on the server and
//! forwards every change to the remote student API through
//! [`roster_client::StudentApi`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod flash;
pub mod modal;
pub mod routes;
pub mod view;
