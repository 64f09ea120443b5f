//! Student API abstraction trait.
//!
//! The web front end only sees this trait, so it can be driven by the
//! real HTTP client or by an in-process fake in tests.

use async_trait::async_trait;
use roster_core::{Student, StudentDraft, StudentId};

use crate::ClientError;

/// CRUD operations on the remote student collection.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// Fetch every student.
    ///
    /// A response that is valid JSON but not an array yields an empty list.
    ///
    /// # Errors
    /// Returns [`ClientError::Status`] on a non-2xx answer,
    /// [`ClientError::Decode`] on invalid JSON.
    async fn list(&self) -> Result<Vec<Student>, ClientError>;

    /// Fetch a single student.
    ///
    /// # Errors
    /// Returns [`ClientError::Status`] (typically 404) if the id is unknown.
    async fn get(&self, id: &StudentId) -> Result<Student, ClientError>;

    /// Create a student and return the record stored by the API.
    ///
    /// # Errors
    /// Returns [`ClientError::Status`] if the API rejects the draft.
    async fn create(&self, draft: &StudentDraft) -> Result<Student, ClientError>;

    /// Replace the editable fields of a student.
    ///
    /// # Errors
    /// Returns [`ClientError::Status`] if the id is unknown or the draft is rejected.
    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> Result<Student, ClientError>;

    /// Delete a student. Any response body is ignored.
    ///
    /// # Errors
    /// Returns [`ClientError::Status`] if the API refuses the deletion.
    async fn delete(&self, id: &StudentId) -> Result<(), ClientError>;
}
