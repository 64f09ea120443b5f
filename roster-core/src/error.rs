/// Errors produced by the `roster-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A student id could not be parsed or validated.
    #[error("invalid student id '{value}': {reason}")]
    InvalidStudentId { value: String, reason: String },

    /// A response body was not the JSON shape expected for student records.
    #[error("malformed student payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
