use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::StudentDraft;
use crate::id::StudentId;

/// A student record as returned by the remote API.
///
/// Every field is optional on the wire: a missing or `null` value is kept
/// as `None` and rendered as an empty cell. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Student {
    /// Identifier assigned by the API.
    #[serde(default)]
    pub id: Option<StudentId>,
    /// Full name (`nome`).
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    /// Class group (`turma`).
    #[serde(rename = "turma", default)]
    pub class_group: Option<String>,
    /// Course (`curso`).
    #[serde(rename = "curso", default)]
    pub course: Option<String>,
    /// Enrollment number (`matricula`).
    #[serde(rename = "matricula", default)]
    pub enrollment: Option<String>,
}

impl Student {
    /// Creates a record with every field populated.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        class_group: impl Into<String>,
        course: impl Into<String>,
        enrollment: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            class_group: Some(class_group.into()),
            course: Some(course.into()),
            enrollment: Some(enrollment.into()),
        }
    }

    /// The editable part of the record, used to pre-fill the edit form.
    #[must_use]
    pub fn draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone().unwrap_or_default(),
            class_group: self.class_group.clone().unwrap_or_default(),
            course: self.course.clone().unwrap_or_default(),
            enrollment: self.enrollment.clone().unwrap_or_default(),
        }
    }

    /// Builds the record the API would hold after applying `draft` to `id`.
    #[must_use]
    pub fn from_draft(id: StudentId, draft: &StudentDraft) -> Self {
        Self::new(
            id,
            draft.name.clone(),
            draft.class_group.clone(),
            draft.course.clone(),
            draft.enrollment.clone(),
        )
    }
}

/// Decodes the body of a list response.
///
/// A JSON array yields its records. Any other well-formed JSON value (an
/// object, `null`, a number) is treated as an empty list.
///
/// # Errors
/// Returns [`CoreError::MalformedPayload`] if the body is not valid JSON or
/// an array element is not a student object.
pub fn decode_student_list(body: &[u8]) -> Result<Vec<Student>, CoreError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Ok(Vec::new()),
    }
}

/// Decodes the body of a single-record response.
///
/// # Errors
/// Returns [`CoreError::MalformedPayload`] if the body is not a student object.
pub fn decode_student(body: &[u8]) -> Result<Student, CoreError> {
    Ok(serde_json::from_slice(body)?)
}
