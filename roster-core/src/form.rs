//! The create/update payload and its form validation.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One of the editable student fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    ClassGroup,
    Course,
    Enrollment,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::ClassGroup, Field::Course, Field::Enrollment];

    /// Name used on the wire and as the HTML input name.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::ClassGroup => "turma",
            Field::Course => "curso",
            Field::Enrollment => "matricula",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::ClassGroup => "Turma",
            Field::Course => "Curso",
            Field::Enrollment => "Matrícula",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Body of a create (`POST`) or update (`PUT`) request.
///
/// Never carries the id: for updates the id travels in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "turma")]
    pub class_group: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "matricula")]
    pub enrollment: String,
}

impl StudentDraft {
    /// Builds a draft from raw form input, trimming every value.
    #[must_use]
    pub fn from_form(name: &str, class_group: &str, course: &str, enrollment: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            class_group: class_group.trim().to_owned(),
            course: course.trim().to_owned(),
            enrollment: enrollment.trim().to_owned(),
        }
    }

    /// Value of a single field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::ClassGroup => &self.class_group,
            Field::Course => &self.course,
            Field::Enrollment => &self.enrollment,
        }
    }

    /// Checks the required-field constraints.
    ///
    /// Every field is required. The returned map is empty when the draft
    /// may be submitted.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                errors.insert(field, "Campo obrigatório.");
            }
        }
        errors
    }
}

/// Validation failures keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<Field, &'static str>);

impl FieldErrors {
    /// Records a failure for `field`, replacing any previous message.
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Message for `field`, if it failed validation.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failed fields with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}
