//! State of the student form modal.
//!
//! The modal is either closed or open on a form that creates a new
//! student or edits an existing one. It is static: it only closes through
//! its own controls, which return to the list with a fresh form.

use roster_core::{FieldErrors, StudentDraft, StudentId};

/// What submitting the form will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(StudentId),
}

/// An open student form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: FormMode,
    pub values: StudentDraft,
    pub errors: FieldErrors,
    /// Set once a submission failed validation, so every field shows its state.
    pub was_validated: bool,
}

impl FormView {
    /// An empty form for a new student.
    #[must_use]
    pub fn new_student() -> Self {
        Self {
            mode: FormMode::New,
            values: StudentDraft::default(),
            errors: FieldErrors::default(),
            was_validated: false,
        }
    }

    /// A form pre-filled with an existing student's values.
    #[must_use]
    pub fn edit(id: StudentId, values: StudentDraft) -> Self {
        Self {
            mode: FormMode::Edit(id),
            values,
            errors: FieldErrors::default(),
            was_validated: false,
        }
    }

    /// The form as submitted, with the result of validation.
    #[must_use]
    pub fn submitted(mode: FormMode, values: StudentDraft) -> Self {
        let errors = values.validate();
        let was_validated = !errors.is_empty();
        Self { mode, values, errors, was_validated }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Modal heading.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.mode {
            FormMode::New => "Novo Aluno".to_owned(),
            FormMode::Edit(id) => format!("Editar Aluno #{id}"),
        }
    }

    /// Value of the hidden id input; empty for new students.
    #[must_use]
    pub fn hidden_id(&self) -> &str {
        match &self.mode {
            FormMode::New => "",
            FormMode::Edit(id) => id.as_str(),
        }
    }
}

/// Whether the form modal is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(FormView),
}

impl Modal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }
}
