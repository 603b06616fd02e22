//! # Student Form
//!
//! Add/edit form state and the checks run before anything is sent.

use crate::records::student::parse_int_prefix;
use crate::records::{Student, StudentFields};

/// What the next save does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Create a new record
    #[default]
    Create,
    /// Replace the record with this id
    Edit(u64),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Student",
            FormMode::Edit(_) => "Edit Student",
        }
    }
}

/// Form inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub email: String,
}

impl StudentForm {
    /// A form with every input empty
    pub fn blank() -> Self {
        Self::default()
    }

    /// A form prefilled from a cached record
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            grade: student.grade.clone(),
            email: student.email.clone(),
        }
    }

    /// Check the inputs and build the request payload.
    ///
    /// Name and email are trimmed. Age takes the leading integer of its
    /// input. On failure returns the message to show the user.
    pub fn validate(&self) -> Result<StudentFields, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let age = parse_int_prefix(&self.age).unwrap_or(0);

        if name.is_empty() || age == 0 || self.grade.is_empty() || email.is_empty() {
            return Err("Please fill in all fields");
        }

        let fields = StudentFields::new(name, age, self.grade.clone(), email);
        fields.check_constraints().map_err(|v| v.message)?;
        Ok(fields)
    }
}
