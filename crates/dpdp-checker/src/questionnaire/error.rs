use serde::Serialize;
use std::fmt;

/// Identity fields collected at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    Institution,
    Name,
    Email,
}

impl IdentityField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Institution => "Company / Institution Name",
            Self::Name => "User Name",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One or more identity fields were blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("please fill all fields (missing: {})", join_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<IdentityField>,
}

/// An answer was recorded after the last question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question index {index} is out of range for a questionnaire of {question_count} questions")]
pub struct OutOfRangeError {
    pub index: usize,
    pub question_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot compute a compliance percentage for an empty question bank")]
pub struct DivisionGuardError;

/// Export requested before every question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("session incomplete: {answered} of {question_count} questions answered")]
pub struct IncompleteSessionError {
    pub answered: usize,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),
    #[error(transparent)]
    DivisionGuard(#[from] DivisionGuardError),
    #[error(transparent)]
    IncompleteSession(#[from] IncompleteSessionError),
}

fn join_labels(fields: &[IdentityField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
