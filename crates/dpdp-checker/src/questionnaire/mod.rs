//! Questionnaire core: intake, sequential scoring, risk classification, and the
//! export record built from a completed session. Nothing in here performs I/O.

pub mod answer;
pub mod bank;
pub mod classify;
pub mod error;
pub mod record;
pub mod session;

pub use answer::{Answer, ParseAnswerError};
pub use bank::{Question, QuestionBank};
pub use classify::{classify, round_percentage, ComplianceResult, RiskTier};
pub use error::{
    DivisionGuardError, IdentityField, IncompleteSessionError, OutOfRangeError,
    QuestionnaireError, ValidationError,
};
pub use record::{build_record, ExportRecord, ExportTimestamp, RecordEntry, SUMMARY_COLUMNS};
pub use session::{begin_session, QuestionScore, Respondent, SessionState};
