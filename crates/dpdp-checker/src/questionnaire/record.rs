use super::classify::{round_percentage, RiskTier};
use super::error::IncompleteSessionError;
use super::session::{Respondent, SessionState};
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const FILE_PREFIX: &str = "dpdp_results";

/// Moment an export was requested, captured once and shared by every sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportTimestamp(NaiveDateTime);

impl ExportTimestamp {
    pub fn capture() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn at(moment: NaiveDateTime) -> Self {
        Self(moment)
    }

    pub fn moment(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for ExportTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for ExportTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Prompt and score for one question, in questionnaire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordEntry {
    pub prompt: String,
    pub score: f64,
}

/// Flat result of a completed session, handed unchanged to every export sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    respondent: Respondent,
    total_score: f64,
    question_count: usize,
    percentage: f64,
    risk_tier: RiskTier,
    risk_level: &'static str,
    timestamp: ExportTimestamp,
    entries: Vec<RecordEntry>,
}

/// Column headers for the leading summary fields of the tabular layout.
pub const SUMMARY_COLUMNS: [&str; 7] = [
    "Institution",
    "User Name",
    "Email",
    "Total Score",
    "Compliance Percentage",
    "Risk Level",
    "Timestamp",
];

pub fn build_record(
    state: &SessionState<'_>,
    tier: RiskTier,
    percentage: f64,
    timestamp: ExportTimestamp,
) -> Result<ExportRecord, IncompleteSessionError> {
    if !state.is_complete() {
        return Err(IncompleteSessionError {
            answered: state.index(),
            question_count: state.question_count(),
        });
    }

    let entries = state
        .scores()
        .iter()
        .map(|entry| RecordEntry {
            prompt: entry.question.prompt.clone(),
            score: entry.score,
        })
        .collect();

    Ok(ExportRecord {
        respondent: state.respondent().clone(),
        total_score: state.total(),
        question_count: state.question_count(),
        percentage: round_percentage(percentage),
        risk_tier: tier,
        risk_level: tier.label(),
        timestamp,
        entries,
    })
}

impl ExportRecord {
    pub fn respondent(&self) -> &Respondent {
        &self.respondent
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Percentage rounded to two decimals.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    pub fn timestamp(&self) -> ExportTimestamp {
        self.timestamp
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    /// Shared file name stem, `dpdp_results_<YYYYMMDD_HHMMSS>`.
    pub fn file_stem(&self) -> String {
        format!("{FILE_PREFIX}_{}", self.timestamp)
    }

    /// Ordered `(header, value)` pairs: summary fields first, then one per question.
    pub fn columns(&self) -> Vec<(String, String)> {
        let summary = [
            self.respondent.institution.clone(),
            self.respondent.name.clone(),
            self.respondent.email.clone(),
            self.total_score.to_string(),
            format!("{:.2}", self.percentage),
            self.risk_level.to_string(),
            self.timestamp.to_string(),
        ];

        SUMMARY_COLUMNS
            .iter()
            .map(|header| header.to_string())
            .zip(summary)
            .chain(
                self.entries
                    .iter()
                    .map(|entry| (entry.prompt.clone(), entry.score.to_string())),
            )
            .collect()
    }
}
