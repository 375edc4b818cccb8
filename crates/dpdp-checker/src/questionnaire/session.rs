use super::answer::Answer;
use super::bank::{Question, QuestionBank};
use super::error::{IdentityField, OutOfRangeError, ValidationError};
use serde::Serialize;
use tracing::{debug, info};

/// Trimmed identity details captured at intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Respondent {
    pub institution: String,
    pub name: String,
    pub email: String,
}

/// Score recorded for one answered question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionScore {
    pub question: Question,
    pub answer: Answer,
    pub score: f64,
}

/// Progress of a single respondent through the question bank.
///
/// `index` always equals `scores.len()` and `total` always equals the sum of the
/// recorded scores; [`SessionState::record_answer`] is the only mutator.
#[derive(Debug, Clone)]
pub struct SessionState<'q> {
    bank: &'q QuestionBank,
    respondent: Respondent,
    index: usize,
    scores: Vec<QuestionScore>,
    total: f64,
}

/// Validates the intake fields and opens a session against `bank`.
pub fn begin_session<'q>(
    bank: &'q QuestionBank,
    institution: &str,
    name: &str,
    email: &str,
) -> Result<SessionState<'q>, ValidationError> {
    let institution = institution.trim();
    let name = name.trim();
    let email = email.trim();

    let missing: Vec<IdentityField> = [
        (IdentityField::Institution, institution),
        (IdentityField::Name, name),
        (IdentityField::Email, email),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    info!(
        institution,
        question_count = bank.len(),
        "compliance session started"
    );

    Ok(SessionState {
        bank,
        respondent: Respondent {
            institution: institution.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        },
        index: 0,
        scores: Vec::with_capacity(bank.len()),
        total: 0.0,
    })
}

impl<'q> SessionState<'q> {
    /// Scores the current question and advances to the next one.
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), OutOfRangeError> {
        let bank: &'q QuestionBank = self.bank;
        let question = bank.get(self.index).ok_or(OutOfRangeError {
            index: self.index,
            question_count: bank.len(),
        })?;

        let score = answer.weight();
        self.scores.push(QuestionScore {
            question: question.clone(),
            answer,
            score,
        });
        self.total += score;
        self.index += 1;

        debug!(
            question = question.number(),
            answer = answer.label(),
            running_total = self.total,
            "answer recorded"
        );

        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.index == self.bank.len()
    }

    /// The question awaiting an answer, if any remain.
    pub fn current_question(&self) -> Option<&'q Question> {
        let bank: &'q QuestionBank = self.bank;
        bank.get(self.index)
    }

    pub fn bank(&self) -> &'q QuestionBank {
        self.bank
    }

    pub fn respondent(&self) -> &Respondent {
        &self.respondent
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn scores(&self) -> &[QuestionScore] {
        &self.scores
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
