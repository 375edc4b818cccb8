use dpdp_checker::questionnaire::{
    begin_session, Answer, Question, QuestionBank, QuestionnaireError, SessionState,
    ValidationError,
};
use std::collections::VecDeque;
use tracing::warn;

/// Raw identity values as typed by the respondent, before trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IntakeForm {
    pub(crate) institution: String,
    pub(crate) name: String,
    pub(crate) email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("questionnaire cancelled by user")]
    Cancelled,
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error("only {provided} answers supplied for {question_count} questions")]
    ScriptExhausted {
        provided: usize,
        question_count: usize,
    },
    #[error("{0} answers supplied beyond the last question")]
    UnusedAnswers(usize),
}

/// Front end that collects intake details and one choice per question.
pub(crate) trait AnswerSource {
    /// Collects identity fields. `previous` holds the last submitted values and
    /// `rejected` the reason they were refused, so nothing typed is lost on re-prompt.
    fn intake(
        &mut self,
        previous: &IntakeForm,
        rejected: Option<&ValidationError>,
    ) -> Result<IntakeForm, DriverError>;

    fn answer(&mut self, question: &Question, question_count: usize)
        -> Result<Answer, DriverError>;

    fn finish(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}

/// Walks intake and every question in order, returning the completed session.
pub(crate) fn run_session<'q>(
    bank: &'q QuestionBank,
    source: &mut dyn AnswerSource,
) -> Result<SessionState<'q>, DriverError> {
    let mut form = IntakeForm::default();
    let mut rejected: Option<ValidationError> = None;

    let mut session = loop {
        form = source.intake(&form, rejected.as_ref())?;
        match begin_session(bank, &form.institution, &form.name, &form.email) {
            Ok(session) => break session,
            Err(err) => {
                warn!(%err, "intake rejected");
                rejected = Some(err);
            }
        }
    };

    while let Some(question) = session.current_question() {
        let answer = source.answer(question, session.question_count())?;
        session
            .record_answer(answer)
            .map_err(QuestionnaireError::from)?;
    }

    source.finish()?;
    Ok(session)
}

/// Non-interactive source fed from command-line arguments.
#[derive(Debug)]
pub(crate) struct ScriptedAnswers {
    form: IntakeForm,
    answers: VecDeque<Answer>,
    consumed: usize,
}

impl ScriptedAnswers {
    pub(crate) fn new(form: IntakeForm, answers: Vec<Answer>) -> Self {
        Self {
            form,
            answers: answers.into(),
            consumed: 0,
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn intake(
        &mut self,
        _previous: &IntakeForm,
        rejected: Option<&ValidationError>,
    ) -> Result<IntakeForm, DriverError> {
        // A script cannot be re-prompted, so a rejected intake is final.
        if let Some(err) = rejected {
            return Err(QuestionnaireError::from(err.clone()).into());
        }
        Ok(self.form.clone())
    }

    fn answer(
        &mut self,
        _question: &Question,
        question_count: usize,
    ) -> Result<Answer, DriverError> {
        let answer = self
            .answers
            .pop_front()
            .ok_or(DriverError::ScriptExhausted {
                provided: self.consumed,
                question_count,
            })?;
        self.consumed += 1;
        Ok(answer)
    }

    fn finish(&mut self) -> Result<(), DriverError> {
        if self.answers.is_empty() {
            Ok(())
        } else {
            Err(DriverError::UnusedAnswers(self.answers.len()))
        }
    }
}
