//! Interactive terminal front end built on dialoguer.

use crate::driver::{AnswerSource, DriverError, IntakeForm};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};
use dpdp_checker::questionnaire::{Answer, IdentityField, Question, ValidationError};

pub(crate) struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub(crate) fn new(plain: bool) -> Self {
        let theme: Box<dyn Theme> = if plain {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Self { theme }
    }

    fn ask_text(&self, field: IdentityField, initial: &str) -> Result<String, DriverError> {
        Input::<String>::with_theme(&*self.theme)
            .with_prompt(format!("{}:", field.label()))
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(map_prompt_error)
    }
}

impl AnswerSource for DialoguerPrompter {
    fn intake(
        &mut self,
        previous: &IntakeForm,
        rejected: Option<&ValidationError>,
    ) -> Result<IntakeForm, DriverError> {
        if let Some(err) = rejected {
            println!("Error: {err}");
        }

        Ok(IntakeForm {
            institution: self.ask_text(IdentityField::Institution, &previous.institution)?,
            name: self.ask_text(IdentityField::Name, &previous.name)?,
            email: self.ask_text(IdentityField::Email, &previous.email)?,
        })
    }

    fn answer(
        &mut self,
        question: &Question,
        question_count: usize,
    ) -> Result<Answer, DriverError> {
        let choices = Answer::ordered();
        let labels: Vec<&str> = choices.iter().map(|answer| answer.label()).collect();

        let selection = Select::with_theme(&*self.theme)
            .with_prompt(format!(
                "Q{}/{}. {}",
                question.number(),
                question_count,
                question.prompt
            ))
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(map_prompt_error)?;

        selection
            .and_then(|index| choices.get(index).copied())
            .ok_or(DriverError::Cancelled)
    }
}

fn map_prompt_error(err: dialoguer::Error) -> DriverError {
    match &err {
        dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
            DriverError::Cancelled
        }
        _ => DriverError::Prompt(err),
    }
}
