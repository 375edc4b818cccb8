use crate::config::ConfigError;
use crate::export::ExportFailure;
use crate::questionnaire::QuestionnaireError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Questionnaire(QuestionnaireError),
    Export(Vec<ExportFailure>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Questionnaire(err) => write!(f, "questionnaire error: {}", err),
            AppError::Export(failures) => {
                let detail = failures
                    .iter()
                    .map(|failure| {
                        format!(
                            "{} ({}): {}",
                            failure.sink,
                            failure.path.display(),
                            failure.error
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "export error: {}", detail)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Questionnaire(err) => Some(err),
            AppError::Export(failures) => failures
                .first()
                .map(|failure| &failure.error as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<QuestionnaireError> for AppError {
    fn from(value: QuestionnaireError) -> Self {
        Self::Questionnaire(value)
    }
}
