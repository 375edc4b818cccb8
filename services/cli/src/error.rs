use crate::driver::DriverError;
use dpdp_checker::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error("failed to encode results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
