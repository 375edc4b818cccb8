pub mod config;
pub mod error;
pub mod export;
pub mod questionnaire;
pub mod telemetry;
