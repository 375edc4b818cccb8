use crate::export::ExportFormat;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the checker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub export: ExportConfig,
    pub prompts: PromptConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let output_dir = env::var("DPDP_OUTPUT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let formats = match env::var("DPDP_EXPORT_FORMATS") {
            Ok(raw) => parse_formats(&raw)?,
            Err(_) => ExportFormat::ordered().to_vec(),
        };

        let plain = env::var("DPDP_PLAIN_PROMPTS")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let log_level = env::var("DPDP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            export: ExportConfig {
                output_dir,
                formats,
            },
            prompts: PromptConfig { plain },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where results are written and in which formats.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub formats: Vec<ExportFormat>,
}

/// Terminal prompt presentation.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub plain: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_formats(raw: &str) -> Result<Vec<ExportFormat>, ConfigError> {
    let mut formats = Vec::new();
    for name in raw.split(',').filter(|name| !name.trim().is_empty()) {
        let format = name
            .parse::<ExportFormat>()
            .map_err(ConfigError::UnknownExportFormat)?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }

    if formats.is_empty() {
        return Err(ConfigError::NoExportFormats);
    }

    Ok(formats)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownExportFormat(String),
    NoExportFormats,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownExportFormat(name) => write!(
                f,
                "DPDP_EXPORT_FORMATS contains unknown format '{}' (expected csv or html)",
                name
            ),
            ConfigError::NoExportFormats => {
                write!(f, "DPDP_EXPORT_FORMATS must name at least one format")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
