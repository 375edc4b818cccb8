mod document;
mod tabular;

pub use document::HtmlDocumentSink;
pub use tabular::CsvSink;

use crate::questionnaire::ExportRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode tabular export: {0}")]
    Csv(#[from] csv::Error),
}

/// Writer that persists a finished record in one durable format.
pub trait ExportSink: Debug {
    fn label(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn write_record(&self, record: &ExportRecord, out: &mut dyn Write) -> Result<(), ExportError>;
}

/// Formats selectable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Html,
}

impl ExportFormat {
    pub const fn ordered() -> [Self; 2] {
        [Self::Csv, Self::Html]
    }

    pub fn sink(self) -> Box<dyn ExportSink> {
        match self {
            Self::Csv => Box::new(CsvSink),
            Self::Html => Box::new(HtmlDocumentSink),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            other => Err(other.to_string()),
        }
    }
}

/// Sink that could not persist the record.
#[derive(Debug)]
pub struct ExportFailure {
    pub sink: &'static str,
    pub path: PathBuf,
    pub error: ExportError,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes one record to every configured sink. Sinks are independent: a failure in
/// one is reported and the remaining sinks still run.
#[derive(Debug)]
pub struct Exporter {
    output_dir: PathBuf,
    sinks: Vec<Box<dyn ExportSink>>,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, sinks: Vec<Box<dyn ExportSink>>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sinks,
        }
    }

    pub fn from_formats(output_dir: impl Into<PathBuf>, formats: &[ExportFormat]) -> Self {
        Self::new(
            output_dir,
            formats.iter().map(|format| format.sink()).collect(),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, record: &ExportRecord, sink: &dyn ExportSink) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", record.file_stem(), sink.extension()))
    }

    pub fn export(&self, record: &ExportRecord) -> ExportReport {
        let mut report = ExportReport::default();

        if let Err(err) = fs::create_dir_all(&self.output_dir) {
            warn!(dir = %self.output_dir.display(), %err, "unable to create export directory");
        }

        for sink in &self.sinks {
            let path = self.path_for(record, sink.as_ref());
            match write_file(&path, record, sink.as_ref()) {
                Ok(()) => {
                    info!(sink = sink.label(), path = %path.display(), "export written");
                    report.written.push(path);
                }
                Err(error) => {
                    warn!(sink = sink.label(), path = %path.display(), %error, "export failed");
                    report.failures.push(ExportFailure {
                        sink: sink.label(),
                        path,
                        error,
                    });
                }
            }
        }

        report
    }
}

fn write_file(path: &Path, record: &ExportRecord, sink: &dyn ExportSink) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    sink.write_record(record, &mut writer)?;
    writer.flush()?;
    Ok(())
}
