use super::{ExportError, ExportSink};
use crate::questionnaire::ExportRecord;
use std::fmt::Write as _;
use std::io::Write;

const DOCUMENT_TITLE: &str = "DPDP Compliance Results";

/// Printable single-page HTML report.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentSink;

impl ExportSink for HtmlDocumentSink {
    fn label(&self) -> &'static str {
        "document"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn write_record(&self, record: &ExportRecord, out: &mut dyn Write) -> Result<(), ExportError> {
        out.write_all(render_document(record).as_bytes())?;
        Ok(())
    }
}

pub(crate) fn render_document(record: &ExportRecord) -> String {
    let respondent = record.respondent();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    writeln!(html, "  <title>{DOCUMENT_TITLE}</title>").expect("write title");
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n");

    writeln!(html, "<h1>{DOCUMENT_TITLE}</h1>").expect("write heading");

    let summary_lines = [
        format!("Institution: {}", respondent.institution),
        format!("User Name: {}", respondent.name),
        format!("Email: {}", respondent.email),
        format!(
            "Total Score: {} / {}",
            record.total_score(),
            record.question_count()
        ),
        format!("Compliance Percentage: {:.2}%", record.percentage()),
        format!("Risk Level: {}", record.risk_tier().label()),
        format!("Timestamp: {}", record.timestamp()),
    ];
    html.push_str("<section class=\"summary\">\n");
    for line in &summary_lines {
        writeln!(html, "  <p>{}</p>", escape_html(line)).expect("write summary line");
    }
    html.push_str("</section>\n");

    html.push_str("<h2>Question-wise Scores:</h2>\n<ol class=\"scores\">\n");
    for (number, entry) in (1..).zip(record.entries()) {
        let line = format!("Q{number}. {} --> Score: {}", entry.prompt, entry.score);
        writeln!(html, "  <li>{}</li>", escape_html(&line)).expect("write score line");
    }
    html.push_str("</ol>\n</body>\n</html>\n");

    html
}

const STYLES: &str = "  <style>
    body { font-family: Arial, Helvetica, sans-serif; font-size: 12pt; margin: 2cm; }
    h1 { text-align: center; font-size: 16pt; }
    h2 { font-size: 12pt; margin-top: 1.5em; }
    .summary p { margin: 0.4em 0; }
    ol.scores { list-style: none; padding-left: 0; }
    ol.scores li { margin: 0.4em 0; }
    @media print { body { margin: 1cm; } }
  </style>
";

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
