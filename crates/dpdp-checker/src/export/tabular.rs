use super::{ExportError, ExportSink};
use crate::questionnaire::ExportRecord;
use std::io::Write;

/// Single-row spreadsheet export: a header line of column names, then the values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl ExportSink for CsvSink {
    fn label(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_record(&self, record: &ExportRecord, out: &mut dyn Write) -> Result<(), ExportError> {
        let (headers, values): (Vec<String>, Vec<String>) = record.columns().into_iter().unzip();

        let mut writer = csv::WriterBuilder::new().from_writer(out);
        writer.write_record(&headers)?;
        writer.write_record(&values)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{
        begin_session, build_record, classify, Answer, ExportTimestamp, QuestionBank,
    };
    use chrono::NaiveDate;

    #[test]
    fn writes_header_and_one_quoted_row() {
        let bank = QuestionBank::from_prompts(["Consent, before collection?", "Retention?"]);
        let mut session =
            begin_session(&bank, "Acme Ltd", "Jane", "j@acme.com").expect("valid intake");
        session.record_answer(Answer::Yes).expect("q1");
        session.record_answer(Answer::Partial).expect("q2");
        let result = classify(session.total(), session.question_count()).expect("classified");
        let timestamp = ExportTimestamp::at(
            NaiveDate::from_ymd_opt(2025, 1, 2)
                .and_then(|date| date.and_hms_opt(3, 4, 5))
                .expect("valid timestamp"),
        );
        let record =
            build_record(&session, result.tier, result.percentage, timestamp).expect("record");

        let mut buffer = Vec::new();
        CsvSink
            .write_record(&record, &mut buffer)
            .expect("csv written");
        let output = String::from_utf8(buffer).expect("utf8 output");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Institution,User Name,Email,Total Score,Compliance Percentage,Risk Level,Timestamp,\"Consent, before collection?\",Retention?"
        );
        assert_eq!(
            lines[1],
            "Acme Ltd,Jane,j@acme.com,1.5,75.00,Medium Risk (Partially Compliant),20250102_030405,1,0.5"
        );
    }
}
