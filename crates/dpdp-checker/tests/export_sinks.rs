use chrono::NaiveDate;
use dpdp_checker::export::{
    CsvSink, ExportError, ExportFormat, ExportSink, Exporter, HtmlDocumentSink,
};
use dpdp_checker::questionnaire::{
    begin_session, build_record, classify, Answer, ExportRecord, ExportTimestamp, QuestionBank,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn scratch_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "dpdp-export-{label}-{}-{nanos}",
        std::process::id()
    ))
}

fn completed_record() -> ExportRecord {
    let bank = QuestionBank::standard();
    let mut session =
        begin_session(bank, "Acme Health", "Jane Doe", "jane@acme.example").expect("intake");
    for position in 0..bank.len() {
        let answer = if position % 2 == 0 {
            Answer::Yes
        } else {
            Answer::Partial
        };
        session.record_answer(answer).expect("question available");
    }
    let result = classify(session.total(), session.question_count()).expect("classified");
    let timestamp = ExportTimestamp::at(
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .and_then(|date| date.and_hms_opt(8, 15, 42))
            .expect("valid timestamp"),
    );
    build_record(&session, result.tier, result.percentage, timestamp).expect("record")
}

#[derive(Debug)]
struct BrokenSink;

impl ExportSink for BrokenSink {
    fn label(&self) -> &'static str {
        "broken"
    }

    fn extension(&self) -> &'static str {
        "bin"
    }

    fn write_record(&self, _record: &ExportRecord, _out: &mut dyn Write) -> Result<(), ExportError> {
        Err(ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }
}

#[test]
fn both_sinks_share_the_captured_timestamp() {
    let dir = scratch_dir("shared");
    let exporter = Exporter::from_formats(&dir, &ExportFormat::ordered());
    let record = completed_record();

    let report = exporter.export(&record);
    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(
        report.written,
        vec![
            dir.join("dpdp_results_20251001_081542.csv"),
            dir.join("dpdp_results_20251001_081542.html"),
        ]
    );

    let contents = fs::read_to_string(&report.written[0]).expect("csv readable");
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(headers.len(), 7 + 14);
    assert_eq!(&headers[6], "Timestamp");
    assert_eq!(
        &headers[7],
        "Is explicit consent taken before collecting personal data?"
    );
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("data rows parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][3], "10.5");
    assert_eq!(&rows[0][4], "75.00");
    assert_eq!(&rows[0][6], "20251001_081542");

    let html = fs::read_to_string(&report.written[1]).expect("document readable");
    assert!(html.contains("Timestamp: 20251001_081542"));
    assert!(html.contains("Q14. Is a contact person or grievance officer available? --&gt; Score: 0.5"));

    fs::remove_dir_all(&dir).expect("scratch dir removed");
}

#[test]
fn a_failing_sink_does_not_block_the_others() {
    let dir = scratch_dir("isolation");
    let sinks: Vec<Box<dyn ExportSink>> = vec![
        Box::new(BrokenSink) as Box<dyn ExportSink>,
        Box::new(CsvSink) as Box<dyn ExportSink>,
        Box::new(HtmlDocumentSink) as Box<dyn ExportSink>,
    ];
    let exporter = Exporter::new(&dir, sinks);
    let record = completed_record();

    let report = exporter.export(&record);
    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].sink, "broken");
    assert_eq!(report.written.len(), 2);
    assert!(report.written.iter().all(|path| path.exists()));

    // The record is untouched and can be handed to a sink again.
    let retry = Exporter::new(&dir, vec![Box::new(CsvSink) as Box<dyn ExportSink>]).export(&record);
    assert!(retry.is_success());
    assert_eq!(retry.written, vec![report.written[0].clone()]);

    fs::remove_dir_all(&dir).expect("scratch dir removed");
}
