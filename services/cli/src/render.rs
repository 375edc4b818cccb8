use dpdp_checker::export::ExportReport;
use dpdp_checker::questionnaire::{ExportRecord, QuestionBank};
use std::fmt::Write as _;

pub(crate) fn welcome_banner() -> String {
    let mut banner = String::new();
    writeln!(banner, "Welcome to DPDP Compliance Checker").expect("write banner");
    writeln!(
        banner,
        "Answer each question with Yes, Partial, or No. Results are saved when the questionnaire ends."
    )
    .expect("write instructions");
    banner
}

pub(crate) fn question_listing(bank: &QuestionBank) -> String {
    let mut listing = String::new();
    writeln!(listing, "DPDP questionnaire ({} questions)", bank.len()).expect("write heading");
    for question in bank.iter() {
        writeln!(listing, "Q{}. {}", question.number(), question.prompt)
            .expect("write question");
    }
    listing
}

pub(crate) fn results_summary(record: &ExportRecord) -> String {
    let respondent = record.respondent();
    let mut summary = String::new();

    writeln!(summary, "DPDP Compliance Results").expect("write title");
    writeln!(summary, "Institution: {}", respondent.institution).expect("write institution");
    writeln!(summary, "User Name: {}", respondent.name).expect("write name");
    writeln!(summary, "Email: {}", respondent.email).expect("write email");
    writeln!(
        summary,
        "Total Score: {} / {}",
        record.total_score(),
        record.question_count()
    )
    .expect("write total");
    writeln!(
        summary,
        "Compliance Percentage: {:.2}%",
        record.percentage()
    )
    .expect("write percentage");
    writeln!(summary, "Risk Level: {}", record.risk_tier().label()).expect("write risk");

    summary
}

pub(crate) fn export_summary(report: &ExportReport) -> String {
    let mut summary = String::new();

    for path in &report.written {
        writeln!(summary, "Saved {}", path.display()).expect("write saved path");
    }
    for failure in &report.failures {
        writeln!(
            summary,
            "Could not save {} export to {}: {}",
            failure.sink,
            failure.path.display(),
            failure.error
        )
        .expect("write failure");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dpdp_checker::questionnaire::{
        begin_session, build_record, classify, Answer, ExportTimestamp,
    };

    #[test]
    fn results_summary_matches_results_screen() {
        let bank = QuestionBank::standard();
        let mut session =
            begin_session(bank, "Acme", "Jane", "j@acme.com").expect("valid intake");
        for _ in 0..bank.len() {
            session.record_answer(Answer::Partial).expect("question available");
        }
        let result = classify(session.total(), session.question_count()).expect("classified");
        let timestamp = ExportTimestamp::at(
            NaiveDate::from_ymd_opt(2025, 2, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid timestamp"),
        );
        let record =
            build_record(&session, result.tier, result.percentage, timestamp).expect("record");

        let summary = results_summary(&record);
        assert!(summary.contains("Total Score: 7 / 14\n"));
        assert!(summary.contains("Compliance Percentage: 50.00%\n"));
        assert!(summary.contains("Risk Level: Medium Risk (Partially Compliant)\n"));
    }

    #[test]
    fn question_listing_numbers_every_prompt() {
        let bank = QuestionBank::from_prompts(["first?", "second?"]);
        assert_eq!(
            question_listing(&bank),
            "DPDP questionnaire (2 questions)\nQ1. first?\nQ2. second?\n"
        );
    }
}
