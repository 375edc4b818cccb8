use crate::driver::{run_session, AnswerSource, IntakeForm, ScriptedAnswers};
use crate::error::CliError;
use crate::prompt::DialoguerPrompter;
use crate::render;
use clap::{Args, Parser, Subcommand};
use dpdp_checker::config::AppConfig;
use dpdp_checker::error::AppError;
use dpdp_checker::export::Exporter;
use dpdp_checker::questionnaire::{
    build_record, classify, Answer, ExportRecord, ExportTimestamp, QuestionBank,
    QuestionnaireError,
};
use dpdp_checker::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "dpdp-checker",
    about = "Digital Personal Data Protection compliance self-assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the questionnaire interactively (default command)
    Run(RunArgs),
    /// Score a questionnaire from command-line answers without prompting
    Score(ScoreArgs),
    /// Print the numbered question list
    Questions,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Directory for the exported result files (overrides DPDP_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Show the results without writing any export files
    #[arg(long)]
    no_export: bool,
    /// Also print the export record as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Use an uncoloured prompt theme
    #[arg(long)]
    plain: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Company or institution name
    #[arg(long)]
    institution: String,
    /// Respondent name
    #[arg(long)]
    name: String,
    /// Respondent email
    #[arg(long)]
    email: String,
    /// Comma-separated answers in question order (yes, partial, no)
    #[arg(long, value_delimiter = ',', required = true)]
    answers: Vec<Answer>,
    #[command(flatten)]
    output: OutputArgs,
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    let config = AppConfig::load().map_err(AppError::from)?;
    telemetry::init(&config.telemetry).map_err(AppError::from)?;

    let bank = QuestionBank::standard();
    match command {
        Command::Questions => {
            print!("{}", render::question_listing(bank));
            Ok(())
        }
        Command::Run(args) => {
            print!("{}", render::welcome_banner());
            let mut prompter = DialoguerPrompter::new(args.plain || config.prompts.plain);
            complete(bank, &mut prompter, &args.output, &config)
        }
        Command::Score(args) => {
            let form = IntakeForm {
                institution: args.institution,
                name: args.name,
                email: args.email,
            };
            let mut script = ScriptedAnswers::new(form, args.answers);
            complete(bank, &mut script, &args.output, &config)
        }
    }
}

fn complete(
    bank: &QuestionBank,
    source: &mut dyn AnswerSource,
    output: &OutputArgs,
    config: &AppConfig,
) -> Result<(), CliError> {
    let session = run_session(bank, source)?;
    let result = classify(session.total(), session.question_count())
        .map_err(QuestionnaireError::from)
        .map_err(AppError::from)?;
    info!(
        percentage = result.percentage,
        tier = result.tier.label(),
        "compliance session classified"
    );

    let timestamp = ExportTimestamp::capture();
    let record = build_record(&session, result.tier, result.percentage, timestamp)
        .map_err(QuestionnaireError::from)
        .map_err(AppError::from)?;

    println!();
    print!("{}", render::results_summary(&record));
    if output.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    if output.no_export {
        return Ok(());
    }
    export(&record, output, config)
}

fn export(record: &ExportRecord, output: &OutputArgs, config: &AppConfig) -> Result<(), CliError> {
    let output_dir = output
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let exporter = Exporter::from_formats(output_dir, &config.export.formats);

    let report = exporter.export(record);
    print!("{}", render::export_summary(&report));

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::Export(report.failures).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_interactive_run() {
        let cli = Cli::try_parse_from(["dpdp-checker"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_parses_answer_list() {
        let cli = Cli::try_parse_from([
            "dpdp-checker",
            "score",
            "--institution",
            "Acme",
            "--name",
            "Jane",
            "--email",
            "j@acme.com",
            "--answers",
            "yes,p,No,0.5",
            "--no-export",
        ])
        .expect("score arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(
                    args.answers,
                    vec![Answer::Yes, Answer::Partial, Answer::No, Answer::Partial]
                );
                assert!(args.output.no_export);
                assert!(!args.output.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn score_rejects_unknown_answers() {
        let err = Cli::try_parse_from([
            "dpdp-checker",
            "score",
            "--institution",
            "Acme",
            "--name",
            "Jane",
            "--email",
            "j@acme.com",
            "--answers",
            "yes,maybe",
        ])
        .expect_err("unknown answer rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
