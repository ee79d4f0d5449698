use std::io::Write;
use std::path::PathBuf;

use card_evaluator::applications::{
    read_applications_from_path, ApplicationEvaluator, BatchReport, CreditCardApplication,
    EvaluationOutcome, IntakeRecord, OfflineValidator, WatchlistFraudLookup,
};
use card_evaluator::config::AppConfig;
use card_evaluator::error::AppError;
use clap::Args;
use serde::Serialize;
use tracing::info;

/// Collaborator overrides shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct PolicyArgs {
    /// Override the license key reported by the offline validator
    #[arg(long)]
    pub(crate) license_key: Option<String>,
    /// Frequent-flyer number to treat as a fraud risk (repeatable)
    #[arg(long)]
    pub(crate) flag_frequent_flyer: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: u8,
    /// Gross annual income in whole currency units
    #[arg(long)]
    pub(crate) income: u64,
    /// Frequent-flyer number, omitted when the applicant has none
    #[arg(long)]
    pub(crate) frequent_flyer_number: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) policy: PolicyArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with reference,age,gross_annual_income,frequent_flyer_number columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) policy: PolicyArgs,
}

#[derive(Debug, Serialize)]
struct SingleEvaluationView<'a> {
    application: &'a CreditCardApplication,
    decision_label: &'static str,
    rule_label: &'static str,
    outcome: &'a EvaluationOutcome,
    lookups_performed: u64,
}

type CliEvaluator = ApplicationEvaluator<OfflineValidator, WatchlistFraudLookup>;

fn build_evaluator(config: &AppConfig, policy: PolicyArgs) -> CliEvaluator {
    let PolicyArgs {
        license_key,
        flag_frequent_flyer,
    } = policy;

    let license_key = license_key.unwrap_or_else(|| config.validator.license_key.clone());
    ApplicationEvaluator::new(
        Some(OfflineValidator::new(license_key)),
        WatchlistFraudLookup::new(flag_frequent_flyer),
        config.evaluation.clone(),
    )
}

pub(crate) fn run_evaluate<W: Write>(
    config: &AppConfig,
    args: EvaluateArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let EvaluateArgs {
        age,
        income,
        frequent_flyer_number,
        json,
        policy,
    } = args;

    let mut evaluator = build_evaluator(config, policy);
    let application = CreditCardApplication {
        age,
        gross_annual_income: income,
        frequent_flyer_number,
    };

    info!(age, "evaluating credit card application");
    let outcome = evaluator.assess(&application)?;

    if json {
        let view = SingleEvaluationView {
            application: &application,
            decision_label: outcome.decision.label(),
            rule_label: outcome.rule.label(),
            outcome: &outcome,
            lookups_performed: evaluator.lookup_count(),
        };
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Decision: {}", outcome.decision.label())?;
        writeln!(out, "Rule: {}", outcome.rule.label())?;
        writeln!(out, "Rationale: {}", outcome.summary)?;
        writeln!(out, "Frequent-flyer lookups: {}", evaluator.lookup_count())?;
    }

    Ok(())
}

pub(crate) fn run_batch<W: Write>(
    config: &AppConfig,
    args: BatchArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let BatchArgs {
        input,
        json,
        policy,
    } = args;

    let records = read_applications_from_path(&input)?;
    info!(path = %input.display(), count = records.len(), "loaded application batch");
    evaluate_batch(build_evaluator(config, policy), &records, json, out)
}

fn evaluate_batch<W: Write>(
    mut evaluator: CliEvaluator,
    records: &[IntakeRecord],
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let report = BatchReport::build(&mut evaluator, records)?;
    info!(
        evaluated = report.entries.len(),
        lookups = report.lookups_performed,
        "application batch evaluated"
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Credit card batch evaluation")?;
    writeln!(out, "Evaluated at: {}", report.evaluated_at.to_rfc3339())?;

    if report.entries.is_empty() {
        writeln!(out, "\nApplications: none")?;
    } else {
        writeln!(out, "\nApplications")?;
        for entry in &report.entries {
            writeln!(
                out,
                "- {}: {} ({})",
                entry.reference, entry.decision_label, entry.rationale
            )?;
        }
    }

    writeln!(out, "\nTotals")?;
    for tally in &report.tallies {
        writeln!(out, "- {}: {}", tally.decision_label, tally.count)?;
    }
    writeln!(out, "\nFrequent-flyer lookups: {}", report.lookups_performed)?;

    Ok(())
}
