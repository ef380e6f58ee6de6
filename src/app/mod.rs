// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line entry point replaying a form snapshot through the intake engine.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::logic::calendar::{self, dob_bounds, long_date};
use crate::models::field_rule::{RuleTable, load_rule_table};
use crate::models::form_values::{FormSnapshot, load_snapshot};
use crate::models::jurisdictions::JURISDICTIONS;
use crate::mvu::{IntakeModel, Msg, update};

/// Validate a patient intake form snapshot and render its review.
#[derive(Parser, Debug)]
#[command(name = "intake", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every field and print the errors.
    Validate(FormArgs),

    /// Check every field and the password policy, then print the review.
    Review {
        #[command(flatten)]
        form: FormArgs,

        /// Print the review as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the date-of-birth bounds, today's date, and the jurisdiction list.
    Init {
        /// Reference date (YYYY-MM-DD); defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Form snapshot JSON (`values`, `groups`, `checked`).
    snapshot: PathBuf,

    /// Alternative field rule table (JSON array of `{id, label, pattern, required}`).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,
}

/// Run the parsed command and return the process exit code.
///
/// `0` when the form passed (and a review was printed), `1` when validation blocked it.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Validate(args) => {
            let mut model = load_model(&args)?;
            update(&mut model, Msg::ValidateAll);
            write_errors(&mut out, &model)?;
            Ok(exit_code(model.errors.is_empty()))
        }
        Command::Review { form, json } => {
            let mut model = load_model(&form)?;
            update(&mut model, Msg::ReviewRequested);
            write_errors(&mut out, &model)?;
            if let Some(alert) = &model.alert {
                writeln!(out, "Password requirements not met:")?;
                for line in alert.lines() {
                    writeln!(out, "  - {line}")?;
                }
            }
            if let Some(review) = &model.review {
                if json {
                    let rendered =
                        serde_json::to_string_pretty(review).context("Failed to encode review")?;
                    writeln!(out, "{rendered}")?;
                } else {
                    write!(out, "{review}")?;
                }
            }
            Ok(exit_code(model.review.is_some()))
        }
        Command::Init { today } => {
            let today = today.unwrap_or_else(calendar::today);
            let bounds = dob_bounds(today);
            writeln!(out, "Today: {}", long_date(today))?;
            writeln!(
                out,
                "Date of Birth range: {} to {}",
                bounds.min_attr(),
                bounds.max_attr()
            )?;
            writeln!(out, "Jurisdictions: {}", JURISDICTIONS.join(", "))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build a model from the snapshot, replaying each value as a form event.
fn load_model(args: &FormArgs) -> Result<IntakeModel> {
    let rules = match &args.rules {
        Some(path) => load_rule_table(path)?,
        None => RuleTable::intake(),
    };
    let today = args.today.unwrap_or_else(calendar::today);
    let snapshot = load_snapshot(&args.snapshot)?;
    tracing::info!(
        snapshot = %args.snapshot.display(),
        rules = rules.len(),
        %today,
        "loaded form snapshot"
    );

    let mut model = IntakeModel::new(rules, today);
    replay(&mut model, snapshot);
    Ok(model)
}

fn replay(model: &mut IntakeModel, snapshot: FormSnapshot) {
    for (id, value) in snapshot.values.iter() {
        update(
            model,
            Msg::FieldEdited {
                id: id.to_string(),
                value: value.to_string(),
            },
        );
    }
    for (group, value) in snapshot.selections.groups() {
        update(
            model,
            Msg::OptionSelected {
                group: group.to_string(),
                value: value.to_string(),
            },
        );
    }
    for (id, value) in snapshot.selections.checked() {
        update(
            model,
            Msg::CheckboxToggled {
                id: id.to_string(),
                value: Some(value.to_string()),
            },
        );
    }
}

fn write_errors(out: &mut impl Write, model: &IntakeModel) -> Result<()> {
    for (rule, message) in model.errors.in_table_order(&model.rules) {
        writeln!(out, "{}: {message}", rule.id)?;
    }
    Ok(())
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
