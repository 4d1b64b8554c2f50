use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_macro_audit_rs::cli::{Cli, Command, DayKind};
use meal_macro_audit_rs::error::{AuditError, Result};
use meal_macro_audit_rs::interface::{
    display_accuracy_report, display_lookup, display_plan, display_reconcile_summary,
    display_targets, prompt_body_weight, prompt_training_day, prompt_yes_no,
    validate_body_weight,
};
use meal_macro_audit_rs::planner::{compute_targets, validate, TolerancePolicy};
use meal_macro_audit_rs::reconcile::Reconciler;
use meal_macro_audit_rs::reference::{CachedSource, FdcClient, LocalTable, ReferenceSource};
use meal_macro_audit_rs::state::{load_plan, save_plan};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Targets { weight, day, date } => cmd_targets(weight, day, date),
        Command::Audit {
            offline,
            tolerance,
            table,
        } => cmd_audit(&cli.file, offline, tolerance, table.as_deref()),
        Command::Lookup {
            name,
            amount,
            unit,
            offline,
            table,
        } => cmd_lookup(&name, amount, &unit, offline, table.as_deref()),
    }
}

/// Compute and display daily targets.
fn cmd_targets(weight: Option<f64>, day: Option<DayKind>, date: Option<String>) -> Result<()> {
    let weight = match weight {
        Some(w) => {
            validate_body_weight(w)?;
            w
        }
        None => prompt_body_weight()?,
    };

    let is_training_day = match day {
        Some(DayKind::Training) => true,
        Some(DayKind::Rest) => false,
        None => prompt_training_day()?,
    };

    let date = parse_date(date)?;
    let target = compute_targets(weight, is_training_day, date)?;
    display_targets(&target);
    Ok(())
}

/// Audit a day plan: reconcile, re-sum, score accuracy, offer to save.
fn cmd_audit(
    file_path: &str,
    offline: bool,
    tolerance: Option<f64>,
    table: Option<&str>,
) -> Result<()> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Day plan file not found: {}", file_path);
        eprintln!("Provide one with --file or create day_plan.json in the current directory.");
        return Ok(());
    }

    if let Some(t) = tolerance {
        if !t.is_finite() || t < 0.0 {
            return Err(AuditError::InvalidInput(format!(
                "tolerance must be a non-negative percentage, got {}",
                t
            )));
        }
    }

    let mut plan = load_plan(path)?;
    println!("Loaded plan for {} ({})", plan.date, plan.day_type);

    let source = CachedSource::with_default_ttl(build_source(offline, table)?);
    let reconciler = Reconciler::new(&source);
    let summary = reconciler.reconcile_plan(&mut plan);

    let policy = tolerance.map(TolerancePolicy::uniform).unwrap_or_default();
    let report = validate(&plan.daily_totals, &plan.total_targets.totals(), &policy);

    display_plan(&plan);
    display_reconcile_summary(&summary);
    display_accuracy_report(&report);

    if summary.corrected > 0 {
        let save = prompt_yes_no("Save corrected plan?", true)?;
        if save {
            save_plan(path, &plan)?;
            println!("Plan saved.");
        }
    }

    Ok(())
}

/// Query the reference source for a single food.
fn cmd_lookup(
    name: &str,
    amount: f64,
    unit: &str,
    offline: bool,
    table: Option<&str>,
) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AuditError::InvalidInput(format!(
            "amount must be positive, got {}",
            amount
        )));
    }

    let source = build_source(offline, table)?;
    let outcome = source.lookup(name, amount, unit)?;
    display_lookup(name, amount, unit, &outcome);
    Ok(())
}

/// Pick the reference source: explicit CSV table, the HTTP client when an
/// API key is configured, otherwise the built-in table.
fn build_source(offline: bool, table: Option<&str>) -> Result<Box<dyn ReferenceSource>> {
    if let Some(path) = table {
        return Ok(Box::new(LocalTable::from_csv_path(path)?));
    }

    if !offline {
        if let Some(client) = FdcClient::from_env()? {
            return Ok(Box::new(client));
        }
        println!("No FDC_API_KEY configured; using the built-in reference table.");
    }

    Ok(Box::new(LocalTable::builtin()?))
}

fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|e| AuditError::InvalidInput(format!("invalid date '{}': {}", s, e))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
