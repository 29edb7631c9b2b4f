//! Subcommand implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use ppv_engine::RuleEngine;
use ppv_ingest::{RuleSetConfig, load_combined, load_section_dir};
use ppv_model::{ConfigReport, Verdict, VerdictStatus};
use ppv_report::{build_disclosure, write_disclosure_json};

use crate::cli::{ConfigArgs, ValidateArgs};

pub struct ValidateResult {
    pub verdicts: BTreeMap<String, Verdict>,
    pub report_path: Option<PathBuf>,
}

impl ValidateResult {
    pub fn count(&self, status: VerdictStatus) -> usize {
        self.verdicts
            .values()
            .filter(|verdict| verdict.status == status)
            .count()
    }
}

pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidateResult> {
    let config = RuleSetConfig::from_path(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let engine = RuleEngine::new(config.rules, config.fields);
    warn_on_config_findings(engine.config_report());

    let context = if args.loan_doc.is_dir() {
        load_section_dir(&args.loan_doc)
    } else {
        load_combined(&args.loan_doc)
    }
    .with_context(|| format!("loading loan document {}", args.loan_doc.display()))?;

    let verdicts = engine.evaluate(&context);

    let report_path = match &args.output_dir {
        Some(output_dir) => {
            let payload = build_disclosure(&context, engine.resolver(), &verdicts);
            let path = write_disclosure_json(output_dir, &payload)
                .context("writing disclosure report")?;
            info!(path = %path.display(), "wrote disclosure report");
            Some(path)
        }
        None => None,
    };

    Ok(ValidateResult {
        verdicts,
        report_path,
    })
}

pub fn run_rules(args: &ConfigArgs) -> anyhow::Result<()> {
    let config = RuleSetConfig::from_path(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let engine = RuleEngine::new(config.rules, config.fields);
    warn_on_config_findings(engine.config_report());
    crate::summary::print_rules(&engine);
    Ok(())
}

/// Returns the config report so the caller can set the exit code.
pub fn run_check_config(args: &ConfigArgs) -> anyhow::Result<ConfigReport> {
    let config = RuleSetConfig::from_path(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let rule_count = config.rules.len();
    let engine = RuleEngine::new(config.rules, config.fields);
    let report = engine.config_report().clone();

    if report.is_clean() {
        println!(
            "{}: {} rules, no findings",
            args.config.display(),
            rule_count
        );
    } else {
        println!(
            "{}: {} rules, {} errors, {} warnings",
            args.config.display(),
            rule_count,
            report.error_count(),
            report.warning_count()
        );
        for issue in &report.issues {
            println!("  [{}] {}: {}", issue.severity, issue.rule_id, issue.message);
        }
    }
    Ok(report)
}

fn warn_on_config_findings(report: &ConfigReport) {
    for issue in &report.issues {
        tracing::warn!(rule_id = %issue.rule_id, severity = %issue.severity, "{}", issue.message);
    }
}
