//! Full harness run command.

use crate::report::print_result;
use anyhow::{bail, Context, Result};
use apicheck_core::{Config, Harness, HarnessEvent, HttpTransport};
use console::style;
use std::path::Path;
use tracing::debug;

/// Run every stage against the configured API.
///
/// Returns an error when any check failed so the process exits non-zero.
pub fn run(config_path: &Path, base_url: Option<String>, delay_ms: Option<u64>) -> Result<()> {
    let mut config = Config::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(url) = base_url {
        config.api.base_url = url;
    }
    if let Some(ms) = delay_ms {
        config.run.stage_delay_ms = ms;
    }
    config.validate()?;
    debug!(
        base_url = %config.api.base_url,
        stage_delay_ms = config.run.stage_delay_ms,
        "configuration loaded"
    );

    let transport = HttpTransport::new(&config.api.base_url, config.api.request_timeout())
        .context("Failed to build HTTP client")?;

    println!("{}", style("Starting API tests...").cyan());
    println!("Target: {}", style(transport.base_url()).cyan());

    let report = Harness::new(transport, config).run_with(&mut |event| match event {
        HarnessEvent::StageStarted(stage) => println!("\n{}", stage.banner()),
        HarnessEvent::Step { result, .. } => print_result(result),
    });

    println!("\n{}", style("Tests completed!").cyan());
    println!();

    if report.all_passed() {
        println!("{} {}", style("✓").green(), style(report.summary()).green());
        return Ok(());
    }

    println!("{}", style(report.summary()).yellow().bold());
    println!();
    println!("{}", style("Failed checks:").red().bold());
    for (stage, result) in report.failures() {
        println!(
            "  {} [{}] {}",
            style("×").red(),
            stage.name(),
            result.message
        );
    }

    let mut hints: Vec<&str> = report.failures().filter_map(|(_, r)| r.hint).collect();
    hints.sort_unstable();
    hints.dedup();
    if !hints.is_empty() {
        println!();
        for hint in hints {
            println!("  {} {}", style("→").cyan(), hint);
        }
    }

    bail!("{} of {} checks failed", report.failed(), report.passed() + report.failed())
}
