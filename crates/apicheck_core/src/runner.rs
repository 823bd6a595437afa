//! Runs every stage in order and aggregates their results.

use crate::client::ApiClient;
use crate::config::Config;
use crate::session::SessionContext;
use crate::stages::Stage;
use crate::transport::Transport;
use crate::types::StepResult;
use std::time::Duration;
use tracing::{info, warn};

/// Progress notifications emitted while a run executes.
#[derive(Debug)]
pub enum HarnessEvent<'a> {
    StageStarted(Stage),
    Step {
        stage: Stage,
        result: &'a StepResult,
    },
}

/// Results of one stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: Stage,
    pub results: Vec<StepResult>,
}

/// Aggregated outcome of a full run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stages: Vec<StageReport>,
    /// Session state as the last stage left it.
    pub session: SessionContext,
}

impl RunReport {
    /// All results in execution order, tagged with their stage.
    pub fn results(&self) -> impl Iterator<Item = (Stage, &StepResult)> {
        self.stages
            .iter()
            .flat_map(|report| report.results.iter().map(move |r| (report.stage, r)))
    }

    pub fn results_for(&self, stage: Stage) -> &[StepResult] {
        self.stages
            .iter()
            .find(|report| report.stage == stage)
            .map(|report| report.results.as_slice())
            .unwrap_or(&[])
    }

    pub fn passed(&self) -> usize {
        self.results().filter(|(_, r)| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results().filter(|(_, r)| !r.success).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (Stage, &StepResult)> {
        self.results().filter(|(_, r)| !r.success)
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary(&self) -> String {
        format!("{} checks passed, {} failed", self.passed(), self.failed())
    }
}

/// Drives one run of the fixed stage sequence.
///
/// The session context is created with the harness and every stage runs
/// regardless of how earlier stages fared, so cleanup always gets its turn.
pub struct Harness<T> {
    client: ApiClient<T>,
    config: Config,
    session: SessionContext,
    stage_delay: Duration,
}

impl<T: Transport> Harness<T> {
    pub fn new(transport: T, config: Config) -> Self {
        let session = SessionContext::new(
            config.accounts.admin.clone(),
            config.accounts.user.clone(),
        );
        let stage_delay = config.run.stage_delay();
        Self {
            client: ApiClient::new(transport),
            config,
            session,
            stage_delay,
        }
    }

    /// Override the pause between stages.
    pub fn with_stage_delay(mut self, delay: Duration) -> Self {
        self.stage_delay = delay;
        self
    }

    /// Run all stages without observing progress.
    pub fn run(self) -> RunReport {
        self.run_with(&mut |_| {})
    }

    /// Run all stages, reporting progress to `observer` as it happens.
    pub fn run_with(mut self, observer: &mut dyn FnMut(HarnessEvent<'_>)) -> RunReport {
        let mut stages = Vec::with_capacity(Stage::ALL.len());

        for (i, stage) in Stage::ALL.into_iter().enumerate() {
            if i > 0 && !self.stage_delay.is_zero() {
                std::thread::sleep(self.stage_delay);
            }

            info!(stage = stage.name(), "stage started");
            observer(HarnessEvent::StageStarted(stage));

            let results = stage.run(&self.client, &mut self.session, &self.config);
            for result in &results {
                if !result.success {
                    warn!(
                        stage = stage.name(),
                        message = %result.message,
                        detail = result.detail.as_deref().unwrap_or(""),
                        "check failed"
                    );
                }
                observer(HarnessEvent::Step { stage, result });
            }

            info!(
                stage = stage.name(),
                passed = results.iter().filter(|r| r.success).count(),
                total = results.len(),
                "stage finished"
            );
            stages.push(StageReport { stage, results });
        }

        RunReport {
            stages,
            session: self.session,
        }
    }
}
