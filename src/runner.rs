use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::browser;
use crate::config::HarnessConfig;
use crate::error::{self, FailureKind};
use crate::page::ScenarioPage;
use crate::scenarios::Scenario;
use crate::site::Site;

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub name: &'static str,
    pub passed: bool,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub base_url: String,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn new(base_url: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            base_url: base_url.into(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))
    }
}

/// Run one scenario inside its own browser session. If it fails and an
/// artifacts directory is configured, a screenshot is saved before the
/// browser closes.
pub async fn run_scenario(config: &HarnessConfig, scenario: &Scenario) -> Result<()> {
    let session_config = config.session_for(scenario.suite);
    let site = Site::new(config.base_url.clone());

    browser::with_page(&session_config, |page| async move {
        let page = ScenarioPage::new(page, site, config.timeouts);
        let result = scenario.run(&page).await;

        if result.is_err() {
            if let Some(dir) = &config.artifacts_dir {
                let path = dir.join(format!("{}.png", scenario.name));
                match page.screenshot(&path).await {
                    Ok(()) => tracing::info!("Saved failure screenshot to {}", path.display()),
                    Err(e) => tracing::warn!("Could not save failure screenshot: {:#}", e),
                }
            }
        }

        result
    })
    .await
}

/// Run `scenarios` one after another, each isolated in a fresh session.
/// A failing scenario never stops the ones after it.
pub async fn run_all(config: &HarnessConfig, scenarios: &[&'static Scenario]) -> RunReport {
    let mut outcomes = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        tracing::info!("Running {} ({})", scenario.name, scenario.route.path());
        let started = Instant::now();
        let result = run_scenario(config, scenario).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let outcome = match result {
            Ok(()) => {
                tracing::info!("PASS {} in {}ms", scenario.name, duration_ms);
                Outcome {
                    name: scenario.name,
                    passed: true,
                    duration_ms,
                    failure_kind: None,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("FAIL {} in {}ms: {:#}", scenario.name, duration_ms, e);
                Outcome {
                    name: scenario.name,
                    passed: false,
                    duration_ms,
                    failure_kind: Some(error::classify(&e)),
                    error: Some(format!("{:#}", e)),
                }
            }
        };
        outcomes.push(outcome);
    }

    let report = RunReport::new(config.base_url.clone(), outcomes);
    tracing::info!(
        "{} passed, {} failed ({} total)",
        report.passed,
        report.failed,
        report.outcomes.len()
    );
    report
}
