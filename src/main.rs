use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use demoqa_e2e::config::{HarnessConfig, Timeouts, DEFAULT_BASE_URL};
use demoqa_e2e::{runner, scenarios};

/// demoqa-e2e: end-to-end browser scenarios for the demoqa.com practice site
#[derive(Parser)]
#[command(name = "demoqa-e2e", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available scenarios
    List,
    /// Run scenarios, each in a fresh browser session
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Site to test; a file:// URL points at local copies of the pages
    #[arg(long, env = "DEMOQA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Run Chrome with a visible window (default: headless)
    #[arg(long, env = "DEMOQA_HEADED")]
    headed: bool,

    /// Pass --no-sandbox to Chrome (containers, CI)
    #[arg(long, env = "DEMOQA_NO_SANDBOX")]
    no_sandbox: bool,

    /// Path to the Chrome/Chromium binary
    #[arg(long, env = "DEMOQA_CHROME")]
    chrome: Option<PathBuf>,

    /// Only run the named scenario (repeatable)
    #[arg(long = "only", value_name = "SCENARIO")]
    only: Vec<String>,

    /// Timeout for auto-retrying assertions
    #[arg(long, default_value_t = 5_000)]
    expect_timeout_ms: u64,

    /// Timeout for explicit waits and element actionability
    #[arg(long, default_value_t = 30_000)]
    wait_timeout_ms: u64,

    /// Timeout for page loads
    #[arg(long, default_value_t = 30_000)]
    navigation_timeout_ms: u64,

    /// Directory for failure screenshots
    #[arg(long, value_name = "DIR")]
    artifacts: Option<PathBuf>,

    /// Write a JSON run report to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl RunArgs {
    fn harness_config(&self) -> HarnessConfig {
        HarnessConfig {
            base_url: self.base_url.clone(),
            headless: !self.headed,
            no_sandbox: self.no_sandbox,
            chrome_path: self.chrome.clone(),
            timeouts: Timeouts {
                expect: Duration::from_millis(self.expect_timeout_ms),
                wait: Duration::from_millis(self.wait_timeout_ms),
                navigation: Duration::from_millis(self.navigation_timeout_ms),
            },
            artifacts_dir: self.artifacts.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for scenario in scenarios::SCENARIOS {
                println!(
                    "{:<20} /{:<26} {}",
                    scenario.name,
                    scenario.route.path(),
                    scenario.suite.name()
                );
            }
            Ok(())
        }
        Command::Run(args) => {
            let selected = scenarios::select(&args.only)?;
            let config = args.harness_config();
            tracing::info!(
                "Running {} scenario(s) against {} (headless: {})",
                selected.len(),
                config.base_url,
                config.headless
            );

            let report = tokio::select! {
                report = runner::run_all(&config, &selected) => report,
                _ = tokio::signal::ctrl_c() => {
                    anyhow::bail!("Interrupted");
                }
            };

            if let Some(path) = &args.report {
                report.write_json(path)?;
                tracing::info!("Wrote report to {}", path.display());
            }

            if !report.all_passed() {
                anyhow::bail!("{} of {} scenario(s) failed", report.failed, report.outcomes.len());
            }
            Ok(())
        }
    }
}
