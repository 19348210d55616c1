use clap::Parser;
use failsafe_dns_application::RunOutcome;
use failsafe_dns_domain::{decide, CliOverrides};
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "failsafe-dns")]
#[command(version)]
#[command(about = "DNS failover controller - keeps the forwarder pointed at a healthy upstream")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// State marker file path
    #[arg(long)]
    state_file: Option<String>,

    /// Generated forwarder file path
    #[arg(long)]
    forwarder_path: Option<String>,

    /// Probe and report the decision without touching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        state_file: cli.state_file.clone(),
        forwarder_path: cli.forwarder_path.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting failsafe-dns v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;

    if cli.dry_run {
        let prior = use_cases.state_store.load()?;
        let healthy = use_cases
            .probe_primary
            .execute(
                &use_cases.params.primary,
                &use_cases.params.probe_domains,
                use_cases.params.probe_timeout,
            )
            .await;
        let decision = decide(prior, healthy);
        info!(
            healthy,
            prior = ?prior.map(|s| s.as_str()),
            decision = ?decision,
            "Dry run, no effects applied"
        );
        return Ok(());
    }

    match use_cases.run_failover.execute().await {
        Ok(RunOutcome::SkippedLockHeld) => {
            info!("Another run is in progress, exiting");
        }
        Ok(RunOutcome::Unchanged { state }) => {
            info!(state = %state, "Health unchanged");
        }
        Ok(RunOutcome::Switched { from, to, notified }) => {
            info!(from = ?from.map(|s| s.as_str()), to = %to, notified, "Failover applied");
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            std::process::exit(1);
        }
    }

    Ok(())
}
