use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitals::application::config::AppConfig;
use vitals::application::services::runner::ProbeRunner;
use vitals::domain::aggregate::Aggregator;
use vitals::domain::ports::probe::Probe;
use vitals::domain::ports::sink::ReportSink;
use vitals::domain::value_objects::scoring::ScoringWeights;
use vitals::infrastructure::probes::disk::DiskSpaceProbe;
use vitals::infrastructure::probes::env::EnvVarProbe;
use vitals::infrastructure::probes::http::HttpProbe;
use vitals::infrastructure::sinks::composite::CompositeSink;
use vitals::infrastructure::sinks::log_file::LogFileSink;
use vitals::infrastructure::sinks::terminal::TerminalSink;
use vitals::infrastructure::sinks::webhook::WebhookSink;
use vitals::presentation::cli::app::{Cli, Commands};
use vitals::presentation::cli::commands::check::run_check;
use vitals::presentation::cli::commands::probes::run_probes;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_probes(config: &AppConfig) -> anyhow::Result<Vec<Box<dyn Probe>>> {
    use anyhow::Context as _;

    let mut probes: Vec<Box<dyn Probe>> = Vec::new();
    for http in &config.probes.http {
        let probe = HttpProbe::new(&http.name, &http.url, Duration::from_millis(http.warn_ms))
            .with_context(|| format!("Failed to build HTTP probe '{}'", http.name))?;
        probes.push(Box::new(probe));
    }
    if let Some(ref disk) = config.probes.disk {
        probes.push(Box::new(DiskSpaceProbe::new(
            &disk.name,
            disk.min_free_percent,
        )));
    }
    for env in &config.probes.env {
        probes.push(Box::new(EnvVarProbe::new(&env.name, &env.var)));
    }
    Ok(probes)
}

fn build_sink(config: &AppConfig) -> CompositeSink {
    let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();
    if config.delivery.terminal {
        sinks.push(Box::new(TerminalSink));
    }
    if let Some(ref path) = config.delivery.log_file {
        sinks.push(Box::new(LogFileSink::new(path)));
    }
    if let Some(ref url) = config.delivery.webhook_url {
        match WebhookSink::new(url.clone()) {
            Ok(sink) => sinks.push(Box::new(sink)),
            Err(e) => tracing::warn!("Webhook sink unavailable: {e}"),
        }
    }
    CompositeSink::new(sinks)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI — main.rs is the only place that knows concrete types
    let probes = build_probes(&config)?;
    let aggregator = Aggregator::new(ScoringWeights::from(&config.scoring));
    let runner = ProbeRunner::new(
        &probes,
        Duration::from_secs(config.runner.timeout_secs),
        &aggregator,
    );

    let json = match cli.command {
        Some(Commands::Probes) => {
            run_probes(&probes);
            return Ok(());
        }
        Some(Commands::Check { json }) => json,
        None => false,
    };

    let sink = build_sink(&config);
    let report = run_check(&runner, &sink, json).await?;

    if report.overall.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
