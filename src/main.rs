//! Wiring & DI. Entry point: load config, pick a renderer, run the demo.
//! No business logic here; enrollment rules live in the domain.

use campus_roster::adapters::report::{JsonReport, TextReport};
use campus_roster::domain::DomainError;
use campus_roster::ports::ReportPort;
use campus_roster::shared::config::{AppConfig, ReportFormat};
use campus_roster::usecases::DemoService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %DomainError::from(e), "config not loaded, using defaults");
        AppConfig::default()
    });

    let format = cfg.report_format_or_default();
    info!(?format, "report format");
    let report: Box<dyn ReportPort> = match format {
        ReportFormat::Text => Box::new(TextReport::new()),
        ReportFormat::Json => Box::new(JsonReport::new()),
    };

    let service = DemoService::new(report);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.print(&mut out);

    Ok(())
}
