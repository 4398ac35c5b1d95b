//! Application configuration. Output format.
//!
//! Nothing is required: with no environment the demo prints plain text.

use serde::Deserialize;

/// Prefix for environment variables, e.g. CAMPUS_ROSTER_OUTPUT_FORMAT=json.
pub const ENV_PREFIX: &str = "CAMPUS_ROSTER";

/// How the enrollment report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Case-insensitive `text` / `json`. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Report format, `text` (default) or `json`. Read from CAMPUS_ROSTER_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX));
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the report format. Defaults to text if unset or invalid.
    pub fn report_format_or_default(&self) -> ReportFormat {
        self.output_format
            .as_deref()
            .and_then(ReportFormat::parse)
            .unwrap_or_default()
    }
}
