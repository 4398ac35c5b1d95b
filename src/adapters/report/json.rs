//! Implements ReportPort as pretty-printed JSON.

use crate::domain::{DomainError, EnrollmentReport};
use crate::ports::ReportPort;
use std::io::Write;

/// JSON renderer. One document per report, newline-terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReport;

impl JsonReport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportPort for JsonReport {
    fn render(&self, report: &EnrollmentReport, out: &mut dyn Write) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}
