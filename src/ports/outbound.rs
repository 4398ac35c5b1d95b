//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, EnrollmentReport};
use std::io::Write;

/// Report renderer. Writes an enrollment report to any byte sink.
pub trait ReportPort {
    fn render(&self, report: &EnrollmentReport, out: &mut dyn Write) -> Result<(), DomainError>;
}
