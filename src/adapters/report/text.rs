//! Implements ReportPort as plain console text.
//!
//! Layout: student header, one course per line, blank line, faculty header, one course per line.
//! Headers keep the trailing space after the colon.

use crate::domain::{DomainError, EnrollmentReport};
use crate::ports::ReportPort;
use std::io::Write;

/// Plain-text renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl TextReport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportPort for TextReport {
    fn render(&self, report: &EnrollmentReport, out: &mut dyn Write) -> Result<(), DomainError> {
        writeln!(out, "{} is enrolled in: ", report.student_name)?;
        for name in &report.enrolled_courses {
            writeln!(out, "{}", name)?;
        }

        // Headline names the first assigned course; falls back to the faculty name when empty.
        let headline = report
            .headline_course
            .as_deref()
            .unwrap_or(report.faculty_name.as_str());
        writeln!(out)?;
        writeln!(out, "Faculty {} is assigned to: ", headline)?;
        for name in &report.assigned_courses {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(())
    }
}
