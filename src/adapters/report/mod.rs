//! Report adapters. Implement ReportPort for console output.

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::TextReport;
