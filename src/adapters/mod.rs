//! Infrastructure adapters. Implement outbound ports.
//!
//! Console report renderers. Map errors to DomainError.

pub mod report;
