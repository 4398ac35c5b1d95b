//! Application use cases. Orchestrate domain logic via ports.

pub mod demo_service;

pub use demo_service::{DemoCampus, DemoService};
