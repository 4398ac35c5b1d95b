//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the campus registry and business rules live here. Dependencies flow inward.

pub mod campus;
pub mod entities;
pub mod errors;
pub mod report;

pub use campus::Campus;
pub use entities::{
    Course, CourseKey, CourseLevel, Faculty, FacultyKey, Student, StudentKey, Syllabus,
};
pub use errors::DomainError;
pub use report::EnrollmentReport;
