//! Demo driver: build a small campus, enroll, assign, report.
//!
//! - Two students enroll in the undergraduate course
//! - One faculty member is assigned both courses
//! - The report covers the first student and the faculty member

use crate::domain::{Campus, CourseKey, DomainError, EnrollmentReport, FacultyKey, StudentKey};
use crate::ports::ReportPort;
use std::io::Write;
use tracing::{debug, info, warn};

/// The demo campus together with the keys the report needs.
#[derive(Debug)]
pub struct DemoCampus {
    pub campus: Campus,
    pub students: [StudentKey; 2],
    pub courses: [CourseKey; 2],
    pub faculty: FacultyKey,
}

/// Demo service. Owns the renderer chosen at startup.
pub struct DemoService {
    report: Box<dyn ReportPort>,
}

impl DemoService {
    pub fn new(report: Box<dyn ReportPort>) -> Self {
        Self { report }
    }

    /// Builds the demo campus. Deterministic; every call yields the same state.
    pub fn build_campus() -> DemoCampus {
        let mut campus = Campus::new();

        let alice = campus.add_student("Alice", "S123");
        let bob = campus.add_student("Bob", "S124");

        let intro = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let advanced = campus.add_graduate_course("Advanced Java Programming", "CS201");

        campus.enroll_in_course(alice, intro);
        campus.enroll_in_course(bob, intro);
        debug!("students enrolled");

        let smith = campus.add_faculty("Dr. Smith", "F001");
        campus.assign_course(smith, intro);
        campus.assign_course(smith, advanced);
        debug!("courses assigned");

        DemoCampus {
            campus,
            students: [alice, bob],
            courses: [intro, advanced],
            faculty: smith,
        }
    }

    /// Runs the demo and renders the report into `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<EnrollmentReport, DomainError> {
        let demo = Self::build_campus();
        let report = EnrollmentReport::build(&demo.campus, demo.students[0], demo.faculty);
        info!(
            student = %report.student_name,
            enrolled = report.enrolled_courses.len(),
            assigned = report.assigned_courses.len(),
            "demo campus ready"
        );
        self.report.render(&report, out)?;
        Ok(report)
    }

    /// Runs the demo for console output. Write failures (e.g. a closed pipe) are logged
    /// and absorbed, so the caller always exits cleanly.
    pub fn print(&self, out: &mut dyn Write) {
        if let Err(e) = self.run(out) {
            warn!(error = %e, "report not fully written");
        }
    }
}
