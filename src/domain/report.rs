//! Enrollment report: one student's courses and one faculty member's assignments.

use super::campus::Campus;
use super::entities::{FacultyKey, StudentKey};
use serde::Serialize;

/// Snapshot handed to a `ReportPort`. Names only; no keys leak out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentReport {
    pub student_name: String,
    pub enrolled_courses: Vec<String>,
    pub faculty_name: String,
    /// First assigned course name; `None` when nothing is assigned.
    pub headline_course: Option<String>,
    pub assigned_courses: Vec<String>,
}

impl EnrollmentReport {
    /// Builds the report. Unknown keys yield empty sections.
    pub fn build(campus: &Campus, student: StudentKey, faculty: FacultyKey) -> Self {
        let (student_name, enrolled_courses) = match campus.student(student) {
            Some(s) => (s.name().to_string(), campus.course_names(s.enrolled_courses())),
            None => (String::new(), Vec::new()),
        };
        let (faculty_name, assigned_courses) = match campus.faculty(faculty) {
            Some(f) => (f.name().to_string(), campus.course_names(f.assigned_courses())),
            None => (String::new(), Vec::new()),
        };
        Self {
            student_name,
            enrolled_courses,
            faculty_name,
            headline_course: assigned_courses.first().cloned(),
            assigned_courses,
        }
    }
}
