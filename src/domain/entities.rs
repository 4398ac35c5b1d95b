//! Domain entities. Pure data structures for the core business.
//!
//! Identity is the key minted by [`Campus`](super::Campus) at construction, never the
//! name/code/id strings. Entities are deliberately not `Clone`: a copy would share an identity.

use serde::Serialize;
use std::fmt;

/// Opaque handle to a [`Student`]. Stamped with the id of the campus that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StudentKey {
    pub(crate) campus: u32,
    pub(crate) index: usize,
}

impl StudentKey {
    pub(crate) fn new(campus: u32, index: usize) -> Self {
        Self { campus, index }
    }
}

/// Opaque handle to a [`Course`]. Stamped with the id of the campus that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CourseKey {
    pub(crate) campus: u32,
    pub(crate) index: usize,
}

impl CourseKey {
    pub(crate) fn new(campus: u32, index: usize) -> Self {
        Self { campus, index }
    }
}

/// Opaque handle to a [`Faculty`] member. Stamped with the id of the campus that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FacultyKey {
    pub(crate) campus: u32,
    pub(crate) index: usize,
}

impl FacultyKey {
    pub(crate) fn new(campus: u32, index: usize) -> Self {
        Self { campus, index }
    }
}

/// A student and the courses they are enrolled in, in enrollment order.
#[derive(Debug, Serialize)]
pub struct Student {
    key: StudentKey,
    name: String,
    student_id: String,
    enrolled_courses: Vec<CourseKey>,
}

impl Student {
    pub(crate) fn new(
        key: StudentKey,
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            student_id: student_id.into(),
            enrolled_courses: Vec::new(),
        }
    }

    pub fn key(&self) -> StudentKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn enrolled_courses(&self) -> &[CourseKey] {
        &self.enrolled_courses
    }

    pub fn is_enrolled_in(&self, course: CourseKey) -> bool {
        self.enrolled_courses.contains(&course)
    }

    /// Student half of an enrollment. Returns false if the course was already listed.
    /// The course side is mirrored by `Campus::enroll_in_course`.
    pub(crate) fn record_enrollment(&mut self, course: CourseKey) -> bool {
        if self.is_enrolled_in(course) {
            return false;
        }
        self.enrolled_courses.push(course);
        true
    }
}

/// Course level. Fixed at construction; the only difference between course variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CourseLevel {
    Undergraduate,
    Graduate,
}

impl CourseLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Undergraduate => "Undergraduate",
            CourseLevel::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course with its enrolled students and its own syllabus.
#[derive(Debug, Serialize)]
pub struct Course {
    key: CourseKey,
    course_name: String,
    course_code: String,
    level: CourseLevel,
    students: Vec<StudentKey>,
    syllabus: Syllabus,
}

impl Course {
    pub(crate) fn new(
        key: CourseKey,
        course_name: impl Into<String>,
        course_code: impl Into<String>,
        level: CourseLevel,
    ) -> Self {
        Self {
            key,
            course_name: course_name.into(),
            course_code: course_code.into(),
            level,
            students: Vec::new(),
            syllabus: Syllabus::new(key),
        }
    }

    pub fn key(&self) -> CourseKey {
        self.key
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn level(&self) -> CourseLevel {
        self.level
    }

    pub fn students(&self) -> &[StudentKey] {
        &self.students
    }

    pub fn syllabus(&self) -> &Syllabus {
        &self.syllabus
    }

    pub fn syllabus_mut(&mut self) -> &mut Syllabus {
        &mut self.syllabus
    }

    /// Adds the student unless already present. Returns true if the roster changed.
    ///
    /// Only the course side is updated; use `Campus::enroll_in_course` for a mirrored enrollment.
    pub fn enroll(&mut self, student: StudentKey) -> bool {
        if self.students.contains(&student) {
            return false;
        }
        self.students.push(student);
        true
    }

    /// Enrolls the first candidate whose `student_id` matches. No match is a silent no-op.
    pub fn enroll_student_by_id<'a, I>(&mut self, student_id: &str, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Student>,
    {
        match candidates.into_iter().find(|s| s.student_id() == student_id) {
            Some(student) => self.enroll(student.key()),
            None => false,
        }
    }

    /// Same as [`Course::enroll`].
    pub fn enroll_student_by_object(&mut self, student: &Student) -> bool {
        self.enroll(student.key())
    }
}

/// Ordered topics of one course. Created and dropped with its course.
#[derive(Debug, Serialize)]
pub struct Syllabus {
    course: CourseKey,
    topics: Vec<String>,
}

impl Syllabus {
    fn new(course: CourseKey) -> Self {
        Self {
            course,
            topics: Vec::new(),
        }
    }

    /// The owning course.
    pub fn course(&self) -> CourseKey {
        self.course
    }

    /// Appends a topic. Duplicates are kept.
    pub fn add_topic(&mut self, topic: impl Into<String>) {
        self.topics.push(topic.into());
    }

    pub fn get_topics(&self) -> &[String] {
        &self.topics
    }
}

/// A faculty member and the courses assigned to them, in assignment order.
///
/// Assignment is one-directional: courses do not know their faculty.
#[derive(Debug, Serialize)]
pub struct Faculty {
    key: FacultyKey,
    name: String,
    faculty_id: String,
    assigned_courses: Vec<CourseKey>,
}

impl Faculty {
    pub(crate) fn new(
        key: FacultyKey,
        name: impl Into<String>,
        faculty_id: impl Into<String>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            faculty_id: faculty_id.into(),
            assigned_courses: Vec::new(),
        }
    }

    pub fn key(&self) -> FacultyKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faculty_id(&self) -> &str {
        &self.faculty_id
    }

    pub fn assigned_courses(&self) -> &[CourseKey] {
        &self.assigned_courses
    }

    /// Adds the course unless already assigned. Returns true if the list changed.
    pub fn assign_course(&mut self, course: CourseKey) -> bool {
        if self.assigned_courses.contains(&course) {
            return false;
        }
        self.assigned_courses.push(course);
        true
    }
}
