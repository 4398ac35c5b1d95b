//! Campus registry. Owns every entity and mints their keys.
//!
//! Relationship operations live here when they touch more than one entity.
//! All operations are total: unknown keys, including keys minted by another campus,
//! are logged and ignored.

use super::entities::{Course, CourseKey, CourseLevel, Faculty, FacultyKey, Student, StudentKey};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

/// Source of campus ids. Every key carries the id of the campus that minted it.
static NEXT_CAMPUS_ID: AtomicU32 = AtomicU32::new(1);

/// In-memory store of students, courses and faculty, in creation order.
#[derive(Debug)]
pub struct Campus {
    id: u32,
    students: Vec<Student>,
    courses: Vec<Course>,
    faculty: Vec<Faculty>,
}

impl Default for Campus {
    fn default() -> Self {
        Self::new()
    }
}

impl Campus {
    pub fn new() -> Self {
        Self {
            id: NEXT_CAMPUS_ID.fetch_add(1, Ordering::Relaxed),
            students: Vec::new(),
            courses: Vec::new(),
            faculty: Vec::new(),
        }
    }

    /// Storage index for a key, or `None` if another campus minted it.
    fn slot(&self, campus: u32, index: usize) -> Option<usize> {
        (campus == self.id).then_some(index)
    }

    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> StudentKey {
        let key = StudentKey::new(self.id, self.students.len());
        let student = Student::new(key, name, student_id);
        debug!(name = student.name(), student_id = student.student_id(), "student created");
        self.students.push(student);
        key
    }

    pub fn add_course(
        &mut self,
        course_name: impl Into<String>,
        course_code: impl Into<String>,
        level: CourseLevel,
    ) -> CourseKey {
        let key = CourseKey::new(self.id, self.courses.len());
        let course = Course::new(key, course_name, course_code, level);
        debug!(
            name = course.course_name(),
            code = course.course_code(),
            level = %level,
            "course created"
        );
        self.courses.push(course);
        key
    }

    pub fn add_undergraduate_course(
        &mut self,
        course_name: impl Into<String>,
        course_code: impl Into<String>,
    ) -> CourseKey {
        self.add_course(course_name, course_code, CourseLevel::Undergraduate)
    }

    pub fn add_graduate_course(
        &mut self,
        course_name: impl Into<String>,
        course_code: impl Into<String>,
    ) -> CourseKey {
        self.add_course(course_name, course_code, CourseLevel::Graduate)
    }

    pub fn add_faculty(
        &mut self,
        name: impl Into<String>,
        faculty_id: impl Into<String>,
    ) -> FacultyKey {
        let key = FacultyKey::new(self.id, self.faculty.len());
        let member = Faculty::new(key, name, faculty_id);
        debug!(name = member.name(), faculty_id = member.faculty_id(), "faculty created");
        self.faculty.push(member);
        key
    }

    pub fn student(&self, key: StudentKey) -> Option<&Student> {
        self.students.get(self.slot(key.campus, key.index)?)
    }

    pub fn course(&self, key: CourseKey) -> Option<&Course> {
        self.courses.get(self.slot(key.campus, key.index)?)
    }

    pub fn course_mut(&mut self, key: CourseKey) -> Option<&mut Course> {
        let i = self.slot(key.campus, key.index)?;
        self.courses.get_mut(i)
    }

    pub fn faculty(&self, key: FacultyKey) -> Option<&Faculty> {
        self.faculty.get(self.slot(key.campus, key.index)?)
    }

    pub fn faculty_mut(&mut self, key: FacultyKey) -> Option<&mut Faculty> {
        let i = self.slot(key.campus, key.index)?;
        self.faculty.get_mut(i)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn faculty_members(&self) -> &[Faculty] {
        &self.faculty
    }

    /// Enrolls a student in a course on both sides. Repeating the call changes nothing.
    pub fn enroll_in_course(&mut self, student: StudentKey, course: CourseKey) {
        let si = self.slot(student.campus, student.index);
        let ci = self.slot(course.campus, course.index);
        let (Some(s), Some(c)) = (
            si.and_then(|i| self.students.get_mut(i)),
            ci.and_then(|i| self.courses.get_mut(i)),
        ) else {
            warn!(?student, ?course, "enrollment ignored: unknown key");
            return;
        };
        if s.record_enrollment(course) {
            c.enroll(student);
            debug!(student = s.name(), course = c.course_name(), "enrolled");
        }
    }

    /// Enrolls the first campus student with a matching `student_id`. No match is a no-op.
    ///
    /// Only the course roster is updated, like [`Course::enroll_student_by_id`].
    pub fn enroll_student_by_id(&mut self, course: CourseKey, student_id: &str) {
        let ci = self.slot(course.campus, course.index);
        let Some(c) = ci.and_then(|i| self.courses.get_mut(i)) else {
            warn!(?course, "enrollment by id ignored: unknown course");
            return;
        };
        if !c.enroll_student_by_id(student_id, &self.students) {
            debug!(student_id, course = c.course_name(), "enrollment by id made no change");
        }
    }

    /// Assigns a course to a faculty member. The course is not told.
    pub fn assign_course(&mut self, faculty: FacultyKey, course: CourseKey) {
        if self.course(course).is_none() {
            warn!(?faculty, ?course, "assignment ignored: unknown course");
            return;
        }
        let Some(f) = self.faculty_mut(faculty) else {
            warn!(?faculty, ?course, "assignment ignored: unknown faculty");
            return;
        };
        if f.assign_course(course) {
            debug!(faculty = f.name(), ?course, "course assigned");
        }
    }

    /// Resolves course keys to names, preserving order and skipping unknown keys.
    pub fn course_names(&self, keys: &[CourseKey]) -> Vec<String> {
        keys.iter()
            .filter_map(|&k| self.course(k))
            .map(|c| c.course_name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_in_course_links_both_sides() {
        let mut campus = Campus::new();
        let alice = campus.add_student("Alice", "S123");
        let bob = campus.add_student("Bob", "S124");
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");

        campus.enroll_in_course(alice, cs101);
        campus.enroll_in_course(bob, cs101);

        assert_eq!(campus.course(cs101).unwrap().students(), &[alice, bob]);
        assert_eq!(campus.student(alice).unwrap().enrolled_courses(), &[cs101]);
        assert_eq!(campus.student(bob).unwrap().enrolled_courses(), &[cs101]);
    }

    #[test]
    fn test_enroll_in_course_is_idempotent() {
        let mut campus = Campus::new();
        let alice = campus.add_student("Alice", "S123");
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");

        for _ in 0..3 {
            campus.enroll_in_course(alice, cs101);
        }

        assert_eq!(campus.course(cs101).unwrap().students(), &[alice]);
        assert_eq!(campus.student(alice).unwrap().enrolled_courses(), &[cs101]);
    }

    #[test]
    fn test_duplicate_student_ids_are_distinct_students() {
        let mut campus = Campus::new();
        let first = campus.add_student("Alice", "S123");
        let twin = campus.add_student("Alice", "S123");
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");

        campus.enroll_in_course(first, cs101);
        campus.enroll_in_course(twin, cs101);

        assert_ne!(first, twin);
        assert_eq!(campus.course(cs101).unwrap().students(), &[first, twin]);
    }

    #[test]
    fn test_enroll_student_by_id() {
        let mut campus = Campus::new();
        let alice = campus.add_student("Alice", "S123");
        campus.add_student("Alice twin", "S123");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");

        campus.enroll_student_by_id(cs201, "S999");
        assert!(campus.course(cs201).unwrap().students().is_empty());

        campus.enroll_student_by_id(cs201, "S123");
        campus.enroll_student_by_id(cs201, "S123");
        assert_eq!(campus.course(cs201).unwrap().students(), &[alice]);
        // course-only operation: the student side is untouched
        assert!(campus.student(alice).unwrap().enrolled_courses().is_empty());
    }

    #[test]
    fn test_assign_course_is_one_directional_and_idempotent() {
        let mut campus = Campus::new();
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");
        let smith = campus.add_faculty("Dr. Smith", "F001");

        campus.assign_course(smith, cs101);
        campus.assign_course(smith, cs201);
        campus.assign_course(smith, cs101);

        assert_eq!(campus.faculty(smith).unwrap().assigned_courses(), &[cs101, cs201]);
        assert!(campus.course(cs101).unwrap().students().is_empty());
        assert!(campus.course(cs201).unwrap().students().is_empty());
    }

    #[test]
    fn test_each_course_owns_its_syllabus() {
        let mut campus = Campus::new();
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");

        campus.course_mut(cs101).unwrap().syllabus_mut().add_topic("Classes");

        assert_eq!(campus.course(cs101).unwrap().syllabus().course(), cs101);
        assert_eq!(campus.course(cs201).unwrap().syllabus().course(), cs201);
        assert_eq!(campus.course(cs101).unwrap().syllabus().get_topics(), &["Classes"]);
        assert!(campus.course(cs201).unwrap().syllabus().get_topics().is_empty());
    }

    #[test]
    fn test_course_levels() {
        let mut campus = Campus::new();
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");

        assert_eq!(campus.course(cs101).unwrap().level(), CourseLevel::Undergraduate);
        assert_eq!(campus.course(cs201).unwrap().level(), CourseLevel::Graduate);
        assert_eq!(campus.course(cs201).unwrap().course_code(), "CS201");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut campus = Campus::new();
        let alice = campus.add_student("Alice", "S123");
        let smith = campus.add_faculty("Dr. Smith", "F001");
        let stray = CourseKey::new(campus.id, 42);

        campus.enroll_in_course(alice, stray);
        campus.assign_course(smith, stray);
        campus.enroll_student_by_id(stray, "S123");
        campus.assign_course(FacultyKey::new(campus.id, 9), stray);

        assert!(campus.student(alice).unwrap().enrolled_courses().is_empty());
        assert!(campus.faculty(smith).unwrap().assigned_courses().is_empty());
    }

    #[test]
    fn test_course_names_preserves_order() {
        let mut campus = Campus::new();
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");

        assert_eq!(
            campus.course_names(&[cs201, CourseKey::new(campus.id, 99), cs101]),
            vec!["Advanced Java Programming", "Introduction to Java"]
        );
    }

    #[test]
    fn test_keys_from_another_campus_are_ignored() {
        let mut home = Campus::new();
        let bob = home.add_student("Bob", "S124");
        let cs101 = home.add_undergraduate_course("Introduction to Java", "CS101");
        let smith = home.add_faculty("Dr. Smith", "F001");

        let mut other = Campus::new();
        let alice = other.add_student("Alice", "S123");
        let cs999 = other.add_graduate_course("Compilers", "CS999");
        let jones = other.add_faculty("Dr. Jones", "F002");

        // same storage positions as bob / cs101 / smith, different campus
        assert!(home.student(alice).is_none());
        assert!(home.course(cs999).is_none());
        assert!(home.faculty(jones).is_none());

        home.enroll_in_course(alice, cs101);
        home.enroll_in_course(bob, cs999);
        home.assign_course(smith, cs999);
        home.assign_course(jones, cs101);

        assert!(home.course(cs101).unwrap().students().is_empty());
        assert!(home.student(bob).unwrap().enrolled_courses().is_empty());
        assert!(home.faculty(smith).unwrap().assigned_courses().is_empty());
        assert!(other.course(cs999).unwrap().students().is_empty());
        assert!(other.faculty(jones).unwrap().assigned_courses().is_empty());
    }

    #[test]
    fn test_listings_and_direct_faculty_access() {
        let mut campus = Campus::new();
        let alice = campus.add_student("Alice", "S123");
        let bob = campus.add_student("Bob", "S124");
        let cs101 = campus.add_undergraduate_course("Introduction to Java", "CS101");
        let cs201 = campus.add_graduate_course("Advanced Java Programming", "CS201");
        let smith = campus.add_faculty("Dr. Smith", "F001");

        let f = campus.faculty_mut(smith).unwrap();
        assert!(f.assign_course(cs201));
        assert!(!f.assign_course(cs201));

        let students: Vec<_> = campus.students().iter().map(|s| s.key()).collect();
        assert_eq!(students, vec![alice, bob]);
        let codes: Vec<_> = campus.courses().iter().map(|c| c.course_code()).collect();
        assert_eq!(codes, vec!["CS101", "CS201"]);
        assert_eq!(campus.courses()[0].key(), cs101);
        assert_eq!(campus.faculty_members().len(), 1);
        assert_eq!(campus.faculty_members()[0].assigned_courses(), &[cs201]);
    }
}
