//! Departments and the courses each one offers, as shown on the sign-up form.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEPARTMENTS: [&str; 10] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Business Administration",
    "Economics",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
];

const ENGINEERING: &[&str] = &["B.Tech", "M.Tech", "PhD"];
const BUSINESS: &[&str] = &["BBA", "MBA", "PhD"];
const ARTS: &[&str] = &["BA", "MA", "PhD"];
const SCIENCE: &[&str] = &["BSc", "MSc", "PhD"];

static COURSES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("Computer Science", ENGINEERING),
        ("Electrical Engineering", ENGINEERING),
        ("Mechanical Engineering", ENGINEERING),
        ("Civil Engineering", ENGINEERING),
        ("Business Administration", BUSINESS),
        ("Economics", ARTS),
        ("Mathematics", SCIENCE),
        ("Physics", SCIENCE),
        ("Chemistry", SCIENCE),
        ("Biology", SCIENCE),
    ])
});

/// Courses offered by `department`; empty for an unknown department.
pub fn courses_for(department: &str) -> &'static [&'static str] {
    COURSES.get(department).copied().unwrap_or(&[])
}

pub fn offers_course(department: &str, course: &str) -> bool {
    courses_for(department).contains(&course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("Computer Science", &["B.Tech", "M.Tech", "PhD"])]
    #[test_case("Business Administration", &["BBA", "MBA", "PhD"])]
    #[test_case("Economics", &["BA", "MA", "PhD"])]
    #[test_case("Biology", &["BSc", "MSc", "PhD"])]
    #[test_case("Astrology", &[])]
    fn courses_by_department(department: &str, expected: &[&str]) {
        assert_eq!(courses_for(department), expected);
    }

    #[test]
    fn every_department_has_courses() {
        for department in DEPARTMENTS {
            assert!(!courses_for(department).is_empty(), "{}", department);
        }
    }

    #[test]
    fn course_membership() {
        assert!(offers_course("Physics", "MSc"));
        assert!(!offers_course("Physics", "MBA"));
    }
}
