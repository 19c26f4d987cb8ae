// Credit-weighted GPA and completed hours.

use crate::course::Course;
use serde::Serialize;

/// Weighted mean of grade points by credit hours. Returns 0.0 for an
/// empty list and when every course carries zero credits.
pub fn calculate_gpa(courses: &[Course]) -> f64 {
    let total_credits = total_hours(courses);
    if total_credits == 0 {
        return 0.0;
    }
    let weighted: f64 = courses
        .iter()
        .map(|course| course.points() * f64::from(course.credits()))
        .sum();
    weighted / f64::from(total_credits)
}

pub fn total_hours(courses: &[Course]) -> u32 {
    courses.iter().map(|course| u32::from(course.credits())).sum()
}

/// Two decimal places, the form every screen and report uses.
pub fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub gpa: f64,
    pub total_hours: u32,
    pub course_count: usize,
}

impl Summary {
    pub fn of(courses: &[Course]) -> Self {
        Self {
            gpa: calculate_gpa(courses),
            total_hours: total_hours(courses),
            course_count: courses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::Grade;

    fn course(credits: u32, grade: Grade) -> Course {
        Course::new("c", credits, grade).unwrap()
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(calculate_gpa(&[]), 0.0);
        assert_eq!(total_hours(&[]), 0);
    }

    #[test]
    fn weighted_average() {
        let courses = [course(3, Grade::APlus), course(4, Grade::B)];
        let gpa = calculate_gpa(&courses);
        assert!((gpa - 24.0 / 7.0).abs() < 1e-12);
        assert_eq!(format_gpa(gpa), "3.43");
        assert_eq!(total_hours(&courses), 7);
    }

    #[test]
    fn zero_credit_courses_do_not_divide_by_zero() {
        let courses = [course(0, Grade::A), course(0, Grade::F)];
        assert_eq!(calculate_gpa(&courses), 0.0);
        assert_eq!(total_hours(&courses), 0);
    }

    #[test]
    fn zero_credit_course_does_not_move_the_average() {
        let courses = [course(3, Grade::B), course(0, Grade::F)];
        assert_eq!(calculate_gpa(&courses), 3.0);
    }

    #[test]
    fn matches_definition_for_mixed_list() {
        let courses = [
            course(1, Grade::AMinus),
            course(9, Grade::CPlus),
            course(2, Grade::DMinus),
            course(5, Grade::BPlus),
        ];
        let points: f64 = courses
            .iter()
            .map(|c| c.points() * f64::from(c.credits()))
            .sum();
        let expected = points / 17.0;
        assert!((calculate_gpa(&courses) - expected).abs() < 1e-12);
    }

    #[test]
    fn summary_collects_everything() {
        let courses = [course(3, Grade::APlus), course(4, Grade::B)];
        let summary = Summary::of(&courses);
        assert_eq!(summary.total_hours, 7);
        assert_eq!(summary.course_count, 2);
        assert_eq!(Summary::of(&[]).gpa, 0.0);
    }
}
