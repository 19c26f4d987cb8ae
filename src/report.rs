// Non-interactive report of the stored courses, as text or JSON.

use crate::course::Course;
use crate::gpa::{format_gpa, Summary};
use crate::grades::Grade;
use serde::Serialize;
use std::fmt::Write;

/// Data shape of one listed course. `number` is 1-based, as shown in
/// the menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub number: usize,
    pub name: String,
    pub credits: u8,
    pub grade: Grade,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub courses: Vec<ReportRow>,
    pub summary: Summary,
}

impl Report {
    pub fn build(courses: &[Course]) -> Self {
        let rows = courses
            .iter()
            .enumerate()
            .map(|(i, course)| ReportRow {
                number: i + 1,
                name: course.name.clone(),
                credits: course.credits(),
                grade: course.grade,
                points: course.points(),
            })
            .collect();
        Self {
            courses: rows,
            summary: Summary::of(courses),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.courses.is_empty() {
            out.push_str("No courses to display.\n");
            return out;
        }
        for row in &self.courses {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{:>3}. {:<30} {:>2} cr  {:<2}",
                row.number, row.name, row.credits, row.grade
            );
        }
        let _ = writeln!(out, "GPA: {}", format_gpa(self.summary.gpa));
        let _ = writeln!(out, "Total completed hours: {}", self.summary.total_hours);
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
