// Course records and the ordered collection that holds them.
//
// `CourseStore` keeps insertion order, which is also display order and
// file order. Indices here are 0-based; the menu shows 1-based numbers
// and converts before calling in.

use crate::grades::Grade;
use thiserror::Error;

/// Highest credit-hour value a single course may carry.
pub const MAX_CREDITS: u8 = 9;

/// Prefix of generated course names, e.g. `Unnamed Course 4`.
pub const UNNAMED_PREFIX: &str = "Unnamed Course ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("credits must be between 0 and 9, got {0}")]
    CreditsOutOfRange(u32),

    #[error("course index {index} is out of range for {len} course(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no more Unnamed Course numbers are available")]
    UnnamedCounterExhausted,
}

/// A single course: name, credit hours and letter grade.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    credits: u8,
    pub grade: Grade,
}

impl Course {
    pub fn new(name: impl Into<String>, credits: u32, grade: Grade) -> Result<Self, CourseError> {
        let credits = u8::try_from(credits)
            .ok()
            .filter(|c| *c <= MAX_CREDITS)
            .ok_or(CourseError::CreditsOutOfRange(credits))?;
        Ok(Self {
            name: name.into(),
            credits,
            grade,
        })
    }

    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn points(&self) -> f64 {
        self.grade.points()
    }
}

/// Ordered, exclusively owned list of courses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Replace the course at `index`, returning the one it displaced.
    pub fn replace_at(&mut self, index: usize, course: Course) -> Result<Course, CourseError> {
        let len = self.courses.len();
        let slot = self
            .courses
            .get_mut(index)
            .ok_or(CourseError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, course))
    }

    /// Remove the course at `index`; later courses shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Course, CourseError> {
        self.check_index(index)?;
        Ok(self.courses.remove(index))
    }

    pub fn check_index(&self, index: usize) -> Result<(), CourseError> {
        if index < self.courses.len() {
            Ok(())
        } else {
            Err(CourseError::IndexOutOfRange {
                index,
                len: self.courses.len(),
            })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn all(&self) -> &[Course] {
        &self.courses
    }
}

impl From<Vec<Course>> for CourseStore {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

/// Hands out `Unnamed Course N` names with N strictly increasing.
///
/// Not persisted: it is re-seeded from the loaded course names on every
/// start, so the next generated name is one past the highest on file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnnamedCounter {
    last: u32,
}

impl UnnamedCounter {
    pub fn starting_at(last: u32) -> Self {
        Self { last }
    }

    /// Raise the high-water mark if `name` is a generated name above it.
    pub fn observe(&mut self, name: &str) {
        if let Some(n) = unnamed_suffix(name) {
            self.last = self.last.max(n);
        }
    }

    /// Next generated name. Fails once `u32::MAX` has been handed out
    /// rather than repeating a number.
    pub fn next_name(&mut self) -> Result<String, CourseError> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(CourseError::UnnamedCounterExhausted)?;
        Ok(format!("{UNNAMED_PREFIX}{}", self.last))
    }

    pub fn current(&self) -> u32 {
        self.last
    }
}

/// Number following the `Unnamed Course ` prefix, if any. Leading
/// whitespace and a single `+` are skipped, then only the leading run of
/// digits counts.
pub fn unnamed_suffix(name: &str) -> Option<u32> {
    let rest = name.strip_prefix(UNNAMED_PREFIX)?.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().ok()
}

/// Empty input and a lone `0` both ask for a generated name.
pub fn is_auto_name_request(input: &str) -> bool {
    input.is_empty() || input == "0"
}
