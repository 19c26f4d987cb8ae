// Grade table: the fixed conversion between letter grades and grade
// points. Every course carries a `Grade`, never a free-floating number,
// so a stored value can always be turned back into its letter.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the thirteen letter grades the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

/// Returned when a letter does not match any table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grade '{0}'")]
pub struct UnknownGrade(pub String);

impl Grade {
    /// Table order, best grade first.
    pub const ALL: [Grade; 13] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::DMinus,
        Grade::F,
    ];

    pub fn letter(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }

    pub fn points(self) -> f64 {
        match self {
            Grade::APlus => 4.0,
            Grade::A => 3.7,
            Grade::AMinus => 3.4,
            Grade::BPlus => 3.2,
            Grade::B => 3.0,
            Grade::BMinus => 2.8,
            Grade::CPlus => 2.6,
            Grade::C => 2.4,
            Grade::CMinus => 2.2,
            Grade::DPlus => 2.0,
            Grade::D => 1.5,
            Grade::DMinus => 1.0,
            Grade::F => 0.0,
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_letter(text: &str) -> Option<Grade> {
        let wanted = text.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|grade| grade.letter() == wanted)
    }

    /// Exact lookup. Only values that came out of `points()` (or parsed
    /// back from their printed form) will match.
    pub fn from_points(points: f64) -> Option<Grade> {
        Self::ALL.into_iter().find(|grade| grade.points() == points)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::from_letter(s).ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

/// Grade points for a letter grade, if the letter is in the table.
pub fn points_for(letter: &str) -> Option<f64> {
    Grade::from_letter(letter).map(Grade::points)
}

/// Letter grade for a grade-point value, if the value is in the table.
pub fn letter_for(points: f64) -> Option<&'static str> {
    Grade::from_points(points).map(Grade::letter)
}
