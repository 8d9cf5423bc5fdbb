//! # Project Model
//!
//! A named record pairing an identifier with a grade.
//!
//! Projects are immutable once built. The store is responsible for checking
//! that names are unique and that grades fall inside [`GRADE_RANGE`].

use std::fmt;
use std::ops::RangeInclusive;

/// Closed interval every stored grade must fall into.
pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    name: String,
    grade: f64,
}

impl Project {
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Exact, case-sensitive comparison against the stored name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Returns `true` when `grade` lies inside [`GRADE_RANGE`]. NaN never does.
pub fn is_valid_grade(grade: f64) -> bool {
    GRADE_RANGE.contains(&grade)
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Grade: {:.2}", self.name, self.grade)
    }
}
