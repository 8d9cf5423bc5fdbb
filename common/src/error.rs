//! # Store Errors
//!
//! Validation failures reported by the project store. Each message is shown
//! to the user verbatim as the reason a submission was rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Project name must not be empty.")]
    InvalidName,
    #[error("Grade must be between 0 and 10.")]
    InvalidGrade { grade: f64 },
    #[error("A project with that name already exists.")]
    DuplicateName { name: String },
}
