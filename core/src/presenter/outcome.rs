//! # Action Outcomes
//!
//! Every presenter operation ends in exactly one [`Outcome`]. Failures carry
//! an [`ActionError`] whose `Display` text is the message shown to the user.

use gradebook_common::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Project name must not be empty.")]
    EmptyName,
    #[error("Grade must be a valid number (e.g., 7.5).")]
    InvalidNumber { input: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("A project name is required to delete.")]
    MissingDeleteName,
    #[error("No project found with the name '{name}'.")]
    NotFound { name: String },
    /// A collaborator failed in a way the taxonomy above does not cover.
    #[error("An unexpected error occurred: {0:#}")]
    Unexpected(anyhow::Error),
}

#[derive(Debug)]
pub enum Outcome {
    /// The action ran and changed or confirmed state.
    Completed(String),
    /// The user backed out. Not an error; nothing changed.
    Cancelled(String),
    Rejected(ActionError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled(_))
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// The user-facing text for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::Completed(msg) | Outcome::Cancelled(msg) => msg.clone(),
            Outcome::Rejected(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_pass_through_verbatim() {
        let err = ActionError::from(StoreError::InvalidGrade { grade: -1.0 });
        assert_eq!(err.to_string(), StoreError::InvalidGrade { grade: -1.0 }.to_string());
    }

    #[test]
    fn not_found_quotes_the_name() {
        let err = ActionError::NotFound { name: "DB".into() };
        assert_eq!(err.to_string(), "No project found with the name 'DB'.");
    }

    #[test]
    fn unexpected_includes_cause() {
        let err = ActionError::Unexpected(anyhow::anyhow!("stdin closed"));
        assert_eq!(err.to_string(), "An unexpected error occurred: stdin closed");
    }

    #[test]
    fn outcome_accessors() {
        let done = Outcome::Completed("ok".into());
        assert!(done.is_completed());
        assert!(done.error().is_none());
        assert_eq!(done.message(), "ok");

        let cancelled = Outcome::Cancelled("nope".into());
        assert!(cancelled.is_cancelled());

        let rejected = Outcome::Rejected(ActionError::EmptyName);
        assert!(matches!(rejected.error(), Some(ActionError::EmptyName)));
        assert_eq!(rejected.message(), "Project name must not be empty.");
    }
}
