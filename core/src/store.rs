//! # Project Store
//!
//! The in-memory register of [`Project`] records.
//!
//! Two invariants hold for as long as a project is held here:
//! * no two projects share a name (exact, case-sensitive comparison);
//! * every grade lies inside [`GRADE_RANGE`](gradebook_common::project::GRADE_RANGE).
//!
//! Records are kept in insertion order and looked up with a linear scan.

use gradebook_common::error::StoreError;
use gradebook_common::project::{self, Project};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new project.
    ///
    /// Checks run in a fixed order so callers always see the same failure
    /// for input that is invalid in several ways:
    /// 1. [`StoreError::InvalidName`] for an empty or all-whitespace name.
    /// 2. [`StoreError::InvalidGrade`] for a grade outside `[0, 10]`.
    /// 3. [`StoreError::DuplicateName`] for a name already in the store.
    pub fn add(&mut self, name: &str, grade: f64) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidName);
        }
        if !project::is_valid_grade(grade) {
            return Err(StoreError::InvalidGrade { grade });
        }
        if self.find_by_name(name).is_some() {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        debug!(name, grade, "project added");
        self.projects.push(Project::new(name, grade));
        Ok(())
    }

    /// Removes the project whose name matches the trimmed query exactly.
    ///
    /// Returns `false` for a blank query or when nothing matches.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        match self.projects.iter().position(|p| p.is_named(name)) {
            Some(idx) => {
                self.projects.remove(idx);
                debug!(name, "project removed");
                true
            }
            None => false,
        }
    }

    /// Exact lookup. The query is neither trimmed nor case-folded.
    pub fn find_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_named(name))
    }

    /// Read-only view of the register in insertion order.
    ///
    /// The store cannot be modified through the returned slice:
    ///
    /// ```compile_fail
    /// use gradebook_common::project::Project;
    /// use gradebook_core::store::ProjectStore;
    ///
    /// let store = ProjectStore::new();
    /// let view = store.list();
    /// view.push(Project::new("Sneaky", 5.0));
    /// ```
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn clear(&mut self) {
        debug!(removed = self.projects.len(), "store cleared");
        self.projects.clear();
    }
}
