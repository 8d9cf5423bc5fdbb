//! # Project Presenter
//!
//! Translates discrete user actions into [`ProjectStore`] calls and reports
//! the result through a [`ProjectView`].
//!
//! Each public action:
//! 1. Validates the raw input it was handed.
//! 2. Calls the store.
//! 3. Mirrors the result to the view (info, error or status line).
//! 4. Returns an [`Outcome`] so callers never have to inspect the view.
//!
//! The presenter owns the store it is constructed with. There is no shared
//! or global state.

mod outcome;

pub use outcome::{ActionError, Outcome};

use tracing::{Level, error, info};

use crate::listing;
use crate::store::ProjectStore;
use crate::view::ProjectView;

const CLEAR_ALL_QUESTION: &str =
    "Are you sure you want to delete ALL registered projects?\nThis action cannot be undone.";

pub struct ProjectPresenter<V: ProjectView> {
    store: ProjectStore,
    view: V,
}

impl<V: ProjectView> ProjectPresenter<V> {
    pub fn new(store: ProjectStore, view: V) -> Self {
        Self { store, view }
    }

    /// Pushes the initial listing and the welcome status.
    pub fn start(&mut self) {
        self.refresh();
        self.view.set_status("Application started. Enter a project.");
    }

    /// Registers a project from raw form input.
    ///
    /// The name is checked before the grade text is parsed, so an empty name
    /// is reported even when the grade is garbage too.
    pub fn submit_new_project(&mut self, raw_name: &str, raw_grade_text: &str) -> Outcome {
        let name = raw_name.trim();
        if name.is_empty() {
            return self.reject(ActionError::EmptyName);
        }

        let grade: f64 = match raw_grade_text.trim().parse() {
            Ok(grade) => grade,
            Err(_) => {
                return self.reject(ActionError::InvalidNumber {
                    input: raw_grade_text.to_string(),
                });
            }
        };

        if let Err(err) = self.store.add(name, grade) {
            return self.reject(err.into());
        }

        let outcome = self.complete(format!("Project '{name}' registered successfully."));
        self.view.clear_input_fields();
        self.refresh();
        outcome
    }

    /// Deletes a project by name. `None` means the user cancelled the prompt.
    pub fn delete_project(&mut self, requested_name: Option<&str>) -> Outcome {
        let Some(requested_name) = requested_name else {
            return self.cancel("Deletion cancelled by user.");
        };

        let name = requested_name.trim();
        if name.is_empty() {
            return self.reject(ActionError::MissingDeleteName);
        }

        if !self.store.remove_by_name(name) {
            return self.reject(ActionError::NotFound {
                name: name.to_string(),
            });
        }

        let outcome = self.complete(format!("Project '{name}' deleted successfully."));
        self.refresh();
        outcome
    }

    /// Asks the view for a name, then runs [`Self::delete_project`].
    pub fn request_delete(&mut self) -> Outcome {
        match self.view.prompt_for_name_to_delete() {
            Ok(requested) => self.delete_project(requested.as_deref()),
            Err(err) => self.reject(ActionError::Unexpected(err)),
        }
    }

    /// Clears the register after an explicit yes from the view.
    pub fn clear_all(&mut self) -> Outcome {
        match self.view.prompt_for_confirmation(CLEAR_ALL_QUESTION) {
            Ok(true) => {
                self.store.clear();
                self.refresh();
                self.complete("All projects have been removed.".to_string())
            }
            Ok(false) => self.cancel("Clear all cancelled by user."),
            Err(err) => self.reject(ActionError::Unexpected(err)),
        }
    }

    pub fn render_listing(&self) -> String {
        listing::render(self.store.list())
    }

    /// Sends the current listing to the view and updates the status line.
    pub fn refresh(&mut self) {
        let text = self.render_listing();
        self.view.set_listing(&text);
        self.view
            .set_status(&listing::status_summary(self.store.count()));
    }

    pub fn project_count(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (ProjectStore, V) {
        (self.store, self.view)
    }

    fn complete(&mut self, message: String) -> Outcome {
        info!("{message}");
        self.view.show_info(&message);
        Outcome::Completed(message)
    }

    fn cancel(&mut self, message: &str) -> Outcome {
        info!("{message}");
        self.view.set_status(message);
        Outcome::Cancelled(message.to_string())
    }

    fn reject(&mut self, err: ActionError) -> Outcome {
        let message = err.to_string();
        if rejection_level(&err) == Level::ERROR {
            error!("{err:#}");
        } else {
            info!("{message}");
        }
        self.view.show_error(&message);
        Outcome::Rejected(err)
    }
}

/// Level a rejection is logged at. Rejections the user already sees on the
/// view stay below the default `warn` filter.
fn rejection_level(err: &ActionError) -> Level {
    match err {
        ActionError::Unexpected(_) => Level::ERROR,
        _ => Level::INFO,
    }
}
