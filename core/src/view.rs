//! # View Port
//!
//! Contract for the presentation collaborator the presenter reports to.
//!
//! The presenter never renders anything itself. Messages, listings and
//! prompts all go through this trait, implemented by a terminal form in the
//! binary and by recording doubles in tests.

pub trait ProjectView {
    fn show_error(&mut self, message: &str);
    fn show_info(&mut self, message: &str);
    fn set_status(&mut self, message: &str);
    fn set_listing(&mut self, text: &str);

    /// Asks a yes/no question.
    fn prompt_for_confirmation(&mut self, question: &str) -> anyhow::Result<bool>;

    /// Asks for the name of the project to delete. `None` means the user
    /// dismissed the prompt.
    fn prompt_for_name_to_delete(&mut self) -> anyhow::Result<Option<String>>;

    fn clear_input_fields(&mut self);
}
