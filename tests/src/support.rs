#![cfg(test)]
use std::collections::VecDeque;

use gradebook_core::view::ProjectView;

/// A view that records everything it is told and answers prompts from
/// queued replies.
#[derive(Default)]
pub struct RecordingView {
    pub errors: Vec<String>,
    pub infos: Vec<String>,
    pub status: String,
    pub listing: String,
    pub questions: Vec<String>,
    pub confirmations: VecDeque<bool>,
    pub delete_names: VecDeque<Option<String>>,
    pub cleared_inputs: usize,
}

impl ProjectView for RecordingView {
    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
        self.status = format!("Error: {message}");
    }

    fn show_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
        self.status = message.to_string();
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn set_listing(&mut self, text: &str) {
        self.listing = text.to_string();
    }

    fn prompt_for_confirmation(&mut self, question: &str) -> anyhow::Result<bool> {
        self.questions.push(question.to_string());
        self.confirmations
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no confirmation queued"))
    }

    fn prompt_for_name_to_delete(&mut self) -> anyhow::Result<Option<String>> {
        self.delete_names
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no delete name queued"))
    }

    fn clear_input_fields(&mut self) {
        self.cleared_inputs += 1;
    }
}
