//! Terminal implementation of the [`ProjectView`] port.
//!
//! The form fields, listing area and status bar are modelled as
//! plain state on [`TerminalView`]. Every change is echoed to the output
//! writer as it happens.

use std::io::{self, BufRead, Write};

use colored::*;
use gradebook_common::config::Config;
use gradebook_core::view::ProjectView;
use tracing::{error, trace};

use crate::terminal::colors;
use crate::terminal::input::{self, ConfirmMode};
use crate::terminal::print;

pub struct TerminalView<R, W> {
    input: R,
    out: W,
    confirm_mode: ConfirmMode,
    decorations: bool,
    name_field: String,
    grade_field: String,
    status: String,
    listing: String,
    io_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, out: W, confirm_mode: ConfirmMode, cfg: &Config) -> Self {
        Self {
            input,
            out,
            confirm_mode,
            decorations: cfg.show_decorations(),
            name_field: String::new(),
            grade_field: String::new(),
            status: String::from("Ready."),
            listing: String::new(),
            io_error: None,
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{} ", label.color(colors::PRIMARY))?;
        self.out.flush()?;
        self.read_line()
    }

    /// Fills the name and grade fields. `None` if input ends midway.
    pub fn read_form(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(name) = self.prompt("Project name:")? else {
            return Ok(None);
        };
        self.name_field = name;

        let Some(grade) = self.prompt("Grade (0-10):")? else {
            return Ok(None);
        };
        self.grade_field = grade;

        Ok(Some((self.name_field.clone(), self.grade_field.clone())))
    }

    #[cfg(test)]
    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    #[cfg(test)]
    pub fn grade_field(&self) -> &str {
        &self.grade_field
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[cfg(test)]
    pub fn listing(&self) -> &str {
        &self.listing
    }

    /// Writes a line, remembering the first failure for [`Self::take_io_error`].
    pub fn write_line(&mut self, line: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            error!("failed to write to terminal: {err}");
            self.io_error = Some(err);
        }
    }

    pub fn take_io_error(&mut self) -> io::Result<()> {
        match self.io_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> ProjectView for TerminalView<R, W> {
    fn show_error(&mut self, message: &str) {
        let line = format!("{} {}", "[-]".red().bold(), message.color(colors::ERROR));
        self.write_line(&line);
        self.status = format!("Error: {}", print::truncate_status(message));
        self.write_line(&print::status_line(&self.status));
    }

    fn show_info(&mut self, message: &str) {
        let line = format!("{} {}", "[+]".green().bold(), message.color(colors::SUCCESS));
        self.write_line(&line);
        self.status = message.to_string();
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
        self.write_line(&print::status_line(message));
    }

    fn set_listing(&mut self, text: &str) {
        self.listing = text.to_string();
        if self.decorations {
            self.write_line(&print::header_line("registered projects"));
        }
        for line in text.lines() {
            self.write_line(&format!("  {}", line.color(colors::TEXT_DEFAULT)));
        }
    }

    fn prompt_for_confirmation(&mut self, question: &str) -> anyhow::Result<bool> {
        for line in question.lines() {
            let line = line.color(colors::ACCENT).bold().to_string();
            self.write_line(&line);
        }
        self.take_io_error()?;

        match self.confirm_mode {
            ConfirmMode::Keypress => {
                write!(self.out, "{} ", "[y/N]".color(colors::SEPARATOR))?;
                self.out.flush()?;
                let answer = input::read_yes_no_key()?;
                writeln!(self.out, "{}", if answer { "yes" } else { "no" })?;
                Ok(answer)
            }
            ConfirmMode::Line => {
                let answer = self.prompt("[y/N]")?;
                Ok(answer.as_deref().is_some_and(input::parse_yes_no))
            }
        }
    }

    fn prompt_for_name_to_delete(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.prompt("Exact name of the project to delete:")?)
    }

    fn clear_input_fields(&mut self) {
        trace!("input fields cleared");
        self.name_field.clear();
        self.grade_field.clear();
    }
}
