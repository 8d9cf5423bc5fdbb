//! Interactive project form.
//!
//! Reads one action per line, runs it to completion through the presenter,
//! and waits for the next one. End of input behaves like `quit`.

use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use colored::*;
use gradebook_common::config::Config;
use gradebook_core::presenter::{Outcome, ProjectPresenter};
use gradebook_core::store::ProjectStore;
use gradebook_core::view::ProjectView;
use tracing::{debug, info_span};

use crate::terminal::colors;
use crate::terminal::input::ConfirmMode;
use crate::terminal::print;
use crate::terminal::view::TerminalView;

type FormPresenter<R, W> = ProjectPresenter<TerminalView<R, W>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Register,
    Delete,
    ClearAll,
    List,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "register" | "add" => Ok(Action::Register),
            "d" | "delete" => Ok(Action::Delete),
            "c" | "clear" => Ok(Action::ClearAll),
            "l" | "list" => Ok(Action::List),
            "h" | "help" | "?" => Ok(Action::Help),
            "q" | "quit" | "exit" => Ok(Action::Quit),
            _ => Err(format!("Unknown action '{}'. Type 'h' for help.", s.trim())),
        }
    }
}

const HELP: &[(&str, &str)] = &[
    ("r", "register a project"),
    ("d", "delete a project by name"),
    ("c", "clear all projects"),
    ("l", "list projects"),
    ("h", "show this help"),
    ("q", "quit"),
];

pub fn form(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let confirm_mode = ConfirmMode::for_terminal(stdin.is_terminal());
    let view = TerminalView::new(stdin.lock(), io::stdout(), confirm_mode, cfg);

    let mut presenter = ProjectPresenter::new(ProjectStore::new(), view);
    run(&mut presenter)?;
    farewell(&mut presenter)
}

/// Drives the presenter until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(presenter: &mut FormPresenter<R, W>) -> anyhow::Result<()> {
    presenter.start();
    help(presenter.view_mut());
    presenter.view_mut().take_io_error()?;

    while let Some(line) = presenter.view_mut().prompt("gradebook>")? {
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(message) => {
                presenter.view_mut().show_error(&message);
                presenter.view_mut().take_io_error()?;
                continue;
            }
        };

        let span = info_span!("action", ?action);
        let _guard = span.enter();

        let outcome: Option<Outcome> = match action {
            Action::Register => match presenter.view_mut().read_form()? {
                Some((name, grade)) => Some(presenter.submit_new_project(&name, &grade)),
                None => break,
            },
            Action::Delete => Some(presenter.request_delete()),
            Action::ClearAll => Some(presenter.clear_all()),
            Action::List => {
                presenter.refresh();
                None
            }
            Action::Help => {
                help(presenter.view_mut());
                None
            }
            Action::Quit => break,
        };

        if let Some(outcome) = outcome {
            debug!(?outcome, "action finished");
        }
        presenter.view_mut().take_io_error()?;
    }

    Ok(())
}

fn help<R: BufRead, W: Write>(view: &mut TerminalView<R, W>) {
    for (key, text) in HELP {
        let line = format!(
            "  {} {}",
            format!("[{key}]").color(colors::ACCENT),
            text.color(colors::TEXT_DEFAULT)
        );
        view.write_line(&line);
    }
}

fn farewell<R: BufRead, W: Write>(presenter: &mut FormPresenter<R, W>) -> anyhow::Result<()> {
    let summary = format!(
        "Session closed: {} registered",
        project_total(presenter.project_count()).bold().green()
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    let view = presenter.view_mut();
    view.write_line(&print::fat_separator());
    view.write_line(&print::centered(&summary));
    view.take_io_error()?;
    Ok(())
}

fn project_total(count: usize) -> String {
    match count {
        1 => String::from("1 project"),
        n => format!("{n} projects"),
    }
}
