use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

/// How yes/no questions are answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmMode {
    /// A single `y` / `n` keypress read in raw mode.
    Keypress,
    /// A full line read from the view's input.
    Line,
}

impl ConfirmMode {
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            ConfirmMode::Keypress
        } else {
            ConfirmMode::Line
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Blocks until `y` or `n` is pressed. `Esc` and `Ctrl+C` count as no.
pub fn read_yes_no_key() -> anyhow::Result<bool> {
    let _guard = RawModeGuard::enable()?;
    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let is_ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c {
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
}

/// Line answers: `y` or `yes` in any case. Anything else is a no.
pub fn parse_yes_no(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        for line in ["y", "Y", "yes", " YES ", "Yes\n"] {
            assert!(parse_yes_no(line), "{line:?}");
        }
    }

    #[test]
    fn everything_else_is_no() {
        for line in ["", "n", "no", "yep", "maybe", "s"] {
            assert!(!parse_yes_no(line), "{line:?}");
        }
    }

    #[test]
    fn mode_follows_terminal() {
        assert_eq!(ConfirmMode::for_terminal(true), ConfirmMode::Keypress);
        assert_eq!(ConfirmMode::for_terminal(false), ConfirmMode::Line);
    }
}
