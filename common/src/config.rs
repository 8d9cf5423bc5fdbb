/// Runtime options for a single `gradebook` process.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Quiet level. `1` hides the banner and section headers.
    pub quiet: u8,
    /// Verbosity level for diagnostics written to stderr.
    pub verbose: u8,
    pub no_banner: bool,
    /// Disables ANSI colors on every terminal writer.
    pub no_color: bool,
}

impl Config {
    /// Default log directive when `GRADEBOOK_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet > 0 {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn show_decorations(&self) -> bool {
        self.quiet == 0
    }
}
