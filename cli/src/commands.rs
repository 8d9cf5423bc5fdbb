pub mod form;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use gradebook_common::config::Config;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Register, list and delete graded projects.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Hide the banner and section headers (-qq also silences warnings)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive project form (default)
    #[command(alias = "f")]
    Form,
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_banner: self.no_banner,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_the_default() {
        let cli = CommandLine::try_parse_from(["gradebook"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = CommandLine::try_parse_from(["gradebook", "i", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Info));
        let cfg = cli.config();
        assert_eq!(cfg.verbose, 2);
        assert!(cfg.no_color);
        assert!(!cfg.no_banner);
    }

    #[test]
    fn quiet_counts() {
        let cli = CommandLine::try_parse_from(["gradebook", "-qq", "f"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Form));
        assert_eq!(cli.config().quiet, 2);
    }
}
