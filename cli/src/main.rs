mod commands;
mod terminal;

use std::io;

use commands::{CommandLine, Commands, form, info};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    if cfg.no_color {
        colored::control::set_override(false);
    }
    logging::init(&cfg);

    let mut out = io::stdout();
    print::banner(&mut out, &cfg)?;

    match commands.command.unwrap_or(Commands::Form) {
        Commands::Info => {
            print::header(&mut out, "about the tool", &cfg)?;
            info::info(&mut out)
        }
        Commands::Form => {
            print::header(&mut out, "project register", &cfg)?;
            form::form(&cfg)
        }
    }
}
