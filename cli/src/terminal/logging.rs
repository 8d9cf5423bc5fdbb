use std::io;

use colored::*;
use gradebook_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Overrides the level chosen by `-v` / `-q`.
pub const LOG_ENV: &str = "GRADEBOOK_LOG";

pub struct GradebookFormatter;

impl<S, N> FormatEvent<S, N> for GradebookFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        write!(writer, "{} ", colorize(level, marker(level).into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn marker(level: Level) -> &'static str {
    match level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

fn colorize(level: Level, s: ColoredString) -> ColoredString {
    match level {
        Level::TRACE => s.dimmed(),
        Level::DEBUG => s.blue(),
        Level::INFO => s.green().bold(),
        Level::WARN => s.yellow().bold(),
        Level::ERROR => s.red().bold(),
    }
}

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init(cfg: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(GradebookFormatter)
        .try_init();
}
