use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use gradebook_common::config::Config;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Longest status text kept before it is cut with `...`.
pub const STATUS_LIMIT: usize = 60;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

pub fn println<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{msg}")
}

pub fn banner<W: Write>(out: &mut W, cfg: &Config) -> io::Result<()> {
    if cfg.no_banner || !cfg.show_decorations() {
        return Ok(());
    }

    let text_content: String = format!("⟦ GRADEBOOK v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    println(out, &format!("{sep}{text}{sep}"))
}

pub fn header<W: Write>(out: &mut W, msg: &str, cfg: &Config) -> io::Result<()> {
    if !cfg.show_decorations() {
        return Ok(());
    }
    println(out, &header_line(msg))
}

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black()
    .to_string()
}

pub fn fat_separator() -> String {
    "═".repeat(TOTAL_WIDTH).bright_black().to_string()
}

pub fn aligned_line<V>(key: &str, value: V, key_width: usize) -> String
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    status_line(&format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
}

pub fn status_line(msg: &str) -> String {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    format!("{} {}", prefix, msg.color(colors::TEXT_DEFAULT))
}

/// Centers `msg` inside [`TOTAL_WIDTH`], ignoring ANSI escapes.
pub fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{space}{msg}{space}")
}

/// Cuts `msg` to [`STATUS_LIMIT`] characters, marking the cut with `...`.
pub fn truncate_status(msg: &str) -> String {
    if msg.chars().count() <= STATUS_LIMIT {
        return msg.to_string();
    }
    let cut: String = msg.chars().take(STATUS_LIMIT).collect();
    format!("{cut}...")
}
