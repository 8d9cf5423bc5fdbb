use std::io::Write;

use colored::*;
use gradebook_common::project::GRADE_RANGE;

use crate::terminal::{colors, print};

const KEY_WIDTH: usize = 10;

pub fn info<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let about = "Gradebook keeps an in-memory register of graded projects.";
    print::println(out, &about.color(colors::TEXT_DEFAULT).to_string())?;
    print::println(out, "")?;

    let grades = format!("{:.0} to {:.0}, inclusive", GRADE_RANGE.start(), GRADE_RANGE.end());
    let lines = [
        print::aligned_line("Version", env!("CARGO_PKG_VERSION"), KEY_WIDTH),
        print::aligned_line("Grades", grades, KEY_WIDTH),
        print::aligned_line("Names", "unique, case-sensitive", KEY_WIDTH),
        print::aligned_line("Storage", "memory only, cleared on exit", KEY_WIDTH),
        print::aligned_line("Logging", crate::terminal::logging::LOG_ENV, KEY_WIDTH),
    ];
    for line in lines {
        print::println(out, &line)?;
    }
    print::println(out, &print::fat_separator())?;
    Ok(())
}
