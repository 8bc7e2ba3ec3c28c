//! Prompt and banner text.

use chrono::{DateTime, Local, Timelike};
use owo_colors::OwoColorize;

const PINK: (u8, u8, u8) = (255, 105, 180);
const GREY: (u8, u8, u8) = (102, 102, 102);

/// `  refl ♠ DIR - HH:MM:SS ⟹  `
pub fn render(dir_name: &str, now: DateTime<Local>, color: bool) -> String {
    let status = format!(
        "{} - {:02}:{:02}:{:02}",
        dir_name,
        now.hour(),
        now.minute(),
        now.second()
    );

    if color {
        format!(
            "  {} {} {}  ",
            "refl ♠".truecolor(PINK.0, PINK.1, PINK.2).bold(),
            status.truecolor(GREY.0, GREY.1, GREY.2).bold(),
            "⟹".truecolor(PINK.0, PINK.1, PINK.2).bold()
        )
    } else {
        format!("  refl ♠ {} ⟹  ", status)
    }
}

/// Prompt for the current directory and time
pub fn current(color: bool) -> String {
    let dir_name = std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();
    render(&dir_name, Local::now(), color)
}

/// Line shown once when a session starts
pub fn banner(color: bool) -> String {
    let title = "Refl ♠";
    let title = if color {
        title.truecolor(PINK.0, PINK.1, PINK.2).bold().to_string()
    } else {
        title.to_string()
    };
    format!(
        "  {} the Agda REPL. Prefix interactive commands with ':', shell commands with '!'. ':quit' leaves.",
        title
    )
}

/// `error:` label for messages written to the session output
pub fn error_label(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}
