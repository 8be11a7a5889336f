// Output formatting utilities

use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD_BRIGHT_BLACK: &str = "\x1b[1;90m";
const ANSI_BOLD_BRIGHT_RED: &str = "\x1b[1;91m";
const ANSI_BOLD_BRIGHT_GREEN: &str = "\x1b[1;92m";
const ANSI_BOLD_BRIGHT_BLUE: &str = "\x1b[1;94m";

/// Moves the cursor home and erases the screen and scrollback
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J\x1b[3J";

/// Message category, rendered as a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Heading,
    Success,
    Error,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Info => ANSI_BOLD_BRIGHT_BLACK,
            Tone::Heading => ANSI_BOLD_BRIGHT_BLUE,
            Tone::Success => ANSI_BOLD_BRIGHT_GREEN,
            Tone::Error => ANSI_BOLD_BRIGHT_RED,
        }
    }
}

/// Wrap text in the tone's color when color is enabled
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        format!("{}{}{}", tone.ansi(), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}
