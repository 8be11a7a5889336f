// Error handling utilities for consistent error messages and exit codes

use std::fmt;
use std::num::IntErrorKind;
use std::process;

/// Exit with a user error (exit code 1)
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2)
/// Internal errors are for storage failures the session cannot run without.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// A task number typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Number(i64),
    /// A well-formed integer too large for any list, kept as typed (normalized)
    OutOfRange(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Number(n) => write!(f, "{}", n),
            Position::OutOfRange(digits) => f.write_str(digits),
        }
    }
}

/// Parse a task number typed at a prompt
pub fn parse_position(input: &str) -> Result<Position, String> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(n) => Ok(Position::Number(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            let (sign, digits) = match input.as_bytes()[0] {
                b'-' => ("-", &input[1..]),
                b'+' => ("", &input[1..]),
                _ => ("", input),
            };
            Ok(Position::OutOfRange(format!("{}{}", sign, digits.trim_start_matches('0'))))
        }
        Err(_) => Err(format!("Invalid task number: '{}'. Task number must be a number.", input)),
    }
}
