use std::fmt;
use thiserror::Error;

/// Longest accepted task name, counted in characters after normalization
pub const MAX_NAME_LEN: usize = 255;

/// Why a task name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Task name cannot be empty.")]
    Empty,
    #[error("Task name too long (max 255 characters).")]
    TooLong(usize),
}

/// A validated task name
///
/// Construction trims surrounding whitespace, uppercases the first character
/// and lowercases the rest. The result is never empty and never longer than
/// [`MAX_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let name = capitalize(raw.trim());
        let len = name.chars().count();
        if len == 0 {
            return Err(NameError::Empty);
        }
        if len > MAX_NAME_LEN {
            return Err(NameError::TooLong(len));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Task model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Status label shown in the task list
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✅ Completed"
        } else {
            "⏳ Pending"
        }
    }
}
