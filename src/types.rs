use colored::*;
use std::{fmt, io};

#[derive(Debug)]
pub enum TaskError {
    UnknownCommand(String),
    EmptyDescription(String),
    MalformedArguments(String),
    InvalidDate(String),
    NotANumber(String),
    OutOfRange { index: i64, size: usize },
    Io(io::Error),
    MalformedRecord(String),
}

impl From<io::Error> for TaskError {
    fn from(err: io::Error) -> Self {
        TaskError::Io(err)
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::UnknownCommand(keyword) => write!(
                f,
                "{} I don't know what '{}' means, try 'help'",
                "Unknown command:".bright_yellow(),
                keyword
            ),
            TaskError::EmptyDescription(command) if command == "find" => write!(
                f,
                "{} the keyword for 'find' cannot be empty",
                "Invalid input:".bright_yellow()
            ),
            TaskError::EmptyDescription(command) => write!(
                f,
                "{} the description of a {} cannot be empty",
                "Invalid input:".bright_yellow(),
                command
            ),
            TaskError::MalformedArguments(e) => {
                write!(f, "{} {}", "Invalid input:".bright_yellow(), e)
            }
            TaskError::InvalidDate(e) => write!(
                f,
                "{} '{}' must be a valid date in the format dd/mm/yyyy hhmm",
                "Invalid date:".bright_yellow(),
                e
            ),
            TaskError::NotANumber(e) => write!(
                f,
                "{} '{}' is not a task number",
                "Invalid index:".bright_yellow(),
                e
            ),
            TaskError::OutOfRange { size: 0, .. } => write!(
                f,
                "{} you have no task at the moment",
                "Invalid index:".bright_yellow()
            ),
            TaskError::OutOfRange { index, size } => write!(
                f,
                "{} {} is out of range, task number must be from 1 to {}",
                "Invalid index:".bright_yellow(),
                index,
                size
            ),
            TaskError::Io(e) => write!(f, "{} {}", "IO error:".bright_red(), e),
            TaskError::MalformedRecord(e) => {
                write!(f, "{} {}", "Malformed record:".bright_red(), e)
            }
        }
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TaskError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// The variant-specific part of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Todo,
    /// `due_at` is already normalised to `dd/mm/yyyy hhmm`.
    Deadline { due_at: String },
    /// `window` is free text, only checked for non-emptiness.
    Event { window: String },
}

impl Kind {
    pub fn tag(&self) -> char {
        match self {
            Kind::Todo => 'T',
            Kind::Deadline { .. } => 'D',
            Kind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: Kind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: Kind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due_at: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: Kind::Deadline {
                due_at: due_at.into(),
            },
        }
    }

    pub fn event(description: impl Into<String>, window: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: Kind::Event {
                window: window.into(),
            },
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { '✓' } else { '✗' };
        write!(f, "[{}][{}] {}", self.kind.tag(), mark, self.description)?;
        match &self.kind {
            Kind::Todo => Ok(()),
            Kind::Deadline { due_at } => write!(f, " (by: {})", due_at),
            Kind::Event { window } => write!(f, " (at: {})", window),
        }
    }
}

/// What a handler reports back once a command has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { task: Task, count: usize },
    MarkedDone { task: Task },
    Deleted { task: Task, remaining: usize },
    Listing(Vec<Task>),
    EmptyList,
    Found(Vec<Task>),
    Help,
    Exit,
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }
}
