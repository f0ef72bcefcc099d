//! One-line text records for tasks.
//!
//! A record is `tag | done | description [| extra]` where `tag` is one of
//! `T`, `D`, `E` and `done` is `1` or `0`. Lines with any other tag decode to
//! `None` so the caller can skip them.

use crate::types::{Kind, Task, TaskError};
use crate::utils::parse_due_date;

pub const DELIMITER: &str = " | ";

pub fn encode(task: &Task) -> String {
    let done = if task.done { "1" } else { "0" };
    let head = format!("{}{DELIMITER}{}{DELIMITER}{}", task.kind.tag(), done, task.description);
    match &task.kind {
        Kind::Todo => head,
        Kind::Deadline { due_at } => format!("{head}{DELIMITER}{due_at}"),
        Kind::Event { window } => format!("{head}{DELIMITER}{window}"),
    }
}

pub fn decode(line: &str) -> Result<Option<Task>, TaskError> {
    let (tag, rest) = line.split_once(DELIMITER).unwrap_or((line, ""));
    let fields = match tag {
        "T" => 2,
        "D" | "E" => 3,
        _ => return Ok(None),
    };

    // The last field takes whatever is left so an event window may contain
    // the delimiter.
    let parts: Vec<&str> = rest.splitn(fields, DELIMITER).collect();
    if parts.len() != fields {
        return Err(malformed(line, "wrong number of fields"));
    }

    let done = match parts[0] {
        "1" => true,
        "0" => false,
        _ => return Err(malformed(line, "done flag must be 1 or 0")),
    };

    let description = parts[1];
    if description.trim().is_empty() {
        return Err(malformed(line, "empty description"));
    }

    let task = match tag {
        "T" => Task::todo(description),
        "D" => {
            let due_at = parse_due_date(parts[2])
                .map_err(|_| malformed(line, "invalid due date"))?;
            Task::deadline(description, due_at)
        }
        _ => {
            if parts[2].trim().is_empty() {
                return Err(malformed(line, "empty event window"));
            }
            Task::event(description, parts[2])
        }
    };

    Ok(Some(task.with_done(done)))
}

fn malformed(line: &str, reason: &str) -> TaskError {
    TaskError::MalformedRecord(format!("{reason}: '{line}'"))
}
