use crate::types::TaskError;
use chrono::NaiveDateTime;

pub const DUE_FORMAT: &str = "%d/%m/%Y %H%M";
pub const BY_SEPARATOR: &str = "/by";
pub const AT_SEPARATOR: &str = "/at";

/// Field text may not contain the record delimiter's pipe, or it would not
/// decode back to the same task.
const RESERVED_CHAR: char = '|';

/// Trims `input` and rejects it when nothing is left. `command` names the
/// command in the resulting error.
pub fn validate_description(input: &str, command: &str) -> Result<String, TaskError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyDescription(command.to_string()));
    }
    reject_reserved(trimmed)?;
    Ok(trimmed.to_string())
}

fn reject_reserved(field: &str) -> Result<(), TaskError> {
    if field.contains(RESERVED_CHAR) {
        return Err(TaskError::MalformedArguments(format!(
            "'{}' cannot contain '{}'",
            field, RESERVED_CHAR
        )));
    }
    Ok(())
}

/// Strict `dd/mm/yyyy hhmm` parse. Returns the value re-formatted with the
/// same pattern so single-digit fields come back zero-padded.
pub fn parse_due_date(input: &str) -> Result<String, TaskError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, DUE_FORMAT)
        .map(|dt| dt.format(DUE_FORMAT).to_string())
        .map_err(|_| TaskError::InvalidDate(trimmed.to_string()))
}

/// Splits `<description> <separator> <extra>` into its two trimmed halves.
pub fn split_on_separator(
    input: &str,
    separator: &str,
    command: &str,
) -> Result<(String, String), TaskError> {
    let malformed = || {
        TaskError::MalformedArguments(format!(
            "there must be exactly one argument before and one argument after '{}'",
            separator
        ))
    };

    if input.trim().is_empty() {
        return Err(TaskError::EmptyDescription(command.to_string()));
    }

    let parts: Vec<&str> = input.split(separator).map(str::trim).collect();
    let [description, extra] = parts.as_slice() else {
        return Err(malformed());
    };

    if description.is_empty() {
        return Err(TaskError::EmptyDescription(command.to_string()));
    }
    if extra.is_empty() {
        return Err(malformed());
    }
    reject_reserved(description)?;
    reject_reserved(extra)?;

    Ok((description.to_string(), extra.to_string()))
}

/// Turns a 1-based task number into a 0-based index, checking it against
/// `size`.
pub fn parse_index(input: &str, size: usize) -> Result<usize, TaskError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| TaskError::NotANumber(trimmed.to_string()))?;

    if number < 1 || number as u64 > size as u64 {
        return Err(TaskError::OutOfRange {
            index: number,
            size,
        });
    }
    Ok(number as usize - 1)
}

/// Rejects any trailing text after a command that takes no arguments.
pub fn expect_no_arguments(input: &str, command: &str) -> Result<(), TaskError> {
    if input.trim().is_empty() {
        Ok(())
    } else {
        Err(TaskError::MalformedArguments(format!(
            "'{}' does not take any arguments",
            command
        )))
    }
}

/// Splits a raw input line into its keyword and the untouched remainder.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_trimmed() {
        assert_eq!(validate_description("  buy milk ", "todo").unwrap(), "buy milk");
        assert!(matches!(
            validate_description("   ", "todo"),
            Err(TaskError::EmptyDescription(c)) if c == "todo"
        ));
    }

    #[test]
    fn pipe_is_rejected_in_fields() {
        assert!(matches!(
            validate_description("milk | eggs", "todo"),
            Err(TaskError::MalformedArguments(_))
        ));
        assert!(matches!(
            split_on_separator("pay A | B /by 25/12/2024 1800", BY_SEPARATOR, "deadline"),
            Err(TaskError::MalformedArguments(_))
        ));
        assert!(matches!(
            split_on_separator("gig /at Hall A |", AT_SEPARATOR, "event"),
            Err(TaskError::MalformedArguments(_))
        ));
    }

    #[test]
    fn due_date_is_strict() {
        assert_eq!(parse_due_date("01/12/2024 2359").unwrap(), "01/12/2024 2359");
        assert!(matches!(
            parse_due_date("32/01/2024 1000"),
            Err(TaskError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_due_date("01/13/2024 1000"),
            Err(TaskError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_due_date("29/02/2023 1000"),
            Err(TaskError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_due_date("01/12/2024 2400"),
            Err(TaskError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_due_date("tomorrow"),
            Err(TaskError::InvalidDate(_))
        ));
    }

    #[test]
    fn due_date_is_normalised() {
        assert_eq!(parse_due_date(" 1/2/2024 0930 ").unwrap(), "01/02/2024 0930");
    }

    #[test]
    fn separator_split() {
        assert_eq!(
            split_on_separator(" return book /by 01/06/2024 1200", BY_SEPARATOR, "deadline")
                .unwrap(),
            ("return book".to_string(), "01/06/2024 1200".to_string())
        );
        assert!(matches!(
            split_on_separator("return book", BY_SEPARATOR, "deadline"),
            Err(TaskError::MalformedArguments(_))
        ));
        assert!(matches!(
            split_on_separator("a /at b /at c", AT_SEPARATOR, "event"),
            Err(TaskError::MalformedArguments(_))
        ));
        assert!(matches!(
            split_on_separator(" /at b", AT_SEPARATOR, "event"),
            Err(TaskError::EmptyDescription(_))
        ));
        assert!(matches!(
            split_on_separator("party /at  ", AT_SEPARATOR, "event"),
            Err(TaskError::MalformedArguments(_))
        ));
        assert!(matches!(
            split_on_separator("", AT_SEPARATOR, "event"),
            Err(TaskError::EmptyDescription(_))
        ));
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index(" 2 ", 3).unwrap(), 1);
        assert!(matches!(parse_index("two", 3), Err(TaskError::NotANumber(_))));
        assert!(matches!(parse_index("", 3), Err(TaskError::NotANumber(_))));
        assert!(matches!(
            parse_index("0", 3),
            Err(TaskError::OutOfRange { index: 0, size: 3 })
        ));
        assert!(matches!(
            parse_index("4", 3),
            Err(TaskError::OutOfRange { index: 4, size: 3 })
        ));
        assert!(matches!(
            parse_index("-1", 3),
            Err(TaskError::OutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            parse_index("1", 0),
            Err(TaskError::OutOfRange { size: 0, .. })
        ));
    }

    #[test]
    fn command_split() {
        assert_eq!(split_command("todo buy milk"), ("todo", " buy milk"));
        assert_eq!(split_command("  list"), ("list", ""));
        assert_eq!(split_command(""), ("", ""));
    }
}
