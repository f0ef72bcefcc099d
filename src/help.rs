use std::io::{self, Write};

const HELP_TEXT: &str = "\
Commands:
  list                              list every task
  todo <description>                add a plain to-do
  deadline <description> /by <due>  add a task due at dd/mm/yyyy hhmm
  event <description> /at <when>    add an event with a free-text time or place
  done <n>                          mark the n-th task as done
  delete <n>                        delete the n-th task
  find <keyword>                    list tasks whose description contains keyword
  help                              show this message
  bye                               save and quit

Examples:
  todo Buy milk
  deadline Submit report /by 25/12/2024 1800
  event Team outing /at Saturday afternoon, Clementi
  find report
";

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    for line in HELP_TEXT.lines() {
        writeln!(out, "     {line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_command() {
        let mut out = Vec::new();
        print_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for keyword in ["list", "todo", "deadline", "event", "done", "delete", "find", "help", "bye"] {
            assert!(text.contains(&format!("  {keyword}")), "{keyword}");
        }
    }
}
