use crate::help;
use crate::types::{Outcome, Task, TaskError};
use colored::*;
use std::io::{self, Write};

const INDENT: &str = "     ";
const TASK_INDENT: &str = "       ";
const DIVIDER_WIDTH: usize = 60;
const LIST_TITLE: &str = "Here are the tasks in your list:";
const FIND_TITLE: &str = "Here are the matching tasks in your list:";

const LOGO: &str = r" ____        _
|  _ \ _   _| | _____
| | | | | | | |/ / _ \
| |_| | |_| |   <  __/
|____/ \__,_|_|\_\___|";

pub fn print_divider<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "    {}", "_".repeat(DIVIDER_WIDTH).dimmed())
}

pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hello from")?;
    writeln!(out, "{}", LOGO.bright_cyan())?;
    print_divider(out)?;
    writeln!(out, "{INDENT}Hello! I'm Duke")?;
    writeln!(out, "{INDENT}What can I do for you?")?;
    print_divider(out)
}

pub fn print_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{INDENT}Bye. Hope to see you again soon!")
}

/// Task count sentence, singular when there is exactly one.
fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {count} {noun} in the list.")
}

fn print_task_line<W: Write>(
    out: &mut W,
    number: usize,
    width: usize,
    task: &Task,
) -> io::Result<()> {
    let line = task.to_string();
    let line = if task.done { line.dimmed() } else { line.normal() };
    writeln!(out, "{INDENT}{:>width$}.{}", number, line, width = width)
}

pub fn print_task_list<W: Write>(out: &mut W, title: &str, tasks: &[Task]) -> io::Result<()> {
    writeln!(out, "{INDENT}{}", title.bold())?;
    let width = tasks.len().to_string().len();
    for (idx, task) in tasks.iter().enumerate() {
        print_task_line(out, idx + 1, width, task)?;
    }
    Ok(())
}

pub fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Added { task, count } => {
            writeln!(out, "{INDENT}{}", "Got it. I've added this task:".bright_green())?;
            writeln!(out, "{TASK_INDENT}{task}")?;
            writeln!(out, "{INDENT}{}", count_line(*count))
        }
        Outcome::MarkedDone { task } => {
            writeln!(
                out,
                "{INDENT}{}",
                "Nice! I've marked this task as done:".bright_green()
            )?;
            writeln!(out, "{TASK_INDENT}{task}")
        }
        Outcome::Deleted { task, remaining } => {
            writeln!(out, "{INDENT}{}", "Noted. I've removed this task:".bright_yellow())?;
            writeln!(out, "{TASK_INDENT}{task}")?;
            writeln!(out, "{INDENT}{}", count_line(*remaining))
        }
        Outcome::Listing(tasks) => print_task_list(out, LIST_TITLE, tasks),
        Outcome::EmptyList => writeln!(
            out,
            "{INDENT}{}",
            "You have no task at the moment.".dimmed()
        ),
        Outcome::Found(tasks) if tasks.is_empty() => writeln!(
            out,
            "{INDENT}{}",
            "No task matches that keyword.".dimmed()
        ),
        Outcome::Found(tasks) => print_task_list(out, FIND_TITLE, tasks),
        Outcome::Help => help::print_help(out),
        Outcome::Exit => print_goodbye(out),
    }
}

pub fn print_error<W: Write>(out: &mut W, error: &TaskError) -> io::Result<()> {
    writeln!(out, "{INDENT}{} {}", "☹ OOPS!!!".bright_red(), error)
}
