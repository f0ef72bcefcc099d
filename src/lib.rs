pub mod cli;
pub mod codec;
pub mod commands;
pub mod display;
pub mod help;
pub mod logging;
pub mod storage;
pub mod task_list;
pub mod types;
pub mod utils;

pub use commands::{CommandRouter, Session};
pub use storage::{FileStore, MemStore, Store};
pub use task_list::TaskList;
pub use types::*;

use std::io::{self, BufRead, Write};

/// Reads commands line by line until `bye` or end of input, writing every
/// outcome and error to `out`.
pub fn run<S: Store, R: BufRead, W: Write>(
    session: &mut Session<S>,
    router: &CommandRouter<S>,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    display::print_welcome(out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        display::print_divider(out)?;
        let finished = match router.execute_line(session, &line) {
            Ok(outcome) => {
                display::print_outcome(out, &outcome)?;
                outcome.is_exit()
            }
            Err(e) => {
                display::print_error(out, &e)?;
                false
            }
        };
        display::print_divider(out)?;
        out.flush()?;

        if finished {
            break;
        }
    }
    Ok(())
}
