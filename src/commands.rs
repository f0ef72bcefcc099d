use crate::storage::Store;
use crate::task_list::TaskList;
use crate::types::{Outcome, Task, TaskError};
use crate::utils::{
    AT_SEPARATOR, BY_SEPARATOR, expect_no_arguments, parse_due_date, parse_index,
    split_command, split_on_separator, validate_description,
};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Everything a command may touch: the task list and the store backing it.
#[derive(Debug)]
pub struct Session<S: Store> {
    tasks: TaskList,
    store: S,
}

impl<S: Store> Session<S> {
    /// Loads the store. A load failure is logged and the session starts
    /// empty.
    pub fn open(mut store: S) -> Self {
        let tasks = match store.load() {
            Ok(tasks) => TaskList::from_tasks(tasks),
            Err(e) => {
                warn!("could not load tasks, starting empty: {}", e);
                TaskList::new()
            }
        };
        Session { tasks, store }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rewrites the whole store. On failure the in-memory list is kept as is.
    fn persist(&mut self) -> Result<(), TaskError> {
        self.store.save_all(self.tasks.tasks()).inspect_err(|e| {
            warn!("could not save tasks, keeping them in memory: {}", e);
        })
    }
}

pub type Handler<S> = fn(&mut Session<S>, &str) -> Result<Outcome, TaskError>;

/// Maps case-sensitive keywords to their handlers.
pub struct CommandRouter<S: Store> {
    handlers: HashMap<&'static str, Handler<S>>,
}

impl<S: Store> CommandRouter<S> {
    pub fn new() -> Self {
        CommandRouter {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, keyword: &'static str, handler: Handler<S>) {
        self.handlers.insert(keyword, handler);
    }

    /// A router with every built-in command registered.
    pub fn with_default_commands() -> Self {
        let mut router = Self::new();
        router.register("bye", handle_bye);
        router.register("help", handle_help);
        router.register("list", handle_list);
        router.register("done", handle_done);
        router.register("delete", handle_delete);
        router.register("todo", handle_todo);
        router.register("deadline", handle_deadline);
        router.register("event", handle_event);
        router.register("find", handle_find);
        router
    }

    pub fn execute(
        &self,
        session: &mut Session<S>,
        keyword: &str,
        arguments: &str,
    ) -> Result<Outcome, TaskError> {
        match self.handlers.get(keyword) {
            Some(handler) => {
                debug!("running '{}'", keyword);
                handler(session, arguments)
            }
            None => {
                info!("unknown command '{}'", keyword);
                Err(TaskError::UnknownCommand(keyword.to_string()))
            }
        }
    }

    /// Splits a raw input line and executes it.
    pub fn execute_line(
        &self,
        session: &mut Session<S>,
        line: &str,
    ) -> Result<Outcome, TaskError> {
        let (keyword, arguments) = split_command(line);
        self.execute(session, keyword, arguments)
    }
}

impl<S: Store> Default for CommandRouter<S> {
    fn default() -> Self {
        Self::with_default_commands()
    }
}

fn handle_bye<S: Store>(_session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    expect_no_arguments(args, "bye")?;
    Ok(Outcome::Exit)
}

fn handle_help<S: Store>(_session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    expect_no_arguments(args, "help")?;
    Ok(Outcome::Help)
}

fn handle_list<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    expect_no_arguments(args, "list")?;
    if session.tasks.is_empty() {
        return Ok(Outcome::EmptyList);
    }
    Ok(Outcome::Listing(session.tasks.tasks().to_vec()))
}

fn handle_done<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let index = parse_index(args, session.tasks.len())?;
    let task = session.tasks.mark_done(index)?.clone();
    session.persist()?;
    Ok(Outcome::MarkedDone { task })
}

fn handle_delete<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let index = parse_index(args, session.tasks.len())?;
    let task = session.tasks.delete(index)?;
    session.persist()?;
    Ok(Outcome::Deleted {
        task,
        remaining: session.tasks.len(),
    })
}

fn handle_todo<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let description = validate_description(args, "todo")?;
    add_task(session, Task::todo(description))
}

fn handle_deadline<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let (description, due) = split_on_separator(args, BY_SEPARATOR, "deadline")?;
    let due_at = parse_due_date(&due)?;
    add_task(session, Task::deadline(description, due_at))
}

fn handle_event<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let (description, window) = split_on_separator(args, AT_SEPARATOR, "event")?;
    add_task(session, Task::event(description, window))
}

fn handle_find<S: Store>(session: &mut Session<S>, args: &str) -> Result<Outcome, TaskError> {
    let keyword = validate_description(args, "find")?;
    Ok(Outcome::Found(session.tasks.find_by_keyword(&keyword)))
}

fn add_task<S: Store>(session: &mut Session<S>, task: Task) -> Result<Outcome, TaskError> {
    let count = session.tasks.add(task.clone());
    session.persist()?;
    Ok(Outcome::Added { task, count })
}
