use crate::codec::{decode, encode};
use crate::types::{Task, TaskError};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, fs};
use tempfile::NamedTempFile;

const DATA_DIR: &str = ".duke";
const DATA_FILE: &str = "tasks.txt";

/// Whole-collection persistence: read everything once, rewrite everything
/// after each change.
pub trait Store {
    fn load(&mut self) -> Result<Vec<Task>, TaskError>;
    fn save_all(&mut self, tasks: &[Task]) -> Result<(), TaskError>;
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Store for FileStore {
    fn load(&mut self) -> Result<Vec<Task>, TaskError> {
        if !self.path.exists() {
            fs::create_dir_all(self.parent_dir())?;
            fs::File::create(&self.path)?;
            info!("created empty task file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let tasks = decode_lines(contents.lines());

        info!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    fn save_all(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
        let dir = self.parent_dir().to_path_buf();
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        for task in tasks {
            writeln!(tmp, "{}", encode(task))?;
        }
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| TaskError::Io(e.error))?;

        debug!("wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the encoded records in memory. Counts rewrites so callers can tell
/// whether a command touched the store.
#[derive(Debug, Default)]
pub struct MemStore {
    lines: Vec<String>,
    saves: usize,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(lines: &[&str]) -> Self {
        MemStore {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            saves: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Store for MemStore {
    fn load(&mut self) -> Result<Vec<Task>, TaskError> {
        Ok(decode_lines(self.lines.iter().map(String::as_str)))
    }

    fn save_all(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
        self.lines = tasks.iter().map(encode).collect();
        self.saves += 1;
        Ok(())
    }
}

/// Decodes every line, skipping unknown tags and malformed records.
fn decode_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Task> {
    let mut tasks = Vec::new();
    for (number, line) in lines.enumerate() {
        match decode(line) {
            Ok(Some(task)) => tasks.push(task),
            Ok(None) => debug!("skipping line {} with unknown tag", number + 1),
            Err(e) => warn!("skipping line {}: {}", number + 1, e),
        }
    }
    tasks
}

fn get_duke_dir() -> Result<PathBuf, TaskError> {
    let home = env::var("HOME").map_err(|_| {
        TaskError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "HOME environment variable not found",
        ))
    })?;

    Ok(PathBuf::from(home).join(DATA_DIR))
}

/// `$HOME/.duke/tasks.txt`. The directory is created on first load.
pub fn default_store_path() -> Result<PathBuf, TaskError> {
    Ok(get_duke_dir()?.join(DATA_FILE))
}
