use crate::types::{Task, TaskError};

/// Ordered tasks for one session. Insertion order is display and
/// persistence order; positions are never stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    /// Appends `task` and returns the new size.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    pub fn get(&self, index: usize) -> Result<&Task, TaskError> {
        self.tasks.get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Marking an already done task again is a no-op.
    pub fn mark_done(&mut self, index: usize) -> Result<&Task, TaskError> {
        let err = self.out_of_range(index);
        let task = self.tasks.get_mut(index).ok_or(err)?;
        task.done = true;
        Ok(task)
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        if index >= self.tasks.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Case-sensitive substring match on the description, in list order.
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.description.contains(keyword))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn out_of_range(&self, index: usize) -> TaskError {
        TaskError::OutOfRange {
            index: index as i64 + 1,
            size: self.tasks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("read book"),
            Task::deadline("return book", "01/06/2024 1200"),
            Task::event("book club", "Friday 7pm"),
        ])
    }

    #[test]
    fn add_returns_new_size() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.add(Task::todo("a")), 1);
        assert_eq!(list.add(Task::todo("b")), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn get_rejects_out_of_range() {
        let list = sample();
        assert_eq!(list.get(2).unwrap().description, "book club");
        assert!(matches!(
            list.get(3),
            Err(TaskError::OutOfRange { index: 4, size: 3 })
        ));
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut list = sample();
        assert!(list.mark_done(1).unwrap().done);
        assert!(list.mark_done(1).unwrap().done);
        assert!(!list.get(0).unwrap().done);
    }

    #[test]
    fn delete_shifts_later_tasks_down() {
        let mut list = sample();
        let removed = list.delete(0).unwrap();
        assert_eq!(removed.description, "read book");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().description, "return book");
        assert_eq!(list.get(1).unwrap().description, "book club");
    }

    #[test]
    fn delete_on_empty_list_reports_size_zero() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.delete(0),
            Err(TaskError::OutOfRange { size: 0, .. })
        ));
    }

    #[test]
    fn find_is_case_sensitive_and_keeps_order() {
        let list = sample();
        let before = list.clone();
        let found = list.find_by_keyword("book");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].description, "read book");
        assert!(list.find_by_keyword("Book").is_empty());
        assert_eq!(list, before);
    }
}
