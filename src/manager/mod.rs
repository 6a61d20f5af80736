//! Task manager: the in-memory collection behind the front-end.
//!
//! Owns the live task list (insertion order preserved), the id allocator,
//! and the path of the backing file. Every mutating operation immediately
//! rewrites the full persisted snapshot, so the file always mirrors the
//! in-memory list.


use std::path::{Path, PathBuf};

use crate::store::{self, StoreError};
use crate::task::{today, IdAllocator, Task, TaskId, TaskStatus};

/// Errors from manager operations.
///
/// The empty collection is an error variant rather than a sentinel value,
/// so every operation reports through the same type.
#[derive(Debug)]
pub enum TaskError {
    /// The task list is currently empty.
    Empty,
    /// No task matched the given id or title.
    NotFound,
    /// Id outside the range of ids ever allocated.
    InvalidId(TaskId),
    /// Status filter other than pending/complete.
    InvalidStatus(String),
    /// Reading or writing the persisted collection failed.
    Store(StoreError),
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "The task list is currently empty."),
            Self::NotFound => write!(f, "no task with the given id or title exists"),
            Self::InvalidId(id) => write!(f, "invalid task id: {}", id),
            Self::InvalidStatus(s) => write!(f, "invalid status: {:?} (expected pending or complete)", s),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for TaskError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Selector for [`TaskManager::update_task`]: replace by id or by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskQuery {
    /// Match the first task with this id.
    Id(TaskId),
    /// Match the first task with exactly this title.
    Title(String),
}

impl TaskQuery {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Id(id) => task.id() == *id,
            Self::Title(title) => task.title() == title,
        }
    }
}

/// In-memory task collection with file persistence after every mutation.
#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    ids: IdAllocator,
    path: PathBuf,
}

impl TaskManager {
    /// Build a manager from the persisted collection at `path`.
    ///
    /// A missing file yields an empty manager. The id allocator is bumped
    /// past the highest loaded id so fresh ids never collide.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let tasks = store::load_tasks(&path)?;
        Ok(Self::from_tasks(path.as_ref(), tasks))
    }

    /// Build a manager from an explicit record sequence. Does not write.
    pub fn from_tasks<P: AsRef<Path>>(path: P, tasks: Vec<Task>) -> Self {
        let mut ids = IdAllocator::new();
        for task in &tasks {
            ids.bump_to(task.id());
        }
        Self {
            tasks,
            ids,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Hand out a fresh task id.
    pub fn allocate_id(&mut self) -> TaskId {
        self.ids.allocate()
    }

    /// Highest id ever allocated or loaded.
    pub fn max_id(&self) -> TaskId {
        self.ids.watermark()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Append a task and persist.
    ///
    /// The allocator watermark is raised to the task's id, so a caller that
    /// constructed the id by hand cannot cause a later collision.
    pub fn add_task(&mut self, task: Task) -> Result<TaskId, TaskError> {
        let id = task.id();
        self.ids.bump_to(id);
        self.tasks.push(task);
        self.persist()?;
        Ok(id)
    }

    /// Remove the first task structurally equal to `task` and persist.
    pub fn del_task(&mut self, task: &Task) -> Result<(), TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }
        match self.tasks.iter().position(|t| t == task) {
            Some(index) => {
                self.tasks.remove(index);
                self.persist()
            }
            None => Err(TaskError::NotFound),
        }
    }

    /// Replace the first task matching `query` with `new_task` and persist.
    ///
    /// Only the first match is replaced; the error fires only when no task
    /// matched at all.
    pub fn update_task(&mut self, new_task: Task, query: &TaskQuery) -> Result<(), TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }
        match self.tasks.iter().position(|t| query.matches(t)) {
            Some(index) => {
                self.ids.bump_to(new_task.id());
                self.tasks[index] = new_task;
                self.persist()
            }
            None => Err(TaskError::NotFound),
        }
    }

    /// All tasks in insertion order, or [`TaskError::Empty`].
    pub fn get_tasks(&self) -> Result<&[Task], TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }
        Ok(&self.tasks)
    }

    /// Look up a task by id (linear search).
    ///
    /// Ids outside `[1, max_id]` are rejected as invalid; an in-range id
    /// with no live task is not found.
    pub fn get_task_by_id(&self, id: TaskId) -> Result<&Task, TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }
        if id < 1 || id > self.ids.watermark() {
            return Err(TaskError::InvalidId(id));
        }
        self.tasks
            .iter()
            .find(|t| t.id() == id)
            .ok_or(TaskError::NotFound)
    }

    /// All tasks whose status matches `status` (case-insensitive input).
    ///
    /// Only `pending` and `complete` are valid filters. The result may be
    /// empty when no task carries the status.
    pub fn get_task_by_status(&self, status: &str) -> Result<Vec<&Task>, TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }
        let wanted = match TaskStatus::parse(status) {
            Some(s @ (TaskStatus::Pending | TaskStatus::Complete)) => s,
            _ => return Err(TaskError::InvalidStatus(status.to_string())),
        };
        Ok(self.tasks.iter().filter(|t| t.status() == wanted).collect())
    }

    /// A new sequence ordered by `(priority ascending, id ascending)`,
    /// priorities taken against today.
    pub fn sort_tasks_by_priority(&self) -> Vec<Task> {
        self.sort_tasks_by_priority_on(today())
    }

    /// [`sort_tasks_by_priority`](Self::sort_tasks_by_priority) against an
    /// explicit reference date.
    pub fn sort_tasks_by_priority_on(&self, today: chrono::NaiveDate) -> Vec<Task> {
        let mut sorted = self.tasks.clone();
        sorted.sort_by_key(|t| (t.priority_on(today), t.id()));
        sorted
    }

    fn persist(&self) -> Result<(), TaskError> {
        store::save_tasks(&self.path, &self.tasks)?;
        Ok(())
    }
}
