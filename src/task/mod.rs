//! Task model: a single to-do item.
//!
//! A task has an immutable id, mutable title/description/status/due-date
//! fields, and a derived [`Priority`] tier computed from how close the due
//! date is. Tasks serialize to flat JSON records with the keys
//! `id`, `title`, `description`, `due date`, `status`.

mod id;
mod model;

#[cfg(test)]
mod tests;

pub use id::IdAllocator;
pub use model::{Priority, Task, TaskId, TaskStatus};

pub(crate) use model::today;
