//! Tasktrack: a minimal personal task tracker.
//!
//! The core is the [`task`] and [`manager`] modules: to-do items with a
//! derived due-date priority, kept in an in-memory list that is snapshotted
//! to a flat JSON file after every mutation.
//!
//! Layout:
//! - `task` - the task model, status, priority tiers, and id allocation
//! - `manager` - the task collection with CRUD, filter, and sort operations
//! - `store` - load/save of the persisted collection
//! - `config` - backing-file configuration (CLI flags, env, tasktrack.toml)

pub mod config;
pub mod manager;
pub mod store;
pub mod task;
