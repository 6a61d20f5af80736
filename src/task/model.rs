use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Task identifier. Ids start at 1 and are unique within one manager.
pub type TaskId = u64;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Freshly constructed task with no status yet (stored as `""`).
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Task still to be done.
    #[serde(rename = "pending")]
    Pending,
    /// Task finished.
    #[serde(rename = "complete")]
    Complete,
}

impl TaskStatus {
    /// Parse a status from user input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "" => Some(Self::Unset),
            "pending" => Some(Self::Pending),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    /// The stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Pending => "pending",
            Self::Complete => "complete",
        }
    }
}

/// Derived urgency tier, computed from due-date proximity.
///
/// Variant order is the sort order, so `(priority, id)` tuples compare
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Due within 2 days (or already overdue): rank 1.
    High,
    /// Due in 3 to 6 days: rank 2.
    Medium,
    /// Due in 7 or more days: rank 3.
    Low,
    /// No due date: rank 4.
    Deferred,
}

impl Priority {
    /// Numeric rank, 1 (high) through 4 (no due date).
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Deferred => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.rank())
    }
}

/// A single to-do item.
///
/// The id is fixed at construction; every other field is mutable through
/// the update methods. Serializes to the record
/// `{id, title, description, "due date", status}` where `due date` is null
/// when unset and an ISO-8601 string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "due date")]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    status: TaskStatus,
}

impl Task {
    /// Create a task with the given id and title, empty description, no due
    /// date, and unset status. Ids come from the manager's [`IdAllocator`]
    /// (or from a deserialized record).
    ///
    /// [`IdAllocator`]: super::IdAllocator
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            due_date: None,
            status: TaskStatus::default(),
        }
    }

    /// Set the description at construction time.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date at construction time.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the status at construction time.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Mark the task complete.
    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Complete;
    }

    /// Mark the task pending again.
    pub fn mark_incomplete(&mut self) {
        self.status = TaskStatus::Pending;
    }

    /// Flip between pending and complete. A task that never had a status
    /// set stays as it is.
    pub fn toggle_status(&mut self) {
        match self.status {
            TaskStatus::Pending => self.status = TaskStatus::Complete,
            TaskStatus::Complete => self.status = TaskStatus::Pending,
            TaskStatus::Unset => {}
        }
    }

    /// Replace the title.
    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the description.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the due date from an ISO-8601 date string (`YYYY-MM-DD`).
    pub fn set_due_date(&mut self, date: &str) -> Result<(), chrono::ParseError> {
        self.due_date = Some(date.parse::<NaiveDate>()?);
        Ok(())
    }

    /// True iff a due date is set and it is strictly before today.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(today())
    }

    /// [`is_overdue`](Self::is_overdue) against an explicit reference date.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today,
            None => false,
        }
    }

    /// Priority tier relative to today.
    pub fn priority(&self) -> Priority {
        self.priority_on(today())
    }

    /// [`priority`](Self::priority) against an explicit reference date.
    pub fn priority_on(&self, today: NaiveDate) -> Priority {
        match self.due_date {
            Some(due) => {
                let days_left = (due - today).num_days();
                if days_left <= 2 {
                    Priority::High
                } else if days_left < 7 {
                    Priority::Medium
                } else {
                    Priority::Low
                }
            }
            None => Priority::Deferred,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task #{}: {} [{}]", self.id, self.title, self.status.as_str())
    }
}

/// The current local date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
