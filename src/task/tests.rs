use chrono::NaiveDate;

use super::*;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_status_parse() {
    assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
    assert_eq!(TaskStatus::parse("PENDING"), Some(TaskStatus::Pending));
    assert_eq!(TaskStatus::parse("Complete"), Some(TaskStatus::Complete));
    assert_eq!(TaskStatus::parse(""), Some(TaskStatus::Unset));
    assert_eq!(TaskStatus::parse("done"), None);
}

#[test]
fn test_status_as_str() {
    assert_eq!(TaskStatus::Pending.as_str(), "pending");
    assert_eq!(TaskStatus::Complete.as_str(), "complete");
    assert_eq!(TaskStatus::Unset.as_str(), "");
}

#[test]
fn test_mark_complete_and_incomplete() {
    let mut task = Task::new(1, "Write tests");
    task.mark_complete();
    assert_eq!(task.status(), TaskStatus::Complete);
    task.mark_incomplete();
    assert_eq!(task.status(), TaskStatus::Pending);
}

#[test]
fn test_toggle_status_is_its_own_inverse() {
    let mut task = Task::new(1, "Write tests").with_status(TaskStatus::Pending);
    task.toggle_status();
    assert_eq!(task.status(), TaskStatus::Complete);
    task.toggle_status();
    assert_eq!(task.status(), TaskStatus::Pending);

    let mut done = Task::new(2, "Shipped").with_status(TaskStatus::Complete);
    done.toggle_status();
    done.toggle_status();
    assert_eq!(done.status(), TaskStatus::Complete);
}

#[test]
fn test_toggle_status_leaves_unset_alone() {
    let mut task = Task::new(1, "New");
    task.toggle_status();
    assert_eq!(task.status(), TaskStatus::Unset);
}

#[test]
fn test_update_title_and_description() {
    let mut task = Task::new(1, "Old title");
    task.update_title("New title");
    task.update_description("Some details");
    assert_eq!(task.title(), "New title");
    assert_eq!(task.description(), "Some details");
    assert_eq!(task.id(), 1);
}

#[test]
fn test_set_due_date_parses_iso() {
    let mut task = Task::new(1, "Pay rent");
    task.set_due_date("2026-09-01").unwrap();
    assert_eq!(task.due_date(), Some(date("2026-09-01")));
}

#[test]
fn test_set_due_date_rejects_malformed_input() {
    let mut task = Task::new(1, "Pay rent");
    assert!(task.set_due_date("not-a-date").is_err());
    assert!(task.set_due_date("2026-13-40").is_err());
    assert_eq!(task.due_date(), None);
}

#[test]
fn test_priority_without_due_date_is_deferred() {
    let task = Task::new(1, "Someday");
    assert_eq!(task.priority_on(date("2026-08-27")), Priority::Deferred);
    assert_eq!(task.priority_on(date("2026-08-27")).rank(), 4);
}

#[test]
fn test_priority_tiers_from_days_remaining() {
    let today = date("2026-08-27");
    let due_in = |days: i64| Task::new(1, "t").with_due_date(today + chrono::Duration::days(days));

    assert_eq!(due_in(0).priority_on(today), Priority::High);
    assert_eq!(due_in(2).priority_on(today), Priority::High);
    assert_eq!(due_in(3).priority_on(today), Priority::Medium);
    assert_eq!(due_in(6).priority_on(today), Priority::Medium);
    assert_eq!(due_in(7).priority_on(today), Priority::Low);
    assert_eq!(due_in(10).priority_on(today), Priority::Low);
    // Overdue counts as high
    assert_eq!(due_in(-5).priority_on(today), Priority::High);
}

#[test]
fn test_priority_ranks() {
    assert_eq!(Priority::High.rank(), 1);
    assert_eq!(Priority::Medium.rank(), 2);
    assert_eq!(Priority::Low.rank(), 3);
    assert_eq!(Priority::Deferred.rank(), 4);
    assert!(Priority::High < Priority::Medium);
    assert!(Priority::Low < Priority::Deferred);
}

#[test]
fn test_is_overdue() {
    let today = date("2026-08-27");
    let overdue = Task::new(1, "Late").with_due_date(date("2026-08-26"));
    let due_today = Task::new(2, "Today").with_due_date(today);
    let no_date = Task::new(3, "Whenever");

    assert!(overdue.is_overdue_on(today));
    assert!(!due_today.is_overdue_on(today));
    assert!(!no_date.is_overdue_on(today));
}

#[test]
fn test_display() {
    let task = Task::new(7, "Buy milk").with_status(TaskStatus::Pending);
    assert_eq!(task.to_string(), "Task #7: Buy milk [pending]");
}

#[test]
fn test_serde_round_trip_with_due_date() {
    let task = Task::new(3, "Pay rent")
        .with_description("Transfer before the 1st")
        .with_due_date(date("2026-09-01"))
        .with_status(TaskStatus::Pending);

    let json = serde_json::to_string(&task).unwrap();
    let back: Task = serde_json::from_str(&json).unwrap();
    assert_eq!(back, task);
    assert_eq!(back.due_date(), Some(date("2026-09-01")));
}

#[test]
fn test_serde_round_trip_without_due_date() {
    let task = Task::new(4, "Someday");
    let json = serde_json::to_string(&task).unwrap();
    assert!(json.contains("\"due date\":null"));
    let back: Task = serde_json::from_str(&json).unwrap();
    assert_eq!(back, task);
}

#[test]
fn test_serde_record_keys() {
    let task = Task::new(5, "Keys").with_status(TaskStatus::Complete);
    let value = serde_json::to_value(&task).unwrap();
    let record = value.as_object().unwrap();
    assert_eq!(record["id"], 5);
    assert_eq!(record["title"], "Keys");
    assert_eq!(record["description"], "");
    assert_eq!(record["due date"], serde_json::Value::Null);
    assert_eq!(record["status"], "complete");
}

#[test]
fn test_deserialize_record() {
    let json = r#"{"id": 9, "title": "Loaded", "description": "from disk",
                   "due date": "2026-12-24", "status": "pending"}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.id(), 9);
    assert_eq!(task.title(), "Loaded");
    assert_eq!(task.description(), "from disk");
    assert_eq!(task.due_date(), Some(date("2026-12-24")));
    assert_eq!(task.status(), TaskStatus::Pending);
}

#[test]
fn test_id_allocator_is_monotonic() {
    let mut ids = IdAllocator::new();
    assert_eq!(ids.watermark(), 0);
    assert_eq!(ids.allocate(), 1);
    assert_eq!(ids.allocate(), 2);
    assert_eq!(ids.watermark(), 2);
}

#[test]
fn test_id_allocator_bump_never_lowers() {
    let mut ids = IdAllocator::new();
    ids.bump_to(10);
    assert_eq!(ids.watermark(), 10);
    ids.bump_to(4);
    assert_eq!(ids.watermark(), 10);
    assert_eq!(ids.allocate(), 11);
}
