//! Unit tests for the in-memory task store.

use crate::board::domain::{Stage, Task, TaskId, TaskStore};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId::new(1)).with_stage(Stage::Created),
        Task::new(TaskId::new(2)).with_stage(Stage::InProgress),
        Task::new(TaskId::new(3)),
    ]
}

#[test]
fn replace_all_swaps_contents_wholesale() {
    let mut store = TaskStore::from_tasks(sample_tasks());
    assert_eq!(store.len(), 3);

    store.replace_all(vec![Task::new(TaskId::new(9)).with_stage(Stage::Done)]);
    assert_eq!(store.len(), 1);
    assert!(store.get(TaskId::new(1)).is_none());
    assert!(store.get(TaskId::new(9)).is_some());
}

#[test]
fn replace_all_keeps_first_occurrence_of_duplicate_ids() {
    let mut store = TaskStore::new();
    store.replace_all(vec![
        Task::new(TaskId::new(5)).with_stage(Stage::Created),
        Task::new(TaskId::new(5)).with_stage(Stage::Done),
        Task::new(TaskId::new(6)),
    ]);

    assert_eq!(store.len(), 2);
    let kept = store.get(TaskId::new(5)).expect("task 5 should be kept");
    assert_eq!(kept.stage(), Some(Stage::Created));
}

#[test]
fn replace_all_preserves_snapshot_order() {
    let store = TaskStore::from_tasks(sample_tasks());
    let ids: Vec<_> = store.tasks().iter().map(Task::id).collect();
    assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2), TaskId::new(3)]);
}

#[test]
fn set_stage_rewrites_only_the_identified_task() {
    let mut store = TaskStore::from_tasks(sample_tasks());
    let found = store.set_stage(TaskId::new(1), Stage::InProgress);

    assert!(found);
    let moved = store.get(TaskId::new(1)).expect("task 1 should exist");
    assert_eq!(moved.stage(), Some(Stage::InProgress));
    let untouched = store.get(TaskId::new(2)).expect("task 2 should exist");
    assert_eq!(untouched.stage(), Some(Stage::InProgress));
    let absent_stage = store.get(TaskId::new(3)).expect("task 3 should exist");
    assert_eq!(absent_stage.stage(), None);
}

#[test]
fn set_stage_reports_unknown_task() {
    let mut store = TaskStore::from_tasks(sample_tasks());
    let found = store.set_stage(TaskId::new(99), Stage::Done);
    assert!(!found);
    assert_eq!(store.len(), 3);
}

#[test]
fn empty_store_reports_empty() {
    let store = TaskStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get(TaskId::new(1)).is_none());
}
