//! Behavioural integration tests for the team board transition controller.
//!
//! These tests exercise the public crate surface in realistic board flows:
//! loading a remote snapshot, dragging tasks between columns as different
//! actors, and recovering from failed confirmations.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use teamboard::board::{
    adapters::memory::InMemoryRemoteTaskService,
    domain::{Actor, Employee, Priority, Role, Stage, Task, TaskId},
    ports::RemoteTaskError,
    services::{BoardService, TransitionOutcome, TransitionRequest},
};

fn team_snapshot() -> Vec<Task> {
    vec![
        Task::new(TaskId::new(1))
            .with_title("Prepare onboarding")
            .with_stage(Stage::Created)
            .with_priority(Priority::High)
            .with_assignee(Employee::new("Aysel", "Mammadova", "aysel@example.com")),
        Task::new(TaskId::new(2))
            .with_title("Quarterly review")
            .with_stage(Stage::InProgress),
        Task::new(TaskId::new(3)).with_title("Archive old records"),
        Task::new(TaskId::new(4))
            .with_title("Ship payroll fix")
            .with_stage(Stage::Resolved),
    ]
}

fn board() -> (
    BoardService<InMemoryRemoteTaskService>,
    Arc<InMemoryRemoteTaskService>,
) {
    let remote = Arc::new(InMemoryRemoteTaskService::with_tasks(team_snapshot()));
    let service = BoardService::new(Arc::clone(&remote));
    (service, remote)
}

#[tokio::test(flavor = "multi_thread")]
async fn head_manager_walks_a_task_across_the_whole_board() {
    let (service, remote) = board();
    service.load().await.expect("load");
    let actor = Actor::new(Role::HeadManager);

    // Task 3 has no stored stage and shows under Created.
    let columns = service.columns().expect("columns");
    assert_eq!(columns.column(Stage::Created).len(), 2);

    for (source, destination) in [
        (Stage::Created, Stage::InProgress),
        (Stage::InProgress, Stage::Resolved),
        (Stage::Resolved, Stage::Done),
    ] {
        let request = TransitionRequest::new(TaskId::new(3), source, Some(destination));
        let outcome = service
            .request_transition(request, Some(&actor))
            .await
            .expect("transition");
        assert!(matches!(outcome, TransitionOutcome::Completed));
    }

    let columns = service.columns().expect("columns");
    let done: Vec<_> = columns.column(Stage::Done).iter().map(Task::id).collect();
    assert_eq!(done, vec![TaskId::new(3)]);
    assert_eq!(columns.total(), 4);

    // Every hop was confirmed remotely, in order.
    let calls = remote.status_calls().expect("call log");
    assert_eq!(
        calls,
        vec![
            (TaskId::new(3), Stage::InProgress),
            (TaskId::new(3), Stage::Resolved),
            (TaskId::new(3), Stage::Done),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn backwards_moves_are_permitted() {
    let (service, _remote) = board();
    service.load().await.expect("load");
    let actor = Actor::new(Role::HeadManager);

    // Stage order is display order only: Resolved back to Created is legal.
    let request = TransitionRequest::new(TaskId::new(4), Stage::Resolved, Some(Stage::Created));
    let outcome = service
        .request_transition(request, Some(&actor))
        .await
        .expect("transition");

    assert!(matches!(outcome, TransitionOutcome::Completed));
    let columns = service.columns().expect("columns");
    assert!(columns.column(Stage::Resolved).is_empty());
    assert_eq!(columns.column(Stage::Created).len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn hr_manager_sees_the_board_but_cannot_move_tasks() {
    let (service, remote) = board();
    service.load().await.expect("load");
    let actor = Actor::new(Role::HrManager);

    let before = service.columns().expect("columns");
    let request = TransitionRequest::new(TaskId::new(2), Stage::InProgress, Some(Stage::Done));
    let outcome = service
        .request_transition(request, Some(&actor))
        .await
        .expect("transition");

    assert!(matches!(outcome, TransitionOutcome::Ignored(_)));
    let after = service.columns().expect("columns");
    assert_eq!(before, after);
    assert!(remote.status_calls().expect("call log").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_confirmation_reverts_the_visible_board() {
    let (service, remote) = board();
    service.load().await.expect("load");
    let actor = Actor::new(Role::HeadManager);
    remote
        .fail_next_set_status(RemoteTaskError::transport(std::io::Error::other(
            "gateway unavailable",
        )))
        .expect("failure injection");

    let request = TransitionRequest::new(TaskId::new(2), Stage::InProgress, Some(Stage::Done));
    let outcome = service
        .request_transition(request, Some(&actor))
        .await
        .expect("transition");

    // The optimistic move visibly reverts once the reload completes; no
    // error dialog, just the authoritative board again.
    assert!(matches!(outcome, TransitionOutcome::RolledBack(_)));
    let columns = service.columns().expect("columns");
    assert!(columns.column(Stage::Done).is_empty());
    assert_eq!(columns.column(Stage::InProgress).len(), 1);
    assert!(!service.is_updating());
}

#[tokio::test(flavor = "multi_thread")]
async fn transitions_on_different_tasks_are_independent() {
    let (service, remote) = board();
    service.load().await.expect("load");
    let actor = Actor::new(Role::HeadManager);

    // A rollback on one task does not block or undo a later move on another.
    remote
        .fail_next_set_status(RemoteTaskError::rejected(TaskId::new(1), "veto"))
        .expect("failure injection");
    let first = TransitionRequest::new(TaskId::new(1), Stage::Created, Some(Stage::Done));
    let outcome = service
        .request_transition(first, Some(&actor))
        .await
        .expect("transition");
    assert!(matches!(outcome, TransitionOutcome::RolledBack(_)));

    let second = TransitionRequest::new(TaskId::new(2), Stage::InProgress, Some(Stage::Resolved));
    let outcome = service
        .request_transition(second, Some(&actor))
        .await
        .expect("transition");
    assert!(matches!(outcome, TransitionOutcome::Completed));

    let columns = service.columns().expect("columns");
    assert_eq!(columns.column(Stage::Created).len(), 2);
    let resolved: Vec<_> = columns
        .column(Stage::Resolved)
        .iter()
        .map(Task::id)
        .collect();
    assert!(resolved.contains(&TaskId::new(2)));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_json_snapshot_loads_into_the_board() {
    let payload = serde_json::json!([
        { "id": 10, "title": "Draft policy", "status": "CREATED", "priority": "LOW" },
        { "id": 11, "status": "DONE" },
        { "id": 12 }
    ]);
    let tasks: Vec<Task> = serde_json::from_value(payload).expect("snapshot should deserialise");
    let remote = Arc::new(InMemoryRemoteTaskService::with_tasks(tasks));
    let service = BoardService::new(remote);
    service.load().await.expect("load");

    let columns = service.columns().expect("columns");
    assert_eq!(columns.column(Stage::Created).len(), 2);
    assert_eq!(columns.column(Stage::Done).len(), 1);
    assert_eq!(columns.total(), 3);
}
