use std::thread::sleep;
use std::time::Duration;

use chrono::NaiveDate;
use taskdeck_core::error::Error;
use taskdeck_core::ops::{self, NewTask, TaskPatch};
use taskdeck_core::store::Store;
use taskdeck_core::task::Priority;
use tempfile::tempdir;
use uuid::Uuid;

fn new_task(owner_id: &str, title: &str, priority: Priority) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        priority,
        due_date: None,
        owner_id: owner_id.to_string(),
    }
}

// Creates are timestamped with the wall clock at millisecond precision;
// spacing them out keeps the newest-first assertions deterministic.
fn pause() {
    sleep(Duration::from_millis(5));
}

#[test]
fn create_trims_and_initializes() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let id = ops::create_task(
        &store,
        NewTask {
            title: "  Write the launch checklist  ".to_string(),
            description: Some("  covers rollout and rollback  ".to_string()),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            owner_id: "user-1".to_string(),
        },
    )
    .expect("create task");

    let tasks = ops::list_tasks(&store, "user-1").expect("list tasks");
    assert_eq!(tasks.len(), 1);

    let task = &tasks[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Write the launch checklist");
    assert_eq!(
        task.description.as_deref(),
        Some("covers rollout and rollback")
    );
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
    assert_eq!(task.created_at, task.updated_at);
    assert_eq!(task.owner_id, "user-1");
}

#[test]
fn create_rejects_whitespace_title() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let err = ops::create_task(&store, new_task("user-1", "   ", Priority::Low))
        .expect_err("whitespace title must fail");
    assert!(matches!(err, Error::Validation(_)));
    assert!(
        ops::list_tasks(&store, "user-1")
            .expect("list tasks")
            .is_empty()
    );
}

#[test]
fn create_title_length_boundary() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let exactly_200 = "t".repeat(200);
    ops::create_task(&store, new_task("user-1", &exactly_200, Priority::Medium))
        .expect("200-char title is valid");

    let over = "t".repeat(201);
    let err = ops::create_task(&store, new_task("user-1", &over, Priority::Medium))
        .expect_err("201-char title must fail");
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_description_length_boundary() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let mut ok = new_task("user-1", "long description", Priority::Low);
    ok.description = Some("d".repeat(1000));
    ops::create_task(&store, ok).expect("1000-char description is valid");

    let mut over = new_task("user-1", "too long description", Priority::Low);
    over.description = Some("d".repeat(1001));
    let err = ops::create_task(&store, over).expect_err("1001-char description must fail");
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn toggle_flips_completion_and_advances_updated_at() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let id = ops::create_task(&store, new_task("user-1", "Toggle me", Priority::Medium))
        .expect("create task");
    let created = ops::list_tasks(&store, "user-1").expect("list")[0].clone();

    ops::toggle_task(&store, id).expect("first toggle");
    let after_first = store
        .get_task(id)
        .expect("load task")
        .expect("task present");
    assert!(after_first.completed);
    assert!(after_first.updated_at > created.updated_at);

    ops::toggle_task(&store, id).expect("second toggle");
    let after_second = store
        .get_task(id)
        .expect("load task")
        .expect("task present");
    assert_eq!(after_second.completed, created.completed);
    assert!(after_second.updated_at > after_first.updated_at);
}

#[test]
fn toggle_missing_task_fails() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let missing = Uuid::new_v4();
    let err = ops::toggle_task(&store, missing).expect_err("missing task must fail");
    assert!(matches!(err, Error::NotFound(id) if id == missing));
}

#[test]
fn update_priority_only_leaves_rest_untouched() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let mut input = new_task("user-1", "Partial update", Priority::Low);
    input.description = Some("keep this".to_string());
    input.due_date = NaiveDate::from_ymd_opt(2026, 8, 20);
    let id = ops::create_task(&store, input).expect("create task");
    let before = store.get_task(id).expect("load").expect("present");

    ops::update_task(
        &store,
        id,
        TaskPatch {
            priority: Some(Priority::High),
            ..TaskPatch::default()
        },
    )
    .expect("update priority");

    let after = store.get_task(id).expect("load").expect("present");
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.due_date, before.due_date);
    assert_eq!(after.completed, before.completed);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn update_can_clear_due_date_and_description() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let mut input = new_task("user-1", "Clear fields", Priority::Medium);
    input.description = Some("to be removed".to_string());
    input.due_date = NaiveDate::from_ymd_opt(2026, 8, 10);
    let id = ops::create_task(&store, input).expect("create task");

    ops::update_task(
        &store,
        id,
        TaskPatch {
            description: Some(None),
            due_date: Some(None),
            ..TaskPatch::default()
        },
    )
    .expect("clear fields");

    let after = store.get_task(id).expect("load").expect("present");
    assert_eq!(after.description, None);
    assert_eq!(after.due_date, None);
}

#[test]
fn update_validates_before_lookup() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let missing = Uuid::new_v4();
    let err = ops::update_task(
        &store,
        missing,
        TaskPatch {
            title: Some("   ".to_string()),
            ..TaskPatch::default()
        },
    )
    .expect_err("invalid patch must fail");
    assert!(matches!(err, Error::Validation(_)));

    let err = ops::update_task(&store, missing, TaskPatch::default())
        .expect_err("missing task must fail");
    assert!(matches!(err, Error::NotFound(id) if id == missing));
}

#[test]
fn delete_removes_record_and_missing_id_fails() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let id = ops::create_task(&store, new_task("user-1", "Delete me", Priority::Low))
        .expect("create task");

    ops::delete_task(&store, id).expect("delete task");
    assert!(
        ops::list_tasks(&store, "user-1")
            .expect("list tasks")
            .is_empty()
    );

    let err = ops::delete_task(&store, id).expect_err("second delete must fail");
    assert!(matches!(err, Error::NotFound(missing) if missing == id));
}

#[test]
fn queries_scope_to_owner_and_sort_newest_first() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let first = ops::create_task(&store, new_task("user-1", "First", Priority::Low))
        .expect("create first");
    pause();
    let second = ops::create_task(&store, new_task("user-1", "Second", Priority::Medium))
        .expect("create second");
    pause();
    ops::create_task(&store, new_task("user-2", "Other owner", Priority::High))
        .expect("create other");

    let tasks = ops::list_tasks(&store, "user-1").expect("list tasks");
    let ids: Vec<Uuid> = tasks.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn status_and_priority_queries_select_exact_subsets() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let low_done =
        ops::create_task(&store, new_task("user-1", "Low done", Priority::Low)).expect("create");
    pause();
    let high_open =
        ops::create_task(&store, new_task("user-1", "High open", Priority::High)).expect("create");
    pause();
    let high_done =
        ops::create_task(&store, new_task("user-1", "High done", Priority::High)).expect("create");

    ops::toggle_task(&store, low_done).expect("complete low");
    ops::toggle_task(&store, high_done).expect("complete high");

    let open = ops::list_tasks_by_status(&store, "user-1", false).expect("open tasks");
    assert_eq!(
        open.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![high_open]
    );

    let done = ops::list_tasks_by_status(&store, "user-1", true).expect("done tasks");
    assert_eq!(
        done.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![high_done, low_done]
    );

    let high = ops::list_tasks_by_priority(&store, "user-1", Priority::High).expect("high tasks");
    assert_eq!(
        high.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![high_done, high_open]
    );
}

#[test]
fn upsert_user_inserts_then_updates_in_place() {
    let temp = tempdir().expect("tempdir");
    let store = Store::open(temp.path()).expect("open store");

    let created =
        ops::upsert_user(&store, "Dana", "dana@example.com", None).expect("insert user");
    let updated = ops::upsert_user(
        &store,
        "Dana K.",
        "dana@example.com",
        Some("https://example.com/dana.png"),
    )
    .expect("update user");

    assert_eq!(created.id, updated.id);
    assert_eq!(updated.name, "Dana K.");
    assert_eq!(
        updated.image.as_deref(),
        Some("https://example.com/dana.png")
    );

    let found = ops::find_user_by_email(&store, "dana@example.com")
        .expect("lookup user")
        .expect("user present");
    assert_eq!(found, updated);
    assert_eq!(store.load_users().expect("load users").len(), 1);
}

#[test]
fn store_contents_survive_reopen() {
    let temp = tempdir().expect("tempdir");

    let id = {
        let store = Store::open(temp.path()).expect("open store");
        ops::create_task(&store, new_task("user-1", "Persisted", Priority::Medium))
            .expect("create task")
    };

    let reopened = Store::open(temp.path()).expect("reopen store");
    let tasks = ops::list_tasks(&reopened, "user-1").expect("list tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].title, "Persisted");
    assert_eq!(tasks[0].created_at, tasks[0].updated_at);
}
