//! In-memory integration tests for the task store lifecycle.

use std::sync::Arc;

use super::helpers::{TestStore, clock, date, slot, start, store};
use chrono::Duration;
use rstest::rstest;
use taskboard::task::{
    adapters::{clock::ManualClock, memory::InMemoryTaskSlot},
    domain::{NewTask, TaskId, TaskPatch, TaskPriority, TaskStatus},
    query::{FieldFilter, TaskFilters},
    services::TaskStore,
};

fn loaded(slot: &Arc<InMemoryTaskSlot>, clock: &Arc<ManualClock>) -> TestStore {
    let mut store = TaskStore::new(Arc::clone(slot), Arc::clone(clock));
    store.load();
    store
}

#[rstest]
fn tasks_survive_a_restart(slot: Arc<InMemoryTaskSlot>, clock: Arc<ManualClock>) {
    let mut first_session = loaded(&slot, &clock);
    let milk = first_session
        .create(
            NewTask::new("Buy milk")
                .with_category("Errands")
                .with_due_date(date(2020, 1, 1)),
        )
        .expect("create");
    clock.advance(Duration::hours(2));
    first_session
        .update(
            milk.id(),
            TaskPatch::new()
                .with_priority(TaskPriority::High)
                .with_description("Oat milk"),
        )
        .expect("update");
    first_session
        .create(NewTask::new("Read book").with_category("Leisure"))
        .expect("create");

    let second_session = loaded(&slot, &clock);

    assert_eq!(second_session.tasks(), first_session.tasks());
    let restored = second_session.get(milk.id()).expect("task restored");
    assert_eq!(restored.priority(), TaskPriority::High);
    assert_eq!(restored.description(), "Oat milk");
    assert_eq!(restored.created_at(), start());
    assert_eq!(restored.updated_at(), start() + Duration::hours(2));
}

#[rstest]
fn overdue_scenario_for_buy_milk(slot: Arc<InMemoryTaskSlot>, clock: Arc<ManualClock>) {
    let mut store = loaded(&slot, &clock);
    let milk = store
        .create(
            NewTask::new("Buy milk")
                .with_status(TaskStatus::Todo)
                .with_due_date(date(2020, 1, 1)),
        )
        .expect("create");

    assert_eq!(store.stats().overdue, 1);

    store
        .update(milk.id(), TaskPatch::new().with_status(TaskStatus::Completed))
        .expect("update");

    assert_eq!(store.stats().overdue, 0);
}

#[rstest]
fn due_today_becomes_overdue_tomorrow(slot: Arc<InMemoryTaskSlot>, clock: Arc<ManualClock>) {
    let mut store = loaded(&slot, &clock);
    let today = store.today();
    store
        .create(NewTask::new("Submit form").with_due_date(today))
        .expect("create");
    assert_eq!(store.stats().overdue, 0);

    clock.advance(Duration::days(1));

    assert_eq!(store.stats().overdue, 1);
}

#[rstest]
fn search_results_shrink_after_delete(mut store: TestStore) {
    let food = store.create(NewTask::new("Buy food")).expect("create");
    store
        .create(NewTask::new("Cook").with_description("Use FOOD from fridge"))
        .expect("create");
    store.create(NewTask::new("Laundry")).expect("create");
    let search = TaskFilters::new().with_search("foo");
    assert_eq!(store.filtered(&search).len(), 2);

    store.delete(food.id()).expect("delete");
    store.delete(food.id()).expect("repeat delete");

    let remaining = store.filtered(&search);
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|task| task.id() != food.id()));
    assert_eq!(store.stats().total, 2);
}

#[rstest]
fn categories_ignore_empty_labels(mut store: TestStore) {
    store
        .create(NewTask::new("Standup").with_category("Work"))
        .expect("create");
    store.create(NewTask::new("Nap")).expect("create");

    assert_eq!(store.categories(), vec!["Work".to_owned()]);
}

#[rstest]
fn edit_form_submission_replaces_all_fields(
    slot: Arc<InMemoryTaskSlot>,
    clock: Arc<ManualClock>,
) {
    let mut store = loaded(&slot, &clock);
    let original = store
        .create(
            NewTask::new("Plan trip")
                .with_category("Travel")
                .with_due_date(date(2024, 7, 1)),
        )
        .expect("create");

    let edited = store
        .update(
            original.id(),
            TaskPatch::replace_with(
                NewTask::new("Plan summer trip")
                    .with_status(TaskStatus::InProgress)
                    .with_category("Travel"),
            ),
        )
        .expect("update")
        .expect("task present");

    assert_eq!(edited.id(), original.id());
    assert_eq!(edited.title(), "Plan summer trip");
    assert_eq!(edited.due_date(), None);
    let in_progress = store.filtered(
        &TaskFilters::new()
            .with_status(FieldFilter::Only(TaskStatus::InProgress))
            .with_category("Travel"),
    );
    assert_eq!(in_progress, vec![edited]);
}

#[rstest]
fn missing_ids_never_create_tasks(slot: Arc<InMemoryTaskSlot>, clock: Arc<ManualClock>) {
    let mut store = loaded(&slot, &clock);

    let updated = store
        .set_status(&TaskId::new("404"), TaskStatus::Completed)
        .expect("update");
    let deleted = store.delete(&TaskId::new("404")).expect("delete");

    assert_eq!(updated, None);
    assert_eq!(deleted, None);
    assert!(store.tasks().is_empty());
    assert_eq!(slot.contents().expect("slot readable"), None);
}
