//! Integration tests for `DieselTaskRepository` against embedded PostgreSQL.
//!
//! Tests stay synchronous and drive the repository through the runtime held
//! by the migrated database, keeping cluster bootstrap outside any executor.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use taskplanner::domain::ports::{TaskPersistenceError, TaskRepository};
use taskplanner::domain::{Priority, Task, TaskId, TaskParts, TaskPatch, TaskStatus};
use taskplanner::outbound::persistence::DieselTaskRepository;

#[path = "support/pg_embed.rs"]
mod pg_embed;

use pg_embed::{MigratedDatabase, migrated_database};

struct TestContext {
    repository: DieselTaskRepository,
    database: MigratedDatabase,
}

#[fixture]
fn diesel_world() -> Option<TestContext> {
    let database = migrated_database()?;
    Some(TestContext {
        repository: DieselTaskRepository::new(database.pool.clone()),
        database,
    })
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn task(title: &str, created_at: DateTime<Utc>) -> Task {
    Task::from_parts(TaskParts {
        id: TaskId::generate(created_at),
        title: title.to_owned(),
        description: "keep me".to_owned(),
        priority: Priority::High,
        status: TaskStatus::Pending,
        completed: false,
        due_date: Some(created_at + Duration::days(3)),
        created_at,
    })
}

#[rstest]
fn listing_is_newest_first(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: listing_is_newest_first skipped");
        return;
    };
    let oldest = task("oldest", base_time());
    let newest = task("newest", base_time() + Duration::seconds(2));
    let middle = task("middle", base_time() + Duration::seconds(1));

    let listed = world.database.runtime.block_on(async {
        for item in [&oldest, &newest, &middle] {
            world.repository.insert(item).await.expect("insert task");
        }
        world.repository.list_newest_first().await.expect("list tasks")
    });

    assert_eq!(listed, vec![newest, middle, oldest]);
}

#[rstest]
fn update_merges_shallowly_and_clears_due_date(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: update_merges_shallowly_and_clears_due_date skipped");
        return;
    };
    let stored = task("write report", base_time());
    let patch = TaskPatch {
        status: Some(TaskStatus::Completed),
        due_date: Some(None),
        ..TaskPatch::default()
    };

    let (matched, listed) = world.database.runtime.block_on(async {
        world.repository.insert(&stored).await.expect("insert task");
        let matched = world
            .repository
            .update(&stored.id(), &patch)
            .await
            .expect("update task");
        let listed = world.repository.list_newest_first().await.expect("list");
        (matched, listed)
    });

    assert!(matched);
    let [updated] = listed.as_slice() else {
        panic!("expected one task, got {listed:?}");
    };
    assert_eq!(updated.status(), TaskStatus::Completed);
    assert!(!updated.completed(), "completed is not re-derived on update");
    assert_eq!(updated.due_date(), None);
    assert_eq!(updated.title(), "write report");
    assert_eq!(updated.description(), "keep me");
    assert_eq!(updated.priority(), Priority::High);
    assert_eq!(updated.created_at(), stored.created_at());
}

#[rstest]
fn update_without_due_date_keeps_it(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: update_without_due_date_keeps_it skipped");
        return;
    };
    let stored = task("plan sprint", base_time());
    let patch = TaskPatch {
        title: Some("plan next sprint".to_owned()),
        completed: Some(true),
        ..TaskPatch::default()
    };

    let listed = world.database.runtime.block_on(async {
        world.repository.insert(&stored).await.expect("insert task");
        world
            .repository
            .update(&stored.id(), &patch)
            .await
            .expect("update task");
        world.repository.list_newest_first().await.expect("list")
    });

    let [updated] = listed.as_slice() else {
        panic!("expected one task, got {listed:?}");
    };
    assert_eq!(updated.title(), "plan next sprint");
    assert!(updated.completed());
    assert_eq!(updated.status(), TaskStatus::Pending);
    assert_eq!(updated.due_date(), stored.due_date());
}

#[rstest]
fn unknown_ids_match_nothing(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_ids_match_nothing skipped");
        return;
    };
    let missing = TaskId::generate(base_time());
    let patch = TaskPatch {
        title: Some("ghost".to_owned()),
        ..TaskPatch::default()
    };

    let (updated, deleted) = world.database.runtime.block_on(async {
        let updated = world.repository.update(&missing, &patch).await.expect("update");
        let deleted = world.repository.delete(&missing).await.expect("delete");
        (updated, deleted)
    });

    assert!(!updated);
    assert!(!deleted);
}

#[rstest]
fn delete_removes_the_document(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: delete_removes_the_document skipped");
        return;
    };
    let stored = task("tidy desk", base_time());

    let (deleted, listed) = world.database.runtime.block_on(async {
        world.repository.insert(&stored).await.expect("insert task");
        let deleted = world.repository.delete(&stored.id()).await.expect("delete");
        let listed = world.repository.list_newest_first().await.expect("list");
        (deleted, listed)
    });

    assert!(deleted);
    assert!(listed.is_empty());
}

#[rstest]
fn missing_table_surfaces_as_query_error(diesel_world: Option<TestContext>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: missing_table_surfaces_as_query_error skipped");
        return;
    };
    world.database.execute("DROP TABLE tasks");

    let result = world
        .database
        .runtime
        .block_on(world.repository.list_newest_first());

    assert!(
        matches!(result, Err(TaskPersistenceError::Query { .. })),
        "expected query error, got {result:?}"
    );
}
