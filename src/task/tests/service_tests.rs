//! Service orchestration tests for task operations.

use std::sync::Arc;

use crate::cache::{HybridCache, adapters::InMemoryRemoteCache};
use crate::outcome::OperationOutcome;
use crate::task::{
    adapters::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskValidator},
    services::{CreateTaskRequest, DefaultTaskValidator, TaskService, UpdateTaskRequest},
};
use crate::test_support::{FixedClock, test_now};
use crate::user::{
    adapters::InMemoryUserRepository,
    domain::{EmailAddress, User},
    ports::UserRepository,
};
use async_trait::async_trait;
use eyre::{bail, ensure};
use mockable::Clock;
use rstest::{fixture, rstest};

type TestTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryRemoteCache<FixedClock>,
    FixedClock,
>;

struct Harness {
    service: TestTaskService,
    tasks: InMemoryTaskRepository,
    users: InMemoryUserRepository,
    clock: FixedClock,
}

#[fixture]
fn harness() -> Harness {
    let clock = FixedClock::at(test_now());
    let tasks = InMemoryTaskRepository::new();
    let users = InMemoryUserRepository::new();
    let remote = Arc::new(InMemoryRemoteCache::new(clock.clone()));
    let cache = Arc::new(HybridCache::new(remote, Arc::new(clock.clone())));
    let validator: Arc<dyn TaskValidator> =
        Arc::new(DefaultTaskValidator::new(Arc::new(clock.clone())));
    let service = TaskService::new(
        Arc::new(tasks.clone()),
        Arc::new(users.clone()),
        cache,
        validator,
        Arc::new(clock.clone()),
    );
    Harness {
        service,
        tasks,
        users,
        clock,
    }
}

fn create_request(title: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_owned(),
        description: "Service test task".to_owned(),
        deadline: None,
    }
}

fn update_request(id: TaskId, status: Option<TaskStatus>) -> UpdateTaskRequest {
    UpdateTaskRequest {
        id,
        title: "Service test task".to_owned(),
        description: "Service test task".to_owned(),
        deadline: None,
        status,
    }
}

async fn create_task(harness: &Harness, title: &str) -> eyre::Result<TaskId> {
    let outcome = harness.service.create(&create_request(title)).await?;
    let OperationOutcome::Ok(dto) = outcome else {
        bail!("task creation should succeed, got {outcome:?}");
    };
    Ok(dto.id)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_task_and_returns_dto(harness: Harness) -> eyre::Result<()> {
    let outcome = harness.service.create(&create_request("Ship release")).await?;

    let OperationOutcome::Ok(dto) = outcome else {
        bail!("expected success, got {outcome:?}");
    };
    ensure!(dto.title == "Ship release");
    ensure!(dto.status == TaskStatus::Pending);
    ensure!(dto.created_at == harness.clock.utc());
    ensure!(harness.tasks.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_invalid_input_reports_all_violations_without_persisting(
    harness: Harness,
) -> eyre::Result<()> {
    let request = CreateTaskRequest {
        title: "  ".to_owned(),
        description: String::new(),
        deadline: None,
    };

    let outcome = harness.service.create(&request).await?;

    let OperationOutcome::Invalid(errors) = outcome else {
        bail!("expected validation failure, got {outcome:?}");
    };
    ensure!(errors.len() == 2);
    ensure!(errors.iter().any(|e| e.field == "title"
        && e.message == "task title must not be empty"));
    ensure!(errors.iter().any(|e| e.field == "description"
        && e.message == "task description must not be empty"));
    ensure!(harness.tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_past_deadline_is_rejected(harness: Harness) -> eyre::Result<()> {
    let request = CreateTaskRequest {
        title: "Late already".to_owned(),
        description: "Deadline in the past".to_owned(),
        deadline: Some(harness.clock.utc() - chrono::Duration::seconds(1)),
    };

    let outcome = harness.service.create(&request).await?;

    let OperationOutcome::Invalid(errors) = outcome else {
        bail!("expected validation failure, got {outcome:?}");
    };
    ensure!(errors.len() == 1);
    ensure!(errors.iter().any(|e| e.field == "deadline"
        && e.message == "task deadline cannot be in the past"));
    ensure!(harness.tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_not_found_for_unknown_id(harness: Harness) -> eyre::Result<()> {
    let outcome = harness.service.get_by_id(TaskId::new()).await?;
    ensure!(outcome == OperationOutcome::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_created_task(harness: Harness) -> eyre::Result<()> {
    let id = create_task(&harness, "Readable later").await?;

    let outcome = harness.service.get_by_id(id).await?;

    let OperationOutcome::Ok(dto) = outcome else {
        bail!("expected success, got {outcome:?}");
    };
    ensure!(dto.id == id);
    ensure!(dto.title == "Readable later");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_all_reflects_every_mutation(harness: Harness) -> eyre::Result<()> {
    ensure!(harness.service.get_all().await?.ok() == Some(Vec::new()));

    let id = create_task(&harness, "Listed").await?;
    let listing = harness.service.get_all().await?.ok().unwrap_or_default();
    ensure!(listing.len() == 1);

    let outcome = harness.service.delete(id).await?;
    ensure!(outcome == OperationOutcome::Ok(()));
    ensure!(harness.service.get_all().await?.ok() == Some(Vec::new()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cached_read_is_served_until_a_write_invalidates(harness: Harness) -> eyre::Result<()> {
    let id = create_task(&harness, "Original title").await?;

    // Warm the cache, then mutate the store behind the service's back.
    let warmed = harness.service.get_by_id(id).await?;
    ensure!(warmed.is_ok());
    let Some(mut task) = harness.tasks.get_by_id(id).await? else {
        bail!("task should exist in the repository");
    };
    task.update(
        "Changed behind the cache",
        "Service test task",
        None,
        None,
        &harness.clock,
    )?;
    harness.tasks.update(&task).await?;

    // The cached value still wins: no invalidation has happened.
    let cached = harness.service.get_by_id(id).await?;
    let OperationOutcome::Ok(dto) = cached else {
        bail!("expected success");
    };
    ensure!(dto.title == "Original title");

    // A service-level write invalidates, so the next read is fresh.
    let updated = harness
        .service
        .update(&UpdateTaskRequest {
            id,
            title: "Visible title".to_owned(),
            description: "Service test task".to_owned(),
            deadline: None,
            status: None,
        })
        .await?;
    ensure!(updated.is_ok());

    let fresh = harness.service.get_by_id(id).await?;
    let OperationOutcome::Ok(dto_after) = fresh else {
        bail!("expected success");
    };
    ensure!(dto_after.title == "Visible title");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_returns_not_found_for_unknown_id(harness: Harness) -> eyre::Result<()> {
    let outcome = harness
        .service
        .update(&update_request(TaskId::new(), None))
        .await?;
    ensure!(outcome == OperationOutcome::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_walks_task_through_its_lifecycle(harness: Harness) -> eyre::Result<()> {
    let id = create_task(&harness, "Lifecycle").await?;

    let started = harness
        .service
        .update(&update_request(id, Some(TaskStatus::InProgress)))
        .await?;
    let OperationOutcome::Ok(started_dto) = started else {
        bail!("start transition should succeed");
    };
    ensure!(started_dto.status == TaskStatus::InProgress);

    harness.clock.advance(chrono::Duration::minutes(30));
    let completed = harness
        .service
        .update(&update_request(id, Some(TaskStatus::Completed)))
        .await?;
    let OperationOutcome::Ok(completed_dto) = completed else {
        bail!("complete transition should succeed");
    };
    ensure!(completed_dto.status == TaskStatus::Completed);
    ensure!(completed_dto.completed_at == Some(harness.clock.utc()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_on_cancelled_task_keeps_persisted_state(harness: Harness) -> eyre::Result<()> {
    let id = create_task(&harness, "Doomed").await?;
    let cancelled = harness
        .service
        .update(&update_request(id, Some(TaskStatus::Cancelled)))
        .await?;
    ensure!(cancelled.is_ok());

    let outcome = harness
        .service
        .update(&update_request(id, Some(TaskStatus::InProgress)))
        .await?;

    let OperationOutcome::Invalid(errors) = outcome else {
        bail!("expected validation failure, got {outcome:?}");
    };
    ensure!(errors.len() == 1);
    ensure!(errors.iter().any(|e| e.field == "status"
        && e.message == "invalid status transition: cancelled -> in_progress"));

    let Some(stored) = harness.tasks.get_by_id(id).await? else {
        bail!("task should still exist");
    };
    ensure!(stored.status() == TaskStatus::Cancelled);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_target_existed(harness: Harness) -> eyre::Result<()> {
    ensure!(harness.service.delete(TaskId::new()).await? == OperationOutcome::NotFound);

    let id = create_task(&harness, "Short-lived").await?;
    ensure!(harness.service.delete(id).await? == OperationOutcome::Ok(()));
    ensure!(harness.tasks.is_empty());
    ensure!(harness.service.get_by_id(id).await? == OperationOutcome::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_to_user_links_task_and_refreshes_reads(harness: Harness) -> eyre::Result<()> {
    let id = create_task(&harness, "Needs an owner").await?;
    let user = User::new("Bob", EmailAddress::new("bob@example.com")?)?;
    harness.users.add(&user).await?;

    // Warm the single-entity cache so the assignment must invalidate it.
    ensure!(harness.service.get_by_id(id).await?.is_ok());

    let outcome = harness.service.assign_to_user(id, "Bob@Example.com").await?;
    let OperationOutcome::Ok(dto) = outcome else {
        bail!("assignment should succeed, got {outcome:?}");
    };
    ensure!(dto.assigned_user.as_deref() == Some("bob@example.com"));

    let reread = harness.service.get_by_id(id).await?;
    let OperationOutcome::Ok(read_dto) = reread else {
        bail!("expected success");
    };
    ensure!(read_dto.assigned_user.as_deref() == Some("bob@example.com"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_distinguishes_missing_task_from_missing_user(
    harness: Harness,
) -> eyre::Result<()> {
    let missing_task = harness
        .service
        .assign_to_user(TaskId::new(), "bob@example.com")
        .await?;
    ensure!(missing_task == OperationOutcome::NotFound);

    let id = create_task(&harness, "Unassignable").await?;
    let missing_user = harness.service.assign_to_user(id, "ghost@example.com").await?;
    let OperationOutcome::Invalid(errors) = missing_user else {
        bail!("expected validation failure, got {missing_user:?}");
    };
    ensure!(errors.iter().any(|e| e.field == "assignee" && e.message == "user was not found"));
    Ok(())
}

/// Repository that fails every call, for error propagation coverage.
#[derive(Debug, Clone, Default)]
struct FailingTaskRepository;

fn store_down() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("store unavailable"))
}

#[async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn get_all(&self) -> TaskRepositoryResult<Vec<crate::task::domain::Task>> {
        Err(store_down())
    }

    async fn get_by_id(
        &self,
        _id: TaskId,
    ) -> TaskRepositoryResult<Option<crate::task::domain::Task>> {
        Err(store_down())
    }

    async fn add(
        &self,
        _task: &crate::task::domain::Task,
    ) -> TaskRepositoryResult<crate::task::domain::Task> {
        Err(store_down())
    }

    async fn update(
        &self,
        _task: &crate::task::domain::Task,
    ) -> TaskRepositoryResult<Option<crate::task::domain::Task>> {
        Err(store_down())
    }

    async fn delete_by_id(&self, _id: TaskId) -> TaskRepositoryResult<bool> {
        Err(store_down())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn infrastructure_failures_propagate_as_errors(harness: Harness) -> eyre::Result<()> {
    let clock = harness.clock.clone();
    let remote = Arc::new(InMemoryRemoteCache::new(clock.clone()));
    let cache = Arc::new(HybridCache::new(remote, Arc::new(clock.clone())));
    let validator: Arc<dyn TaskValidator> =
        Arc::new(DefaultTaskValidator::new(Arc::new(clock.clone())));
    let service = TaskService::new(
        Arc::new(FailingTaskRepository),
        Arc::new(harness.users.clone()),
        cache,
        validator,
        Arc::new(clock),
    );

    ensure!(service.get_all().await.is_err());
    ensure!(service.get_by_id(TaskId::new()).await.is_err());
    ensure!(service.create(&create_request("Unpersistable")).await.is_err());
    ensure!(service.delete(TaskId::new()).await.is_err());
    Ok(())
}
