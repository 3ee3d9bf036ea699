//! One handler per endpoint.
//!
//! Each handler opens its own storage session through [`in_session`] and runs
//! the blocking SQLite work off the async executor.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use shared::{Task, TaskCreate, TaskUpdate};

use crate::{
    error::ApiError,
    extract::JsonBody,
    repository,
    storage::{Session, Storage},
};

/// Runs `op` on a blocking thread with a session that lives exactly as long
/// as the call.
async fn in_session<T, F>(storage: Storage, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut Session) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut session = storage.acquire_session()?;
        op(&mut session)
    })
    .await?
}

/// POST /tasks
pub async fn create_task(
    State(storage): State<Storage>,
    JsonBody(input): JsonBody<TaskCreate>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = in_session(storage, move |session| {
        Ok(repository::insert(session, &input)?)
    })
    .await?;

    tracing::info!(task_id = task.id, title = %task.title, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list_tasks(State(storage): State<Storage>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = in_session(storage, |session| Ok(repository::list_all(session)?)).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(storage): State<Storage>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = path?;

    in_session(storage, move |session| {
        repository::get_by_id(session, id)?.ok_or(ApiError::NotFound)
    })
    .await
    .map(Json)
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(storage): State<Storage>,
    path: Result<Path<i64>, PathRejection>,
    JsonBody(changes): JsonBody<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = path?;

    let task = in_session(storage, move |session| {
        Ok(repository::update(session, id, changes)?)
    })
    .await?;

    tracing::info!(task_id = task.id, completed = task.completed, "updated task");
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(storage): State<Storage>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    in_session(storage, move |session| Ok(repository::delete(session, id)?)).await?;

    tracing::info!(task_id = id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}

/// Unmatched routes answer in the same shape as every other error.
pub async fn not_found() -> ApiError {
    ApiError::Rejected {
        status: StatusCode::NOT_FOUND,
        message: "Not Found".to_string(),
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::Rejected {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "Method Not Allowed".to_string(),
    }
}
