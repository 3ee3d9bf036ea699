//! CRUD primitives over the `task` table.
//!
//! Every function runs inside the caller's [`Session`]; writes commit before
//! returning.

use rusqlite::{params, OptionalExtension, Row};
use shared::{Task, TaskCreate, TaskUpdate};
use thiserror::Error;

use crate::{schema, storage::Session};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Task not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}

/// Inserts a new task. `completed` always starts out false.
pub fn insert(session: &mut Session, input: &TaskCreate) -> Result<Task> {
    let tx = session.write()?;
    let task = tx.query_row(
        schema::INSERT_TASK,
        params![input.title, input.description],
        task_from_row,
    )?;
    tx.commit()?;
    Ok(task)
}

pub fn list_all(session: &mut Session) -> Result<Vec<Task>> {
    let mut stmt = session.conn().prepare(schema::SELECT_TASKS)?;
    let tasks = stmt
        .query_map([], task_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tasks)
}

/// Absence is `Ok(None)`, not an error.
pub fn get_by_id(session: &mut Session, id: i64) -> Result<Option<Task>> {
    let task = session
        .conn()
        .query_row(schema::SELECT_TASK_BY_ID, [id], task_from_row)
        .optional()?;
    Ok(task)
}

/// Applies only the fields present in `changes`. Load and write share one
/// transaction.
pub fn update(session: &mut Session, id: i64, changes: TaskUpdate) -> Result<Task> {
    let tx = session.write()?;
    let current = tx
        .query_row(schema::SELECT_TASK_BY_ID, [id], task_from_row)
        .optional()?
        .ok_or(RepositoryError::NotFound(id))?;

    let task = changes.apply(current);
    tx.execute(
        schema::UPDATE_TASK,
        params![task.id, task.title, task.description, task.completed],
    )?;
    tx.commit()?;
    Ok(task)
}

pub fn delete(session: &mut Session, id: i64) -> Result<()> {
    let tx = session.write()?;
    let removed = tx.execute(schema::DELETE_TASK, [id])?;
    if removed == 0 {
        return Err(RepositoryError::NotFound(id));
    }
    tx.commit()?;
    Ok(())
}
