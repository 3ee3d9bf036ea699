//! SQL for the `task` table.

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed BOOLEAN NOT NULL DEFAULT 0
);
"#;

pub const INSERT_TASK: &str = r#"
INSERT INTO task (title, description, completed)
VALUES (?1, ?2, 0)
RETURNING id, title, description, completed
"#;

pub const SELECT_TASKS: &str = r#"
SELECT id, title, description, completed
FROM task
ORDER BY id
"#;

pub const SELECT_TASK_BY_ID: &str = r#"
SELECT id, title, description, completed
FROM task
WHERE id = ?1
"#;

pub const UPDATE_TASK: &str = r#"
UPDATE task
SET title = ?2, description = ?3, completed = ?4
WHERE id = ?1
"#;

pub const DELETE_TASK: &str = r#"
DELETE FROM task
WHERE id = ?1
"#;
