use rusqlite::{Connection, OptionalExtension};
use crate::db::StoreError;
use crate::models::{Task, TaskName};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Task repository for database operations
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task and return its new id
    pub fn insert(conn: &Connection, name: &TaskName, completed: bool) -> Result<i64> {
        conn.execute(
            "INSERT INTO tasks (task_name, task_completed) VALUES (?1, ?2)",
            rusqlite::params![name.as_str(), completed as i64],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("inserted task {} ({:?})", id, name.as_str());
        Ok(id)
    }

    /// List all tasks, completed first, then by name
    pub fn list_all(conn: &Connection) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(
            "SELECT task_index, task_name, task_completed FROM tasks
             ORDER BY task_completed DESC, task_name ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                completed: row.get::<_, Option<i64>>(2)?.unwrap_or(0) != 0,
            })
        })?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    /// Get the name of a task by id
    pub fn get_name(conn: &Connection, id: i64) -> Result<String> {
        let name = conn
            .query_row(
                "SELECT task_name FROM tasks WHERE task_index = ?1",
                [id],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;

        match name {
            Some(name) => Ok(name.unwrap_or_default()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Delete a task; returns whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn.execute("DELETE FROM tasks WHERE task_index = ?1", [id])?;
        log::debug!("delete task {}: {} row(s)", id, affected);
        Ok(affected > 0)
    }

    /// Set the completion flag; returns whether the stored flag changed
    pub fn set_completed(conn: &Connection, id: i64, completed: bool) -> Result<bool> {
        let value = completed as i64;
        let affected = conn.execute(
            "UPDATE tasks SET task_completed = ?1
             WHERE task_index = ?2 AND task_completed IS NOT ?1",
            rusqlite::params![value, id],
        )?;
        log::debug!("set task {} completed={}: {} row(s)", id, completed, affected);
        Ok(affected > 0)
    }
}
