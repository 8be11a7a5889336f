use rusqlite::{Connection, Result};

/// Creates the tasks table when it does not exist yet
///
/// There is no version tracking: the layout is fixed and any database file
/// holding a compatible `tasks` table is used as-is. New tables use
/// AUTOINCREMENT so ids of deleted tasks are never handed out again.
pub struct SchemaManager;

impl SchemaManager {
    pub fn initialize(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks(
                task_index INTEGER PRIMARY KEY AUTOINCREMENT,
                task_name TEXT,
                task_completed INTEGER
            )",
            [],
        )?;
        Ok(())
    }

    /// Whether the tasks table is present
    pub fn is_initialized(conn: &Connection) -> Result<bool> {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'",
            [],
            |row| row.get::<_, i64>(0),
        )
        .map(|count| count > 0)
    }
}
