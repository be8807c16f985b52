use crate::libs::config::StorageConfig;
use crate::libs::error::{StoreError, TimerError};
use crate::msg_debug;
use rusqlite::Connection;

const PING: &str = "SELECT 1";

/// Process-wide storage connection, opened once per invocation.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database and checks that it answers.
    pub fn new(config: &StorageConfig) -> Result<Db, TimerError> {
        let db_file_path = config.database_path().map_err(unavailable)?;
        let conn = Connection::open(&db_file_path).map_err(unavailable)?;
        conn.query_row(PING, [], |row| row.get::<_, i64>(0)).map_err(unavailable)?;
        msg_debug!("connected to {}", db_file_path.display());

        Ok(Db { conn })
    }
}

fn unavailable(error: impl Into<StoreError>) -> TimerError {
    TimerError::StorageUnavailable(error.into())
}
