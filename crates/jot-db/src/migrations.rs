//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::JotDb;
use crate::error::DatabaseError;

/// `items` table plus session and creation-time indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_items.sql");

/// `session_presets`: the applied ritual preset per session.
const MIGRATION_002: &str = include_str!("../migrations/002_session_presets.sql");

impl JotDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_items: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_session_presets: {e}")))?;
        Ok(())
    }
}
