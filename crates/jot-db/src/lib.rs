//! # jot-db
//!
//! libSQL storage for Jotter.
//!
//! The `items` table holds every to-do row keyed by an anonymous session
//! id; `session_presets` remembers which ritual preset frames each session.
//! The crate provides:
//! - [`JotDb`]: connection handle and migrations (local file, `:memory:`
//!   or a remote libSQL server)
//! - [`ItemStore`]: session-scoped CRUD plus the load-time rollover
//! - [`WritePolicy`]: whether write failures surface or are logged and dropped
//! - [`NotesDebouncer`]: coalesces rapid note edits into one write

pub mod error;
pub mod helpers;
mod migrations;
pub mod notes;
pub mod policy;
pub mod repos;
pub mod retry;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

pub use notes::NotesDebouncer;
pub use policy::WritePolicy;
pub use store::{ItemStore, LoadedSession};

/// Raw database handle.
///
/// Wraps a libSQL database and one connection. `:memory:` databases live
/// only as long as this connection, so clones of the store share it.
pub struct JotDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl JotDb {
    /// Open a local database file, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let jot_db = Self {
            db,
            conn,
            remote: false,
        };
        jot_db.run_migrations().await?;
        tracing::debug!(path, "opened local store");
        Ok(jot_db)
    }

    /// Open a remote libSQL database (e.g. `libsql://name.turso.io`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        let jot_db = Self {
            db,
            conn,
            remote: true,
        };
        jot_db.run_migrations().await?;
        tracing::debug!(url, "opened remote store");
        Ok(jot_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether calls go over the network (and get transient-error retry).
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> JotDb {
        JotDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["items"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "items table should exist");
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn session_presets_table_exists() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["session_presets"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn indexes_exist() {
        let db = test_db().await;
        for index in ["idx_items_session", "idx_items_created"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='index' AND name=?1",
                    [index],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "index '{index}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn column_defaults_apply() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO items (id, text, session_id) VALUES ('itm-1', 'bare', 'ses-1')",
                (),
            )
            .await
            .unwrap();
        let mut rows = db
            .conn()
            .query("SELECT completed, streak, status, created_at FROM items WHERE id = 'itm-1'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
        assert_eq!(row.get::<i64>(1).unwrap(), 0);
        assert_eq!(row.get::<String>(2).unwrap(), "active");
        assert!(helpers::parse_datetime(&row.get::<String>(3).unwrap()).is_ok());
    }
}
