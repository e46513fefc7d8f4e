//! Session-scoped item store.
//!
//! `ItemStore` wraps a shared [`JotDb`] handle with a [`WritePolicy`]. The
//! raw CRUD methods in `repos::item` always return errors; the `save` /
//! `forget` family routes them through the policy. Repo methods are
//! implemented as `impl ItemStore` blocks.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use jot_config::JotConfig;
use jot_core::board::AppliedPreset;
use jot_core::entities::{Item, SessionContext};
use jot_core::ids::new_item_id;
use jot_core::responses::RolloverSummary;
use jot_core::rollover::plan_rollover;

use crate::JotDb;
use crate::error::DatabaseError;
use crate::policy::WritePolicy;
use crate::retry::{RetryConfig, with_retry};

/// Result of [`ItemStore::load_session`]: the working set after rollover.
#[derive(Debug, Clone, Default)]
pub struct LoadedSession {
    pub items: Vec<Item>,
    pub summary: RolloverSummary,
    pub preset: Option<AppliedPreset>,
}

#[derive(Clone)]
pub struct ItemStore {
    db: Arc<JotDb>,
    policy: WritePolicy,
    retry: RetryConfig,
}

impl ItemStore {
    #[must_use]
    pub fn new(db: JotDb, policy: WritePolicy) -> Self {
        Self {
            db: Arc::new(db),
            policy,
            retry: RetryConfig::default(),
        }
    }

    /// Open a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str, policy: WritePolicy) -> Result<Self, DatabaseError> {
        Ok(Self::new(JotDb::open_local(path).await?, policy))
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn open_remote(
        url: &str,
        auth_token: &str,
        policy: WritePolicy,
    ) -> Result<Self, DatabaseError> {
        Ok(Self::new(JotDb::open_remote(url, auth_token).await?, policy))
    }

    /// Pick the backend from config: remote when `store.url` is set,
    /// otherwise the local file at `store.local_path`, falling back to
    /// `default_local`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the chosen backend cannot be opened.
    pub async fn open_from_config(
        config: &JotConfig,
        default_local: &str,
    ) -> Result<Self, DatabaseError> {
        let policy = WritePolicy::from_strict(config.general.strict_writes);
        if config.store.is_remote() {
            return Self::open_remote(&config.store.url, &config.store.auth_token, policy).await;
        }
        let path = if config.store.local_path.is_empty() {
            default_local
        } else {
            config.store.local_path.as_str()
        };
        Self::open_local(path, policy).await
    }

    #[must_use]
    pub const fn policy(&self) -> WritePolicy {
        self.policy
    }

    #[must_use]
    pub fn db(&self) -> &JotDb {
        &self.db
    }

    pub(crate) async fn execute(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<u64, DatabaseError> {
        let conn = self.db.conn();
        if self.db.is_remote() {
            return Ok(with_retry(&self.retry, move || {
                conn.execute(sql, libsql::params_from_iter(params.clone()))
            })
            .await?);
        }
        Ok(conn.execute(sql, libsql::params_from_iter(params)).await?)
    }

    pub(crate) async fn query(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<libsql::Rows, DatabaseError> {
        let conn = self.db.conn();
        if self.db.is_remote() {
            return Ok(with_retry(&self.retry, move || {
                conn.query(sql, libsql::params_from_iter(params.clone()))
            })
            .await?);
        }
        Ok(conn.query(sql, libsql::params_from_iter(params)).await?)
    }

    /// Persist `item` under the write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn save(&self, session: &SessionContext, item: &Item) -> Result<(), DatabaseError> {
        let result = self.upsert(session, item).await;
        if let Some(false) = self.policy.settle("upsert", &item.id, result)? {
            tracing::warn!(id = %item.id, "upsert ignored: id belongs to another session");
        }
        Ok(())
    }

    /// Delete one item under the write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn forget(&self, id: &str) -> Result<(), DatabaseError> {
        let result = self.delete(id).await;
        self.policy.settle("delete", id, result)?;
        Ok(())
    }

    /// Delete several items under the write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn forget_many(
        &self,
        session: &SessionContext,
        ids: &[String],
    ) -> Result<(), DatabaseError> {
        let result = self.delete_many(session, ids).await;
        self.policy.settle("delete_many", session.id(), result)?;
        Ok(())
    }

    /// Remove every item of the session, and its preset framing, under the
    /// write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn clear(&self, session: &SessionContext) -> Result<(), DatabaseError> {
        let result = self.delete_by_session(session).await;
        self.policy.settle("delete_by_session", session.id(), result)?;
        self.forget_preset(session).await
    }

    /// Store the session's preset framing under the write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn remember_preset(
        &self,
        session: &SessionContext,
        applied: &AppliedPreset,
    ) -> Result<(), DatabaseError> {
        let result = self.put_preset(session, applied).await;
        self.policy.settle("put_preset", session.id(), result)?;
        Ok(())
    }

    /// Drop the session's preset framing under the write policy.
    ///
    /// # Errors
    ///
    /// Returns the write error only under `WritePolicy::Strict`.
    pub async fn forget_preset(&self, session: &SessionContext) -> Result<(), DatabaseError> {
        let result = self.delete_preset(session).await;
        self.policy.settle("delete_preset", session.id(), result)?;
        Ok(())
    }

    /// Load a session and run the daily rollover against `now` (local time).
    ///
    /// Deletes expired rows, writes respawned occurrences, and returns the
    /// working set. The deletes and upserts are independent writes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the initial read fails or a row is
    /// malformed. Rollover writes follow the write policy.
    pub async fn load_session<Tz: TimeZone>(
        &self,
        session: &SessionContext,
        now: &DateTime<Tz>,
    ) -> Result<LoadedSession, DatabaseError> {
        let stored = self.list_by_session(session).await?;
        let plan = plan_rollover(stored, now, new_item_id)?;
        let summary = RolloverSummary {
            expired: plan.expired.len() - plan.respawned.len(),
            respawned: plan.respawned.len(),
            deferred: plan.deferred.len(),
        };

        if !plan.is_noop() {
            if !plan.expired.is_empty() {
                self.forget_many(session, &plan.expired).await?;
            }
            for item in &plan.respawned {
                self.save(session, item).await?;
            }
            tracing::info!(
                session = session.id(),
                expired = summary.expired,
                respawned = summary.respawned,
                deferred = summary.deferred,
                "rollover applied"
            );
        }

        Ok(LoadedSession {
            items: plan.working_set(),
            summary,
            preset: self.get_preset(session).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jot_core::enums::Recurrence;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{at, session, test_store};

    fn completed(id: &str, recurring: Option<Recurrence>, done_at: DateTime<chrono::Utc>) -> Item {
        let mut item = Item::new(id, id, done_at - Duration::hours(1)).unwrap();
        item.recurring = recurring;
        item.complete(done_at);
        item
    }

    #[tokio::test]
    async fn rollover_deletes_and_respawns() {
        let store = test_store().await;
        let ses = session("a");
        store.upsert(&ses, &completed("itm-plain", None, at(5, 9))).await.unwrap();
        store
            .upsert(&ses, &completed("itm-daily", Some(Recurrence::Daily), at(5, 9)))
            .await
            .unwrap();
        store.upsert(&ses, &Item::new("itm-open", "open", at(5, 8)).unwrap()).await.unwrap();

        let loaded = store.load_session(&ses, &at(6, 9)).await.unwrap();
        assert_eq!(loaded.summary.expired, 1);
        assert_eq!(loaded.summary.respawned, 1);

        let ids: Vec<_> = loaded.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], "itm-open");
        assert!(ids[1].starts_with("itm-"));
        assert_ne!(ids[1], "itm-daily");
        assert_eq!(loaded.items[1].streak, 1);
        assert!(!loaded.items[1].completed);

        let stored = store.list_by_session(&ses).await.unwrap();
        assert_eq!(stored, loaded.items);
    }

    #[tokio::test]
    async fn second_load_same_day_is_stable() {
        let store = test_store().await;
        let ses = session("a");
        store
            .upsert(&ses, &completed("itm-daily", Some(Recurrence::Daily), at(5, 9)))
            .await
            .unwrap();
        let first = store.load_session(&ses, &at(6, 9)).await.unwrap();
        let second = store.load_session(&ses, &at(6, 18)).await.unwrap();
        assert_eq!(first.items, second.items);
        assert_eq!(second.summary, RolloverSummary::default());
    }

    #[tokio::test]
    async fn weekend_defers_weekdays_item() {
        let store = test_store().await;
        let ses = session("a");
        // 2026-03-06 is a Friday.
        store
            .upsert(&ses, &completed("itm-wd", Some(Recurrence::Weekdays), at(6, 17)))
            .await
            .unwrap();

        let saturday = store.load_session(&ses, &at(7, 9)).await.unwrap();
        assert!(saturday.items.is_empty());
        assert_eq!(saturday.summary.deferred, 1);
        assert_eq!(store.list_by_session(&ses).await.unwrap().len(), 1);

        let monday = store.load_session(&ses, &at(9, 9)).await.unwrap();
        assert_eq!(monday.items.len(), 1);
        assert_eq!(monday.items[0].streak, 1);
        assert!(store.get(&ses, "itm-wd").await.is_err());
    }

    #[tokio::test]
    async fn load_carries_preset_and_clear_drops_it() {
        let store = test_store().await;
        let ses = session("a");
        let maker = jot_core::presets::find_preset("maker").unwrap();
        store.upsert(&ses, &Item::new("itm-r1", "Sketch", at(6, 8)).unwrap()).await.unwrap();
        let applied = AppliedPreset {
            preset: maker,
            item_ids: vec!["itm-r1".into()],
        };
        store.remember_preset(&ses, &applied).await.unwrap();

        let loaded = store.load_session(&ses, &at(6, 9)).await.unwrap();
        assert_eq!(loaded.preset, Some(applied));

        store.clear(&ses).await.unwrap();
        let loaded = store.load_session(&ses, &at(6, 9)).await.unwrap();
        assert!(loaded.items.is_empty());
        assert_eq!(loaded.preset, None);
    }

    #[tokio::test]
    async fn rollover_leaves_other_sessions_alone() {
        let store = test_store().await;
        let mine = session("a");
        let theirs = session("b");
        store.upsert(&theirs, &completed("itm-theirs", None, at(5, 9))).await.unwrap();

        store.load_session(&mine, &at(6, 9)).await.unwrap();
        assert_eq!(store.list_by_session(&theirs).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_subtasks_fail_the_load() {
        let store = test_store().await;
        let ses = session("a");
        store.upsert(&ses, &Item::new("itm-1", "x", Utc::now()).unwrap()).await.unwrap();
        store
            .db()
            .conn()
            .execute("UPDATE items SET subtasks = '{oops' WHERE id = 'itm-1'", ())
            .await
            .unwrap();
        let err = store.load_session(&ses, &Utc::now()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::MalformedRow { .. }));
    }

    #[tokio::test]
    async fn save_from_other_session_is_ignored() {
        let store = test_store().await;
        let owner = session("a");
        let intruder = session("b");
        let item = Item::new("itm-1", "mine", Utc::now()).unwrap();
        store.save(&owner, &item).await.unwrap();

        let mut hijack = item.clone();
        hijack.text = "theirs".into();
        store.save(&intruder, &hijack).await.unwrap();

        assert_eq!(store.get(&owner, "itm-1").await.unwrap().text, "mine");
        assert!(store.list_by_session(&intruder).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn best_effort_swallows_write_failures() {
        let store = test_store().await;
        store.db().conn().execute("DROP TABLE items", ()).await.unwrap();
        let item = Item::new("itm-1", "x", Utc::now()).unwrap();
        store.save(&session("a"), &item).await.unwrap();
        store.forget("itm-1").await.unwrap();
    }

    #[tokio::test]
    async fn strict_surfaces_write_failures() {
        let db = JotDb::open_local(":memory:").await.unwrap();
        let store = ItemStore::new(db, WritePolicy::Strict);
        store.db().conn().execute("DROP TABLE items", ()).await.unwrap();
        let item = Item::new("itm-1", "x", Utc::now()).unwrap();
        assert!(store.save(&session("a"), &item).await.is_err());
    }

    #[tokio::test]
    async fn open_from_config_uses_local_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");
        let mut config = JotConfig::default();
        config.store.local_path = path.to_string_lossy().into_owned();
        config.general.strict_writes = true;

        let store = ItemStore::open_from_config(&config, ":memory:").await.unwrap();
        assert_eq!(store.policy(), WritePolicy::Strict);
        assert!(!store.db().is_remote());
        assert!(path.exists());
    }
}
