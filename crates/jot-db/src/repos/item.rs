//! Item repository: list, get, upsert and deletes, all scoped by session
//! except the single-id `delete`.

use chrono::{DateTime, SecondsFormat, Utc};
use jot_core::entities::{Item, SessionContext};

use crate::error::DatabaseError;
use crate::helpers::{
    encode_subtasks, get_opt_string, get_opt_unsigned, opt_value, parse_datetime, parse_enum,
    parse_optional_datetime, parse_optional_enum, parse_subtasks,
};
use crate::store::ItemStore;

const SELECT_COLS: &str = "id, text, completed, completed_at, notes, timer_duration, priority, \
     recurring, streak, subtasks, category, snoozed_until, status, created_at";

/// RFC 3339 UTC with nanoseconds.
fn fmt_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    let id: String = row.get(0)?;
    let subtasks = parse_subtasks(&id, get_opt_string(row, 9)?.as_deref())?;
    Ok(Item {
        text: row.get(1)?,
        completed: row.get::<i64>(2)? != 0,
        completed_at: parse_optional_datetime(get_opt_string(row, 3)?.as_deref())?,
        notes: row.get::<Option<String>>(4)?,
        timer_duration: get_opt_unsigned(row, 5)?,
        priority: get_opt_unsigned(row, 6)?,
        recurring: parse_optional_enum(get_opt_string(row, 7)?.as_deref())?,
        streak: get_opt_unsigned(row, 8)?.unwrap_or(0),
        subtasks,
        category: parse_optional_enum(get_opt_string(row, 10)?.as_deref())?,
        snoozed_until: parse_optional_datetime(get_opt_string(row, 11)?.as_deref())?,
        status: parse_enum(&row.get::<String>(12)?)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        id,
    })
}

fn item_params(session: &SessionContext, item: &Item) -> Result<Vec<libsql::Value>, DatabaseError> {
    let timer = item
        .timer_duration
        .map(i64::try_from)
        .transpose()
        .map_err(|_| DatabaseError::Query(format!("timer_duration out of range for {}", item.id)))?;
    Ok(vec![
        item.id.clone().into(),
        item.text.clone().into(),
        i64::from(item.completed).into(),
        opt_value(item.completed_at.map(fmt_datetime)),
        opt_value(item.notes.clone()),
        opt_value(timer),
        opt_value(item.priority.map(i64::from)),
        opt_value(item.recurring.map(|r| r.as_str())),
        i64::from(item.streak).into(),
        opt_value(encode_subtasks(&item.subtasks)?),
        opt_value(item.category.map(|c| c.as_str())),
        opt_value(item.snoozed_until.map(fmt_datetime)),
        item.status.as_str().into(),
        session.id().into(),
        fmt_datetime(item.created_at).into(),
        fmt_datetime(Utc::now()).into(),
    ])
}

impl ItemStore {
    /// All items of a session, oldest first. Ties keep insertion order.
    ///
    /// Sorted after parsing: rows may mix RFC 3339 and SQLite's
    /// `YYYY-MM-DD HH:MM:SS` timestamps, which do not compare as text.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or any row is malformed.
    pub async fn list_by_session(&self, session: &SessionContext) -> Result<Vec<Item>, DatabaseError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM items WHERE session_id = ?1 ORDER BY rowid ASC"
                ),
                vec![session.id().into()],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the session has no such item.
    pub async fn get(&self, session: &SessionContext, id: &str) -> Result<Item, DatabaseError> {
        let mut rows = self
            .query(
                &format!("SELECT {SELECT_COLS} FROM items WHERE session_id = ?1 AND id = ?2"),
                vec![session.id().into(), id.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_item(&row)
    }

    /// Insert or replace every field of `item`. `created_at` is only written
    /// on insert. Returns `false` when the id belongs to another session and
    /// nothing was written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn upsert(&self, session: &SessionContext, item: &Item) -> Result<bool, DatabaseError> {
        let changed = self
            .execute(
                "INSERT INTO items (id, text, completed, completed_at, notes, timer_duration, \
                     priority, recurring, streak, subtasks, category, snoozed_until, status, \
                     session_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
                 ON CONFLICT(id) DO UPDATE SET
                     text = excluded.text,
                     completed = excluded.completed,
                     completed_at = excluded.completed_at,
                     notes = excluded.notes,
                     timer_duration = excluded.timer_duration,
                     priority = excluded.priority,
                     recurring = excluded.recurring,
                     streak = excluded.streak,
                     subtasks = excluded.subtasks,
                     category = excluded.category,
                     snoozed_until = excluded.snoozed_until,
                     status = excluded.status,
                     updated_at = excluded.updated_at
                 WHERE items.session_id = excluded.session_id",
                item_params(session, item)?,
            )
            .await?;
        tracing::debug!(id = %item.id, changed, "upsert");
        Ok(changed > 0)
    }

    /// Delete by id alone. The caller is trusted to own the id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete(&self, id: &str) -> Result<u64, DatabaseError> {
        self.execute("DELETE FROM items WHERE id = ?1", vec![id.into()])
            .await
    }

    /// Delete several ids within one session. Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_many(
        &self,
        session: &SessionContext,
        ids: &[String],
    ) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let placeholders: Vec<String> = (2..ids.len() + 2).map(|i| format!("?{i}")).collect();
        let mut params: Vec<libsql::Value> = Vec::with_capacity(ids.len() + 1);
        params.push(session.id().into());
        params.extend(ids.iter().map(|id| libsql::Value::from(id.clone())));
        self.execute(
            &format!(
                "DELETE FROM items WHERE session_id = ?1 AND id IN ({})",
                placeholders.join(", ")
            ),
            params,
        )
        .await
    }

    /// Remove every item of a session.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_by_session(&self, session: &SessionContext) -> Result<u64, DatabaseError> {
        self.execute(
            "DELETE FROM items WHERE session_id = ?1",
            vec![session.id().into()],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jot_core::entities::Subtask;
    use jot_core::enums::{Category, ItemStatus, Recurrence};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{at, session, test_store};

    fn full_item(id: &str) -> Item {
        let now = at(6, 9);
        let mut item = Item::new(id, "Morning run", now).unwrap();
        item.notes = Some("5k".into());
        item.timer_duration = Some(1_800_000);
        item.priority = Some(2);
        item.recurring = Some(Recurrence::Weekdays);
        item.streak = 4;
        item.subtasks = vec![Subtask {
            id: "sub-1".into(),
            text: "stretch".into(),
            completed: true,
        }];
        item.category = Some(Category::Health);
        item.snoozed_until = Some(now + Duration::hours(3));
        item.status = ItemStatus::Blocked;
        item.complete(now + Duration::minutes(30));
        item
    }

    #[tokio::test]
    async fn upsert_then_get_preserves_every_field() {
        let store = test_store().await;
        let ses = session("a");
        let item = full_item("itm-1");
        assert!(store.upsert(&ses, &item).await.unwrap());
        assert_eq!(store.get(&ses, "itm-1").await.unwrap(), item);
    }

    #[tokio::test]
    async fn upsert_updates_but_keeps_created_at() {
        let store = test_store().await;
        let ses = session("a");
        let mut item = Item::new("itm-1", "draft", at(6, 9)).unwrap();
        store.upsert(&ses, &item).await.unwrap();

        item.text = "final".into();
        item.created_at = at(7, 9);
        item.priority = Some(0);
        store.upsert(&ses, &item).await.unwrap();

        let stored = store.get(&ses, "itm-1").await.unwrap();
        assert_eq!(stored.text, "final");
        assert_eq!(stored.priority, Some(0));
        assert_eq!(stored.created_at, at(6, 9));
    }

    #[tokio::test]
    async fn upsert_from_other_session_is_noop() {
        let store = test_store().await;
        let item = Item::new("itm-1", "mine", at(6, 9)).unwrap();
        store.upsert(&session("a"), &item).await.unwrap();

        let mut other = item.clone();
        other.text = "overwritten".into();
        assert!(!store.upsert(&session("b"), &other).await.unwrap());
        assert_eq!(store.get(&session("a"), "itm-1").await.unwrap().text, "mine");
    }

    #[tokio::test]
    async fn list_is_scoped_and_ordered() {
        let store = test_store().await;
        let ses = session("a");
        store.upsert(&ses, &Item::new("itm-late", "late", at(6, 12)).unwrap()).await.unwrap();
        store.upsert(&ses, &Item::new("itm-early", "early", at(6, 8)).unwrap()).await.unwrap();
        store
            .upsert(&session("b"), &Item::new("itm-other", "other", at(6, 1)).unwrap())
            .await
            .unwrap();

        let ids: Vec<_> = store
            .list_by_session(&ses)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["itm-early", "itm-late"]);
    }

    #[tokio::test]
    async fn reads_sqlite_default_timestamps() {
        let store = test_store().await;
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO items (id, text, session_id, created_at) \
                 VALUES ('itm-1', 'legacy', 'ses-a', '2026-03-06 09:00:00')",
                (),
            )
            .await
            .unwrap();
        let item = store.get(&session("a"), "itm-1").await.unwrap();
        assert_eq!(item.created_at, at(6, 9));
        assert!(item.subtasks.is_empty());
    }

    #[tokio::test]
    async fn list_orders_mixed_timestamp_formats_by_time() {
        let store = test_store().await;
        let ses = session("a");
        store
            .db()
            .conn()
            .execute(
                "INSERT INTO items (id, text, session_id, created_at) \
                 VALUES ('itm-noon', 'noon', 'ses-a', '2026-03-06 12:00:00')",
                (),
            )
            .await
            .unwrap();
        store.upsert(&ses, &Item::new("itm-ten", "ten", at(6, 10)).unwrap()).await.unwrap();
        store.upsert(&ses, &Item::new("itm-eight", "eight", at(6, 8)).unwrap()).await.unwrap();

        let ids: Vec<_> = store
            .list_by_session(&ses)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["itm-eight", "itm-ten", "itm-noon"]);
    }

    #[tokio::test]
    async fn get_missing_is_no_result() {
        let store = test_store().await;
        let err = store.get(&session("a"), "itm-nope").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn delete_variants() {
        let store = test_store().await;
        let a = session("a");
        let b = session("b");
        for id in ["itm-1", "itm-2", "itm-3"] {
            store.upsert(&a, &Item::new(id, id, at(6, 9)).unwrap()).await.unwrap();
        }
        store.upsert(&b, &Item::new("itm-b", "b", at(6, 9)).unwrap()).await.unwrap();

        assert_eq!(store.delete("itm-1").await.unwrap(), 1);
        assert_eq!(store.delete_many(&a, &[]).await.unwrap(), 0);
        assert_eq!(
            store
                .delete_many(&a, &["itm-2".to_string(), "itm-b".to_string()])
                .await
                .unwrap(),
            1
        );
        assert_eq!(store.list_by_session(&b).await.unwrap().len(), 1);

        assert_eq!(store.delete_by_session(&a).await.unwrap(), 1);
        assert!(store.list_by_session(&a).await.unwrap().is_empty());
    }
}
