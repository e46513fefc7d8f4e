//! Applied-preset repository: one row per session in `session_presets`.

use chrono::{SecondsFormat, Utc};
use jot_core::board::AppliedPreset;
use jot_core::entities::SessionContext;
use jot_core::presets::find_preset;

use crate::error::DatabaseError;
use crate::store::ItemStore;

impl ItemStore {
    /// The preset framing `session`, if any. A row naming a preset that is
    /// no longer in the catalog reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails and
    /// `DatabaseError::MalformedRow` if the id list is not a JSON array.
    pub async fn get_preset(
        &self,
        session: &SessionContext,
    ) -> Result<Option<AppliedPreset>, DatabaseError> {
        let mut rows = self
            .query(
                "SELECT preset_id, item_ids FROM session_presets WHERE session_id = ?1",
                vec![session.id().into()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let preset_id: String = row.get(0)?;
        let item_ids: Vec<String> =
            serde_json::from_str(&row.get::<String>(1)?).map_err(|e| DatabaseError::MalformedRow {
                id: session.id().to_string(),
                reason: format!("invalid preset item_ids JSON: {e}"),
            })?;

        let Ok(preset) = find_preset(&preset_id) else {
            tracing::warn!(preset = %preset_id, "stored preset is not in the catalog; ignoring");
            return Ok(None);
        };
        Ok(Some(AppliedPreset { preset, item_ids }))
    }

    /// Insert or replace the session's preset row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn put_preset(
        &self,
        session: &SessionContext,
        applied: &AppliedPreset,
    ) -> Result<u64, DatabaseError> {
        let item_ids =
            serde_json::to_string(&applied.item_ids).map_err(|e| DatabaseError::Other(e.into()))?;
        self.execute(
            "INSERT INTO session_presets (session_id, preset_id, item_ids, applied_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(session_id) DO UPDATE SET
                 preset_id = excluded.preset_id,
                 item_ids = excluded.item_ids,
                 applied_at = excluded.applied_at",
            vec![
                session.id().into(),
                applied.preset.id.into(),
                item_ids.into(),
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true).into(),
            ],
        )
        .await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_preset(&self, session: &SessionContext) -> Result<u64, DatabaseError> {
        self.execute(
            "DELETE FROM session_presets WHERE session_id = ?1",
            vec![session.id().into()],
        )
        .await
    }
}
