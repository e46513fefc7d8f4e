//! Daily rollover: decide what happens to each stored item when a session
//! is loaded on a new day.
//!
//! The planner is pure. It never touches storage; `jot-db` executes the
//! resulting [`RolloverPlan`] (deletes, then respawn upserts).

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

use crate::entities::Item;
use crate::errors::CoreError;

/// Outcome for a single stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Still relevant today.
    Keep,
    /// Completed on an earlier day and not recurring: delete.
    Expire,
    /// Completed on an earlier day and recurring: delete and spawn the next occurrence.
    Respawn,
    /// Weekday item seen on a weekend: leave the row alone, hide it today.
    Defer,
}

/// Classify `item` against the local calendar date of `now`.
#[must_use]
pub fn classify<Tz: TimeZone>(item: &Item, now: &DateTime<Tz>) -> Disposition {
    if !item.completed {
        return Disposition::Keep;
    }
    let tz = now.timezone();
    if item.completion_date(&tz) == now.date_naive() {
        return Disposition::Keep;
    }
    match item.recurring {
        None => Disposition::Expire,
        Some(recurrence) if recurrence.occurs_on(now.weekday()) => Disposition::Respawn,
        Some(_) => Disposition::Defer,
    }
}

/// Everything the store must do to bring a session up to date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolloverPlan {
    pub kept: Vec<Item>,
    /// Ids to delete (both plain expiries and the old half of a respawn).
    pub expired: Vec<String>,
    pub respawned: Vec<Item>,
    pub deferred: Vec<Item>,
}

impl RolloverPlan {
    /// Nothing to write.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.expired.is_empty() && self.respawned.is_empty()
    }

    /// Kept plus respawned items ordered by `created_at` (stable).
    #[must_use]
    pub fn working_set(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .kept
            .iter()
            .chain(self.respawned.iter())
            .cloned()
            .collect();
        items.sort_by_key(|i| i.created_at);
        items
    }
}

/// Build a rollover plan for `items` as of `now`.
///
/// `next_id` supplies ids for respawned items. Respawns are stamped with
/// `now` converted to UTC.
///
/// # Errors
///
/// Propagates any error from `next_id`.
pub fn plan_rollover<Tz, F>(
    items: Vec<Item>,
    now: &DateTime<Tz>,
    mut next_id: F,
) -> Result<RolloverPlan, CoreError>
where
    Tz: TimeZone,
    F: FnMut() -> Result<String, CoreError>,
{
    let stamp = now.with_timezone(&Utc);
    let mut plan = RolloverPlan::default();
    for item in items {
        match classify(&item, now) {
            Disposition::Keep => plan.kept.push(item),
            Disposition::Expire => plan.expired.push(item.id),
            Disposition::Respawn => {
                plan.respawned.push(item.respawn(next_id()?, stamp));
                plan.expired.push(item.id);
            }
            Disposition::Defer => plan.deferred.push(item),
        }
    }
    Ok(plan)
}
