//! Partition the working set into the lists a client renders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Item;
use crate::enums::{ItemStatus, View};

/// The working set split by presentation bucket. Items borrow from the
/// caller's slice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Partition<'a> {
    pub active: Vec<&'a Item>,
    pub blocked: Vec<&'a Item>,
    pub snoozed: Vec<&'a Item>,
    pub completed: Vec<&'a Item>,
}

impl<'a> Partition<'a> {
    /// Items belonging to `view`. `View::All` concatenates every bucket in
    /// display order.
    #[must_use]
    pub fn select(&self, view: View) -> Vec<&'a Item> {
        match view {
            View::Active => self.active.clone(),
            View::Blocked => self.blocked.clone(),
            View::Snoozed => self.snoozed.clone(),
            View::Completed => self.completed.clone(),
            View::All => self
                .active
                .iter()
                .chain(&self.blocked)
                .chain(&self.snoozed)
                .chain(&self.completed)
                .copied()
                .collect(),
        }
    }

    /// Focus mode: only the most urgent active item.
    #[must_use]
    pub fn focus(&self) -> Option<&'a Item> {
        self.active.first().copied()
    }
}

/// Sort key for the active list: prioritised items first, ascending.
fn priority_key(item: &Item) -> (bool, u32) {
    (item.priority.is_none(), item.priority.unwrap_or(0))
}

/// Split `items` as of `now`.
///
/// A snoozed item appears only under `snoozed`, whatever its status.
/// Completed items appear only under `completed`.
#[must_use]
pub fn partition(items: &[Item], now: DateTime<Utc>) -> Partition<'_> {
    let mut out = Partition::default();
    for item in items {
        if item.completed {
            out.completed.push(item);
        } else if item.is_snoozed(now) {
            out.snoozed.push(item);
        } else if item.status == ItemStatus::Blocked {
            out.blocked.push(item);
        } else {
            out.active.push(item);
        }
    }
    // sort_by_key is stable, so ties keep creation order.
    out.active.sort_by_key(|i| priority_key(i));
    out
}
