use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Subtask;
use crate::enums::{Category, ItemStatus, Recurrence};
use crate::errors::CoreError;

/// A single to-do entry, optionally timed, prioritised, recurring or snoozed.
///
/// Invariant: `completed_at` is `Some` exactly when `completed` is true. All
/// mutations go through methods that keep it that way.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    /// Configured countdown length in milliseconds.
    pub timer_duration: Option<u64>,
    /// Lower is more urgent; `None` sorts after every prioritised item.
    pub priority: Option<u32>,
    pub recurring: Option<Recurrence>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub category: Option<Category>,
    pub snoozed_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Build a fresh, incomplete item with no optional fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `text` is blank after trimming.
    pub fn new(id: impl Into<String>, text: &str, now: DateTime<Utc>) -> Result<Self, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("item text must not be empty".into()));
        }
        Ok(Self {
            id: id.into(),
            text: text.to_string(),
            completed: false,
            completed_at: None,
            notes: None,
            timer_duration: None,
            priority: None,
            recurring: None,
            streak: 0,
            subtasks: Vec::new(),
            category: None,
            snoozed_until: None,
            status: ItemStatus::Active,
            created_at: now,
        })
    }

    /// Mark complete. Returns `false` if the item was already complete.
    pub fn complete(&mut self, now: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(now);
        true
    }

    /// Mark incomplete again. Returns `false` if it was not complete.
    pub fn reopen(&mut self) -> bool {
        if !self.completed {
            return false;
        }
        self.completed = false;
        self.completed_at = None;
        true
    }

    /// Replace the label. Blank or unchanged text is ignored and returns `false`.
    pub fn rename(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || text == self.text {
            return false;
        }
        self.text = text.to_string();
        true
    }

    /// Set or clear notes. An all-whitespace note clears the field.
    pub fn set_notes(&mut self, notes: Option<&str>) -> bool {
        let next = notes
            .map(str::trim_end)
            .filter(|n| !n.trim().is_empty())
            .map(String::from);
        if next == self.notes {
            return false;
        }
        self.notes = next;
        true
    }

    /// Set or clear the timer. A zero duration clears it.
    pub fn set_timer(&mut self, duration_ms: Option<u64>) -> bool {
        let next = duration_ms.filter(|ms| *ms > 0);
        if next == self.timer_duration {
            return false;
        }
        self.timer_duration = next;
        true
    }

    /// Stretch the persisted timer total by `extra_ms`.
    pub fn extend_timer(&mut self, extra_ms: u64) {
        self.timer_duration = Some(self.timer_duration.unwrap_or(0).saturating_add(extra_ms));
    }

    /// Whether the item is hidden from the active view at `now`.
    #[must_use]
    pub fn is_snoozed(&self, now: DateTime<Utc>) -> bool {
        self.snoozed_until.is_some_and(|until| now < until)
    }

    /// Snooze until `until`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `until` is not in the future.
    pub fn snooze(&mut self, until: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), CoreError> {
        if until <= now {
            return Err(CoreError::Validation(format!(
                "snooze time {} is not in the future",
                until.to_rfc3339()
            )));
        }
        self.snoozed_until = Some(until);
        Ok(())
    }

    pub fn unsnooze(&mut self) -> bool {
        self.snoozed_until.take().is_some()
    }

    /// Move between `active` and `blocked`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when `next` is not reachable
    /// from the current status.
    pub fn transition(&mut self, next: ItemStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "item".into(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Append a subtask.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `text` is blank.
    pub fn add_subtask(&mut self, id: impl Into<String>, text: &str) -> Result<&Subtask, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("subtask text must not be empty".into()));
        }
        self.subtasks.push(Subtask {
            id: id.into(),
            text: text.to_string(),
            completed: false,
        });
        Ok(&self.subtasks[self.subtasks.len() - 1])
    }

    /// Flip a subtask's completion and return the new state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no subtask has `subtask_id`.
    pub fn toggle_subtask(&mut self, subtask_id: &str) -> Result<bool, CoreError> {
        let sub = self
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| CoreError::subtask_not_found(subtask_id))?;
        sub.completed = !sub.completed;
        Ok(sub.completed)
    }

    /// Remove a subtask, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no subtask has `subtask_id`.
    pub fn remove_subtask(&mut self, subtask_id: &str) -> Result<Subtask, CoreError> {
        let idx = self
            .subtasks
            .iter()
            .position(|s| s.id == subtask_id)
            .ok_or_else(|| CoreError::subtask_not_found(subtask_id))?;
        Ok(self.subtasks.remove(idx))
    }

    /// `(done, total)` subtask counts.
    #[must_use]
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }

    /// Calendar date (in `tz`) the item counts toward: completion time,
    /// falling back to creation time.
    #[must_use]
    pub fn completion_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.completed_at
            .unwrap_or(self.created_at)
            .with_timezone(tz)
            .date_naive()
    }

    /// Next occurrence of a recurring item: same configuration, fresh
    /// identity, streak advanced by one.
    #[must_use]
    pub fn respawn(&self, id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: self.text.clone(),
            completed: false,
            completed_at: None,
            notes: self.notes.clone(),
            timer_duration: self.timer_duration,
            priority: self.priority,
            recurring: self.recurring,
            streak: self.streak.saturating_add(1),
            subtasks: self
                .subtasks
                .iter()
                .map(|s| Subtask {
                    completed: false,
                    ..s.clone()
                })
                .collect(),
            category: self.category,
            snoozed_until: None,
            status: ItemStatus::Active,
            created_at: now,
        }
    }
}
