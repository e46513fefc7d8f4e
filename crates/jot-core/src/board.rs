//! In-memory board: the working set plus presentation state.
//!
//! Every mutation here is optimistic. Callers persist the touched item
//! afterwards; a failed write does not roll the board back.

use chrono::{DateTime, Utc};

use crate::entities::Item;
use crate::enums::View;
use crate::errors::CoreError;
use crate::presets::Preset;
use crate::responses::BoardCounts;
use crate::views::{Partition, partition};

/// The preset currently framing the board and the items it created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPreset {
    pub preset: &'static Preset,
    pub item_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    items: Vec<Item>,
    active_timer: Option<String>,
    focus: bool,
    total_completed: usize,
    preset: Option<AppliedPreset>,
}

impl Board {
    /// Wrap a freshly reconciled working set. The completed counter starts
    /// at the number of items already completed today.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let total_completed = items.iter().filter(|i| i.completed).count();
        Self {
            items,
            active_timer: None,
            focus: false,
            total_completed,
            preset: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    #[must_use]
    pub const fn total_completed(&self) -> usize {
        self.total_completed
    }

    #[must_use]
    pub fn active_timer(&self) -> Option<&str> {
        self.active_timer.as_deref()
    }

    #[must_use]
    pub const fn focus(&self) -> bool {
        self.focus
    }

    pub fn set_focus(&mut self, on: bool) {
        self.focus = on;
    }

    #[must_use]
    pub const fn preset(&self) -> Option<&AppliedPreset> {
        self.preset.as_ref()
    }

    pub fn set_preset(&mut self, preset: Option<AppliedPreset>) {
        self.preset = preset;
    }

    /// Frame the board with `preset`. Ids created by an earlier preset stay
    /// tracked so a later clear removes them too.
    pub fn record_preset(
        &mut self,
        preset: &'static Preset,
        created: impl IntoIterator<Item = String>,
    ) -> &AppliedPreset {
        let mut item_ids = self.preset.take().map(|p| p.item_ids).unwrap_or_default();
        item_ids.extend(created);
        self.preset.insert(AppliedPreset { preset, item_ids })
    }

    /// Heading for the list: the preset's title, or the plain default.
    #[must_use]
    pub fn title(&self) -> String {
        self.preset
            .as_ref()
            .map_or_else(|| String::from("To Do List"), |p| p.preset.title())
    }

    /// Drop the preset framing, remove the items it created that are still
    /// on the board, stop the timer and restart the completed counter.
    /// Returns the preset and the removed items.
    pub fn clear_preset(&mut self) -> Option<(&'static Preset, Vec<Item>)> {
        let applied = self.preset.take()?;
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| applied.item_ids.contains(&item.id));
        self.items = kept;
        self.active_timer = None;
        self.total_completed = 0;
        Some((applied.preset, removed))
    }

    /// Append a new item; returns a reference to it.
    pub fn add(&mut self, item: Item) -> &Item {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if `id` is not on the board.
    pub fn find(&self, id: &str) -> Result<&Item, CoreError> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if `id` is not on the board.
    pub fn find_mut(&mut self, id: &str) -> Result<&mut Item, CoreError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))
    }

    /// Resolve a full id or an unambiguous prefix of one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when nothing matches and
    /// `CoreError::Validation` when the prefix matches more than one item.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Item, CoreError> {
        if let Ok(item) = self.find(id_or_prefix) {
            return Ok(item);
        }
        let mut matches = self.items.iter().filter(|i| i.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item),
            (Some(_), Some(_)) => Err(CoreError::Validation(format!(
                "id prefix '{id_or_prefix}' is ambiguous"
            ))),
            (None, _) => Err(CoreError::item_not_found(id_or_prefix)),
        }
    }

    /// Apply `edit` to the item and report whether it changed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id, or whatever `edit`
    /// returns.
    pub fn edit<F>(&mut self, id: &str, edit: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Item) -> Result<bool, CoreError>,
    {
        edit(self.find_mut(id)?)
    }

    /// Complete an item. Bumps the counter and stops its timer if running.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn complete(&mut self, id: &str, now: DateTime<Utc>) -> Result<bool, CoreError> {
        let changed = self.find_mut(id)?.complete(now);
        if changed {
            self.total_completed += 1;
            if self.active_timer.as_deref() == Some(id) {
                self.active_timer = None;
            }
        }
        Ok(changed)
    }

    /// Un-complete an item. The counter is not decremented.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn reopen(&mut self, id: &str) -> Result<bool, CoreError> {
        Ok(self.find_mut(id)?.reopen())
    }

    /// Remove an item, stopping its timer if it was running.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<Item, CoreError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))?;
        if self.active_timer.as_deref() == Some(id) {
            self.active_timer = None;
        }
        Ok(self.items.remove(idx))
    }

    /// Make `id` the single running timer, replacing any other. Returns the
    /// id it replaced.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id and
    /// `CoreError::Validation` if the item has no timer or is completed.
    pub fn start_timer(&mut self, id: &str) -> Result<Option<String>, CoreError> {
        let item = self.find(id)?;
        if item.timer_duration.is_none() {
            return Err(CoreError::Validation(format!("item {id} has no timer")));
        }
        if item.completed {
            return Err(CoreError::Validation(format!("item {id} is already completed")));
        }
        Ok(self.active_timer.replace(id.to_string()).filter(|prev| prev != id))
    }

    pub fn stop_timer(&mut self) -> Option<String> {
        self.active_timer.take()
    }

    /// Swap in a new item list (preset apply with replace). Resets timer,
    /// counter and preset framing.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.active_timer = None;
        self.total_completed = 0;
        self.preset = None;
    }

    #[must_use]
    pub fn partition(&self, now: DateTime<Utc>) -> Partition<'_> {
        partition(&self.items, now)
    }

    /// Items to render for `view`, honouring focus mode.
    #[must_use]
    pub fn visible(&self, view: View, now: DateTime<Utc>) -> Vec<&Item> {
        let parts = self.partition(now);
        if self.focus {
            return parts.focus().into_iter().collect();
        }
        parts.select(view)
    }

    #[must_use]
    pub fn counts(&self, now: DateTime<Utc>) -> BoardCounts {
        let parts = self.partition(now);
        BoardCounts {
            to_go: parts.active.len(),
            blocked: parts.blocked.len(),
            snoozed: parts.snoozed.len(),
            completed: parts.completed.len(),
            done_today: self.total_completed,
        }
    }
}
