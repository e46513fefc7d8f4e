//! Debounced note writes.
//!
//! Each keystroke in the shell's note editor replaces the pending write for
//! that item and restarts its delay. Only the value present when the delay
//! elapses is written. Pending writes for different items are independent.
//! `flush` writes every pending value immediately.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use jot_core::entities::{Item, SessionContext};
use tokio::task::JoinHandle;

use crate::error::DatabaseError;
use crate::store::ItemStore;

pub struct NotesDebouncer {
    store: ItemStore,
    session: SessionContext,
    delay: Duration,
    /// Latest value and its scheduled write, keyed by item id.
    pending: HashMap<String, (Item, JoinHandle<()>)>,
    writes: Arc<AtomicUsize>,
}

impl NotesDebouncer {
    #[must_use]
    pub fn new(store: ItemStore, session: SessionContext, delay: Duration) -> Self {
        Self {
            store,
            session,
            delay,
            pending: HashMap::new(),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Schedule `item` (carrying the latest notes) to be written after the
    /// delay, cancelling the earlier pending write for the same item.
    pub fn push(&mut self, item: Item) {
        if let Some((_, handle)) = self.pending.remove(&item.id) {
            handle.abort();
        }
        let store = self.store.clone();
        let session = self.session.clone();
        let delay = self.delay;
        let writes = Arc::clone(&self.writes);
        let to_write = item.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Spawned writes have no caller to report to; always log and drop.
            if let Err(error) = store.upsert(&session, &to_write).await {
                tracing::error!(id = %to_write.id, %error, "debounced notes write failed");
                return;
            }
            writes.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(id = %to_write.id, "notes saved");
        });
        self.pending.insert(item.id.clone(), (item, handle));
    }

    /// Whether any write is scheduled and has not finished yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.values().any(|(_, h)| !h.is_finished())
    }

    /// Number of debounced writes that reached the store.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Cancel every timer and write the pending values now. All pending
    /// items are attempted even when one fails.
    ///
    /// # Errors
    ///
    /// Returns the first write error, only under `WritePolicy::Strict`.
    pub async fn flush(&mut self) -> Result<(), DatabaseError> {
        let mut first_error = None;
        for (_, (item, handle)) in self.pending.drain() {
            if handle.is_finished() {
                continue;
            }
            handle.abort();
            match self.store.save(&self.session, &item).await {
                Ok(()) => {
                    self.writes.fetch_add(1, Ordering::SeqCst);
                }
                Err(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Drop for NotesDebouncer {
    fn drop(&mut self) {
        for (id, (_, handle)) in self.pending.drain() {
            if !handle.is_finished() {
                tracing::warn!(%id, "pending notes write dropped without flush");
                handle.abort();
            }
        }
    }
}
