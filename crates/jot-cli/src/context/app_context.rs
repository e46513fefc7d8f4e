use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use jot_config::JotConfig;
use jot_core::board::Board;
use jot_core::entities::{Item, SessionContext};
use jot_core::responses::RolloverSummary;
use jot_db::ItemStore;

use super::{LineInput, SessionIdentity, SessionSource};

/// Local database file name inside the data directory.
pub const DB_FILE: &str = "jotter.db";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: JotConfig,
    pub store: ItemStore,
    pub identity: SessionIdentity,
    pub session: SessionContext,
    pub session_source: SessionSource,
    pub board: Board,
    pub rollover: RolloverSummary,
    pub input: LineInput,
    /// Index of the story shown last, for `motivate story --next/--prev`.
    pub last_story: Option<usize>,
    pub last_boost: Option<&'static str>,
}

impl AppContext {
    /// Open the store, resolve the session and load the reconciled working
    /// set.
    pub async fn init(data_dir: &Path, config: JotConfig) -> anyhow::Result<Self> {
        let db_path = data_dir.join(DB_FILE);
        let store = ItemStore::open_from_config(&config, &db_path.to_string_lossy())
            .await
            .context("failed to open item store")?;
        tracing::debug!(remote = store.db().is_remote(), "item store opened");

        let identity = SessionIdentity::new(&config.session, data_dir);
        let (session, session_source) = identity.resolve()?;

        let mut ctx = Self {
            config,
            store,
            identity,
            session,
            session_source,
            board: Board::default(),
            rollover: RolloverSummary::default(),
            input: LineInput::stdin(),
            last_story: None,
            last_boost: None,
        };
        ctx.reload().await?;
        Ok(ctx)
    }

    /// Re-read the session from the store, running the daily rollover.
    pub async fn reload(&mut self) -> anyhow::Result<()> {
        let loaded = self
            .store
            .load_session(&self.session, &Local::now())
            .await
            .context("failed to load your items; run the command again to retry")?;
        self.board = Board::new(loaded.items);
        self.board.set_preset(loaded.preset);
        self.rollover = loaded.summary;
        Ok(())
    }

    /// Point the context at another session and load it.
    pub async fn switch_session(
        &mut self,
        session: SessionContext,
        source: SessionSource,
    ) -> anyhow::Result<()> {
        self.session = session;
        self.session_source = source;
        self.reload().await
    }

    /// Write an item under the store's write policy.
    pub async fn persist(&self, item: &Item) -> anyhow::Result<()> {
        self.store
            .save(&self.session, item)
            .await
            .with_context(|| format!("failed to save item {}", item.id))
    }

    /// Write the board's current copy of `id`.
    pub async fn persist_id(&self, id: &str) -> anyhow::Result<()> {
        let item = self.board.find(id)?;
        self.persist(item).await
    }

    /// Full id for an id or unique id prefix.
    pub fn resolve_id(&self, id_or_prefix: &str) -> anyhow::Result<String> {
        Ok(self.board.resolve(id_or_prefix)?.id.clone())
    }

    pub fn item(&self, id: &str) -> anyhow::Result<&Item> {
        Ok(self.board.find(id)?)
    }

    #[must_use]
    pub fn now() -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
impl AppContext {
    /// Context over an in-memory store with no items.
    pub async fn in_memory(config: JotConfig) -> Self {
        let store = ItemStore::open_local(":memory:", jot_db::WritePolicy::Strict)
            .await
            .expect("in-memory store should open");
        let identity = SessionIdentity::new(&config.session, Path::new("/nonexistent"));
        Self {
            config,
            store,
            identity,
            session: SessionContext::new("ses-test"),
            session_source: SessionSource::Config,
            board: Board::default(),
            rollover: RolloverSummary::default(),
            input: LineInput::scripted(Vec::<String>::new()),
            last_story: None,
            last_boost: None,
        }
    }
}
