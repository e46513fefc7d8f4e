use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use jot_config::SessionConfig;
use jot_core::entities::SessionContext;
use jot_core::ids::new_session_id;
use serde::Serialize;

/// Session cache file name inside the data directory.
pub const SESSION_FILE: &str = "session";

/// Where the current session id came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    Config,
    Cache,
    Created,
}

/// Resolves the anonymous session id: the config override if set, else the
/// cached id, else a fresh one written to the cache.
#[derive(Clone, Debug)]
pub struct SessionIdentity {
    file: PathBuf,
    override_id: Option<String>,
}

impl SessionIdentity {
    #[must_use]
    pub fn new(config: &SessionConfig, data_dir: &Path) -> Self {
        let file = if config.file.trim().is_empty() {
            data_dir.join(SESSION_FILE)
        } else {
            PathBuf::from(config.file.trim())
        };
        let override_id = config
            .has_override()
            .then(|| config.id.trim().to_string());
        Self { file, override_id }
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn resolve(&self) -> anyhow::Result<(SessionContext, SessionSource)> {
        if let Some(id) = &self.override_id {
            return Ok((SessionContext::new(id.clone()), SessionSource::Config));
        }

        match std::fs::read_to_string(&self.file) {
            Ok(raw) => {
                let id = raw.trim();
                if !id.is_empty() {
                    return Ok((SessionContext::new(id), SessionSource::Cache));
                }
                tracing::warn!(file = %self.file.display(), "session file is empty; creating a new session");
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("failed to read session file {}", self.file.display())
                });
            }
        }

        Ok((self.write_new()?, SessionSource::Created))
    }

    /// Replace the cached id with a fresh one.
    pub fn rotate(&self) -> anyhow::Result<SessionContext> {
        if self.override_id.is_some() {
            bail!(
                "session id is fixed by config (session.id / JOTTER_SESSION__ID); unset it to start a new session"
            );
        }
        self.write_new()
    }

    fn write_new(&self) -> anyhow::Result<SessionContext> {
        let id = new_session_id()?;
        if let Some(parent) = self.file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.file, format!("{id}\n"))
            .with_context(|| format!("failed to write session file {}", self.file.display()))?;
        tracing::info!(session = %id, file = %self.file.display(), "created session id");
        Ok(SessionContext::new(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn creates_then_reuses_cached_id() {
        let tmp = TempDir::new().unwrap();
        let identity = SessionIdentity::new(&SessionConfig::default(), tmp.path());

        let (first, source) = identity.resolve().unwrap();
        assert_eq!(source, SessionSource::Created);
        assert!(first.id().starts_with("ses-"));

        let (second, source) = identity.resolve().unwrap();
        assert_eq!(source, SessionSource::Cache);
        assert_eq!(first, second);
    }

    #[test]
    fn config_override_wins_over_cache() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(SESSION_FILE), "ses-cached\n").unwrap();
        let config = SessionConfig {
            id: " ses-shared ".into(),
            ..Default::default()
        };

        let (session, source) = SessionIdentity::new(&config, tmp.path()).resolve().unwrap();
        assert_eq!(session.id(), "ses-shared");
        assert_eq!(source, SessionSource::Config);
    }

    #[test]
    fn custom_file_and_blank_cache() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("elsewhere").join("sid");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "  \n").unwrap();
        let config = SessionConfig {
            file: file.to_string_lossy().into_owned(),
            ..Default::default()
        };

        let identity = SessionIdentity::new(&config, tmp.path());
        assert_eq!(identity.file(), file.as_path());
        let (session, source) = identity.resolve().unwrap();
        assert_eq!(source, SessionSource::Created);
        assert_eq!(std::fs::read_to_string(&file).unwrap().trim(), session.id());
    }

    #[test]
    fn rotate_replaces_cache_but_not_override() {
        let tmp = TempDir::new().unwrap();
        let identity = SessionIdentity::new(&SessionConfig::default(), tmp.path());
        let (old, _) = identity.resolve().unwrap();
        let new = identity.rotate().unwrap();
        assert_ne!(old, new);
        assert_eq!(identity.resolve().unwrap().0, new);

        let fixed = SessionIdentity::new(
            &SessionConfig {
                id: "ses-fixed".into(),
                ..Default::default()
            },
            tmp.path(),
        );
        assert!(fixed.rotate().is_err());
    }
}
