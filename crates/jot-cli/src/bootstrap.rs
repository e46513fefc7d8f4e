use std::path::{Path, PathBuf};

use anyhow::Context;
use jot_config::JotConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (data dir first, then the working directory) and the layered
/// config. Variables already set are never overwritten, so the data dir file
/// wins over the working directory one.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JotConfig> {
    if let Some(dir) = flags.data_dir.as_deref() {
        load_data_dir_env(dir)?;
    }
    JotConfig::load_with_dotenv().context("failed to load jotter configuration")
}

/// `--data-dir`, else the platform data directory.
pub fn resolve_data_dir(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    let dir = match &flags.data_dir {
        Some(dir) => dir.clone(),
        None => JotConfig::default_data_dir()
            .context("could not determine a data directory; pass --data-dir")?,
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

fn load_data_dir_env(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(data_dir: Option<PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            data_dir,
        }
    }

    #[test]
    fn explicit_data_dir_is_created() {
        let tmp = tempfile::TempDir::new().unwrap();
        let wanted = tmp.path().join("nested").join("jotter");
        let dir = resolve_data_dir(&flags(Some(wanted.clone()))).unwrap();
        assert_eq!(dir, wanted);
        assert!(wanted.is_dir());
    }
}
