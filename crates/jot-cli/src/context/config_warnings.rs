use jot_config::{ENV_PREFIX, JotConfig};

const SECTIONS: [&str; 3] = ["STORE", "SESSION", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &JotConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &JotConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let prefix = format!("{ENV_PREFIX}{section}");
        let nested = format!("{prefix}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and key (example: {nested}{}).",
                example_key(section)
            ));
        }
    }

    if config.store.is_remote() && config.store.auth_token.is_empty() {
        warnings.push(
            "store.url is set but store.auth_token is empty; remote writes will likely be rejected."
                .to_string(),
        );
    }

    warnings
}

fn example_key(section: &str) -> &'static str {
    match section {
        "STORE" => "URL",
        "SESSION" => "ID",
        _ => "STRICT_WRITES",
    }
}
