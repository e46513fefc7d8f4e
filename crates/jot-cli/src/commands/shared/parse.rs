use jot_core::timer::{hours_minutes_ms, parse_duration};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// [`parse_enum`] for an optional flag.
pub fn parse_optional_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}

/// Timer from either `--timer <duration>` or `--hours/--minutes`. Zero
/// means no timer.
pub fn parse_timer(
    timer: Option<&str>,
    hours: Option<u32>,
    minutes: Option<u32>,
) -> anyhow::Result<Option<u64>> {
    if let Some(raw) = timer {
        let ms = parse_duration(raw)?;
        return Ok((ms > 0).then_some(ms));
    }
    if hours.is_none() && minutes.is_none() {
        return Ok(None);
    }
    Ok(hours_minutes_ms(hours.unwrap_or(0), minutes.unwrap_or(0)))
}
