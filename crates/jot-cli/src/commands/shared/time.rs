use anyhow::Context;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

/// `now + ms`.
pub fn after_ms(now: DateTime<Utc>, ms: u64) -> anyhow::Result<DateTime<Utc>> {
    let delta = i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .context("duration is too long")?;
    now.checked_add_signed(delta).context("duration is too long")
}

/// Midnight at the start of the day after `now`, in `now`'s zone.
pub fn start_of_tomorrow<Tz: TimeZone>(now: &DateTime<Tz>) -> anyhow::Result<DateTime<Utc>> {
    let midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .context("no tomorrow after this date")?;
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .context("local midnight does not exist tomorrow")
}

/// [`start_of_tomorrow`] in the local zone.
pub fn local_tomorrow() -> anyhow::Result<DateTime<Utc>> {
    start_of_tomorrow(&Local::now())
}
