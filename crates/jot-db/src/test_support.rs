//! Shared test utilities for jot-db tests.

pub(crate) mod helpers {
    use chrono::{DateTime, TimeZone, Utc};
    use jot_core::entities::SessionContext;

    use crate::policy::WritePolicy;
    use crate::store::ItemStore;

    /// In-memory store with the default best-effort policy.
    pub async fn test_store() -> ItemStore {
        ItemStore::open_local(":memory:", WritePolicy::BestEffort)
            .await
            .unwrap()
    }

    /// `ses-{name}`.
    pub fn session(name: &str) -> SessionContext {
        SessionContext::new(format!("ses-{name}"))
    }

    /// A UTC instant in March 2026 (the 6th is a Friday).
    pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }
}
