//! Recurrence, status, category and view enums for Jotter.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the same strings appear in JSON output and in SQL storage.

use chrono::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Recurrence
// ---------------------------------------------------------------------------

/// How often a recurring item comes back after it is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    Weekdays,
}

impl Recurrence {
    /// Whether a new occurrence may be spawned on `weekday`.
    #[must_use]
    pub const fn occurs_on(self, weekday: Weekday) -> bool {
        match self {
            Self::Daily => true,
            Self::Weekdays => !matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekdays => "weekdays",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Workflow status of an item, independent of completion.
///
/// ```text
/// active ⇄ blocked
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Active,
    Blocked,
}

impl ItemStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Blocked],
            Self::Blocked => &[Self::Active],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Fixed label set for tagging items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Health,
    Errands,
    Learning,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::Personal,
        Self::Health,
        Self::Errands,
        Self::Learning,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Errands => "errands",
            Self::Learning => "learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Which partition of the working set to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    All,
    Active,
    Blocked,
    Snoozed,
    Completed,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Snoozed => "snoozed",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(recurrence_weekdays, Recurrence, Recurrence::Weekdays, "weekdays");
    test_serde_roundtrip!(status_blocked, ItemStatus, ItemStatus::Blocked, "blocked");
    test_serde_roundtrip!(category_errands, Category, Category::Errands, "errands");
    test_serde_roundtrip!(view_snoozed, View, View::Snoozed, "snoozed");

    #[test]
    fn as_str_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn weekdays_skip_weekend() {
        assert!(Recurrence::Weekdays.occurs_on(Weekday::Mon));
        assert!(Recurrence::Weekdays.occurs_on(Weekday::Fri));
        assert!(!Recurrence::Weekdays.occurs_on(Weekday::Sat));
        assert!(!Recurrence::Weekdays.occurs_on(Weekday::Sun));
        assert!(Recurrence::Daily.occurs_on(Weekday::Sun));
    }

    #[test]
    fn status_transitions() {
        assert!(ItemStatus::Active.can_transition_to(ItemStatus::Blocked));
        assert!(ItemStatus::Blocked.can_transition_to(ItemStatus::Active));
        assert!(!ItemStatus::Active.can_transition_to(ItemStatus::Active));
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(ItemStatus::default(), ItemStatus::Active);
    }
}
