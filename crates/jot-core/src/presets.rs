//! Built-in ritual presets and completion messages.
//!
//! A preset is a named daily routine. Applying one turns each ritual line
//! into a fresh item.

use serde::Serialize;

use crate::errors::CoreError;
use crate::ids::random_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub profession: &'static str,
    pub summary: &'static str,
    pub quote: &'static str,
    pub rituals: &'static [&'static str],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "early-riser",
        name: "Early Riser",
        profession: "Founder",
        summary: "Front-load the day before the inbox wakes up",
        quote: "Win the morning, win the day.",
        rituals: &[
            "Wake up at 5:30 and drink a glass of water",
            "Ten minutes of stretching",
            "Write three things you are grateful for",
            "Plan the top three tasks for today",
            "Ninety minutes of deep work before email",
            "Walk outside at lunch",
            "Clear the inbox in one batch",
            "Lights out by 22:00",
        ],
    },
    Preset {
        id: "deep-worker",
        name: "Deep Worker",
        profession: "Researcher",
        summary: "Protect long blocks of focused time",
        quote: "Attention is the scarcest resource you own.",
        rituals: &[
            "Put the phone in another room",
            "Two-hour focus block on the hardest problem",
            "Fifteen-minute break away from screens",
            "Second focus block",
            "Review notes and capture open questions",
            "Shutdown ritual: write tomorrow's first task",
        ],
    },
    Preset {
        id: "athlete",
        name: "Athlete",
        profession: "Endurance athlete",
        summary: "Train, fuel, recover",
        quote: "Consistency beats intensity.",
        rituals: &[
            "Mobility warm-up",
            "Main training session",
            "Protein-rich breakfast",
            "Log today's workout",
            "Foam roll for fifteen minutes",
            "Prep meals for tomorrow",
            "Eight hours of sleep",
        ],
    },
    Preset {
        id: "maker",
        name: "Maker",
        profession: "Indie maker",
        summary: "Ship something small every day",
        quote: "Done is a habit.",
        rituals: &[
            "Sketch the idea on paper",
            "Build for one uninterrupted hour",
            "Share progress with one person",
            "Fix one rough edge",
            "Read for thirty minutes",
            "Tidy the workspace",
        ],
    },
    Preset {
        id: "calm-evening",
        name: "Evening Unwinder",
        profession: "Nurse",
        summary: "Wind down and reset for tomorrow",
        quote: "Rest is part of the work.",
        rituals: &[
            "Cook a simple dinner",
            "Call a friend or family member",
            "Tidy the kitchen",
            "Screens off an hour before bed",
            "Journal for ten minutes",
            "Read fiction in bed",
        ],
    },
];

impl Preset {
    /// Board heading while this preset frames the list.
    #[must_use]
    pub fn title(&self) -> String {
        format!("A Day as the {}", self.name)
    }
}

/// Look up a preset by id (case-insensitive).
///
/// # Errors
///
/// Returns `CoreError::NotFound` when no preset matches.
pub fn find_preset(id: &str) -> Result<&'static Preset, CoreError> {
    PRESETS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "preset".to_string(),
            id: id.to_string(),
        })
}

pub const CELEBRATIONS: &[&str] = &[
    "Nice work. One less thing.",
    "Crossed off. Keep the streak alive.",
    "That's how it's done.",
    "Momentum is building.",
    "Future you says thanks.",
    "Small wins add up.",
    "Off the list and out of your head.",
    "Onward.",
];

/// A random line from [`CELEBRATIONS`].
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn celebration() -> Result<&'static str, CoreError> {
    Ok(CELEBRATIONS[random_index(CELEBRATIONS.len())?])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn preset_ids_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for preset in PRESETS {
            assert!(seen.insert(preset.id), "duplicate preset {}", preset.id);
            assert!(!preset.rituals.is_empty());
            assert!(preset.rituals.iter().all(|r| !r.trim().is_empty()));
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_preset("Deep-Worker").unwrap().name, "Deep Worker");
        assert!(matches!(
            find_preset("nobody"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn title_names_the_persona() {
        assert_eq!(find_preset("maker").unwrap().title(), "A Day as the Maker");
        assert!(PRESETS.iter().all(|p| !p.profession.is_empty()));
    }

    #[test]
    fn celebration_comes_from_list() {
        let msg = celebration().unwrap();
        assert!(CELEBRATIONS.contains(&msg));
    }
}
