//! Motivation booster: comeback stories, one-line boosts and a hype
//! playlist.
//!
//! Stories are browsed by index and wrap at both ends. Boosts are drawn at
//! random but never repeat the line shown just before. The playlist comes
//! back in a fresh random order on every call.

use serde::Serialize;

use crate::errors::CoreError;
use crate::ids::random_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub person: &'static str,
    pub story: &'static str,
    pub lesson: &'static str,
    pub quote: &'static str,
}

pub const STORIES: &[Story] = &[
    Story {
        id: "oprah",
        title: "Pulled Off the Evening News",
        person: "Oprah Winfrey",
        story: "Early in her career she was moved off a Baltimore evening newscast and told she \
                was not suited to television. The daytime talk slot she landed instead became \
                the show that made her a household name.",
        lesson: "A setback can be a redirect toward the place you fit.",
        quote: "Turn your wounds into wisdom.",
    },
    Story {
        id: "rowling",
        title: "Twelve Rejections",
        person: "J.K. Rowling",
        story: "The first Harry Potter manuscript was turned down by twelve publishers while she \
                was a single parent living on benefits. A small London house finally took it \
                on with a modest print run.",
        lesson: "One yes is enough. Keep sending it out.",
        quote: "Rock bottom became the solid foundation on which I rebuilt my life.",
    },
    Story {
        id: "jobs",
        title: "Pushed Out of His Own Company",
        person: "Steve Jobs",
        story: "At thirty he lost a boardroom fight and left Apple. He spent the next decade \
                building NeXT and Pixar, then came back to run Apple when it was close to \
                going under.",
        lesson: "Losing a role is not losing your ability.",
        quote: "Sometimes life hits you in the head with a brick. Don't lose faith.",
    },
    Story {
        id: "disney",
        title: "The Studio That Went Bust",
        person: "Walt Disney",
        story: "His first animation studio, Laugh-O-Gram, went bankrupt and left him broke. He \
                moved to Hollywood with a suitcase and started again from a garage.",
        lesson: "A failed first attempt is tuition, not a verdict.",
        quote: "The way to get started is to quit talking and begin doing.",
    },
    Story {
        id: "jordan",
        title: "Left Off the Varsity Roster",
        person: "Michael Jordan",
        story: "As a high school sophomore he was passed over for the varsity team. He used the \
                list as fuel and trained through the following year until nobody could leave \
                him off again.",
        lesson: "Let the snub set your training schedule.",
        quote: "I've failed over and over and over again in my life. And that is why I succeed.",
    },
    Story {
        id: "sanders",
        title: "Starting Over at Sixty-Five",
        person: "Colonel Harland Sanders",
        story: "A new highway bypassed his roadside restaurant and his first pension check was \
                small. He drove from town to town pitching his chicken recipe to restaurant \
                owners until franchises started saying yes.",
        lesson: "There is no deadline on a second act.",
        quote: "One has to remember that every failure can be a stepping stone to something better.",
    },
    Story {
        id: "johnson",
        title: "Seven Dollars in His Pocket",
        person: "Dwayne Johnson",
        story: "Cut from a Canadian football team, he arrived home with seven dollars and no \
                plan. He turned to wrestling, then acting, and named his production company \
                after that low point.",
        lesson: "Remember where you started; it keeps you hungry.",
        quote: "Success isn't overnight. It's when every day you get a little better than the day before.",
    },
    Story {
        id: "malala",
        title: "Still Speaking",
        person: "Malala Yousafzai",
        story: "She was shot for insisting that girls should go to school. After recovering she \
                kept campaigning and became the youngest Nobel Peace Prize laureate.",
        lesson: "Courage is continuing after the cost becomes real.",
        quote: "One child, one teacher, one book, one pen can change the world.",
    },
];

pub const QUICK_BOOSTS: &[&str] = &[
    "You have made it through every hard day so far.",
    "Looking for a push means you haven't given up.",
    "Small progress is still progress. One task at a time.",
    "You don't need a perfect day, just the next step.",
    "Every expert started out as a beginner.",
    "This feeling passes. The work you do today stays.",
    "You are not behind. You are here, and here is a fine place to start.",
    "A slow day still counts.",
    "Rest if you need to. Just don't quit.",
    "Beat yesterday's version of you. That's the whole game.",
    "Pick the smallest task on the list and finish it.",
    "The second best time to start is now.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HypeSong {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub vibe: &'static str,
}

pub const HYPE_SONGS: &[HypeSong] = &[
    HypeSong {
        id: "lose-yourself",
        title: "Lose Yourself",
        artist: "Eminem",
        vibe: "One shot, take it",
    },
    HypeSong {
        id: "stronger",
        title: "Stronger",
        artist: "Kanye West",
        vibe: "Come back harder",
    },
    HypeSong {
        id: "eye-of-the-tiger",
        title: "Eye of the Tiger",
        artist: "Survivor",
        vibe: "Underdog training montage",
    },
    HypeSong {
        id: "till-i-collapse",
        title: "Till I Collapse",
        artist: "Eminem ft. Nate Dogg",
        vibe: "Keep going past tired",
    },
    HypeSong {
        id: "cant-hold-us",
        title: "Can't Hold Us",
        artist: "Macklemore & Ryan Lewis",
        vibe: "Full-speed hustle",
    },
    HypeSong {
        id: "humble",
        title: "HUMBLE.",
        artist: "Kendrick Lamar",
        vibe: "Head down, work hard",
    },
    HypeSong {
        id: "started-from-the-bottom",
        title: "Started From The Bottom",
        artist: "Drake",
        vibe: "Look how far you've come",
    },
    HypeSong {
        id: "remember-the-name",
        title: "Remember the Name",
        artist: "Fort Minor",
        vibe: "Skill, will, sweat",
    },
    HypeSong {
        id: "dont-stop-me-now",
        title: "Don't Stop Me Now",
        artist: "Queen",
        vibe: "Pure momentum",
    },
    HypeSong {
        id: "unstoppable",
        title: "Unstoppable",
        artist: "Sia",
        vibe: "Armor on",
    },
];

/// Index after `index`, wrapping to the first story.
#[must_use]
pub fn next_story(index: usize) -> usize {
    (index % STORIES.len() + 1) % STORIES.len()
}

/// Index before `index`, wrapping to the last story.
#[must_use]
pub fn prev_story(index: usize) -> usize {
    (index % STORIES.len() + STORIES.len() - 1) % STORIES.len()
}

/// Index of a random story.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn random_story() -> Result<usize, CoreError> {
    random_index(STORIES.len())
}

/// A random boost, different from `previous` whenever that is possible.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn boost(previous: Option<&str>) -> Result<&'static str, CoreError> {
    let candidates = QUICK_BOOSTS
        .iter()
        .copied()
        .filter(|line| Some(*line) != previous)
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return Ok(QUICK_BOOSTS[random_index(QUICK_BOOSTS.len())?]);
    }
    Ok(candidates[random_index(candidates.len())?])
}

/// Every hype song, Fisher-Yates shuffled.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn shuffled_playlist() -> Result<Vec<HypeSong>, CoreError> {
    let mut songs = HYPE_SONGS.to_vec();
    for i in (1..songs.len()).rev() {
        let j = random_index(i + 1)?;
        songs.swap(i, j);
    }
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_navigation_wraps_both_ways() {
        let last = STORIES.len() - 1;
        assert_eq!(next_story(0), 1);
        assert_eq!(next_story(last), 0);
        assert_eq!(prev_story(0), last);
        assert_eq!(prev_story(1), 0);
        assert_eq!(prev_story(next_story(3)), 3);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let stories = STORIES.iter().map(|s| s.id).collect::<HashSet<_>>();
        let songs = HYPE_SONGS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(stories.len(), STORIES.len());
        assert_eq!(songs.len(), HYPE_SONGS.len());
        assert!(STORIES.iter().all(|s| !s.lesson.is_empty() && !s.quote.is_empty()));
    }

    #[test]
    fn random_story_is_in_range() {
        for _ in 0..50 {
            assert!(random_story().unwrap() < STORIES.len());
        }
    }

    #[test]
    fn boost_never_repeats_previous() {
        let mut previous = boost(None).unwrap();
        for _ in 0..100 {
            let next = boost(Some(previous)).unwrap();
            assert_ne!(next, previous);
            assert!(QUICK_BOOSTS.contains(&next));
            previous = next;
        }
    }

    #[test]
    fn playlist_is_a_permutation() {
        let shuffled = shuffled_playlist().unwrap();
        assert_eq!(shuffled.len(), HYPE_SONGS.len());
        let ids = shuffled.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids, HYPE_SONGS.iter().map(|s| s.id).collect::<HashSet<_>>());
    }
}
