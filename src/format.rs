use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Highest game count a standard set cell can hold (7-5 or 7-6).
pub const MAX_GAMES: u8 = 7;
/// Games needed to take a standard set outright.
pub const SET_GAMES: u8 = 6;
/// Points needed to take a match tiebreak outright.
pub const TIEBREAK_POINTS: u16 = 10;
/// Upper bound of the tiebreak point counts offered in a selection list.
pub const TIEBREAK_PRESET_MAX: u16 = 20;
/// Upper bound of a tiebreak point count entered by hand.
pub const MAX_TIEBREAK_POINTS: u16 = 999;
/// Largest set count of any format.
pub const MAX_SETS: usize = 5;

/// Scoring rules governing one set slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    /// Games to six, 7-5 and 7-6 finishes.
    Standard,
    /// Points to ten, win by two.
    MatchTiebreak,
}

impl SlotKind {
    /// Largest numeric value a cell of this kind accepts.
    pub fn max_value(self) -> u16 {
        match self {
            SlotKind::Standard => u16::from(MAX_GAMES),
            SlotKind::MatchTiebreak => MAX_TIEBREAK_POINTS,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Standard => f.write_str("standard set"),
            SlotKind::MatchTiebreak => f.write_str("match tiebreak"),
        }
    }
}

/// Match format chosen by the organiser; drives every rule in the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompetitionFormat {
    OneSet,
    ThreeSet,
    FiveSet,
    /// Two standard sets, the decider is played as a match tiebreak.
    #[serde(rename = "three-set-match-tiebreak")]
    ThreeSetWithMatchTiebreak,
    #[serde(rename = "match-tiebreak")]
    MatchTiebreakOnly,
}

impl CompetitionFormat {
    pub const ALL: [CompetitionFormat; 5] = [
        CompetitionFormat::OneSet,
        CompetitionFormat::ThreeSet,
        CompetitionFormat::FiveSet,
        CompetitionFormat::ThreeSetWithMatchTiebreak,
        CompetitionFormat::MatchTiebreakOnly,
    ];

    /// Number of set slots in a score document of this format.
    pub fn set_count(self) -> usize {
        match self {
            CompetitionFormat::OneSet | CompetitionFormat::MatchTiebreakOnly => 1,
            CompetitionFormat::ThreeSet | CompetitionFormat::ThreeSetWithMatchTiebreak => 3,
            CompetitionFormat::FiveSet => MAX_SETS,
        }
    }

    /// Sets a side must win to take the match.
    pub fn sets_to_win(self) -> usize {
        self.set_count() / 2 + 1
    }

    /// Whether the last slot is decided by a match tiebreak.
    pub fn final_slot_is_tiebreak(self) -> bool {
        matches!(
            self,
            CompetitionFormat::ThreeSetWithMatchTiebreak | CompetitionFormat::MatchTiebreakOnly
        )
    }

    /// Rules for the slot at `set_index`.
    pub fn slot_kind(self, set_index: usize) -> SlotKind {
        debug_assert!(
            self.contains(set_index),
            "set index {set_index} out of range for {self}"
        );
        if self.final_slot_is_tiebreak() && set_index + 1 == self.set_count() {
            SlotKind::MatchTiebreak
        } else {
            SlotKind::Standard
        }
    }

    #[inline]
    pub fn contains(self, set_index: usize) -> bool {
        set_index < self.set_count()
    }

    pub fn name(self) -> &'static str {
        match self {
            CompetitionFormat::OneSet => "one-set",
            CompetitionFormat::ThreeSet => "three-set",
            CompetitionFormat::FiveSet => "five-set",
            CompetitionFormat::ThreeSetWithMatchTiebreak => "three-set-match-tiebreak",
            CompetitionFormat::MatchTiebreakOnly => "match-tiebreak",
        }
    }
}

impl fmt::Display for CompetitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompetitionFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CompetitionFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| FormatError(s.to_string()))
    }
}
