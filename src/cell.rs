use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::legal_options;
use crate::format::{CompetitionFormat, MAX_TIEBREAK_POINTS, SlotKind};
use crate::value::ScoreValue;

/// Label of the option that switches a tiebreak cell to typed entry.
pub const CUSTOM_OPTION_LABEL: &str = "custom score value";

const FREE_ENTRY_DIGITS: usize = 3;

/// How a cell currently takes input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EntryMode {
    /// Picking from the offered options.
    #[default]
    Selecting,
    /// Typing a point count that is not in the preset list.
    FreeEntry,
}

/// One entry of a cell's option list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CellOption {
    Value(ScoreValue),
    /// Switches the cell to [`EntryMode::FreeEntry`].
    Custom,
}

impl fmt::Display for CellOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellOption::Value(value) => write!(f, "{value}"),
            CellOption::Custom => f.write_str(CUSTOM_OPTION_LABEL),
        }
    }
}

/// Option list for a cell: the legal values, plus the free-entry escape for
/// an open match tiebreak.
pub fn cell_options(
    format: CompetitionFormat,
    set_index: usize,
    own: ScoreValue,
    other: ScoreValue,
) -> Vec<CellOption> {
    let mut options: Vec<CellOption> = legal_options(format, set_index, own, other)
        .into_iter()
        .map(CellOption::Value)
        .collect();
    if format.slot_kind(set_index) == SlotKind::MatchTiebreak && other.is_empty() {
        options.push(CellOption::Custom);
    }
    options
}

/// Transient input state of one score cell. Never part of the committed
/// [`ScoreDocument`](crate::ScoreDocument).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CellInput {
    mode: EntryMode,
    buffer: String,
}

impl CellInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Digits typed so far in free entry.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Picks an option. Returns the value to commit, if any.
    pub fn select(&mut self, option: CellOption) -> Option<ScoreValue> {
        match option {
            CellOption::Custom => {
                self.mode = EntryMode::FreeEntry;
                self.buffer.clear();
                None
            }
            CellOption::Value(value) => {
                self.mode = EntryMode::Selecting;
                self.buffer.clear();
                Some(value)
            }
        }
    }

    /// Replaces the free-entry text. Non-digits are discarded; text with
    /// more than three digits is ignored and the previous text kept. The
    /// result is not checked against the legal options.
    pub fn type_text(&mut self, text: &str) -> Option<ScoreValue> {
        if self.mode != EntryMode::FreeEntry {
            return None;
        }
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.len() > FREE_ENTRY_DIGITS {
            return None;
        }
        self.buffer = digits;
        let points = self.buffer.parse::<u16>().ok()?;
        debug_assert!(points <= MAX_TIEBREAK_POINTS);
        Some(ScoreValue::Points(points))
    }

    /// Focus left the cell. An empty free-entry field falls back to the
    /// option list.
    pub fn blur(&mut self) {
        if self.mode == EntryMode::FreeEntry && self.buffer.is_empty() {
            self.mode = EntryMode::Selecting;
        }
    }

    pub fn reset(&mut self) {
        self.mode = EntryMode::Selecting;
        self.buffer.clear();
    }
}
