use serde::{Deserialize, Serialize};

use crate::format::CompetitionFormat;
use crate::value::ScoreValue;

/// One of the two competitors of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Optional display names of both competitors.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompetitorLabels {
    pub side_a: Option<String>,
    pub side_b: Option<String>,
}

impl CompetitorLabels {
    pub fn new(side_a: Option<String>, side_b: Option<String>) -> Self {
        Self { side_a, side_b }
    }

    pub fn get(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.side_a.as_deref(),
            Side::B => self.side_b.as_deref(),
        }
    }

    /// Label or a generic fallback.
    pub fn display(&self, side: Side) -> String {
        self.get(side).map(str::to_string).unwrap_or_else(|| match side {
            Side::A => String::from("Player 1"),
            Side::B => String::from("Player 2"),
        })
    }
}

/// Committed per-set scores of both sides, index-aligned by set.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScoreDocument {
    side_a: Vec<ScoreValue>,
    side_b: Vec<ScoreValue>,
}

impl ScoreDocument {
    /// All-empty document sized for `format`.
    pub fn empty(format: CompetitionFormat) -> Self {
        Self::with_set_count(format.set_count())
    }

    pub(crate) fn with_set_count(set_count: usize) -> Self {
        Self {
            side_a: vec![ScoreValue::Empty; set_count],
            side_b: vec![ScoreValue::Empty; set_count],
        }
    }

    /// Builds a document from two already-decoded sequences of equal length.
    pub(crate) fn from_sides(side_a: Vec<ScoreValue>, side_b: Vec<ScoreValue>) -> Self {
        debug_assert_eq!(side_a.len(), side_b.len());
        Self { side_a, side_b }
    }

    #[inline]
    pub fn set_count(&self) -> usize {
        self.side_a.len()
    }

    pub fn side(&self, side: Side) -> &[ScoreValue] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Cell content, `Empty` when the index lies outside the document.
    pub fn get(&self, side: Side, set_index: usize) -> ScoreValue {
        self.side(side)
            .get(set_index)
            .copied()
            .unwrap_or(ScoreValue::Empty)
    }

    /// Both cells of a set, side A first.
    pub fn pair(&self, set_index: usize) -> (ScoreValue, ScoreValue) {
        (self.get(Side::A, set_index), self.get(Side::B, set_index))
    }

    pub(crate) fn set(&mut self, side: Side, set_index: usize, value: ScoreValue) {
        let cells = match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        };
        if let Some(cell) = cells.get_mut(set_index) {
            *cell = value;
        }
    }

    /// Clears every cell back to `Empty`.
    pub fn reset(&mut self) {
        self.side_a.fill(ScoreValue::Empty);
        self.side_b.fill(ScoreValue::Empty);
    }

    pub fn is_blank(&self) -> bool {
        self.side_a
            .iter()
            .chain(self.side_b.iter())
            .all(ScoreValue::is_empty)
    }

    /// Sets where exactly one side holds a value.
    pub fn half_filled_sets(&self) -> Vec<usize> {
        (0..self.set_count())
            .filter(|&index| {
                let (a, b) = self.pair(index);
                a.is_empty() != b.is_empty()
            })
            .collect()
    }

    /// Walkover markers must be mirrored: `wo` opposite `-`, never `wo` twice.
    pub fn walkovers_mirrored(&self) -> bool {
        (0..self.set_count()).all(|index| {
            let (a, b) = self.pair(index);
            match (a.walkover_mirror(), b.walkover_mirror()) {
                (None, None) => true,
                (Some(mirror), _) => mirror == b,
                (None, Some(_)) => false,
            }
        })
    }
}
