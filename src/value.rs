use std::fmt;

use crate::error::ParseScoreError;
use crate::format::SlotKind;

/// Wire and display token of a walkover.
pub const RETIRED_TOKEN: &str = "wo";
/// Wire and display token of the cell opposite a walkover.
pub const OPPONENT_OF_RETIRED_TOKEN: &str = "-";

/// Content of one side's cell in one set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScoreValue {
    #[default]
    Empty,
    /// Walkover: the holder did not play or forfeited the set.
    Retired,
    /// Counterpart of a walkover.
    OpponentOfRetired,
    /// Games won in a standard set (0..=7).
    Games(u8),
    /// Points won in a match tiebreak (0..=999).
    Points(u16),
}

impl ScoreValue {
    /// Numeric value of the right kind for `kind`. Does not range-check.
    pub fn numeric_for(kind: SlotKind, value: u16) -> ScoreValue {
        match kind {
            SlotKind::Standard => ScoreValue::Games(value.min(u16::from(u8::MAX)) as u8),
            SlotKind::MatchTiebreak => ScoreValue::Points(value),
        }
    }

    /// Parses a raw cell input for a slot of the given kind.
    pub fn parse(raw: &str, kind: SlotKind) -> Result<ScoreValue, ParseScoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseScoreError::Empty);
        }
        if trimmed.eq_ignore_ascii_case(RETIRED_TOKEN) {
            return Ok(ScoreValue::Retired);
        }
        if trimmed == OPPONENT_OF_RETIRED_TOKEN {
            return Ok(ScoreValue::OpponentOfRetired);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseScoreError::NotAScore(trimmed.to_string()));
        }
        let max = kind.max_value();
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| ParseScoreError::OutOfRange {
                value: u32::MAX,
                kind,
                max,
            })?;
        if value > u32::from(max) {
            return Err(ParseScoreError::OutOfRange { value, kind, max });
        }
        Ok(ScoreValue::numeric_for(kind, value as u16))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ScoreValue::Empty)
    }

    #[inline]
    pub fn is_walkover(&self) -> bool {
        matches!(self, ScoreValue::Retired | ScoreValue::OpponentOfRetired)
    }

    /// Game or point count, whichever the cell holds.
    #[inline]
    pub fn numeric(&self) -> Option<u16> {
        match self {
            ScoreValue::Games(games) => Some(u16::from(*games)),
            ScoreValue::Points(points) => Some(*points),
            _ => None,
        }
    }

    /// Numeric value if it is of `kind` and within the kind's range.
    pub fn numeric_in(&self, kind: SlotKind) -> Option<u16> {
        let value = match (self, kind) {
            (ScoreValue::Games(games), SlotKind::Standard) => u16::from(*games),
            (ScoreValue::Points(points), SlotKind::MatchTiebreak) => *points,
            _ => return None,
        };
        (value <= kind.max_value()).then_some(value)
    }

    /// Mirror image of a walkover marker.
    pub fn walkover_mirror(&self) -> Option<ScoreValue> {
        match self {
            ScoreValue::Retired => Some(ScoreValue::OpponentOfRetired),
            ScoreValue::OpponentOfRetired => Some(ScoreValue::Retired),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Empty => Ok(()),
            ScoreValue::Retired => f.write_str(RETIRED_TOKEN),
            ScoreValue::OpponentOfRetired => f.write_str(OPPONENT_OF_RETIRED_TOKEN),
            ScoreValue::Games(games) => write!(f, "{games}"),
            ScoreValue::Points(points) => write!(f, "{points}"),
        }
    }
}
