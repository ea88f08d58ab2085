//! Tennis set-score rules shared by every competition format.
//!
//! All functions are pure: documents go in by reference and come back as new
//! values. A [`ScoreEngine`] only pins the format so call sites do not have to
//! repeat it.

use std::iter;

use tracing::{debug, trace};

use crate::document::{ScoreDocument, Side};
use crate::format::{
    CompetitionFormat, MAX_GAMES, MAX_TIEBREAK_POINTS, SET_GAMES, SlotKind, TIEBREAK_POINTS,
    TIEBREAK_PRESET_MAX,
};
use crate::value::ScoreValue;

/// Values a score control should offer for one cell, given what the other
/// side of the same set already holds.
///
/// The value currently held by the cell being filled does not constrain its
/// options; it is accepted so both cells of a set can be passed in order.
pub fn legal_options(
    format: CompetitionFormat,
    set_index: usize,
    _own: ScoreValue,
    other: ScoreValue,
) -> Vec<ScoreValue> {
    debug_assert!(
        format.contains(set_index),
        "set index {set_index} out of range for {format}"
    );
    let kind = format.slot_kind(set_index);
    let options: Vec<ScoreValue> = match other {
        ScoreValue::Retired | ScoreValue::OpponentOfRetired => {
            other.walkover_mirror().into_iter().collect()
        }
        _ => match other.numeric_in(kind) {
            Some(known) => counterpart_values(kind, known)
                .into_iter()
                .map(|value| ScoreValue::numeric_for(kind, value))
                .collect(),
            None => open_options(kind),
        },
    };
    trace!(%format, set_index, ?other, count = options.len(), "computed legal options");
    options
}

/// Writes `new_value` into one cell and derives the opposite cell where the
/// rules leave no choice.
///
/// Values outside the cell's entry domain leave the document unchanged.
pub fn apply_entry(
    document: &ScoreDocument,
    format: CompetitionFormat,
    set_index: usize,
    side: Side,
    new_value: ScoreValue,
) -> ScoreDocument {
    debug_assert!(
        format.contains(set_index),
        "set index {set_index} out of range for {format}"
    );
    debug_assert_eq!(document.set_count(), format.set_count());
    let mut next = document.clone();
    if !format.contains(set_index) {
        return next;
    }
    let kind = format.slot_kind(set_index);
    if !accepts(kind, new_value) {
        debug!(%format, set_index, ?side, ?new_value, "entry outside cell domain dropped");
        return next;
    }

    let opposite = side.opposite();
    let current = document.get(opposite, set_index);
    next.set(side, set_index, new_value);
    if let Some(derived) = derive_counterpart(kind, new_value, current) {
        debug!(%format, set_index, ?side, ?new_value, ?derived, "derived counterpart");
        next.set(opposite, set_index, derived);
    }
    next
}

/// Parses raw cell input for the slot and applies it. Unparseable input
/// leaves the document unchanged.
pub fn apply_raw(
    document: &ScoreDocument,
    format: CompetitionFormat,
    set_index: usize,
    side: Side,
    raw: &str,
) -> ScoreDocument {
    debug_assert!(
        format.contains(set_index),
        "set index {set_index} out of range for {format}"
    );
    if !format.contains(set_index) {
        return document.clone();
    }
    match ScoreValue::parse(raw, format.slot_kind(set_index)) {
        Ok(value) => apply_entry(document, format, set_index, side, value),
        Err(err) => {
            debug!(%format, set_index, ?side, raw, %err, "raw entry ignored");
            document.clone()
        }
    }
}

/// Whether `own` shows as the winning cell of its set.
///
/// A numeric cell facing an empty one also shows as won; that mirrors how
/// incomplete matches are displayed and is not a scoring decision.
pub fn is_winner(
    format: CompetitionFormat,
    set_index: usize,
    own: ScoreValue,
    other: ScoreValue,
) -> bool {
    debug_assert!(
        format.contains(set_index),
        "set index {set_index} out of range for {format}"
    );
    if let (Some(own), Some(other)) = (own.numeric(), other.numeric()) {
        return own > other;
    }
    match other {
        ScoreValue::Retired => true,
        ScoreValue::Empty => own.numeric().is_some(),
        _ => false,
    }
}

/// Sets won per side (`[side A, side B]`), counting only sets where both
/// cells are filled.
pub fn set_tally(format: CompetitionFormat, document: &ScoreDocument) -> [usize; 2] {
    let mut tally = [0usize; 2];
    for set_index in 0..format.set_count().min(document.set_count()) {
        let (a, b) = document.pair(set_index);
        if a.is_empty() || b.is_empty() {
            continue;
        }
        if is_winner(format, set_index, a, b) {
            tally[Side::A.index()] += 1;
        } else if is_winner(format, set_index, b, a) {
            tally[Side::B.index()] += 1;
        }
    }
    tally
}

/// Rule engine bound to one competition format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScoreEngine {
    format: CompetitionFormat,
}

impl ScoreEngine {
    pub fn new(format: CompetitionFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> CompetitionFormat {
        self.format
    }

    pub fn empty_document(&self) -> ScoreDocument {
        ScoreDocument::empty(self.format)
    }

    /// Options for `side` at `set_index`, reading both cells from `document`.
    pub fn legal_options(
        &self,
        document: &ScoreDocument,
        set_index: usize,
        side: Side,
    ) -> Vec<ScoreValue> {
        legal_options(
            self.format,
            set_index,
            document.get(side, set_index),
            document.get(side.opposite(), set_index),
        )
    }

    pub fn apply_entry(
        &self,
        document: &ScoreDocument,
        set_index: usize,
        side: Side,
        new_value: ScoreValue,
    ) -> ScoreDocument {
        apply_entry(document, self.format, set_index, side, new_value)
    }

    pub fn apply_raw(
        &self,
        document: &ScoreDocument,
        set_index: usize,
        side: Side,
        raw: &str,
    ) -> ScoreDocument {
        apply_raw(document, self.format, set_index, side, raw)
    }

    pub fn is_winner(&self, document: &ScoreDocument, set_index: usize, side: Side) -> bool {
        is_winner(
            self.format,
            set_index,
            document.get(side, set_index),
            document.get(side.opposite(), set_index),
        )
    }

    pub fn set_tally(&self, document: &ScoreDocument) -> [usize; 2] {
        set_tally(self.format, document)
    }
}

/// Options when the other side is still open: a walkover or any preset count.
fn open_options(kind: SlotKind) -> Vec<ScoreValue> {
    let top = match kind {
        SlotKind::Standard => u16::from(MAX_GAMES),
        SlotKind::MatchTiebreak => TIEBREAK_PRESET_MAX,
    };
    iter::once(ScoreValue::Retired)
        .chain((0..=top).map(|value| ScoreValue::numeric_for(kind, value)))
        .collect()
}

/// Numbers the opposite cell may hold against a known `value`.
fn counterpart_values(kind: SlotKind, value: u16) -> Vec<u16> {
    let set_games = u16::from(SET_GAMES);
    let max_games = u16::from(MAX_GAMES);
    match kind {
        SlotKind::Standard => match value {
            0..=4 => vec![set_games],
            5 => vec![max_games],
            6 => vec![0, 1, 2, 3, 4, max_games],
            7 => vec![5, set_games],
            _ => Vec::new(),
        },
        SlotKind::MatchTiebreak => match value {
            0..=8 => vec![TIEBREAK_POINTS],
            9 => vec![TIEBREAK_POINTS + 1],
            10 => (0..=8).chain(iter::once(TIEBREAK_POINTS + 2)).collect(),
            _ => iter::once(value - 2)
                .chain((value + 2 <= MAX_TIEBREAK_POINTS).then_some(value + 2))
                .collect(),
        },
    }
}

/// Entry domain of a cell: walkover markers and in-range numerics of the
/// slot's kind. Tiebreak cells take any count a player can type in.
fn accepts(kind: SlotKind, value: ScoreValue) -> bool {
    match value {
        ScoreValue::Empty => false,
        ScoreValue::Retired | ScoreValue::OpponentOfRetired => true,
        _ => value.numeric_in(kind).is_some(),
    }
}

/// New content of the opposite cell after `entered` was written, or `None`
/// when it stays as is.
///
/// In a tiebreak, an opposite value that is already legal against `entered`
/// is kept. For 10 that deliberately includes every count from 0 to 8 as well
/// as 12, so re-entering a winner's 10 leaves the loser's count alone.
fn derive_counterpart(
    kind: SlotKind,
    entered: ScoreValue,
    current: ScoreValue,
) -> Option<ScoreValue> {
    if let Some(mirror) = entered.walkover_mirror() {
        return Some(mirror);
    }
    let value = entered.numeric_in(kind)?;
    match kind {
        SlotKind::Standard => match value {
            0..=4 => Some(ScoreValue::Games(SET_GAMES)),
            5 => Some(ScoreValue::Games(MAX_GAMES)),
            7 => Some(ScoreValue::Games(5)),
            // 6 pairs with 0-4 or 7; only leftovers that can never pair are cleared.
            _ => match current {
                ScoreValue::Games(5) | ScoreValue::Games(6) => Some(ScoreValue::Empty),
                ScoreValue::Retired | ScoreValue::OpponentOfRetired => Some(ScoreValue::Empty),
                _ => None,
            },
        },
        SlotKind::MatchTiebreak => match value {
            0..=8 => Some(ScoreValue::Points(TIEBREAK_POINTS)),
            9 => Some(ScoreValue::Points(TIEBREAK_POINTS + 1)),
            _ => {
                let consistent = current
                    .numeric_in(kind)
                    .is_some_and(|held| counterpart_values(kind, value).contains(&held));
                if consistent {
                    None
                } else if value + 2 <= MAX_TIEBREAK_POINTS {
                    Some(ScoreValue::Points(value + 2))
                } else {
                    Some(ScoreValue::Points(value - 2))
                }
            }
        },
    }
}
