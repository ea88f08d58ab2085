//! Backend encoding of a score document: two parallel arrays whose entries
//! are a number, `"wo"`, `"-"` or `null`.

use serde::{Deserialize, Serialize};

use crate::document::{ScoreDocument, Side};
use crate::error::{ParseScoreError, WireError};
use crate::format::CompetitionFormat;
use crate::value::{OPPONENT_OF_RETIRED_TOKEN, RETIRED_TOKEN, ScoreValue};

/// One encoded cell. `None` stands for an empty cell.
pub type WireCell = Option<WireToken>;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireToken {
    Number(u32),
    Text(String),
}

/// Score arrays exchanged with the backend.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireScores {
    #[serde(alias = "myScore")]
    pub player_one_scores: Vec<WireCell>,
    #[serde(alias = "opponentScore")]
    pub player_two_scores: Vec<WireCell>,
}

pub fn encode_value(value: ScoreValue) -> WireCell {
    match value {
        ScoreValue::Empty => None,
        ScoreValue::Retired => Some(WireToken::Text(RETIRED_TOKEN.to_string())),
        ScoreValue::OpponentOfRetired => {
            Some(WireToken::Text(OPPONENT_OF_RETIRED_TOKEN.to_string()))
        }
        ScoreValue::Games(games) => Some(WireToken::Number(u32::from(games))),
        ScoreValue::Points(points) => Some(WireToken::Number(u32::from(points))),
    }
}

/// Decodes one cell for the slot at `set_index`. Numbers take the slot's kind.
pub fn decode_value(
    cell: &WireCell,
    format: CompetitionFormat,
    set_index: usize,
) -> Result<ScoreValue, ParseScoreError> {
    let kind = format.slot_kind(set_index);
    match cell {
        None => Ok(ScoreValue::Empty),
        Some(WireToken::Number(number)) => {
            let max = kind.max_value();
            if *number > u32::from(max) {
                return Err(ParseScoreError::OutOfRange {
                    value: *number,
                    kind,
                    max,
                });
            }
            Ok(ScoreValue::numeric_for(kind, *number as u16))
        }
        Some(WireToken::Text(text)) => ScoreValue::parse(text, kind),
    }
}

pub fn encode(document: &ScoreDocument) -> WireScores {
    WireScores {
        player_one_scores: document.side(Side::A).iter().copied().map(encode_value).collect(),
        player_two_scores: document.side(Side::B).iter().copied().map(encode_value).collect(),
    }
}

pub fn decode(scores: &WireScores, format: CompetitionFormat) -> Result<ScoreDocument, WireError> {
    let side_a = decode_side(&scores.player_one_scores, format)?;
    let side_b = decode_side(&scores.player_two_scores, format)?;
    Ok(ScoreDocument::from_sides(side_a, side_b))
}

pub fn to_json(document: &ScoreDocument) -> Result<String, WireError> {
    Ok(serde_json::to_string(&encode(document))?)
}

pub fn from_json(json: &str, format: CompetitionFormat) -> Result<ScoreDocument, WireError> {
    let scores: WireScores = serde_json::from_str(json)?;
    decode(&scores, format)
}

fn decode_side(cells: &[WireCell], format: CompetitionFormat) -> Result<Vec<ScoreValue>, WireError> {
    let expected = format.set_count();
    if cells.len() != expected {
        return Err(WireError::LengthMismatch {
            expected,
            found: cells.len(),
        });
    }
    cells
        .iter()
        .enumerate()
        .map(|(set_index, cell)| {
            decode_value(cell, format, set_index)
                .map_err(|source| WireError::InvalidScore { set_index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoreEngine;

    #[test]
    fn walkover_markers_use_distinct_tokens() {
        assert_eq!(
            encode_value(ScoreValue::Retired),
            Some(WireToken::Text(String::from("wo")))
        );
        assert_eq!(
            encode_value(ScoreValue::OpponentOfRetired),
            Some(WireToken::Text(String::from("-")))
        );
        assert_eq!(encode_value(ScoreValue::Empty), None);
    }

    #[test]
    fn json_shape_matches_backend() {
        let engine = ScoreEngine::new(CompetitionFormat::ThreeSet);
        let mut doc = engine.empty_document();
        doc = engine.apply_raw(&doc, 0, Side::A, "4");
        doc = engine.apply_raw(&doc, 1, Side::B, "wo");
        let json = to_json(&doc).expect("encode");
        assert_eq!(
            json,
            r#"{"playerOneScores":[4,"-",null],"playerTwoScores":[6,"wo",null]}"#
        );
    }

    #[test]
    fn accepts_legacy_field_names_and_numeric_strings() {
        let json = r#"{"myScore":["7",null],"opponentScore":[5,null]}"#;
        let doc = from_json(json, CompetitionFormat::OneSet);
        assert!(matches!(
            doc,
            Err(WireError::LengthMismatch { expected: 1, found: 2 })
        ));
        let json = r#"{"myScore":["7"],"opponentScore":[5]}"#;
        let doc = from_json(json, CompetitionFormat::OneSet).expect("decode");
        assert_eq!(doc.pair(0), (ScoreValue::Games(7), ScoreValue::Games(5)));
    }

    #[test]
    fn numbers_take_slot_kind() {
        let json = r#"{"playerOneScores":[6,3,12],"playerTwoScores":[4,6,14]}"#;
        let doc = from_json(json, CompetitionFormat::ThreeSetWithMatchTiebreak).expect("decode");
        assert_eq!(doc.pair(0), (ScoreValue::Games(6), ScoreValue::Games(4)));
        assert_eq!(doc.pair(2), (ScoreValue::Points(12), ScoreValue::Points(14)));
    }

    #[test]
    fn rejects_unknown_tokens_and_out_of_range_numbers() {
        let json = r#"{"playerOneScores":["ret"],"playerTwoScores":[null]}"#;
        assert!(matches!(
            from_json(json, CompetitionFormat::OneSet),
            Err(WireError::InvalidScore { set_index: 0, .. })
        ));
        let json = r#"{"playerOneScores":[9],"playerTwoScores":[null]}"#;
        assert!(matches!(
            from_json(json, CompetitionFormat::OneSet),
            Err(WireError::InvalidScore { set_index: 0, .. })
        ));
        assert!(matches!(
            from_json("[]", CompetitionFormat::OneSet),
            Err(WireError::Json(_))
        ));
    }
}
