use tennis_score::{
    CompetitionFormat, ScoreDocument, ScoreEngine, ScoreValue, Side, SlotKind, apply_entry,
    is_winner, legal_options,
};

fn games(values: &[u8]) -> Vec<ScoreValue> {
    values.iter().map(|&v| ScoreValue::Games(v)).collect()
}

fn open_options(kind: SlotKind) -> Vec<ScoreValue> {
    let top = match kind {
        SlotKind::Standard => 7,
        SlotKind::MatchTiebreak => 20,
    };
    std::iter::once(ScoreValue::Retired)
        .chain((0..=top).map(|v| ScoreValue::numeric_for(kind, v)))
        .collect()
}

#[test]
fn lost_sets_only_pair_with_six() {
    for format in [CompetitionFormat::OneSet, CompetitionFormat::FiveSet] {
        for lost in 0..=4 {
            let options = legal_options(format, 0, ScoreValue::Empty, ScoreValue::Games(lost));
            assert_eq!(options, games(&[6]));
            assert!(!options.contains(&ScoreValue::Retired));
        }
    }
}

#[test]
fn open_cells_offer_walkover_and_every_count() {
    for format in CompetitionFormat::ALL {
        for set_index in 0..format.set_count() {
            let options = legal_options(format, set_index, ScoreValue::Empty, ScoreValue::Empty);
            assert_eq!(options, open_options(format.slot_kind(set_index)), "{format} set {set_index}");
            assert!(!options.contains(&ScoreValue::OpponentOfRetired));
        }
    }
}

#[test]
fn walkover_always_mirrors_counterpart() {
    let priors = [
        ScoreValue::Empty,
        ScoreValue::Games(6),
        ScoreValue::Games(7),
        ScoreValue::Retired,
        ScoreValue::OpponentOfRetired,
    ];
    for format in CompetitionFormat::ALL {
        let engine = ScoreEngine::new(format);
        for set_index in 0..format.set_count() {
            for prior in priors {
                let kind = format.slot_kind(set_index);
                let prior = match prior {
                    ScoreValue::Games(v) => ScoreValue::numeric_for(kind, u16::from(v)),
                    other => other,
                };
                let mut doc = engine.empty_document();
                if !prior.is_empty() {
                    doc = engine.apply_entry(&doc, set_index, Side::B, prior);
                }
                let doc = engine.apply_entry(&doc, set_index, Side::A, ScoreValue::Retired);
                assert_eq!(doc.get(Side::A, set_index), ScoreValue::Retired);
                assert_eq!(
                    doc.get(Side::B, set_index),
                    ScoreValue::OpponentOfRetired,
                    "{format} set {set_index} prior {prior:?}"
                );
                assert_eq!(doc.get(Side::B, set_index).to_string(), "-");
            }
        }
    }
}

#[test]
fn six_leaves_counterpart_open_in_three_set_match() {
    let format = CompetitionFormat::ThreeSet;
    let doc = ScoreDocument::empty(format);
    let doc = apply_entry(&doc, format, 0, Side::A, ScoreValue::Games(6));
    assert_eq!(doc.get(Side::A, 0), ScoreValue::Games(6));
    assert_eq!(doc.get(Side::B, 0), ScoreValue::Empty);
    assert_eq!(
        legal_options(format, 0, doc.get(Side::B, 0), doc.get(Side::A, 0)),
        games(&[0, 1, 2, 3, 4, 7])
    );
}

#[test]
fn tiebreak_only_eight_derives_ten() {
    let engine = ScoreEngine::new(CompetitionFormat::MatchTiebreakOnly);
    let doc = engine.apply_raw(&engine.empty_document(), 0, Side::A, "8");
    assert_eq!(doc.pair(0), (ScoreValue::Points(8), ScoreValue::Points(10)));
    assert!(engine.is_winner(&doc, 0, Side::B));
    assert!(!engine.is_winner(&doc, 0, Side::A));
}

#[test]
fn deciding_tiebreak_uses_point_rules() {
    let engine = ScoreEngine::new(CompetitionFormat::ThreeSetWithMatchTiebreak);
    let mut doc = engine.empty_document();
    doc = engine.apply_raw(&doc, 0, Side::A, "6");
    doc = engine.apply_raw(&doc, 0, Side::B, "4");
    doc = engine.apply_raw(&doc, 1, Side::B, "2");
    doc = engine.apply_raw(&doc, 2, Side::A, "9");
    assert_eq!(doc.pair(1), (ScoreValue::Games(6), ScoreValue::Games(2)));
    assert_eq!(doc.pair(2), (ScoreValue::Points(9), ScoreValue::Points(11)));
    assert_eq!(engine.set_tally(&doc), [2, 1]);
}

#[test]
fn deuce_adjustment_keeps_deliberate_entry() {
    let engine = ScoreEngine::new(CompetitionFormat::MatchTiebreakOnly);
    let mut doc = engine.empty_document();
    doc = engine.apply_raw(&doc, 0, Side::A, "16");
    assert_eq!(doc.get(Side::B, 0), ScoreValue::Points(18));
    doc = engine.apply_raw(&doc, 0, Side::B, "14");
    assert_eq!(doc.pair(0), (ScoreValue::Points(16), ScoreValue::Points(14)));
    doc = engine.apply_raw(&doc, 0, Side::A, "12");
    assert_eq!(doc.get(Side::B, 0), ScoreValue::Points(14));
}

#[test]
fn garbage_input_is_ignored() {
    let engine = ScoreEngine::new(CompetitionFormat::FiveSet);
    let doc = engine.apply_raw(&engine.empty_document(), 3, Side::A, "3");
    for raw in ["", "  ", "six", "6.5", "-1", "8", "ret"] {
        assert_eq!(engine.apply_raw(&doc, 3, Side::B, raw), doc, "raw {raw:?}");
    }
}

#[test]
fn win_indicator_is_antisymmetric_for_different_counts() {
    let format = CompetitionFormat::ThreeSet;
    for a in 0..=7u8 {
        for b in 0..=7u8 {
            let (a_val, b_val) = (ScoreValue::Games(a), ScoreValue::Games(b));
            let a_wins = is_winner(format, 0, a_val, b_val);
            let b_wins = is_winner(format, 0, b_val, a_val);
            if a == b {
                assert!(!a_wins && !b_wins);
            } else {
                assert!(a_wins ^ b_wins);
            }
        }
    }
}

/// The empty-counterpart case shows as won for display only; it is not a
/// scoring decision and is kept as a separate behaviour.
#[test]
fn numeric_against_empty_displays_as_won() {
    let format = CompetitionFormat::ThreeSet;
    assert!(is_winner(format, 1, ScoreValue::Games(6), ScoreValue::Empty));
    assert!(is_winner(format, 1, ScoreValue::Games(0), ScoreValue::Empty));
    assert!(!is_winner(format, 1, ScoreValue::Empty, ScoreValue::Games(6)));
    assert!(!is_winner(format, 1, ScoreValue::OpponentOfRetired, ScoreValue::Empty));
}

#[test]
fn walkover_winner_is_side_that_did_not_retire() {
    let engine = ScoreEngine::new(CompetitionFormat::OneSet);
    let doc = engine.apply_raw(&engine.empty_document(), 0, Side::A, "wo");
    assert_eq!(doc.get(Side::B, 0).to_string(), "-");
    assert!(engine.is_winner(&doc, 0, Side::B));
    assert!(!engine.is_winner(&doc, 0, Side::A));
    assert_eq!(engine.set_tally(&doc), [0, 1]);
}
