use proptest::prelude::*;

use tennis_score::{
    CompetitionFormat, ScoreDocument, ScoreEngine, ScoreValue, Side, is_winner, legal_options, wire,
};

fn format_strategy() -> impl Strategy<Value = CompetitionFormat> {
    prop::sample::select(CompetitionFormat::ALL.to_vec())
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::BOTH.to_vec())
}

/// Raw inputs a scorer might type: mostly scores, sometimes noise.
fn raw_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u16..=25).prop_map(|v| v.to_string()),
        1 => Just(String::from("wo")),
        1 => Just(String::from("-")),
        1 => "[a-z0-9 .-]{0,4}",
    ]
}

/// Documents reachable by entering a sequence of raw inputs.
fn reachable_document() -> impl Strategy<Value = (CompetitionFormat, ScoreDocument)> {
    format_strategy().prop_flat_map(|format| {
        let entries = prop::collection::vec(
            (0..format.set_count(), side_strategy(), raw_strategy()),
            0..16,
        );
        entries.prop_map(move |entries| {
            let engine = ScoreEngine::new(format);
            let doc = entries
                .iter()
                .fold(engine.empty_document(), |doc, (set_index, side, raw)| {
                    engine.apply_raw(&doc, *set_index, *side, raw)
                });
            (format, doc)
        })
    })
}

proptest! {
    #[test]
    fn wire_round_trip_is_lossless((format, doc) in reachable_document()) {
        let encoded = wire::encode(&doc);
        let decoded = wire::decode(&encoded, format).expect("decode");
        prop_assert_eq!(&decoded, &doc);
        let json = wire::to_json(&doc).expect("json");
        prop_assert_eq!(wire::from_json(&json, format).expect("decode json"), doc);
    }

    #[test]
    fn reachable_documents_keep_walkovers_mirrored((_format, doc) in reachable_document()) {
        prop_assert!(doc.walkovers_mirrored());
    }

    #[test]
    fn tiebreak_deuce_options_are_symmetric(v in 11u16..=997, side in side_strategy()) {
        let engine = ScoreEngine::new(CompetitionFormat::MatchTiebreakOnly);
        let doc = engine.apply_entry(&engine.empty_document(), 0, side, ScoreValue::Points(v));
        let options = engine.legal_options(&doc, 0, side.opposite());
        prop_assert_eq!(options, vec![ScoreValue::Points(v - 2), ScoreValue::Points(v + 2)]);
    }

    #[test]
    fn derived_counterpart_is_always_legal((format, doc) in reachable_document()) {
        for set_index in 0..format.set_count() {
            let (a, b) = doc.pair(set_index);
            if a.numeric().is_some() && b.numeric().is_some() {
                prop_assert!(legal_options(format, set_index, b, a).contains(&b));
                prop_assert!(legal_options(format, set_index, a, b).contains(&a));
            }
        }
    }

    #[test]
    fn numeric_win_indicator_is_antisymmetric(a in 0u16..=999, b in 0u16..=999) {
        let format = CompetitionFormat::MatchTiebreakOnly;
        let (pa, pb) = (ScoreValue::Points(a), ScoreValue::Points(b));
        let a_wins = is_winner(format, 0, pa, pb);
        let b_wins = is_winner(format, 0, pb, pa);
        if a == b {
            prop_assert!(!a_wins && !b_wins);
        } else {
            prop_assert!(a_wins ^ b_wins);
        }
    }
}
