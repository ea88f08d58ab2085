//! Tennis match score rules: legal set scores, counterpart derivation and
//! per-set win indicators for every common competition format.

pub mod cell;
pub mod document;
pub mod engine;
pub mod error;
pub mod format;
pub mod scorer;
pub mod scorers;
pub mod sheet;
pub mod value;
pub mod visualize;
pub mod wire;

pub use crate::cell::{CellInput, CellOption, EntryMode, cell_options};
pub use crate::document::{CompetitorLabels, ScoreDocument, Side};
pub use crate::engine::{ScoreEngine, apply_entry, apply_raw, is_winner, legal_options, set_tally};
pub use crate::error::{FormatError, ParseScoreError, ScorerError, WireError};
pub use crate::format::{CompetitionFormat, SlotKind};
pub use crate::scorer::{Entry, EntryPrompt, FillReport, Scorer, fill_sheet};
pub use crate::scorers::{HumanScorer, RandomScorer, create_scorer_from_spec};
pub use crate::sheet::{MatchSheet, MatchSheetBuilder, SheetConfig};
pub use crate::value::ScoreValue;
pub use crate::visualize::{VisualOptions, describe_entry, render_sheet};
pub use crate::wire::{WireScores, WireToken};
