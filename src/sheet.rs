use tracing::debug;

use crate::cell::{CellInput, CellOption, EntryMode, cell_options};
use crate::document::{CompetitorLabels, ScoreDocument, Side};
use crate::engine::ScoreEngine;
use crate::error::WireError;
use crate::format::{CompetitionFormat, SlotKind};
use crate::value::ScoreValue;
use crate::wire::{self, WireScores};

/// Settings a score sheet is opened with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetConfig {
    pub format: CompetitionFormat,
    pub labels: CompetitorLabels,
}

impl SheetConfig {
    pub fn new(format: CompetitionFormat) -> Self {
        Self {
            format,
            labels: CompetitorLabels::default(),
        }
    }
}

pub struct MatchSheetBuilder {
    config: SheetConfig,
    document: Option<ScoreDocument>,
}

impl MatchSheetBuilder {
    pub fn new(format: CompetitionFormat) -> Self {
        Self {
            config: SheetConfig::new(format),
            document: None,
        }
    }

    pub fn with_labels(mut self, side_a: impl Into<String>, side_b: impl Into<String>) -> Self {
        self.config.labels = CompetitorLabels::new(Some(side_a.into()), Some(side_b.into()));
        self
    }

    pub fn with_label(mut self, side: Side, label: impl Into<String>) -> Self {
        match side {
            Side::A => self.config.labels.side_a = Some(label.into()),
            Side::B => self.config.labels.side_b = Some(label.into()),
        }
        self
    }

    /// Start from previously saved scores instead of a blank sheet.
    pub fn with_scores(mut self, scores: &WireScores) -> Result<Self, WireError> {
        self.document = Some(wire::decode(scores, self.config.format)?);
        Ok(self)
    }

    pub fn build(self) -> MatchSheet {
        let mut sheet = MatchSheet::new(self.config);
        if let Some(document) = self.document {
            sheet.document = document;
        }
        sheet
    }
}

/// Score entry form of one match: the committed document plus the input
/// state of every cell.
#[derive(Clone, Debug)]
pub struct MatchSheet {
    engine: ScoreEngine,
    labels: CompetitorLabels,
    document: ScoreDocument,
    cells: Vec<[CellInput; 2]>,
}

impl MatchSheet {
    pub fn builder(format: CompetitionFormat) -> MatchSheetBuilder {
        MatchSheetBuilder::new(format)
    }

    pub fn new(config: SheetConfig) -> Self {
        let engine = ScoreEngine::new(config.format);
        Self {
            engine,
            labels: config.labels,
            document: engine.empty_document(),
            cells: vec![Default::default(); config.format.set_count()],
        }
    }

    pub fn format(&self) -> CompetitionFormat {
        self.engine.format()
    }

    pub fn engine(&self) -> ScoreEngine {
        self.engine
    }

    pub fn labels(&self) -> &CompetitorLabels {
        &self.labels
    }

    pub fn document(&self) -> &ScoreDocument {
        &self.document
    }

    pub fn set_count(&self) -> usize {
        self.document.set_count()
    }

    pub fn value(&self, set_index: usize, side: Side) -> ScoreValue {
        self.document.get(side, set_index)
    }

    pub fn entry_mode(&self, set_index: usize, side: Side) -> EntryMode {
        self.cells
            .get(set_index)
            .map(|pair| pair[side.index()].mode())
            .unwrap_or_default()
    }

    /// Options to show for a cell, including the free-entry escape where it applies.
    pub fn options(&self, set_index: usize, side: Side) -> Vec<CellOption> {
        if !self.check_index(set_index) {
            return Vec::new();
        }
        cell_options(
            self.format(),
            set_index,
            self.value(set_index, side),
            self.value(set_index, side.opposite()),
        )
    }

    /// Applies raw input to a cell. Returns whether the document changed.
    pub fn enter(&mut self, set_index: usize, side: Side, raw: &str) -> bool {
        if !self.check_index(set_index) {
            return false;
        }
        let next = self.engine.apply_raw(&self.document, set_index, side, raw);
        self.commit(next)
    }

    /// Picks an option from the cell's list.
    pub fn select(&mut self, set_index: usize, side: Side, option: CellOption) -> bool {
        if !self.check_index(set_index) {
            return false;
        }
        // Free entry only exists on match tiebreak cells.
        if option == CellOption::Custom
            && self.format().slot_kind(set_index) != SlotKind::MatchTiebreak
        {
            debug!(set_index, ?side, "free entry refused on a standard set cell");
            return false;
        }
        match self.cells[set_index][side.index()].select(option) {
            Some(value) => self.commit_value(set_index, side, value),
            None => false,
        }
    }

    /// Updates the free-entry text of a cell.
    pub fn type_free(&mut self, set_index: usize, side: Side, text: &str) -> bool {
        if !self.check_index(set_index) {
            return false;
        }
        match self.cells[set_index][side.index()].type_text(text) {
            Some(value) => self.commit_value(set_index, side, value),
            None => false,
        }
    }

    pub fn blur(&mut self, set_index: usize, side: Side) {
        if self.check_index(set_index) {
            self.cells[set_index][side.index()].blur();
        }
    }

    /// Win indicators of both cells of a set, side A first.
    pub fn winners(&self, set_index: usize) -> [bool; 2] {
        if !self.check_index(set_index) {
            return [false; 2];
        }
        Side::BOTH.map(|side| self.engine.is_winner(&self.document, set_index, side))
    }

    pub fn set_tally(&self) -> [usize; 2] {
        self.engine.set_tally(&self.document)
    }

    /// Clears every cell and returns every cell to option selection.
    pub fn reset(&mut self) {
        self.document.reset();
        self.cells.iter_mut().flatten().for_each(CellInput::reset);
        debug!(format = %self.format(), "score sheet reset");
    }

    pub fn to_wire(&self) -> WireScores {
        wire::encode(&self.document)
    }

    /// Replaces the committed scores with saved ones; cell input state is reset.
    pub fn load_wire(&mut self, scores: &WireScores) -> Result<(), WireError> {
        let document = wire::decode(scores, self.format())?;
        self.document = document;
        self.cells.iter_mut().flatten().for_each(CellInput::reset);
        Ok(())
    }

    fn commit_value(&mut self, set_index: usize, side: Side, value: ScoreValue) -> bool {
        let next = self.engine.apply_entry(&self.document, set_index, side, value);
        self.commit(next)
    }

    fn commit(&mut self, next: ScoreDocument) -> bool {
        if next == self.document {
            return false;
        }
        self.document = next;
        true
    }

    fn check_index(&self, set_index: usize) -> bool {
        let in_range = self.format().contains(set_index);
        debug_assert!(
            in_range,
            "set index {set_index} out of range for {}",
            self.format()
        );
        in_range
    }
}
