use tracing::debug;

use crate::cell::{CellOption, EntryMode};
use crate::document::Side;
use crate::sheet::MatchSheet;

/// Cell a scorer is asked to fill.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntryPrompt {
    pub set_index: usize,
    pub side: Side,
}

/// What a scorer does with a prompted cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    /// Pick one of the offered options.
    Select(CellOption),
    /// Type into a cell that is in free entry.
    FreeText(String),
    /// Raw text as typed into the cell.
    Raw(String),
    /// Leave the cell as it is.
    Skip,
}

/// Source of score input, such as a person at a terminal or a generator.
pub trait Scorer {
    fn next_entry(
        &mut self,
        sheet: &MatchSheet,
        prompt: EntryPrompt,
        options: &[CellOption],
    ) -> Entry;
}

/// Counters of one [`fill_sheet`] run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FillReport {
    pub prompts: usize,
    pub applied: usize,
}

/// Prompts per cell before the cell is given up on.
pub const MAX_PROMPTS_PER_CELL: usize = 8;

/// Applies one scorer entry to the sheet. Returns whether the document changed.
pub fn apply(sheet: &mut MatchSheet, prompt: EntryPrompt, entry: &Entry) -> bool {
    let EntryPrompt { set_index, side } = prompt;
    match entry {
        Entry::Select(option) => sheet.select(set_index, side, *option),
        Entry::FreeText(text) => {
            let changed = sheet.type_free(set_index, side, text);
            sheet.blur(set_index, side);
            changed
        }
        Entry::Raw(raw) => sheet.enter(set_index, side, raw),
        Entry::Skip => false,
    }
}

/// Walks the sheet set by set, asking `scorer` for every empty cell, and
/// stops once a side has won the match.
pub fn fill_sheet(sheet: &mut MatchSheet, scorer: &mut dyn Scorer) -> FillReport {
    let mut report = FillReport::default();
    let sets_to_win = sheet.format().sets_to_win();
    for set_index in 0..sheet.set_count() {
        if sheet.set_tally().iter().any(|&won| won >= sets_to_win) {
            break;
        }
        for side in Side::BOTH {
            let mut attempts = 0;
            while sheet.value(set_index, side).is_empty() && attempts < MAX_PROMPTS_PER_CELL {
                attempts += 1;
                let prompt = EntryPrompt { set_index, side };
                let options = sheet.options(set_index, side);
                let entry = scorer.next_entry(sheet, prompt, &options);
                report.prompts += 1;
                if entry == Entry::Skip {
                    break;
                }
                if apply(sheet, prompt, &entry) {
                    report.applied += 1;
                } else if sheet.entry_mode(set_index, side) == EntryMode::Selecting {
                    debug!(set_index, ?side, ?entry, "entry left the sheet unchanged");
                }
            }
        }
    }
    report
}
