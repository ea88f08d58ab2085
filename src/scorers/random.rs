use rand::Rng;
use rand::seq::SliceRandom;

use crate::cell::{CellOption, EntryMode};
use crate::scorer::{Entry, EntryPrompt, Scorer};
use crate::sheet::MatchSheet;

/// Highest point count the random scorer types in free entry.
const FREE_ENTRY_CEILING: u16 = 40;

/// Picks uniformly among the offered options; types a random count when a
/// cell is in free entry.
pub struct RandomScorer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomScorer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Scorer for RandomScorer<R> {
    fn next_entry(
        &mut self,
        sheet: &MatchSheet,
        prompt: EntryPrompt,
        options: &[CellOption],
    ) -> Entry {
        if sheet.entry_mode(prompt.set_index, prompt.side) == EntryMode::FreeEntry {
            let points = self.rng.gen_range(0..=FREE_ENTRY_CEILING);
            return Entry::FreeText(points.to_string());
        }
        options
            .choose(&mut self.rng)
            .map(|option| Entry::Select(*option))
            .unwrap_or(Entry::Skip)
    }
}
