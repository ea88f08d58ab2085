use std::fmt::Write;

use crate::cell::{CellOption, EntryMode};
use crate::document::Side;
use crate::format::SlotKind;
use crate::scorer::{Entry, EntryPrompt};
use crate::sheet::MatchSheet;

const LABEL_WIDTH: usize = 16;
const CELL_WIDTH: usize = 7;

/// Customize scoreboard rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub mark_winners: bool,
    pub show_tally: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            mark_winners: true,
            show_tally: true,
        }
    }
}

pub fn render_sheet(sheet: &MatchSheet) -> String {
    render_sheet_with_options(sheet, VisualOptions::default())
}

pub fn render_sheet_with_options(sheet: &MatchSheet, options: VisualOptions) -> String {
    let mut out = String::new();
    let format = sheet.format();
    let sets = format.set_count();
    let plural = if sets == 1 { "" } else { "s" };
    let _ = writeln!(out, "Format: {format} ({sets} set{plural})");
    let mut header = format!("{:LABEL_WIDTH$}", "");
    for set_index in 0..sheet.set_count() {
        let title = if format.slot_kind(set_index) == SlotKind::MatchTiebreak {
            String::from("TB")
        } else {
            format!("Set {}", set_index + 1)
        };
        let _ = write!(header, "{title:>CELL_WIDTH$}");
    }
    let _ = writeln!(out, "{}", header.trim_end());
    for side in Side::BOTH {
        let mut row = format!("{:LABEL_WIDTH$}", truncate(&sheet.labels().display(side)));
        for set_index in 0..sheet.set_count() {
            let cell = match sheet.entry_mode(set_index, side) {
                EntryMode::FreeEntry if sheet.value(set_index, side).is_empty() => {
                    String::from("...")
                }
                _ => {
                    let value = sheet.value(set_index, side);
                    let text = if value.is_empty() {
                        String::from(".")
                    } else {
                        value.to_string()
                    };
                    let won = sheet.winners(set_index)[side.index()];
                    if options.mark_winners && won {
                        format!("{text}*")
                    } else {
                        text
                    }
                }
            };
            let _ = write!(row, "{cell:>CELL_WIDTH$}");
        }
        let _ = writeln!(out, "{}", row.trim_end());
    }
    if options.show_tally {
        let [a, b] = sheet.set_tally();
        let _ = writeln!(out, "Sets: {a}-{b}");
    }
    out
}

pub fn describe_entry(sheet: &MatchSheet, prompt: EntryPrompt, entry: &Entry) -> String {
    let target = format!(
        "set {} for {}",
        prompt.set_index + 1,
        sheet.labels().display(prompt.side)
    );
    match entry {
        Entry::Select(CellOption::Value(value)) => format!("Enter {value} in {target}"),
        Entry::Select(CellOption::Custom) => format!("Type a custom score in {target}"),
        Entry::FreeText(text) => format!("Type '{text}' in {target}"),
        Entry::Raw(raw) => format!("Enter '{raw}' in {target}"),
        Entry::Skip => format!("Skip {target}"),
    }
}

fn truncate(label: &str) -> String {
    label.chars().take(LABEL_WIDTH - 1).collect()
}
