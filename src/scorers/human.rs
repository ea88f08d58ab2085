use std::io::{self, Write};

use crate::cell::{CellOption, EntryMode};
use crate::scorer::{Entry, EntryPrompt, Scorer};
use crate::sheet::MatchSheet;
use crate::visualize::{describe_entry, render_sheet};

/// Interactive scorer that reads entries from standard input.
pub struct HumanScorer {
    name: String,
}

impl HumanScorer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanScorer {
    fn default() -> Self {
        Self::new("Scorer")
    }
}

impl Scorer for HumanScorer {
    fn next_entry(
        &mut self,
        sheet: &MatchSheet,
        prompt: EntryPrompt,
        options: &[CellOption],
    ) -> Entry {
        let free_entry = sheet.entry_mode(prompt.set_index, prompt.side) == EntryMode::FreeEntry;
        loop {
            println!(
                "\n=== {}: set {} for {} ===",
                self.name,
                prompt.set_index + 1,
                sheet.labels().display(prompt.side)
            );
            println!("{}", render_sheet(sheet));
            if free_entry {
                println!("Type the point count (digits only), or leave empty to go back.");
            } else {
                println!("Available options:");
                for (index, option) in options.iter().enumerate() {
                    println!("  [{index}] {option}");
                }
                println!("Type a score ('6', 'wo'), '#<index>' to pick an option, 's' to skip,");
                println!("'help' or 'q' to quit.");
            }
            print!("Entry: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting at user's request.");
                std::process::exit(0);
            }
            if free_entry {
                return Entry::FreeText(trimmed.to_string());
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("'#2' picks option [2]; anything else is entered as typed.");
                println!("Entries that break the scoring rules are ignored.");
                continue;
            }
            if trimmed.eq_ignore_ascii_case("s") || trimmed.eq_ignore_ascii_case("skip") {
                return Entry::Skip;
            }
            if let Some(index) = trimmed.strip_prefix('#').and_then(|i| i.parse::<usize>().ok()) {
                if let Some(option) = options.get(index) {
                    let entry = Entry::Select(*option);
                    println!("You selected: {}", describe_entry(sheet, prompt, &entry));
                    return entry;
                }
                println!("Index out of range. Please choose a valid option.");
                continue;
            }
            return Entry::Raw(trimmed.to_string());
        }
    }
}
