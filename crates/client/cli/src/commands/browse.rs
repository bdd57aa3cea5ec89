//! Interactive search driven by the debouncer.

use anyhow::Result;
use clap::Parser;
use registry_core::Event;
use runtime::Registry;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::theme;
use crate::render::TerminalTheme;

/// Interactive search with live results
#[derive(Parser, Debug)]
pub struct Browse {
    /// Initial category filter
    #[arg(short, long, default_value = "")]
    category: String,
}

#[derive(Debug, PartialEq, Eq)]
enum BrowseInput {
    Search(String),
    Category(String),
    Quit,
}

impl BrowseInput {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == ":q" || trimmed == ":quit" {
            return Self::Quit;
        }
        match trimmed.strip_prefix(":c") {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => {
                Self::Category(rest.trim().to_string())
            }
            _ => Self::Search(line.to_string()),
        }
    }
}

impl Browse {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let theme = theme(registry);
        let mut debouncer = registry.search_debouncer();
        let mut results = debouncer.subscribe();

        println!(
            "{}",
            theme.dim("Type to search. ':c <category>' filters by category, ':c' clears it, ':q' quits.")
        );
        print_results(&theme, &debouncer.latest());

        let printer = tokio::spawn(async move {
            while results.changed().await.is_ok() {
                let events = results.borrow_and_update().clone();
                print_results(&theme, &events);
            }
        });

        if !self.category.is_empty() {
            debouncer.on_category_change(self.category);
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match BrowseInput::parse(&line) {
                BrowseInput::Quit => break,
                BrowseInput::Category(category) => debouncer.on_category_change(category),
                BrowseInput::Search(term) => debouncer.on_search_input(term),
            }
        }

        drop(debouncer);
        let _ = printer.await;
        Ok(())
    }
}

fn print_results(theme: &TerminalTheme, events: &[Event]) {
    println!();
    if events.is_empty() {
        println!("{}", theme.dim("No events found."));
    }
    for event in events {
        println!("{}", theme.event_line(event));
    }
}
