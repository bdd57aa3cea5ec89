//! Visitor-facing event commands: list, featured, show, register.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use registry_core::{EventId, EventQuery};
use runtime::Registry;

use super::theme;

/// List events, optionally filtered
#[derive(Parser, Debug)]
pub struct List {
    /// Case-insensitive text to find in title or description
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact category (e.g. Festival, Environment, Education)
    #[arg(short, long, default_value = "")]
    category: String,
}

impl List {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let theme = theme(registry);
        let events = registry.search(&EventQuery::new(self.search, self.category));

        if events.is_empty() {
            println!("{}", theme.dim("No events found."));
            return Ok(());
        }

        for event in &events {
            println!("{}", theme.event_line(event));
        }
        Ok(())
    }
}

/// Show the soonest upcoming events
#[derive(Parser, Debug)]
pub struct Featured;

impl Featured {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let theme = theme(registry);
        for event in registry.featured() {
            println!("{}\n", theme.event_card(&event));
        }
        Ok(())
    }
}

/// Show one event in full
#[derive(Parser, Debug)]
pub struct Show {
    #[arg(value_name = "ID")]
    id: EventId,
}

impl Show {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let event = registry
            .events()
            .get(self.id)
            .with_context(|| format!("Event {} not found", self.id))?;

        println!("{}", theme(registry).event_card(&event));
        Ok(())
    }
}

/// Register for an event
#[derive(Parser, Debug)]
pub struct Register {
    #[arg(value_name = "ID")]
    id: EventId,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,
}

impl Register {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let receipt = registry.register(self.id, &self.name, &self.email, &self.phone)?;

        if !receipt.persisted {
            println!(
                "{} Registration could not be saved. Please try again later.",
                style("!").red().bold()
            );
            return Ok(());
        }

        let theme = theme(registry);
        println!(
            "{} Thank you, {}! You're registered for {}.",
            style("✓").green().bold(),
            receipt.registration.name,
            theme.heading(&receipt.event.title)
        );
        println!("  {}", theme.badge(&receipt.capacity));
        Ok(())
    }
}
