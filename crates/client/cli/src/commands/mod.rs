//! Command implementations.
//!
//! Each command owns its CLI args and an `execute` that runs against an open
//! [`Registry`](runtime::Registry).

mod accessibility;
mod admin;
mod browse;
mod events;
mod signup;

pub use accessibility::Accessibility;
pub use admin::Admin;
pub use browse::Browse;
pub use events::{Featured, List, Register, Show};
pub use signup::{Subscribe, Volunteer};

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use runtime::Registry;

use crate::render::TerminalTheme;

/// Theme loaded from the stored accessibility preferences.
fn theme(registry: &Registry) -> TerminalTheme {
    registry
        .accessibility(TerminalTheme::default())
        .into_applier()
}

/// Prompt for a line on stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{} ", style(label).yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt user for confirmation
fn confirm(question: &str) -> Result<bool> {
    let input = prompt(&format!("{} [y/N]", question))?.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
