use anyhow::Result;
use clap::Parser;
use registry_core::{AccessibilityPrefs, SizeStep};
use runtime::Registry;

use crate::render::TerminalTheme;

/// Text size and contrast preferences
#[derive(Parser, Debug)]
pub enum Accessibility {
    /// Show the current preferences
    Show,

    /// Step up to the next text size
    Larger,

    /// Step down to the previous text size
    Smaller,

    /// Toggle high contrast
    Contrast,
}

impl Accessibility {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let mut service = registry.accessibility(TerminalTheme::default());

        match self {
            Accessibility::Show => {}
            Accessibility::Larger => {
                service.step_text_size(SizeStep::Larger);
            }
            Accessibility::Smaller => {
                service.step_text_size(SizeStep::Smaller);
            }
            Accessibility::Contrast => {
                service.toggle_contrast();
            }
        }

        let theme = service.into_applier();
        print_prefs(&theme, theme.prefs());
        Ok(())
    }
}

fn print_prefs(theme: &TerminalTheme, prefs: AccessibilityPrefs) {
    println!("{} {}%", theme.heading("Text size:"), prefs.size);
    println!(
        "{} {}",
        theme.heading("High contrast:"),
        if prefs.contrast { "on" } else { "off" }
    );
}
