//! Terminal presentation of events and capacity badges.

use chrono::NaiveDate;
use console::{Style, StyledObject, style};
use registry_core::{AccessibilityPrefs, CapacityStatus, Event, Severity};
use runtime::ThemeApplier;

const BASE_WIDTH: usize = 72;

/// Long date, e.g. `15 April 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Terminal rendition of the accessibility preferences.
///
/// High contrast drops colors in favour of bold and reverse video. Larger text
/// sizes shorten the wrap width so lines stay readable when the terminal
/// font is scaled up by the same factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalTheme {
    prefs: AccessibilityPrefs,
}

impl ThemeApplier for TerminalTheme {
    fn apply(&mut self, prefs: &AccessibilityPrefs) {
        self.prefs = *prefs;
    }
}

impl TerminalTheme {
    pub fn prefs(&self) -> AccessibilityPrefs {
        self.prefs
    }

    pub fn wrap_width(&self) -> usize {
        let size = usize::from(self.prefs.size.max(100));
        (BASE_WIDTH * 100 / size).max(24)
    }

    pub fn heading<D>(&self, text: D) -> StyledObject<D> {
        if self.prefs.contrast {
            style(text).bold().underlined()
        } else {
            style(text).bold().cyan()
        }
    }

    pub fn dim<D>(&self, text: D) -> StyledObject<D> {
        if self.prefs.contrast {
            style(text)
        } else {
            style(text).dim()
        }
    }

    pub fn badge(&self, status: &CapacityStatus) -> StyledObject<String> {
        let label = format!("[{}]", status.label);
        if self.prefs.contrast {
            let s = Style::new().bold();
            return match status.severity {
                Severity::SoldOut | Severity::Low => s.reverse().apply_to(label),
                _ => s.apply_to(label),
            };
        }

        match status.severity {
            Severity::Ample => style(label).green(),
            Severity::Medium => style(label).yellow(),
            Severity::Low => style(label).red(),
            Severity::SoldOut => style(label).red().bold(),
        }
    }

    /// One-line summary for lists.
    pub fn event_line(&self, event: &Event) -> String {
        format!(
            "{:>3}  {}  {}  {}",
            event.id.0,
            self.heading(&event.title),
            self.dim(format_date(event.date)),
            self.badge(&event.capacity_status()),
        )
    }

    /// Full card with description.
    pub fn event_card(&self, event: &Event) -> String {
        let mut lines = vec![
            format!("{}  {}", self.heading(&event.title), self.dim(event.category_label())),
            format!(
                "{} at {}, {}",
                format_date(event.date),
                event.time_label(),
                event.location
            ),
        ];
        lines.extend(wrap(&event.description, self.wrap_width()));
        lines.push(format!(
            "{} registered  {}",
            event.registered_count(),
            self.badge(&event.capacity_status())
        ));
        lines.push(format!("{}", self.dim(event.image_or_default())));
        lines.join("\n")
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_long_form() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert_eq!(format_date(date), "15 April 2025");

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date), "1 March 2025");
    }

    #[test]
    fn larger_text_narrows_wrap() {
        let mut theme = TerminalTheme::default();
        assert_eq!(theme.wrap_width(), 72);

        theme.apply(&AccessibilityPrefs { size: 200, contrast: false });
        assert_eq!(theme.wrap_width(), 36);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
