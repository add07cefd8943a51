use crate::application::read_models::ComponentListing;
use crate::ports::outbound::ListingFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// TextFormatter adapter rendering the catalog listing for a terminal
///
/// Headings are colored only when `colored` is set, so output piped to a
/// file stays plain.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn id(&self, id: &str) -> String {
        if self.colored {
            id.green().to_string()
        } else {
            id.to_string()
        }
    }

    /// Groups digits in threes: 1234567 -> 1,234,567
    fn group_digits(value: u64) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
    }
}

impl ListingFormatter for TextFormatter {
    fn format_listing(&self, listing: &ComponentListing) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", self.heading("AVAILABLE HARDWARE COMPONENTS"))?;
        writeln!(out, "{}", rule)?;

        for section in &listing.sections {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                self.heading(&format!("{} ({}):", section.title, section.entries.len()))
            )?;
            for entry in &section.entries {
                writeln!(out, "  • {}: {}", self.id(&entry.id), entry.summary)?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.heading(&format!("Preset Profiles ({}):", listing.presets.len()))
        )?;
        for preset in &listing.presets {
            writeln!(out, "  • {}: {}", self.id(&preset.name), preset.description)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.heading("Statistics:"))?;
        writeln!(
            out,
            "  • Total unique combinations: {}",
            Self::group_digits(listing.statistics.possible_combinations)
        )?;
        if let Some(practical) = &listing.statistics.practical_unique_identities {
            writeln!(out, "  • With randomization: {}", practical)?;
        }
        writeln!(out, "{}", rule)?;

        Ok(out)
    }
}
