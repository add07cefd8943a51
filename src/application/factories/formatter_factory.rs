use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{IdentityFormatter, ListingFormatter};

/// Factory for creating identity and listing formatters
///
/// Belongs in the application layer as it selects infrastructure adapters
/// based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Identity records are persisted as JSON only
    pub fn create_identity_formatter() -> Box<dyn IdentityFormatter> {
        Box::new(JsonFormatter::new())
    }

    /// Creates a listing formatter; `colored` only affects text output
    ///
    /// # Examples
    /// ```
    /// use identity_formulator::application::dto::OutputFormat;
    /// use identity_formulator::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create_listing_formatter(OutputFormat::Text, false);
    /// ```
    pub fn create_listing_formatter(
        format: OutputFormat,
        colored: bool,
    ) -> Box<dyn ListingFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ComponentListingBuilder;
    use crate::identity_formulation::domain::catalog::test_fixtures::sample_catalog;

    #[test]
    fn test_create_text_listing_formatter() {
        let listing = ComponentListingBuilder::build(&sample_catalog());
        let formatter = FormatterFactory::create_listing_formatter(OutputFormat::Text, false);
        let output = formatter.format_listing(&listing).unwrap();
        assert!(output.contains("AVAILABLE HARDWARE COMPONENTS"));
    }

    #[test]
    fn test_create_json_listing_formatter() {
        let listing = ComponentListingBuilder::build(&sample_catalog());
        let formatter = FormatterFactory::create_listing_formatter(OutputFormat::Json, true);
        let output = formatter.format_listing(&listing).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
        assert!(!output.contains('\u{1b}'));
    }
}
