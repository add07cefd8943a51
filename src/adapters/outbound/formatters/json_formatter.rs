use crate::application::read_models::ComponentListing;
use crate::identity_formulation::domain::IdentityRecord;
use crate::ports::outbound::{IdentityFormatter, ListingFormatter};
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter producing pretty-printed JSON
///
/// Implements both formatter ports. The identity layout is the persisted
/// `identity_config.json` document; the listing layout mirrors the
/// `ComponentListing` read model.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityFormatter for JsonFormatter {
    fn format_identity(&self, identity: &IdentityRecord) -> Result<String> {
        serde_json::to_string_pretty(identity).context("Failed to serialize identity record")
    }
}

impl ListingFormatter for JsonFormatter {
    fn format_listing(&self, listing: &ComponentListing) -> Result<String> {
        serde_json::to_string_pretty(listing).context("Failed to serialize component listing")
    }
}
