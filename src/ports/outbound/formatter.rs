use crate::application::read_models::ComponentListing;
use crate::identity_formulation::domain::IdentityRecord;
use crate::shared::Result;

/// IdentityFormatter port for rendering a formulated identity
///
/// This port abstracts the persisted representation of the identity record.
pub trait IdentityFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format_identity(&self, identity: &IdentityRecord) -> Result<String>;
}

/// ListingFormatter port for rendering the catalog listing
pub trait ListingFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format_listing(&self, listing: &ComponentListing) -> Result<String>;
}
