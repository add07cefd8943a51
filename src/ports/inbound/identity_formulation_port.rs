use crate::application::dto::FormulationResponse;
use crate::application::read_models::ComponentListing;
use crate::identity_formulation::domain::ComponentIds;
use crate::shared::Result;

/// IdentityFormulationPort - Inbound port for the identity formulation engine
///
/// This port is the public API of the application core. Every formulation
/// operation accepts an optional strategy name; `None` selects the default
/// (`moderate`) strategy.
pub trait IdentityFormulationPort {
    /// Lists every catalog component grouped by category, plus the preset
    /// names and catalog statistics
    fn list_components(&self) -> Result<ComponentListing>;

    /// Formulates an identity from a named preset profile
    ///
    /// # Errors
    /// Returns an error if the preset does not exist or references ids
    /// missing from the catalog
    fn formulate_from_preset(
        &self,
        preset_name: &str,
        strategy: Option<&str>,
    ) -> Result<FormulationResponse>;

    /// Formulates an identity from a random compatible component draw,
    /// falling back to the `workstation_laptop` preset when no compatible
    /// draw is found
    fn formulate_random(&self, strategy: Option<&str>) -> Result<FormulationResponse>;

    /// Formulates an identity from six explicit component ids
    ///
    /// No CPU/motherboard compatibility check is applied to explicit ids.
    ///
    /// # Errors
    /// Returns an error naming every id that is missing from the catalog
    fn formulate_from_components(
        &self,
        components: &ComponentIds,
        strategy: Option<&str>,
    ) -> Result<FormulationResponse>;
}
