use crate::application::dto::{FormulationRequest, FormulationResponse, SelectionMode};
use crate::application::read_models::{ComponentListing, ComponentListingBuilder};
use crate::identity_formulation::domain::{Catalog, ComponentIds, FormulationEvent};
use crate::identity_formulation::services::{ComponentSelector, IdentityAssembler, Selection};
use crate::ports::inbound::IdentityFormulationPort;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;
use rand::Rng;
use std::path::Path;

/// FormulateIdentityUseCase - Core use case for identity formulation
///
/// Owns the immutable catalog for the lifetime of the use case and
/// orchestrates selection and assembly. Every fallback taken along the way
/// is both returned in the response and reported as a warning.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct FormulateIdentityUseCase<PR> {
    catalog: Catalog,
    progress_reporter: PR,
}

impl<PR> FormulateIdentityUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a use case over an already loaded catalog
    pub fn new(catalog: Catalog, progress_reporter: PR) -> Self {
        Self {
            catalog,
            progress_reporter,
        }
    }

    /// Loads the catalog through `catalog_reader` and creates the use case
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read or fails validation
    pub fn load<CR: CatalogReader>(
        catalog_reader: &CR,
        database_path: &Path,
        progress_reporter: PR,
    ) -> Result<Self> {
        progress_reporter.report(&format!(
            "📖 Loading hardware database from: {}",
            database_path.display()
        ));

        let catalog = catalog_reader.read_catalog(database_path)?;

        progress_reporter.report(&format!(
            "✅ Loaded {} CPU(s), {} motherboard(s), {} preset(s)",
            catalog.cpus().len(),
            catalog.motherboards().len(),
            catalog.preset_profiles().len()
        ));

        Ok(Self::new(catalog, progress_reporter))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes a formulation request with the thread-local RNG for
    /// component choices
    pub fn execute(&self, request: FormulationRequest) -> Result<FormulationResponse> {
        self.execute_with_rng(request, &mut rand::thread_rng())
    }

    /// Executes a formulation request with a caller-supplied RNG
    ///
    /// The RNG only drives component choices; identifiers are always drawn
    /// from the operating system's CSPRNG.
    pub fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        request: FormulationRequest,
        rng: &mut R,
    ) -> Result<FormulationResponse> {
        self.report_start(&request);

        let selector = ComponentSelector::new(&self.catalog);
        let Selection {
            components,
            events: selection_events,
        } = match &request.mode {
            SelectionMode::Preset(name) => selector.select_from_preset(name, rng)?,
            SelectionMode::Random => selector.select_random(rng)?,
            SelectionMode::Components(ids) => selector.select_from_ids(ids, rng)?,
        };

        let (strategy, strategy_event) = self.catalog.resolve_strategy(&request.strategy);

        let mut events = Vec::with_capacity(selection_events.len() + 1);
        events.extend(strategy_event);
        events.extend(selection_events);
        self.report_events(&events);

        let identity = IdentityAssembler::assemble(&components, &strategy, Utc::now());

        Ok(FormulationResponse::new(identity, events))
    }

    fn report_start(&self, request: &FormulationRequest) {
        let headline = match &request.mode {
            SelectionMode::Preset(name) => {
                format!("🎯 Formulating identity from preset: {}", name)
            }
            SelectionMode::Random => "🎲 Formulating random identity".to_string(),
            SelectionMode::Components(_) => "🔧 Formulating custom identity".to_string(),
        };
        self.progress_reporter.report(&headline);
        self.progress_reporter
            .report(&format!("   Strategy: {}", request.strategy));
    }

    fn report_events(&self, events: &[FormulationEvent]) {
        for event in events {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", event));
        }
    }
}

impl<PR> IdentityFormulationPort for FormulateIdentityUseCase<PR>
where
    PR: ProgressReporter,
{
    fn list_components(&self) -> Result<ComponentListing> {
        Ok(ComponentListingBuilder::build(&self.catalog))
    }

    fn formulate_from_preset(
        &self,
        preset_name: &str,
        strategy: Option<&str>,
    ) -> Result<FormulationResponse> {
        self.execute(FormulationRequest::preset(preset_name, strategy))
    }

    fn formulate_random(&self, strategy: Option<&str>) -> Result<FormulationResponse> {
        self.execute(FormulationRequest::random(strategy))
    }

    fn formulate_from_components(
        &self,
        components: &ComponentIds,
        strategy: Option<&str>,
    ) -> Result<FormulationResponse> {
        self.execute(FormulationRequest::components(components.clone(), strategy))
    }
}
