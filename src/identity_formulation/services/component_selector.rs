use super::compatibility_resolver::CompatibilityResolver;
use crate::identity_formulation::domain::{
    Battery, Catalog, ComponentIds, Cpu, Display, FormFactor, FormulationEvent, Gpu, Locale,
    MemoryConfig, MemoryPool, Motherboard, NetworkInterface, OperatingSystem, StorageDevice,
    Timezone,
};
use crate::shared::error::{FormulationError, MissingComponent};
use crate::shared::Result;
use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum random draws before falling back to [`FALLBACK_PRESET`]
pub const MAX_RANDOM_ATTEMPTS: usize = 50;

/// Known-good preset used when random search finds no compatible pair
pub const FALLBACK_PRESET: &str = "workstation_laptop";

/// The six components every identity requires
#[derive(Debug, Clone, Copy)]
pub struct RequiredComponents<'a> {
    pub cpu: &'a Cpu,
    pub gpu: &'a Gpu,
    pub motherboard: &'a Motherboard,
    pub network: &'a NetworkInterface,
    pub storage: &'a StorageDevice,
    pub os: &'a OperatingSystem,
}

impl RequiredComponents<'_> {
    pub fn ids(&self) -> ComponentIds {
        ComponentIds::new(
            &self.cpu.id,
            &self.gpu.id,
            &self.motherboard.id,
            &self.network.id,
            &self.storage.id,
            &self.os.id,
        )
    }
}

/// Required components plus the environment and accessory components
/// chosen to fit the motherboard
#[derive(Debug, Clone, Copy)]
pub struct ResolvedComponents<'a> {
    pub required: RequiredComponents<'a>,
    pub form_factor: FormFactor,
    pub battery: Option<&'a Battery>,
    pub memory: &'a MemoryConfig,
    pub display: &'a Display,
    pub locale: &'a Locale,
    pub timezone: &'a Timezone,
}

impl ResolvedComponents<'_> {
    pub fn is_laptop(&self) -> bool {
        self.form_factor == FormFactor::Laptop
    }
}

/// Outcome of a selection: the components plus any fallbacks taken on the way
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub components: ResolvedComponents<'a>,
    pub events: Vec<FormulationEvent>,
}

/// ComponentSelector service resolving a complete component set from a catalog
///
/// Three entry modes (explicit ids, preset, random) converge on
/// [`ComponentSelector::complete`]. Cosmetic picks use the caller's
/// non-cryptographic RNG so tests can seed it.
pub struct ComponentSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> ComponentSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Looks up all six ids; every miss is reported in a single error
    pub fn resolve_ids(&self, ids: &ComponentIds) -> Result<RequiredComponents<'a>> {
        let catalog = self.catalog;
        let cpu = catalog.cpu(&ids.cpu);
        let gpu = catalog.gpu(&ids.gpu);
        let motherboard = catalog.motherboard(&ids.motherboard);
        let network = catalog.network_interface(&ids.network);
        let storage = catalog.storage_device(&ids.storage);
        let os = catalog.operating_system(&ids.os);

        match (cpu, gpu, motherboard, network, storage, os) {
            (Some(cpu), Some(gpu), Some(motherboard), Some(network), Some(storage), Some(os)) => {
                Ok(RequiredComponents {
                    cpu,
                    gpu,
                    motherboard,
                    network,
                    storage,
                    os,
                })
            }
            _ => {
                let found = [
                    ("cpu", cpu.is_some(), &ids.cpu),
                    ("gpu", gpu.is_some(), &ids.gpu),
                    ("motherboard", motherboard.is_some(), &ids.motherboard),
                    ("network", network.is_some(), &ids.network),
                    ("storage", storage.is_some(), &ids.storage),
                    ("os", os.is_some(), &ids.os),
                ];
                let missing = found
                    .into_iter()
                    .filter(|(_, present, _)| !present)
                    .map(|(category, _, id)| MissingComponent {
                        category,
                        id: id.clone(),
                    })
                    .collect();
                Err(FormulationError::UnknownComponentId { missing }.into())
            }
        }
    }

    /// Resolves the preset's component map; an unknown name lists the valid ones
    pub fn resolve_preset(&self, name: &str) -> Result<RequiredComponents<'a>> {
        let preset = self
            .catalog
            .preset(name)
            .ok_or_else(|| FormulationError::UnknownPreset {
                name: name.to_string(),
                available: self.catalog.preset_names(),
            })?;
        self.resolve_ids(&preset.components)
    }

    /// Draws up to [`MAX_RANDOM_ATTEMPTS`] uniform combinations and returns
    /// the first with a compatible CPU/motherboard pair
    pub fn draw_compatible<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<RequiredComponents<'a>> {
        (0..MAX_RANDOM_ATTEMPTS).find_map(|_| {
            let candidate = self.draw_once(rng)?;
            CompatibilityResolver::is_compatible(Some(candidate.cpu), Some(candidate.motherboard))
                .then_some(candidate)
        })
    }

    fn draw_once<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<RequiredComponents<'a>> {
        let catalog = self.catalog;
        Some(RequiredComponents {
            cpu: catalog.cpus().choose(rng)?,
            gpu: catalog.gpus().choose(rng)?,
            motherboard: catalog.motherboards().choose(rng)?,
            network: catalog.network_interfaces().choose(rng)?,
            storage: catalog.storage_devices().choose(rng)?,
            os: catalog.operating_systems().choose(rng)?,
        })
    }

    pub fn select_from_ids<R: Rng + ?Sized>(
        &self,
        ids: &ComponentIds,
        rng: &mut R,
    ) -> Result<Selection<'a>> {
        let required = self.resolve_ids(ids)?;
        self.complete(required, rng)
    }

    pub fn select_from_preset<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<Selection<'a>> {
        let required = self.resolve_preset(name)?;
        self.complete(required, rng)
    }

    /// Random selection; exhausting the attempt budget is recovered by
    /// resolving [`FALLBACK_PRESET`] and recording a `RandomSearchExhausted` event
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Selection<'a>> {
        match self.draw_compatible(rng) {
            Some(required) => self.complete(required, rng),
            None => {
                let required = self.resolve_preset(FALLBACK_PRESET)?;
                let mut selection = self.complete(required, rng)?;
                selection.events.insert(
                    0,
                    FormulationEvent::RandomSearchExhausted {
                        attempts: MAX_RANDOM_ATTEMPTS,
                        fallback_preset: FALLBACK_PRESET.to_string(),
                    },
                );
                Ok(selection)
            }
        }
    }

    /// Chooses battery, memory, display, locale and timezone for a resolved
    /// six-tuple, widening empty pools and recording each widening
    pub fn complete<R: Rng + ?Sized>(
        &self,
        required: RequiredComponents<'a>,
        rng: &mut R,
    ) -> Result<Selection<'a>> {
        let catalog = self.catalog;
        let board = required.motherboard;
        let form_factor = board.form_factor().ok_or_else(|| {
            FormulationError::CatalogValidation {
                details: format!(
                    "  - motherboard '{}' category '{}' must name exactly one of laptop/desktop",
                    board.id, board.category
                ),
            }
        })?;
        let mut events = Vec::new();

        let battery = if form_factor == FormFactor::Laptop {
            let matching: Vec<&Battery> = catalog
                .batteries()
                .iter()
                .filter(|battery| battery.category.matches(&board.category))
                .collect();
            match matching.choose(rng) {
                Some(battery) => Some(*battery),
                None => {
                    let widened = catalog.batteries().choose(rng);
                    events.push(match widened {
                        Some(_) => FormulationEvent::BatteryCategoryWidened {
                            category: board.category.to_string(),
                        },
                        None => FormulationEvent::NoBatteryAvailable,
                    });
                    widened
                }
            }
        } else {
            None
        };

        let pool = MemoryPool::for_tier(board.category.tier());
        let memory_candidates: Vec<&MemoryConfig> = catalog
            .memory_configs()
            .iter()
            .filter(|memory| pool.admits(&memory.category))
            .collect();
        let memory = match memory_candidates.choose(rng) {
            Some(memory) => *memory,
            None => {
                events.push(FormulationEvent::MemoryPoolWidened { pool });
                choose_required(catalog.memory_configs(), "memory_configs", rng)?
            }
        };

        let display_candidates: Vec<&Display> = catalog
            .displays()
            .iter()
            .filter(|display| display.category.form_factor() == Some(form_factor))
            .collect();
        let display = match display_candidates.choose(rng) {
            Some(display) => *display,
            None => {
                events.push(FormulationEvent::DisplayPoolWidened { form_factor });
                choose_required(catalog.displays(), "displays", rng)?
            }
        };

        let locale = choose_required(catalog.locales(), "locales", rng)?;
        let timezone = choose_required(catalog.timezones(), "timezones", rng)?;

        Ok(Selection {
            components: ResolvedComponents {
                required,
                form_factor,
                battery,
                memory,
                display,
                locale,
                timezone,
            },
            events,
        })
    }
}

/// Uniform pick from a collection that catalog validation keeps non-empty
fn choose_required<'a, T, R: Rng + ?Sized>(
    records: &'a [T],
    collection: &str,
    rng: &mut R,
) -> Result<&'a T> {
    records.choose(rng).ok_or_else(|| {
        FormulationError::CatalogValidation {
            details: format!("  - collection '{}' must not be empty", collection),
        }
        .into()
    })
}
