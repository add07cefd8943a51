use super::components::{
    Battery, CatalogEntry, ComponentCategory, Cpu, Display, Gpu, Locale, MemoryConfig,
    Motherboard, NetworkInterface, OperatingSystem, PresetProfile, StorageDevice, Timezone,
};
use super::events::FormulationEvent;
use super::label::{token_count, CPU_MODEL_MIN_TOKENS, PRODUCT_NAME_MIN_TOKENS};
use super::strategy::{AppliedStrategy, RandomizationStrategy, DEFAULT_STRATEGY};
use crate::shared::error::FormulationError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Informational statistics shipped with the hardware database
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogMetadata {
    #[serde(default)]
    pub possible_combinations: Option<u64>,
    #[serde(default)]
    pub practical_unique_identities: Option<String>,
}

/// Raw, structurally parsed hardware database.
///
/// A document becomes a [`Catalog`] only through [`Catalog::from_document`],
/// which enforces the invariants identity assembly relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub cpus: Vec<Cpu>,
    pub gpus: Vec<Gpu>,
    pub motherboards: Vec<Motherboard>,
    pub network_interfaces: Vec<NetworkInterface>,
    pub storage_devices: Vec<StorageDevice>,
    pub operating_systems: Vec<OperatingSystem>,
    #[serde(default)]
    pub batteries: Vec<Battery>,
    pub memory_configs: Vec<MemoryConfig>,
    pub displays: Vec<Display>,
    pub locales: Vec<Locale>,
    pub timezones: Vec<Timezone>,
    #[serde(default)]
    pub preset_profiles: Vec<PresetProfile>,
    pub randomization_strategies: BTreeMap<String, RandomizationStrategy>,
    #[serde(default)]
    pub metadata: Option<CatalogMetadata>,
}

/// Immutable, validated component catalog.
///
/// Loaded once per run and shared by reference with the selector and
/// assembler; there is no global instance.
#[derive(Debug, Clone)]
pub struct Catalog {
    document: CatalogDocument,
}

impl Catalog {
    /// Validates a parsed document and wraps it as a catalog
    ///
    /// # Errors
    /// Returns `CatalogValidation` listing every problem found:
    /// - a required collection is empty
    /// - an id appears twice within a collection
    /// - a motherboard category has no (or an ambiguous) laptop/desktop form factor
    /// - a CPU model or product name is too short to derive labels from
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let problems = Self::validate(&document);
        if !problems.is_empty() {
            return Err(FormulationError::CatalogValidation {
                details: problems
                    .iter()
                    .map(|problem| format!("  - {}", problem))
                    .collect::<Vec<_>>()
                    .join("\n"),
            }
            .into());
        }
        Ok(Self { document })
    }

    fn validate(document: &CatalogDocument) -> Vec<String> {
        let mut problems = Vec::new();

        let sizes = [
            ("cpus", document.cpus.len()),
            ("gpus", document.gpus.len()),
            ("motherboards", document.motherboards.len()),
            ("network_interfaces", document.network_interfaces.len()),
            ("storage_devices", document.storage_devices.len()),
            ("operating_systems", document.operating_systems.len()),
            ("memory_configs", document.memory_configs.len()),
            ("displays", document.displays.len()),
            ("locales", document.locales.len()),
            ("timezones", document.timezones.len()),
        ];
        for (name, len) in sizes {
            if len == 0 {
                problems.push(format!("collection '{}' must not be empty", name));
            }
        }

        check_unique_ids("cpus", &document.cpus, &mut problems);
        check_unique_ids("gpus", &document.gpus, &mut problems);
        check_unique_ids("motherboards", &document.motherboards, &mut problems);
        check_unique_ids(
            "network_interfaces",
            &document.network_interfaces,
            &mut problems,
        );
        check_unique_ids("storage_devices", &document.storage_devices, &mut problems);
        check_unique_ids(
            "operating_systems",
            &document.operating_systems,
            &mut problems,
        );

        for motherboard in &document.motherboards {
            if motherboard.form_factor().is_none() {
                problems.push(format!(
                    "motherboard '{}' category '{}' must name exactly one of laptop/desktop",
                    motherboard.id, motherboard.category
                ));
            }
            if token_count(&motherboard.product_name) < PRODUCT_NAME_MIN_TOKENS {
                problems.push(format!(
                    "motherboard '{}' has an empty product_name",
                    motherboard.id
                ));
            }
        }

        for cpu in &document.cpus {
            if token_count(&cpu.model) < CPU_MODEL_MIN_TOKENS {
                problems.push(format!(
                    "cpu '{}' model '{}' needs at least {} words",
                    cpu.id, cpu.model, CPU_MODEL_MIN_TOKENS
                ));
            }
        }

        problems
    }

    pub fn cpus(&self) -> &[Cpu] {
        &self.document.cpus
    }

    pub fn gpus(&self) -> &[Gpu] {
        &self.document.gpus
    }

    pub fn motherboards(&self) -> &[Motherboard] {
        &self.document.motherboards
    }

    pub fn network_interfaces(&self) -> &[NetworkInterface] {
        &self.document.network_interfaces
    }

    pub fn storage_devices(&self) -> &[StorageDevice] {
        &self.document.storage_devices
    }

    pub fn operating_systems(&self) -> &[OperatingSystem] {
        &self.document.operating_systems
    }

    pub fn batteries(&self) -> &[Battery] {
        &self.document.batteries
    }

    pub fn memory_configs(&self) -> &[MemoryConfig] {
        &self.document.memory_configs
    }

    pub fn displays(&self) -> &[Display] {
        &self.document.displays
    }

    pub fn locales(&self) -> &[Locale] {
        &self.document.locales
    }

    pub fn timezones(&self) -> &[Timezone] {
        &self.document.timezones
    }

    pub fn preset_profiles(&self) -> &[PresetProfile] {
        &self.document.preset_profiles
    }

    pub fn strategies(&self) -> &BTreeMap<String, RandomizationStrategy> {
        &self.document.randomization_strategies
    }

    pub fn metadata(&self) -> Option<&CatalogMetadata> {
        self.document.metadata.as_ref()
    }

    pub fn cpu(&self, id: &str) -> Option<&Cpu> {
        find_by_id(&self.document.cpus, id)
    }

    pub fn gpu(&self, id: &str) -> Option<&Gpu> {
        find_by_id(&self.document.gpus, id)
    }

    pub fn motherboard(&self, id: &str) -> Option<&Motherboard> {
        find_by_id(&self.document.motherboards, id)
    }

    pub fn network_interface(&self, id: &str) -> Option<&NetworkInterface> {
        find_by_id(&self.document.network_interfaces, id)
    }

    pub fn storage_device(&self, id: &str) -> Option<&StorageDevice> {
        find_by_id(&self.document.storage_devices, id)
    }

    pub fn operating_system(&self, id: &str) -> Option<&OperatingSystem> {
        find_by_id(&self.document.operating_systems, id)
    }

    pub fn preset(&self, name: &str) -> Option<&PresetProfile> {
        self.document
            .preset_profiles
            .iter()
            .find(|preset| preset.name == name)
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.document
            .preset_profiles
            .iter()
            .map(|preset| preset.name.clone())
            .collect()
    }

    /// Number of entries in a required collection
    pub fn collection_len(&self, category: ComponentCategory) -> usize {
        match category {
            ComponentCategory::Cpu => self.document.cpus.len(),
            ComponentCategory::Gpu => self.document.gpus.len(),
            ComponentCategory::Motherboard => self.document.motherboards.len(),
            ComponentCategory::Network => self.document.network_interfaces.len(),
            ComponentCategory::Storage => self.document.storage_devices.len(),
            ComponentCategory::Os => self.document.operating_systems.len(),
        }
    }

    /// Combination count declared in the metadata, or the product of the
    /// six required collection sizes when the metadata omits it
    pub fn possible_combinations(&self) -> u64 {
        self.metadata()
            .and_then(|metadata| metadata.possible_combinations)
            .unwrap_or_else(|| {
                ComponentCategory::ALL
                    .iter()
                    .map(|category| self.collection_len(*category) as u64)
                    .fold(1u64, u64::saturating_mul)
            })
    }

    /// Looks up a strategy by name, falling back to `moderate` and then to
    /// the built-in defaults. The event is set whenever a fallback was used.
    pub fn resolve_strategy(&self, name: &str) -> (AppliedStrategy, Option<FormulationEvent>) {
        if let Some(settings) = self.document.randomization_strategies.get(name) {
            return (AppliedStrategy::new(name, settings.clone()), None);
        }

        let settings = self
            .document
            .randomization_strategies
            .get(DEFAULT_STRATEGY)
            .cloned()
            .unwrap_or_default();
        let event = FormulationEvent::StrategyFallback {
            requested: name.to_string(),
            applied: DEFAULT_STRATEGY.to_string(),
        };
        (AppliedStrategy::new(DEFAULT_STRATEGY, settings), Some(event))
    }
}

fn find_by_id<'a, T: CatalogEntry>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

fn check_unique_ids<T: CatalogEntry>(collection: &str, records: &[T], problems: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            problems.push(format!(
                "duplicate id '{}' in collection '{}'",
                record.id(),
                collection
            ));
        }
    }
}
