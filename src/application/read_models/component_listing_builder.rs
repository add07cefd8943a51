//! Builder for constructing ComponentListing from the catalog

use super::component_listing::{
    CatalogStatistics, ComponentListing, ComponentSection, ComponentView, PresetView,
};
use crate::identity_formulation::domain::{Catalog, ComponentCategory};

/// Builder transforming a validated [`Catalog`] into a [`ComponentListing`]
pub struct ComponentListingBuilder;

impl ComponentListingBuilder {
    pub fn build(catalog: &Catalog) -> ComponentListing {
        ComponentListing {
            sections: ComponentCategory::ALL
                .iter()
                .map(|&category| Self::build_section(catalog, category))
                .collect(),
            presets: catalog
                .preset_profiles()
                .iter()
                .map(|preset| PresetView {
                    name: preset.name.clone(),
                    description: preset.description.clone(),
                })
                .collect(),
            statistics: CatalogStatistics {
                possible_combinations: catalog.possible_combinations(),
                practical_unique_identities: catalog
                    .metadata()
                    .and_then(|metadata| metadata.practical_unique_identities.clone()),
            },
        }
    }

    fn build_section(catalog: &Catalog, category: ComponentCategory) -> ComponentSection {
        let entries = match category {
            ComponentCategory::Cpu => catalog
                .cpus()
                .iter()
                .map(|cpu| {
                    Self::view(
                        &cpu.id,
                        format!("{} ({}C/{}T)", cpu.model, cpu.cores, cpu.threads),
                    )
                })
                .collect(),
            ComponentCategory::Gpu => catalog
                .gpus()
                .iter()
                .map(|gpu| Self::view(&gpu.id, gpu.name.clone()))
                .collect(),
            ComponentCategory::Motherboard => catalog
                .motherboards()
                .iter()
                .map(|board| Self::view(&board.id, board.product_name.clone()))
                .collect(),
            ComponentCategory::Network => catalog
                .network_interfaces()
                .iter()
                .map(|net| Self::view(&net.id, format!("{} {}", net.manufacturer, net.chipset)))
                .collect(),
            ComponentCategory::Storage => catalog
                .storage_devices()
                .iter()
                .map(|storage| Self::view(&storage.id, storage.model.clone()))
                .collect(),
            ComponentCategory::Os => catalog
                .operating_systems()
                .iter()
                .map(|os| Self::view(&os.id, format!("{} {}", os.name, os.version)))
                .collect(),
        };

        ComponentSection {
            category,
            title: Self::title(category),
            entries,
        }
    }

    fn view(id: &str, summary: String) -> ComponentView {
        ComponentView {
            id: id.to_string(),
            summary,
        }
    }

    fn title(category: ComponentCategory) -> &'static str {
        match category {
            ComponentCategory::Cpu => "CPUs",
            ComponentCategory::Gpu => "GPUs",
            ComponentCategory::Motherboard => "Motherboards",
            ComponentCategory::Network => "Network",
            ComponentCategory::Storage => "Storage",
            ComponentCategory::Os => "Operating Systems",
        }
    }
}
