//! Catalog component records.
//!
//! Records are deserialized once from the hardware database and never
//! mutated afterwards.

use super::category::{CategoryTag, FormFactor};
use super::mac::Oui;
use serde::{Deserialize, Serialize};

/// The six component categories every identity requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    Cpu,
    Gpu,
    Motherboard,
    Network,
    Storage,
    Os,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 6] = [
        ComponentCategory::Cpu,
        ComponentCategory::Gpu,
        ComponentCategory::Motherboard,
        ComponentCategory::Network,
        ComponentCategory::Storage,
        ComponentCategory::Os,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "cpu",
            ComponentCategory::Gpu => "gpu",
            ComponentCategory::Motherboard => "motherboard",
            ComponentCategory::Network => "network",
            ComponentCategory::Storage => "storage",
            ComponentCategory::Os => "os",
        }
    }
}

/// Records addressable by a unique id within their collection
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

macro_rules! impl_catalog_entry {
    ($($record:ty),* $(,)?) => {
        $(impl CatalogEntry for $record {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cpu {
    pub id: String,
    pub model: String,
    pub cores: u32,
    pub threads: u32,
    pub vendor_id: String,
    pub mhz: f64,
    pub cache_size: String,
    /// Optional: CPUs without a form factor are compatible with any board
    #[serde(default)]
    pub category: CategoryTag,
}

/// Declared GPU family, used to decide which firmware vendor/device pair is real
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuKind {
    Nvidia,
    Intel,
    Amd,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gpu {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GpuKind,
    pub vendor: String,
    pub device: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Motherboard {
    pub id: String,
    pub product_name: String,
    pub board_name: String,
    pub board_vendor: String,
    pub bios_vendor: String,
    pub bios_version: String,
    pub bios_date: String,
    pub category: CategoryTag,
}

impl Motherboard {
    /// Form factor of the board; catalog validation guarantees it is present
    pub fn form_factor(&self) -> Option<FormFactor> {
        self.category.form_factor()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkInterface {
    pub id: String,
    pub manufacturer: String,
    pub chipset: String,
    pub mac_oui: Oui,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageDevice {
    pub id: String,
    pub model: String,
    pub serial_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperatingSystem {
    pub id: String,
    pub name: String,
    pub version: String,
    pub kernel_release: String,
    pub kernel_version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Battery {
    #[serde(default)]
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub technology: String,
    pub capacity_wh: f64,
    pub voltage_v: f64,
    pub cells: u32,
    #[serde(default)]
    pub category: CategoryTag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    #[serde(default)]
    pub id: String,
    pub size_gb: u32,
    pub size_kb: u64,
    pub speed_mhz: u32,
    #[serde(rename = "type")]
    pub memory_type: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(default)]
    pub category: CategoryTag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub resolution: String,
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub manufacturer: String,
    pub model: String,
    pub diagonal_inches: f64,
    pub panel_type: String,
    #[serde(default)]
    pub category: CategoryTag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Locale {
    pub locale: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Timezone {
    pub timezone: String,
}

impl_catalog_entry!(
    Cpu,
    Gpu,
    Motherboard,
    NetworkInterface,
    StorageDevice,
    OperatingSystem,
);

/// Component ids for the six required categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentIds {
    pub cpu: String,
    pub gpu: String,
    pub motherboard: String,
    pub network: String,
    pub storage: String,
    pub os: String,
}

impl ComponentIds {
    pub fn new(
        cpu: impl Into<String>,
        gpu: impl Into<String>,
        motherboard: impl Into<String>,
        network: impl Into<String>,
        storage: impl Into<String>,
        os: impl Into<String>,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            gpu: gpu.into(),
            motherboard: motherboard.into(),
            network: network.into(),
            storage: storage.into(),
            os: os.into(),
        }
    }

    pub fn get(&self, category: ComponentCategory) -> &str {
        match category {
            ComponentCategory::Cpu => &self.cpu,
            ComponentCategory::Gpu => &self.gpu,
            ComponentCategory::Motherboard => &self.motherboard,
            ComponentCategory::Network => &self.network,
            ComponentCategory::Storage => &self.storage,
            ComponentCategory::Os => &self.os,
        }
    }
}

/// A named, fixed component combination
#[derive(Debug, Clone, Deserialize)]
pub struct PresetProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub components: ComponentIds,
}
