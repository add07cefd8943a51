//! The formulated identity record.
//!
//! A plain value: built once by the assembler, serialized by a formatter,
//! never mutated in between. Field order follows the persisted JSON layout.

use super::components::{
    Battery, ComponentIds, Cpu, Display, Locale, MemoryConfig, OperatingSystem, Timezone,
};
use serde::{Deserialize, Serialize};

/// Placeholder used in the battery section of machines without a battery
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub version: String,
    pub identity_profile: String,
    pub hostname: String,
    #[serde(rename = "_id_suffix")]
    pub id_suffix: String,
    pub hardware: HardwareSection,
    pub cpu: CpuSection,
    pub network: NetworkSection,
    pub storage: StorageSection,
    pub os: OsSection,
    pub gpu: GpuSection,
    pub boot: BootSection,
    pub environment: EnvironmentSection,
    pub battery: BatterySection,
    pub memory: MemorySection,
    pub display: DisplaySection,
    #[serde(rename = "_metadata")]
    pub metadata: IdentityMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSection {
    pub machine_id: String,
    pub product_uuid: String,
    pub product_serial: String,
    pub board_serial: String,
    pub chassis_serial: String,
    pub product_name: String,
    pub board_name: String,
    pub board_vendor: String,
    pub bios_vendor: String,
    pub bios_version: String,
    pub bios_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSection {
    pub model: String,
    pub cores: u32,
    pub threads: u32,
    pub vendor_id: String,
    pub mhz: f64,
    pub cache_size: String,
}

impl From<&Cpu> for CpuSection {
    fn from(cpu: &Cpu) -> Self {
        Self {
            model: cpu.model.clone(),
            cores: cpu.cores,
            threads: cpu.threads,
            vendor_id: cpu.vendor_id.clone(),
            mhz: cpu.mhz,
            cache_size: cpu.cache_size.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSection {
    pub interfaces: NetworkInterfaces,
}

/// Both interfaces carry the network component's OUI; see DESIGN.md
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaces {
    pub eth0: String,
    pub wlan0: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    pub sda_serial: String,
    pub nvme_serial: String,
    pub sda_model: String,
    pub nvme_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsSection {
    pub name: String,
    pub version: String,
    pub kernel_release: String,
    pub kernel_version: String,
}

impl From<&OperatingSystem> for OsSection {
    fn from(os: &OperatingSystem) -> Self {
        Self {
            name: os.name.clone(),
            version: os.version.clone(),
            kernel_release: os.kernel_release.clone(),
            kernel_version: os.kernel_version.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuSection {
    pub nvidia_vendor: String,
    pub nvidia_device: String,
    pub intel_vendor: String,
    pub intel_device: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootSection {
    pub boot_id: String,
    pub random_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSection {
    pub locale: String,
    pub language: String,
    pub timezone: String,
    pub display: String,
}

impl EnvironmentSection {
    pub const DEFAULT_DISPLAY: &'static str = ":0";

    pub fn new(locale: &Locale, timezone: &Timezone) -> Self {
        Self {
            locale: locale.locale.clone(),
            language: locale.language.clone(),
            timezone: timezone.timezone.clone(),
            display: Self::DEFAULT_DISPLAY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySection {
    pub has_battery: bool,
    pub manufacturer: String,
    pub model: String,
    pub technology: String,
    pub capacity_wh: f64,
    pub voltage_v: f64,
    pub cells: u32,
}

impl BatterySection {
    /// Sentinel section for machines without a battery
    pub fn not_applicable() -> Self {
        Self {
            has_battery: false,
            manufacturer: NOT_APPLICABLE.to_string(),
            model: NOT_APPLICABLE.to_string(),
            technology: NOT_APPLICABLE.to_string(),
            capacity_wh: 0.0,
            voltage_v: 0.0,
            cells: 0,
        }
    }
}

impl From<Option<&Battery>> for BatterySection {
    fn from(battery: Option<&Battery>) -> Self {
        match battery {
            Some(battery) => Self {
                has_battery: true,
                manufacturer: battery.manufacturer.clone(),
                model: battery.model.clone(),
                technology: battery.technology.clone(),
                capacity_wh: battery.capacity_wh,
                voltage_v: battery.voltage_v,
                cells: battery.cells,
            },
            None => Self::not_applicable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySection {
    pub size_gb: u32,
    pub size_kb: u64,
    pub speed_mhz: u32,
    #[serde(rename = "type")]
    pub memory_type: String,
    pub manufacturer: String,
    pub model: String,
}

impl From<&MemoryConfig> for MemorySection {
    fn from(memory: &MemoryConfig) -> Self {
        Self {
            size_gb: memory.size_gb,
            size_kb: memory.size_kb,
            speed_mhz: memory.speed_mhz,
            memory_type: memory.memory_type.clone(),
            manufacturer: memory.manufacturer.clone(),
            model: memory.model.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub name: String,
    pub resolution: String,
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub manufacturer: String,
    pub model: String,
    pub diagonal_inches: f64,
    pub panel_type: String,
}

impl From<&Display> for DisplaySection {
    fn from(display: &Display) -> Self {
        Self {
            name: display.name.clone(),
            resolution: display.resolution.clone(),
            width: display.width,
            height: display.height,
            refresh_rate: display.refresh_rate,
            manufacturer: display.manufacturer.clone(),
            model: display.model.clone(),
            diagonal_inches: display.diagonal_inches,
            panel_type: display.panel_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityMetadata {
    pub generated_by: String,
    pub generated_at: String,
    pub strategy: String,
    pub components_used: ComponentIds,
}
