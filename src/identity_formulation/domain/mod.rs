pub mod catalog;
pub mod category;
pub mod components;
pub mod events;
pub mod identity;
pub mod label;
pub mod mac;
pub mod strategy;

pub use catalog::{Catalog, CatalogDocument, CatalogMetadata};
pub use category::{CategoryTag, FormFactor, MemoryPool, Tier};
pub use components::{
    Battery, CatalogEntry, ComponentCategory, ComponentIds, Cpu, Display, Gpu, GpuKind, Locale,
    MemoryConfig, Motherboard, NetworkInterface, OperatingSystem, PresetProfile, StorageDevice,
    Timezone,
};
pub use events::FormulationEvent;
pub use identity::{
    BatterySection, BootSection, CpuSection, DisplaySection, EnvironmentSection, GpuSection,
    HardwareSection, IdentityMetadata, IdentityRecord, MemorySection, NetworkInterfaces,
    NetworkSection, OsSection, StorageSection,
};
pub use mac::{MacAddress, Oui};
pub use strategy::{
    AppliedStrategy, MacRandomization, RandomizationStrategy, SerialEntropy, DEFAULT_STRATEGY,
};
