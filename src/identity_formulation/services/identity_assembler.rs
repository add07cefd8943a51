use super::component_selector::ResolvedComponents;
use super::identifier_synthesizer::IdentifierSynthesizer;
use crate::identity_formulation::domain::label::{
    board_label, hostname_cpu_label, profile_cpu_label,
};
use crate::identity_formulation::domain::{
    AppliedStrategy, BatterySection, BootSection, Cpu, CpuSection, DisplaySection,
    EnvironmentSection, Gpu, GpuKind, GpuSection, HardwareSection, IdentityMetadata,
    IdentityRecord, MacAddress, MemorySection, Motherboard, NetworkInterfaces, NetworkSection,
    OsSection, StorageSection,
};
use chrono::{DateTime, Utc};

/// Identity record layout version
pub const RECORD_VERSION: &str = "2.0";

/// Recorded in `_metadata.generated_by`
pub const GENERATOR_NAME: &str = "identity-formulator";

/// Hostnames are cut to this many characters
pub const MAX_HOSTNAME_LEN: usize = 32;

const PRODUCT_SERIAL_PREFIX: &str = "SN-";
const BOARD_SERIAL_PREFIX: &str = "MB-";
const CHASSIS_SERIAL_PREFIX: &str = "CH-";

const NVIDIA_PLACEHOLDER: (&str, &str) = ("0x10de", "0x1c8d");
const INTEL_PLACEHOLDER: (&str, &str) = ("0x8086", "0x3e9b");

/// IdentityAssembler service combining resolved components and freshly
/// synthesized identifiers into an [`IdentityRecord`]
///
/// Performs no I/O. The only inputs besides the components and strategy are
/// the secure random draws made through [`IdentifierSynthesizer`] and the
/// supplied generation timestamp.
pub struct IdentityAssembler;

impl IdentityAssembler {
    pub fn assemble(
        components: &ResolvedComponents<'_>,
        strategy: &AppliedStrategy,
        generated_at: DateTime<Utc>,
    ) -> IdentityRecord {
        let required = &components.required;
        let board = required.motherboard;
        let cpu = required.cpu;
        let entropy = strategy.settings.serial_entropy;

        let mac = IdentifierSynthesizer::synthesize_mac(
            &required.network.mac_oui,
            strategy.settings.mac_randomize,
        );
        let oui = required.network.mac_oui.to_string();

        let hardware = HardwareSection {
            machine_id: IdentifierSynthesizer::synthesize_uuid_token(),
            product_uuid: IdentifierSynthesizer::synthesize_dashed_token(),
            product_serial: IdentifierSynthesizer::synthesize_serial(
                &Self::product_serial_prefix(board),
                entropy,
            ),
            board_serial: IdentifierSynthesizer::synthesize_serial(BOARD_SERIAL_PREFIX, entropy),
            chassis_serial: IdentifierSynthesizer::synthesize_serial(
                CHASSIS_SERIAL_PREFIX,
                entropy,
            ),
            product_name: board.product_name.clone(),
            board_name: board.board_name.clone(),
            board_vendor: board.board_vendor.clone(),
            bios_vendor: board.bios_vendor.clone(),
            bios_version: board.bios_version.clone(),
            bios_date: board.bios_date.clone(),
        };

        let storage = StorageSection {
            sda_serial: IdentifierSynthesizer::synthesize_serial(
                &required.storage.serial_prefix,
                entropy,
            ),
            nvme_serial: IdentifierSynthesizer::synthesize_serial(
                &required.storage.serial_prefix,
                entropy,
            ),
            sda_model: required.storage.model.clone(),
            nvme_model: required.storage.model.clone(),
        };

        IdentityRecord {
            version: RECORD_VERSION.to_string(),
            identity_profile: Self::profile_name(
                board,
                cpu,
                &IdentifierSynthesizer::synthesize_short_suffix(),
            ),
            hostname: Self::hostname(board, cpu, &IdentifierSynthesizer::synthesize_short_suffix()),
            id_suffix: Self::id_suffix(&mac),
            hardware,
            cpu: CpuSection::from(cpu),
            network: NetworkSection {
                interfaces: NetworkInterfaces {
                    eth0: oui.clone(),
                    wlan0: oui,
                },
            },
            storage,
            os: OsSection::from(required.os),
            gpu: Self::gpu_section(required.gpu),
            boot: BootSection {
                boot_id: IdentifierSynthesizer::synthesize_dashed_token(),
                random_uuid: IdentifierSynthesizer::synthesize_dashed_token(),
            },
            environment: EnvironmentSection::new(components.locale, components.timezone),
            battery: BatterySection::from(components.battery),
            memory: MemorySection::from(components.memory),
            display: DisplaySection::from(components.display),
            metadata: IdentityMetadata {
                generated_by: GENERATOR_NAME.to_string(),
                generated_at: generated_at.to_rfc3339(),
                strategy: strategy.name.clone(),
                components_used: required.ids(),
            },
        }
    }

    /// `SN-` plus the first four characters of the product name, uppercased
    pub fn product_serial_prefix(board: &Motherboard) -> String {
        let head: String = board.product_name.chars().take(4).collect();
        format!("{}{}", PRODUCT_SERIAL_PREFIX, head.to_uppercase())
    }

    /// `<board>-<cpu>-<suffix>`, lowercased and cut to [`MAX_HOSTNAME_LEN`]
    pub fn hostname(board: &Motherboard, cpu: &Cpu, suffix: &str) -> String {
        let parts = [
            board_label(&board.product_name)
                .unwrap_or_default()
                .to_lowercase(),
            hostname_cpu_label(&cpu.model).unwrap_or_default(),
            suffix.to_string(),
        ];
        parts.join("-").chars().take(MAX_HOSTNAME_LEN).collect()
    }

    /// `<Board>_<cpu token>_<suffix>`
    pub fn profile_name(board: &Motherboard, cpu: &Cpu, suffix: &str) -> String {
        format!(
            "{}_{}_{}",
            board_label(&board.product_name).unwrap_or_default(),
            profile_cpu_label(&cpu.model).unwrap_or_default(),
            suffix
        )
    }

    /// First two hex characters of the MAC's last three octets
    pub fn id_suffix(mac: &MacAddress) -> String {
        format!("{:02x}", mac.octets()[3])
    }

    /// Always emits both vendor pairs; the one matching the GPU's declared
    /// type carries its real codes, the other a placeholder
    pub fn gpu_section(gpu: &Gpu) -> GpuSection {
        let (nvidia_vendor, nvidia_device) = match gpu.kind {
            GpuKind::Nvidia => (gpu.vendor.clone(), gpu.device.clone()),
            _ => (
                NVIDIA_PLACEHOLDER.0.to_string(),
                NVIDIA_PLACEHOLDER.1.to_string(),
            ),
        };
        let (intel_vendor, intel_device) = match gpu.kind {
            GpuKind::Intel => (gpu.vendor.clone(), gpu.device.clone()),
            _ => (
                INTEL_PLACEHOLDER.0.to_string(),
                INTEL_PLACEHOLDER.1.to_string(),
            ),
        };

        GpuSection {
            nvidia_vendor,
            nvidia_device,
            intel_vendor,
            intel_device,
        }
    }
}
