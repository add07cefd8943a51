/// Integration tests for the application layer
mod test_utilities;

use identity_formulator::identity_formulation::domain::{CatalogDocument, ComponentCategory};
use identity_formulator::prelude::*;
use std::path::Path;
use test_utilities::fixture_database_path;
use test_utilities::mocks::*;

fn fixture_use_case() -> (
    FormulateIdentityUseCase<MockProgressReporter>,
    MockProgressReporter,
) {
    let reporter = MockProgressReporter::new();
    let use_case = FormulateIdentityUseCase::load(
        &MockCatalogReader::fixture(),
        Path::new("hardware_database.yml"),
        reporter.clone(),
    )
    .unwrap();
    (use_case, reporter)
}

fn fixture_document() -> CatalogDocument {
    let content = std::fs::read_to_string(fixture_database_path()).unwrap();
    serde_yaml_ng::from_str(&content).unwrap()
}

#[test]
fn test_load_fixture_from_disk() {
    let reporter = MockProgressReporter::new();
    let use_case = FormulateIdentityUseCase::load(
        &FileSystemReader::new(),
        &fixture_database_path(),
        reporter.clone(),
    )
    .unwrap();

    assert_eq!(use_case.catalog().cpus().len(), 5);
    assert_eq!(use_case.catalog().preset_profiles().len(), 4);

    let messages = reporter.get_messages();
    assert!(messages[0].starts_with("📖 Loading hardware database from:"));
    assert_eq!(
        messages[1],
        "✅ Loaded 5 CPU(s), 4 motherboard(s), 4 preset(s)"
    );
}

#[test]
fn test_load_failure_propagates() {
    let result = FormulateIdentityUseCase::load(
        &MockCatalogReader::with_failure(),
        Path::new("hardware_database.yml"),
        MockProgressReporter::new(),
    );

    assert!(result.is_err());
    assert!(result
        .err()
        .unwrap()
        .to_string()
        .contains("Mock catalog read failure"));
}

#[test]
fn test_every_preset_uses_its_declared_components() {
    let (use_case, _) = fixture_use_case();

    for preset in use_case.catalog().preset_profiles() {
        let response = use_case
            .formulate_from_preset(&preset.name, Some("moderate"))
            .unwrap();
        assert_eq!(
            response.identity.metadata.components_used, preset.components,
            "preset {} resolved to different components",
            preset.name
        );
        assert!(response.events.is_empty());
    }
}

#[test]
fn test_office_desktop_identity_details() {
    let (use_case, _) = fixture_use_case();
    let ids = ComponentIds::new("cpu_1", "gpu_1", "mb_1", "net_1", "stor_1", "os_1");

    let response = use_case
        .formulate_from_components(&ids, Some("moderate"))
        .unwrap();
    let identity = &response.identity;

    assert_eq!(identity.version, "2.0");
    assert!(identity.hardware.product_serial.starts_with("SN-PRO "));
    assert_eq!(identity.hardware.product_serial.len(), "SN-PRO ".len() + 6);
    assert!(identity.hardware.board_serial.starts_with("MB-"));
    assert!(identity.hardware.chassis_serial.starts_with("CH-"));
    assert_eq!(identity.hardware.product_name, "Pro B460M");

    assert!(identity.hostname.starts_with("pro-i5-10400-"));
    assert!(identity.hostname.len() <= 32);
    assert!(identity.identity_profile.starts_with("Pro_i5-10400_"));

    assert_eq!(identity.cpu.model, "Intel Core i5-10400");
    assert_eq!(identity.cpu.cores, 6);
    assert_eq!(identity.gpu.nvidia_device, "0x21c4");
    assert_eq!(identity.gpu.intel_vendor, "0x8086");

    assert!(!identity.battery.has_battery);
    assert_eq!(identity.battery.manufacturer, "N/A");

    assert_eq!(identity.environment.display, ":0");
    assert_eq!(identity.metadata.generated_by, "identity-formulator");
    assert_eq!(identity.metadata.strategy, "moderate");
    assert_eq!(identity.metadata.components_used, ids);
}

#[test]
fn test_laptop_preset_gets_matching_battery() {
    let (use_case, _) = fixture_use_case();

    let response = use_case
        .formulate_from_preset("workstation_laptop", None)
        .unwrap();

    let battery = &response.identity.battery;
    assert!(battery.has_battery);
    assert_ne!(battery.manufacturer, "N/A");
    assert!(battery.cells > 0);
    // Default strategy applies when none is requested
    assert_eq!(response.identity.metadata.strategy, "moderate");
}

#[test]
fn test_uppercase_oui_is_normalized() {
    let (use_case, _) = fixture_use_case();

    let response = use_case
        .formulate_from_preset("gaming_desktop", Some("conservative"))
        .unwrap();

    let interfaces = &response.identity.network.interfaces;
    assert_eq!(interfaces.eth0, "00:e0:4c");
    assert_eq!(interfaces.wlan0, "00:e0:4c");
}

#[test]
fn test_aggressive_strategy_lengthens_serials() {
    let (use_case, _) = fixture_use_case();

    let response = use_case
        .formulate_from_preset("office_desktop", Some("aggressive"))
        .unwrap();

    let serial = &response.identity.hardware.board_serial;
    assert_eq!(serial.len(), "MB-".len() + 8);
    assert_eq!(response.identity.metadata.strategy, "aggressive");
}

#[test]
fn test_repeated_formulation_keeps_structure_but_not_identifiers() {
    let (use_case, _) = fixture_use_case();

    let first = use_case
        .formulate_from_preset("business_ultrabook", Some("moderate"))
        .unwrap()
        .identity;
    let second = use_case
        .formulate_from_preset("business_ultrabook", Some("moderate"))
        .unwrap()
        .identity;

    assert_eq!(
        first.metadata.components_used,
        second.metadata.components_used
    );
    assert_eq!(first.cpu, second.cpu);
    assert_eq!(first.os, second.os);
    assert_ne!(first.hardware.machine_id, second.hardware.machine_id);
    assert_ne!(first.boot.boot_id, second.boot.boot_id);
}

#[test]
fn test_unknown_preset_lists_available_presets() {
    let (use_case, _) = fixture_use_case();

    let err = use_case
        .formulate_from_preset("nonexistent", Some("moderate"))
        .unwrap_err()
        .to_string();

    assert!(err.contains("Preset 'nonexistent' not found"));
    assert!(err.contains("workstation_laptop"));
    assert!(err.contains("office_desktop"));
}

#[test]
fn test_unknown_component_ids_are_all_reported() {
    let (use_case, _) = fixture_use_case();
    let ids = ComponentIds::new("cpu_99", "gpu_1", "mb_1", "net_9", "stor_1", "os_1");

    let err = use_case
        .formulate_from_components(&ids, Some("moderate"))
        .unwrap_err()
        .to_string();

    assert!(err.contains("cpu_99"));
    assert!(err.contains("net_9"));
    assert!(!err.contains("gpu_1"));
}

#[test]
fn test_unknown_strategy_falls_back_with_warning() {
    let (use_case, reporter) = fixture_use_case();

    let response = use_case
        .formulate_from_preset("office_desktop", Some("paranoid"))
        .unwrap();

    assert_eq!(response.identity.metadata.strategy, "moderate");
    assert!(matches!(
        response.events.first(),
        Some(FormulationEvent::StrategyFallback { .. })
    ));
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("paranoid"));
}

#[test]
fn test_random_identities_are_compatible() {
    let (use_case, _) = fixture_use_case();

    for _ in 0..20 {
        let response = use_case.formulate_random(Some("moderate")).unwrap();
        let used = &response.identity.metadata.components_used;
        assert!(CompatibilityResolver::check_ids(
            use_case.catalog(),
            &used.cpu,
            &used.motherboard
        ));
        assert!(!response.used_fallback());
    }
}

#[test]
fn test_random_without_compatible_pair_uses_fallback_preset() {
    let mut document = fixture_document();
    for cpu in &mut document.cpus {
        cpu.category = "desktop_mainstream".into();
    }
    for motherboard in &mut document.motherboards {
        motherboard.category = "laptop_premium".into();
    }
    let catalog = Catalog::from_document(document).unwrap();
    let reporter = MockProgressReporter::new();
    let use_case = FormulateIdentityUseCase::new(catalog, reporter.clone());

    let response = use_case.formulate_random(Some("moderate")).unwrap();

    assert!(response.used_fallback());
    let preset = use_case.catalog().preset("workstation_laptop").unwrap();
    assert_eq!(
        response.identity.metadata.components_used,
        preset.components
    );
    assert!(reporter
        .warnings()
        .iter()
        .any(|warning| warning.contains("workstation_laptop")));
}

#[test]
fn test_listing_reflects_fixture() {
    let (use_case, _) = fixture_use_case();

    let listing = use_case.list_components().unwrap();

    assert_eq!(listing.sections.len(), 6);
    let cpus = listing.section(ComponentCategory::Cpu).unwrap();
    assert_eq!(cpus.entries.len(), 5);
    assert_eq!(cpus.entries[0].id, "cpu_1");
    assert_eq!(cpus.entries[0].summary, "Intel Core i5-10400 (6C/12T)");
    assert_eq!(listing.presets.len(), 4);
    assert_eq!(listing.statistics.possible_combinations, 960);

    let text = TextFormatter::new(false).format_listing(&listing).unwrap();
    assert!(text.contains("AVAILABLE HARDWARE COMPONENTS"));
    assert!(text.contains("CPUs (5):"));
    assert!(text.contains("  • net_2: Realtek RTL8125B"));
}

#[test]
fn test_identity_json_round_trips() {
    let (use_case, _) = fixture_use_case();
    let identity = use_case
        .formulate_from_preset("office_desktop", Some("moderate"))
        .unwrap()
        .identity;

    let json = JsonFormatter::new().format_identity(&identity).unwrap();
    let parsed: IdentityRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, identity);
    assert!(json.contains("\"_id_suffix\""));
    assert!(json.contains("\"_metadata\""));
}
