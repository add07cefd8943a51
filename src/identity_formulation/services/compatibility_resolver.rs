use crate::identity_formulation::domain::{Catalog, Cpu, Motherboard};

/// CompatibilityResolver service for CPU/motherboard plausibility
///
/// The only cross-component rule: a CPU that declares a form factor must sit
/// on a motherboard of the same form factor. GPU, network and storage
/// components are treated as universally compatible.
pub struct CompatibilityResolver;

impl CompatibilityResolver {
    /// Fails closed: an unresolved CPU or motherboard is never compatible
    pub fn is_compatible(cpu: Option<&Cpu>, motherboard: Option<&Motherboard>) -> bool {
        let (Some(cpu), Some(motherboard)) = (cpu, motherboard) else {
            return false;
        };

        match cpu.category.form_factor() {
            Some(form_factor) => motherboard.form_factor() == Some(form_factor),
            None => true,
        }
    }

    /// Resolves both ids in the catalog, then applies [`Self::is_compatible`]
    pub fn check_ids(catalog: &Catalog, cpu_id: &str, motherboard_id: &str) -> bool {
        Self::is_compatible(catalog.cpu(cpu_id), catalog.motherboard(motherboard_id))
    }
}
