/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod identity_formulation_port;

pub use identity_formulation_port::IdentityFormulationPort;
