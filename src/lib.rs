//! identity-formulator - synthetic machine identities from a hardware catalog
//!
//! This library formulates complete, internally consistent machine identities
//! (hardware serials, MAC addresses, hostnames, boot ids and matching
//! environment details) from a curated YAML catalog of real hardware
//! components, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`identity_formulation`): Catalog model and the
//!   synthesizer, resolver, selector and assembler services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use identity_formulator::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let use_case = FormulateIdentityUseCase::load(
//!     &FileSystemReader::new(),
//!     Path::new("config/hardware_database.yml"),
//!     StderrProgressReporter::new(),
//! )?;
//!
//! let response = use_case.formulate_from_preset("workstation_laptop", Some("moderate"))?;
//!
//! let output = JsonFormatter::new().format_identity(&response.identity)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod identity_formulation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        FormulationRequest, FormulationResponse, SelectionMode, StrategyName,
    };
    pub use crate::application::read_models::ComponentListing;
    pub use crate::application::use_cases::FormulateIdentityUseCase;
    pub use crate::identity_formulation::domain::{
        Catalog, ComponentIds, FormulationEvent, IdentityRecord,
    };
    pub use crate::identity_formulation::services::{
        CompatibilityResolver, ComponentSelector, IdentifierSynthesizer, IdentityAssembler,
    };
    pub use crate::ports::inbound::IdentityFormulationPort;
    pub use crate::ports::outbound::{
        CatalogReader, IdentityFormatter, ListingFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
