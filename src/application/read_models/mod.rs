//! Read models for the catalog listing query
//!
//! View-optimized structs that give a denormalized, display-ready
//! representation of the catalog.

pub mod component_listing;
mod component_listing_builder;

pub use component_listing::{
    CatalogStatistics, ComponentListing, ComponentSection, ComponentView, PresetView,
};
pub use component_listing_builder::ComponentListingBuilder;
