//! View structs for the catalog listing
//!
//! A flattened, display-ready snapshot of the catalog: one section per
//! selectable category, the preset profiles and the catalog statistics.

use crate::identity_formulation::domain::ComponentCategory;
use serde::Serialize;

/// Complete catalog listing returned by `list_components`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentListing {
    pub sections: Vec<ComponentSection>,
    pub presets: Vec<PresetView>,
    pub statistics: CatalogStatistics,
}

impl ComponentListing {
    /// Looks up the section for a category
    pub fn section(&self, category: ComponentCategory) -> Option<&ComponentSection> {
        self.sections
            .iter()
            .find(|section| section.category == category)
    }
}

/// All components of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSection {
    #[serde(serialize_with = "serialize_category")]
    pub category: ComponentCategory,
    /// Human-readable heading, e.g. `Operating Systems`
    pub title: &'static str,
    pub entries: Vec<ComponentView>,
}

/// One selectable component: its id and a one-line description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    pub id: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetView {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatistics {
    /// Count of distinct six-component combinations
    pub possible_combinations: u64,
    /// Free-form estimate shipped with the catalog, if any
    pub practical_unique_identities: Option<String>,
}

fn serialize_category<S>(category: &ComponentCategory, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(category.as_str())
}
