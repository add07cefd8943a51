mod compatibility_resolver;
mod component_selector;
mod identifier_synthesizer;
mod identity_assembler;

pub use compatibility_resolver::CompatibilityResolver;
pub use component_selector::{
    ComponentSelector, RequiredComponents, ResolvedComponents, Selection, FALLBACK_PRESET,
    MAX_RANDOM_ATTEMPTS,
};
pub use identifier_synthesizer::IdentifierSynthesizer;
pub use identity_assembler::{IdentityAssembler, GENERATOR_NAME, MAX_HOSTNAME_LEN, RECORD_VERSION};
