//! Identity formulation core: the catalog model plus the services that
//! select components and assemble an identity from them.
pub mod domain;
pub mod services;
