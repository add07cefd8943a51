/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod formulation_request;
mod formulation_response;
mod output_format;
mod strategy_name;

pub use formulation_request::{FormulationRequest, SelectionMode};
pub use formulation_response::FormulationResponse;
pub use output_format::OutputFormat;
pub use strategy_name::StrategyName;
