/// Use cases module containing application business logic orchestration
mod formulate_identity;

pub use formulate_identity::FormulateIdentityUseCase;
