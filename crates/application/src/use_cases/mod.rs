pub mod dns;

pub use dns::RespondToQueryUseCase;
