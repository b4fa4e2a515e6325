//! ec2-dns Application Layer
pub mod services;
pub mod use_cases;

pub use services::HostnameMatcher;
pub use use_cases::RespondToQueryUseCase;
