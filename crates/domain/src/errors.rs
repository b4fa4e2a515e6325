use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid hostname pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to bind {transport} listener on {addr}: {reason}")]
    BindFailed {
        transport: &'static str,
        addr: SocketAddr,
        reason: String,
    },

    #[error("{transport} listener failed: {reason}")]
    ListenerFailed {
        transport: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    IoError(String),
}
