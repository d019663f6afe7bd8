//! Application error types.

use std::fmt;
use std::net::SocketAddr;

use crate::provider::ProviderError;

/// Errors that can occur during application lifecycle.
#[derive(Debug)]
pub enum AppError {
    /// Failed to build the upstream HTTP client.
    HttpClient(ProviderError),

    /// Failed to bind the listen address.
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    Serve(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HttpClient(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
            AppError::Bind { addr, source } => match source.kind() {
                std::io::ErrorKind::AddrInUse => {
                    write!(f, "Failed to bind to {}: address already in use", addr)
                }
                std::io::ErrorKind::PermissionDenied => write!(
                    f,
                    "Failed to bind to {}: permission denied (ports below 1024 need privileges)",
                    addr
                ),
                _ => write!(f, "Failed to bind to {}: {}", addr, source),
            },
            AppError::Serve(e) => {
                write!(f, "Server error: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::HttpClient(e) => Some(e),
            AppError::Bind { source, .. } => Some(source),
            AppError::Serve(e) => Some(e),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::HttpClient(e)
    }
}
