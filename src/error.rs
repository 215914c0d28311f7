//! Request error taxonomy.
//!
//! Two classes of failure, mirroring what the client may see:
//! - [`PackageError::Input`] - the request itself is unusable (400), with a
//!   specific message and no processing attempted.
//! - [`PackageError::Processing`] - any rasterization/encoding/archival step
//!   failed (500). The detail is logged server-side; the client gets a
//!   generic message.

use thiserror::Error;

/// Errors produced while handling a package request.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Invalid request input: no files uploaded, bad color token.
    #[error("{0}")]
    Input(String),

    /// A pipeline step failed. Terminal for the whole request; no partial
    /// archive is ever returned.
    #[error("failed to generate logo package")]
    Processing(#[from] anyhow::Error),
}

impl PackageError {
    /// Shortcut for an input error with a formatted message.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Input(_) => 400,
            Self::Processing(_) => 500,
        }
    }

    /// Client-facing message. Processing details stay server-side.
    pub fn client_message(&self) -> String {
        match self {
            Self::Input(msg) => msg.clone(),
            Self::Processing(_) => "failed to generate logo package".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PackageError::input("no files uploaded").status(), 400);
        let processing = PackageError::from(anyhow::anyhow!("encoder exploded"));
        assert_eq!(processing.status(), 500);
    }

    #[test]
    fn test_processing_detail_is_not_client_visible() {
        let processing = PackageError::from(anyhow::anyhow!("tiff: bad strip"));
        assert!(!processing.client_message().contains("strip"));
    }
}
