use thiserror::Error;

use crate::Credential;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AccessError {
    #[error("access denied")]
    AccessDenied,
}

/// Header-based access check, run before any request input is parsed.
///
/// - No IO
/// - No panics
/// - Emits a `warn` event on denial (never the presented value)
#[derive(Debug, Clone)]
pub struct AccessGate {
    required: Credential,
}

impl AccessGate {
    pub fn new(required: Credential) -> Self {
        Self { required }
    }

    /// Check the raw header value. `None` means the header was absent.
    pub fn check(&self, presented: Option<&str>) -> Result<(), AccessError> {
        match presented {
            Some(value) if self.required.matches(value) => Ok(()),
            _ => {
                tracing::warn!(header_present = presented.is_some(), "access denied");
                Err(AccessError::AccessDenied)
            }
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(Credential::superuser())
    }
}
