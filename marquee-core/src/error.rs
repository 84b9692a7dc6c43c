// marquee-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarqueeError {
    // --- DOMAIN ERRORS (records, configuration rules) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, YAML, JSON) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for MarqueeError {
    fn from(err: std::io::Error) -> Self {
        MarqueeError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl MarqueeError {
    /// True when the failure comes from an input file with no lines at all.
    pub fn is_empty_source(&self) -> bool {
        matches!(
            self,
            MarqueeError::Infrastructure(InfrastructureError::EmptySource(_))
        )
    }
}
