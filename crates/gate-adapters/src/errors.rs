// errors.rs
use gate_core::TriggerMatchError;
use thiserror::Error;

/// Error de configuración de la superficie de artifacts.
#[derive(Debug, Error)]
pub enum GateDomainError {
    #[error("invalid artifact pattern: {0}")]
    InvalidPattern(String),
}

// Conversión desde el error de patrón del core (mismo origen: configuración).
impl From<TriggerMatchError> for GateDomainError {
    fn from(e: TriggerMatchError) -> Self {
        GateDomainError::InvalidPattern(e.to_string())
    }
}
