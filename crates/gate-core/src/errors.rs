//! Errores del núcleo de matching (sólo de configuración).
//!
//! Todas las demás anomalías (colecciones ausentes, rutas irresolubles,
//! listas de artifacts sobredimensionadas) son no-fatales y se manejan como
//! valores, no como errores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum TriggerMatchError {
    /// Patrón inválido declarado en la configuración de un trigger o de un
    /// artifact esperado. Se propaga para que el caller decida si marcar el
    /// trigger como mal configurado; nunca se degrada a un no-match silencioso.
    #[error("malformed pattern `{pattern}`: {detail}")]
    MalformedPattern { pattern: String, detail: String },
}
