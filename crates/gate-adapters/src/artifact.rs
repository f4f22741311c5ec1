//! Artifact concreto publicado por un evento.
//!
//! Es un valor inmutable propiedad del colaborador de ingesta; el core lo
//! trata como opaco y sólo lo testea vía la capability de `expected`.
//! `metadata` es información auxiliar que no participa en el matching.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Tipo del artifact, p.ej. "docker/image" o "gcs/object".
    pub kind: String,
    pub name: String,
    pub version: Option<String>,
    pub location: Option<String>,
    /// Referencia completa (URI, digest) si el productor la incluye.
    pub reference: Option<String>,
    pub metadata: Option<Value>,
}

impl Artifact {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self { kind: kind.into(),
               name: name.into(),
               version: None,
               location: None,
               reference: None,
               metadata: None }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
