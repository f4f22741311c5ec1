//! Notificación de publicación que dispara la evaluación de triggers.
//!
//! El parsing del evento crudo es responsabilidad del colaborador de ingesta;
//! aquí sólo se define la forma ya estructurada, inmutable durante toda la
//! evaluación. `payload` es JSON genérico: el core lo recorre pero no
//! interpreta su semántica.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::artifact::Artifact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub id: Uuid,
    /// Origen del evento (p.ej. "dockerhub", "pubsub:builds").
    pub source: String,
    pub ts: DateTime<Utc>,
    pub payload: Value,
    /// Artifacts publicados junto con el evento (puede estar vacío).
    pub artifacts: Vec<Artifact>,
}

impl TriggerEvent {
    pub fn new(source: impl Into<String>, payload: Value) -> Self {
        Self { id: Uuid::new_v4(),
               source: source.into(),
               ts: Utc::now(),
               payload,
               artifacts: Vec::new() }
    }

    pub fn with_artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = artifacts;
        self
    }
}
