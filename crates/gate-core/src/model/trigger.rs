//! Configuración inmutable de un trigger.
//!
//! Un `Trigger` declara las condiciones bajo las cuales un evento dispara la
//! ejecución de un pipeline:
//! - `expected_artifact_ids`: referencias (no ownership) a artifacts esperados
//!   declarados por el pipeline. Ausente == sin constraint de artifacts.
//! - `constraints`: mapa clave → patrón opcional sobre el payload del evento.
//!   Se usa `IndexMap` para que el orden de evaluación sea determinista y
//!   refleje el orden configurado.
//!
//! El core nunca muta un trigger; es entrada de sólo lectura de ambos
//! matchers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mapa de constraints de un trigger. Un valor `None` significa "basta con la
/// presencia de la clave, cualquier valor es aceptado". Las claves son únicas
/// por construcción del mapa.
pub type ConstraintMap = IndexMap<String, Option<String>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    pub id: Uuid,
    /// Tipo del trigger (p.ej. "webhook", "pubsub"). Informativo; no
    /// participa en el matching.
    pub trigger_type: String,
    pub enabled: bool,
    pub expected_artifact_ids: Option<Vec<String>>,
    pub constraints: Option<ConstraintMap>,
}

impl Trigger {
    pub fn new(trigger_type: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(),
               trigger_type: trigger_type.into(),
               enabled: true,
               expected_artifact_ids: None,
               constraints: None }
    }

    pub fn with_expected_artifact_ids(mut self, ids: Vec<String>) -> Self {
        self.expected_artifact_ids = Some(ids);
        self
    }

    pub fn with_constraints(mut self, constraints: ConstraintMap) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Ids esperados normalizados: ausente == lista vacía (nunca error).
    pub fn expected_ids(&self) -> &[String] {
        self.expected_artifact_ids.as_deref().unwrap_or_default()
    }
}
