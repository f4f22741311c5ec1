//! gateflow-rust: fachada del workspace de gating de triggers.
//!
//! Re-exporta la superficie pública de los crates miembros; el loop de
//! evaluación externo sólo necesita estos tipos y las dos funciones de
//! decisión.

pub use gate_adapters::{Artifact, ExpectedArtifactDef, GateDomainError, MatchStrategy, TriggerEvent};
pub use gate_core::{any_artifacts_match, constraints_satisfied, trigger_artifacts_match, ConstraintMap, Trigger,
                    TriggerMatchError};
