//! Matchers puros del trigger: artifacts y constraints.
//!
//! Ambos son funciones de decisión sin estado sobre entradas inmutables; no
//! hay locking ni orden entre evaluaciones concurrentes. La única salida con
//! efecto es el reporte por `log` (fire-and-forget, nunca altera el booleano).

pub mod artifacts;
pub mod constraints;
pub mod path;
pub mod pattern;

pub use artifacts::{any_artifacts_match, trigger_artifacts_match, ExpectedArtifact};
pub use constraints::constraints_satisfied;
pub use path::resolve_path;
pub use pattern::{compile_anchored, matches_full};
