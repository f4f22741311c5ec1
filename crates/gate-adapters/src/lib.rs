//! gate-adapters: Superficie concreta de artifacts alrededor del core (F2)
//!
//! Este crate provee:
//! - `Artifact`: el valor concreto que llega en una notificación de
//!   publicación.
//! - `ExpectedArtifactDef`: implementación de la capability
//!   `gate_core::ExpectedArtifact`, con una estrategia por forma de
//!   identificación (exacta, por patrón, por tipo).
//! - `TriggerEvent`: la forma inmutable del evento entrante ya parseado.
//!
//! Nota: el core sólo conoce la capability (id + matches); las formas
//! concretas y su validación de configuración viven aquí.

pub mod artifact;
pub mod errors;
pub mod event;
pub mod expected;

pub use artifact::Artifact;
pub use errors::GateDomainError;
pub use event::TriggerEvent;
pub use expected::{ExpectedArtifactDef, MatchStrategy};
