//! Modelos neutrales del trigger (Trigger, ConstraintMap)

pub mod trigger;

pub use trigger::{ConstraintMap, Trigger};
