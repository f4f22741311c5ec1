//! Matching de constraints de trigger contra el payload del evento.
//!
//! Reglas de evaluación, constraint por constraint y con short-circuit:
//! - Clave literal: debe existir en el primer nivel del payload con valor no
//!   nulo; si además hay patrón, el valor stringificado debe hacer full-match.
//!   Cualquier fallo responde `false` para el set completo.
//! - Clave `$.` con patrón: se resuelve como expresión de ruta. Si resuelve y
//!   el valor hace match, el set COMPLETO queda satisfecho inmediatamente. Si
//!   no resuelve o no hace match, la misma clave cae al chequeo literal.
//!
//! ADVERTENCIA (comportamiento heredado, preservado a propósito): un solo
//! constraint de ruta satisfecho anula al resto de constraints del set,
//! incluidos los que fallarían. No convertir esto en una conjunción pura:
//! hay configuraciones de triggers que dependen del override.

use log::debug;
use serde_json::Value;

use crate::constants::PATH_EXPR_MARKER;
use crate::errors::TriggerMatchError;
use crate::matcher::path::resolve_path;
use crate::matcher::pattern::matches_full;
use crate::model::ConstraintMap;

/// Evalúa el set de constraints contra `payload`.
///
/// Devuelve `Err` únicamente ante un patrón mal formado (error de
/// configuración del trigger); una ruta irresoluble o una clave ausente nunca
/// son error. Un set vacío queda satisfecho vacuamente.
pub fn constraints_satisfied(constraints: &ConstraintMap, payload: &Value) -> Result<bool, TriggerMatchError> {
    for (key, pattern) in constraints {
        if key.starts_with(PATH_EXPR_MARKER) {
            if let Some(pat) = pattern {
                if let Some(value) = resolve_path(payload, key) {
                    if matches_full(pat, &stringify(value))? {
                        // Override heredado: el set completo es true.
                        return Ok(true);
                    }
                }
            }
        }

        // Chequeo literal (también para claves `$.` que no resolvieron o no
        // hicieron match por ruta).
        let value = match payload.get(key) {
            Some(v) if !v.is_null() => v,
            _ => {
                debug!("constraint key `{key}` absent (or null) in payload top level");
                return Ok(false);
            }
        };

        if let Some(pat) = pattern {
            if !matches_full(pat, &stringify(value))? {
                debug!("constraint `{key}` value did not match pattern `{pat}`");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Stringificación para el test de patrón: los strings comparan sin comillas;
/// números y booleanos en su forma canónica; secuencias y mappings como JSON
/// compacto. Los null nunca llegan aquí (se filtran antes como ausencia).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
