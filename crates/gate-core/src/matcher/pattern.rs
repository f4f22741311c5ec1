//! Test de patrón full-match compartido por los matchers.
//!
//! El patrón debe consumir el candidato completo: se compila anclado como
//! `^(?:pat)$`, de modo que `"prod"` no haga match contra `"production"`.
//! Un patrón que no compila es un error de configuración
//! (`TriggerMatchError::MalformedPattern`), nunca un no-match silencioso.

use regex::Regex;

use crate::errors::TriggerMatchError;

/// Compila `pattern` anclado al candidato completo.
///
/// Reutilizable por las estrategias de artifacts esperados, que validan sus
/// patrones una sola vez al construirse.
pub fn compile_anchored(pattern: &str) -> Result<Regex, TriggerMatchError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| TriggerMatchError::MalformedPattern { pattern: pattern.to_string(),
                                                                                              detail: e.to_string() })
}

/// Compila `pattern` y prueba `candidate` completo.
pub fn matches_full(pattern: &str, candidate: &str) -> Result<bool, TriggerMatchError> {
    let re = compile_anchored(pattern)?;
    Ok(re.is_match(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_match_es_sobre_el_candidato_completo() {
        // No substring: "prod" no debe aceptar "production"
        assert!(!matches_full("prod", "production").unwrap());
        assert!(matches_full("prod", "prod").unwrap());
        assert!(matches_full("prod.*", "production").unwrap());
    }

    #[test]
    fn alternancia_queda_contenida_por_el_anclaje() {
        // El grupo (?:...) evita que `a|b` se ancle sólo en una rama
        assert!(matches_full("us-.*|eu-.*", "eu-west-1").unwrap());
        assert!(!matches_full("us-.*|eu-.*", "ap-south-1 eu-west-1").unwrap());
    }

    #[test]
    fn patron_invalido_es_error_explicito() {
        let err = matches_full("[unclosed", "whatever").unwrap_err();
        match err {
            TriggerMatchError::MalformedPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        }
    }
}
