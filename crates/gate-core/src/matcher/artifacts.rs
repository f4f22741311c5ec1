//! Matching existencial de artifacts contra las expectativas de un trigger.
//!
//! El core no conoce la forma concreta de un artifact: sólo consume la
//! capability `ExpectedArtifact` (id + predicado `matches`). Las estrategias
//! concretas de identificación viven en `gate-adapters`.

use log::{info, warn};

use crate::model::Trigger;

/// Capability de un artifact esperado, declarado por la configuración del
/// pipeline e inyectado al core.
pub trait ExpectedArtifact {
    /// Tipo concreto de artifact contra el que se evalúa el predicado.
    type Artifact;

    /// Identificador estable, único dentro del pipeline.
    fn id(&self) -> &str;

    /// Predicado de compatibilidad contra un artifact recibido. Debe ser puro
    /// e infalible (la validación de configuración ocurre al construir la
    /// definición, no aquí).
    fn matches(&self, artifact: &Self::Artifact) -> bool;
}

/// Decide si los artifacts del mensaje satisfacen las expectativas que el
/// trigger referencia.
///
/// - Sin ids esperados: match vacuo (`true`). Un trigger sin constraint de
///   artifacts nunca se bloquea por este check.
/// - Con ids: se filtran las expectativas del pipeline a las referenciadas y
///   basta UN par (artifact, expectativa) compatible. Cuantificación
///   existencial en ambos lados; el orden de los artifacts es irrelevante.
///
/// Colecciones ausentes se normalizan a vacías en el caller (ver
/// `Trigger::expected_ids`); aquí un slice vacío ya representa ausencia.
pub fn any_artifacts_match<E: ExpectedArtifact>(message_artifacts: &[E::Artifact],
                                               expected_artifact_ids: &[String],
                                               pipeline_expected_artifacts: &[E])
                                               -> bool {
    if expected_artifact_ids.is_empty() {
        return true;
    }

    // El trigger puede referenciar sólo un subconjunto de las expectativas
    // declaradas por el pipeline.
    let expected: Vec<&E> = pipeline_expected_artifacts.iter()
                                                       .filter(|e| expected_artifact_ids.iter().any(|id| id == e.id()))
                                                       .collect();

    if message_artifacts.len() > expected_artifact_ids.len() {
        // Señal de monitoreo, no condición de rechazo.
        warn!("parsed message artifacts (size {}) greater than expected artifacts (size {}), continuing trigger anyway",
              message_artifacts.len(),
              expected_artifact_ids.len());
    }

    message_artifacts.iter().any(|a| expected.iter().any(|e| e.matches(a)))
}

/// Variante sobre el `Trigger` completo: normaliza los ids ausentes y reporta
/// por `log` un resultado negativo. El reporte nunca altera el booleano.
pub fn trigger_artifacts_match<E: ExpectedArtifact>(trigger: &Trigger,
                                                   message_artifacts: &[E::Artifact],
                                                   pipeline_expected_artifacts: &[E])
                                                   -> bool {
    let result = any_artifacts_match(message_artifacts, trigger.expected_ids(), pipeline_expected_artifacts);
    if !result {
        info!("skipping trigger {} as artifact constraints were not satisfied", trigger.id);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expectativa de prueba: hace match por igualdad contra un String.
    struct Wants {
        id: &'static str,
        value: &'static str,
    }

    impl ExpectedArtifact for Wants {
        type Artifact = String;
        fn id(&self) -> &str { self.id }
        fn matches(&self, artifact: &String) -> bool { artifact == self.value }
    }

    fn msgs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn sin_ids_esperados_devuelve_true_incondicional() {
        let expected = [Wants { id: "e1", value: "img" }];
        assert!(any_artifacts_match(&msgs(&["otro"]), &[], &expected));
        assert!(any_artifacts_match(&msgs(&[]), &[], &expected));
    }

    #[test]
    fn sin_artifacts_de_mensaje_y_con_ids_devuelve_false() {
        let expected = [Wants { id: "e1", value: "img" }];
        assert!(!any_artifacts_match(&msgs(&[]), &["e1".to_string()], &expected));
    }

    #[test]
    fn basta_un_par_compatible() {
        let expected = [Wants { id: "e1", value: "img-a" }, Wants { id: "e2", value: "img-b" }];
        let ids = ["e1".to_string(), "e2".to_string()];
        assert!(any_artifacts_match(&msgs(&["img-x", "img-b"]), &ids, &expected));
        assert!(!any_artifacts_match(&msgs(&["img-x", "img-y"]), &ids, &expected));
    }

    #[test]
    fn solo_cuentan_las_expectativas_referenciadas() {
        // "img-b" sólo satisface e2, pero el trigger referencia únicamente e1
        let expected = [Wants { id: "e1", value: "img-a" }, Wants { id: "e2", value: "img-b" }];
        let ids = ["e1".to_string()];
        assert!(!any_artifacts_match(&msgs(&["img-b"]), &ids, &expected));
        assert!(any_artifacts_match(&msgs(&["img-a"]), &ids, &expected));
    }

    #[test]
    fn lista_sobredimensionada_continua_evaluando() {
        // Más artifacts que ids esperados: se reporta y se sigue
        let expected = [Wants { id: "e1", value: "img-a" }];
        let ids = ["e1".to_string()];
        assert!(any_artifacts_match(&msgs(&["x", "y", "img-a"]), &ids, &expected));
    }

    #[test]
    fn variante_trigger_normaliza_ids_ausentes() {
        let trigger = Trigger::new("webhook");
        let expected: [Wants; 0] = [];
        assert!(trigger_artifacts_match(&trigger, &msgs(&[]), &expected));

        let trigger = Trigger::new("webhook").with_expected_artifact_ids(vec!["e1".to_string()]);
        let expected = [Wants { id: "e1", value: "img" }];
        assert!(!trigger_artifacts_match(&trigger, &msgs(&["nope"]), &expected));
    }
}
