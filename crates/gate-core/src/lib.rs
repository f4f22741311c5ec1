//! gate-core: Núcleo de matching para triggers de pipeline (F1)
pub mod constants;
pub mod errors;
pub mod matcher;
pub mod model;

pub use errors::TriggerMatchError;
pub use matcher::{any_artifacts_match, constraints_satisfied, trigger_artifacts_match, ExpectedArtifact};
pub use model::{ConstraintMap, Trigger};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NeverExpected;
    impl ExpectedArtifact for NeverExpected {
        type Artifact = String;
        fn id(&self) -> &str { "never" }
        fn matches(&self, _artifact: &String) -> bool { false }
    }

    #[test]
    fn trigger_sin_expectativas_es_match_vacuo() {
        // Un trigger sin ids esperados nunca se bloquea por el gate de artifacts
        let expected: Vec<NeverExpected> = vec![];
        assert!(any_artifacts_match(&["a".to_string()], &[], &expected));
        assert!(any_artifacts_match::<NeverExpected>(&[], &[], &[]));
    }

    #[test]
    fn set_de_constraints_vacio_es_satisfecho() {
        let constraints = ConstraintMap::new();
        let ok = constraints_satisfied(&constraints, &json!({"anything": 1})).expect("eval ok");
        assert!(ok);
    }
}
