//! Binario de validación manual del gating de triggers.
//!
//! Ejecuta escenarios (trigger, evento) de punta a punta e imprime el
//! resultado de cada gate y la decisión combinada. No sustituye a los tests;
//! sirve para inspección rápida del comportamiento del matching.

use gate_adapters::{Artifact, ExpectedArtifactDef, TriggerEvent};
use gate_core::{constraints_satisfied, trigger_artifacts_match, ConstraintMap, Trigger, TriggerMatchError};
use serde_json::json;

/// Composición que hace el loop de evaluación (fuera de este core): el
/// pipeline sólo dispara si ambos gates responden true. Un trigger
/// deshabilitado ni siquiera llega a evaluarse.
fn evaluate(trigger: &Trigger,
            event: &TriggerEvent,
            pipeline_expected: &[ExpectedArtifactDef])
            -> Result<bool, TriggerMatchError> {
    if !trigger.enabled {
        return Ok(false);
    }
    let artifacts_ok = trigger_artifacts_match(trigger, &event.artifacts, pipeline_expected);
    let constraints_ok = match &trigger.constraints {
        Some(constraints) => constraints_satisfied(constraints, &event.payload)?,
        None => true,
    };
    Ok(artifacts_ok && constraints_ok)
}

fn run_gating_validation() -> Result<(), TriggerMatchError> {
    // Expectativas declaradas por el pipeline (el trigger las referencia por id)
    let pipeline_expected =
        vec![ExpectedArtifactDef::pattern("docker-app", "docker/image", Some("app"), Some(r"\d+\.\d+\.\d+"), None)
                 .expect("patrón de expectativa válido"),
             ExpectedArtifactDef::any_of_kind("any-report", "gcs/object")];

    // Escenario 1: webhook con constraints literales y artifact compatible
    let trigger = Trigger::new("webhook").with_expected_artifact_ids(vec!["docker-app".to_string()])
                                         .with_constraints(ConstraintMap::from([("status".to_string(),
                                                                                 Some("SUCCESS".to_string())),
                                                                                ("branch".to_string(),
                                                                                 Some("main|release/.*".to_string()))]));
    let event = TriggerEvent::new("dockerhub",
                                  json!({"status": "SUCCESS", "branch": "release/2.4"}))
        .with_artifacts(vec![Artifact::new("docker/image", "app").with_version("2.4.0")]);
    println!("webhook + artifact compatible      -> {}", evaluate(&trigger, &event, &pipeline_expected)?);

    // Escenario 2: el override por expresión de ruta anula el mismatch de rama
    let trigger = Trigger::new("webhook").with_constraints(ConstraintMap::from([("$.build.status".to_string(),
                                                                                 Some("SUCCESS".to_string())),
                                                                                ("branch".to_string(),
                                                                                 Some("main".to_string()))]));
    let event = TriggerEvent::new("ci",
                                  json!({"build": {"status": "SUCCESS"}, "branch": "develop"}));
    println!("override por ruta (rama distinta)  -> {}", evaluate(&trigger, &event, &pipeline_expected)?);

    // Escenario 3: evento sin artifacts frente a un trigger que los exige
    let trigger = Trigger::new("pubsub").with_expected_artifact_ids(vec!["docker-app".to_string()]);
    let event = TriggerEvent::new("pubsub:builds", json!({}));
    println!("sin artifacts, con expectativas    -> {}", evaluate(&trigger, &event, &pipeline_expected)?);

    Ok(())
}

fn main() {
    if let Err(e) = run_gating_validation() {
        eprintln!("configuración inválida: {e}");
        std::process::exit(1);
    }
}
