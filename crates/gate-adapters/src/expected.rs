//! Definiciones de artifacts esperados y sus estrategias de identificación.
//!
//! La validación de patrones ocurre al CONSTRUIR la definición (el error de
//! configuración se superficia temprano, una sola vez); el predicado
//! `matches` queda infalible durante la evaluación, como exige la capability
//! del core.

use regex::Regex;

use gate_core::matcher::pattern::compile_anchored;
use gate_core::ExpectedArtifact;

use crate::artifact::Artifact;
use crate::errors::GateDomainError;

/// Estrategia de identificación de un artifact esperado.
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    /// Igualdad exacta de kind y name; la versión sólo se compara si la
    /// expectativa la declara.
    Exact {
        kind: String,
        name: String,
        version: Option<String>,
    },
    /// Patrones anclados (full-match) sobre name/version/location. Un campo
    /// `None` acepta cualquier valor; un campo con patrón exige que el
    /// artifact traiga ese campo.
    Pattern {
        kind: String,
        name: Option<Regex>,
        version: Option<Regex>,
        location: Option<Regex>,
    },
    /// Cualquier artifact del tipo dado.
    AnyOfKind { kind: String },
}

/// Artifact esperado declarado por la configuración del pipeline. El trigger
/// lo referencia por `id`; no lo posee.
#[derive(Debug, Clone)]
pub struct ExpectedArtifactDef {
    id: String,
    strategy: MatchStrategy,
}

impl ExpectedArtifactDef {
    pub fn exact(id: impl Into<String>,
                 kind: impl Into<String>,
                 name: impl Into<String>,
                 version: Option<String>)
                 -> Self {
        Self { id: id.into(),
               strategy: MatchStrategy::Exact { kind: kind.into(), name: name.into(), version } }
    }

    /// Construye una expectativa por patrón. Falla ante un patrón inválido
    /// (error de configuración, nunca silenciado a no-match).
    pub fn pattern(id: impl Into<String>,
                   kind: impl Into<String>,
                   name: Option<&str>,
                   version: Option<&str>,
                   location: Option<&str>)
                   -> Result<Self, GateDomainError> {
        Ok(Self { id: id.into(),
                  strategy: MatchStrategy::Pattern { kind: kind.into(),
                                                     name: compile_opt(name)?,
                                                     version: compile_opt(version)?,
                                                     location: compile_opt(location)? } })
    }

    pub fn any_of_kind(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { id: id.into(),
               strategy: MatchStrategy::AnyOfKind { kind: kind.into() } }
    }

    pub fn strategy(&self) -> &MatchStrategy {
        &self.strategy
    }
}

fn compile_opt(pattern: Option<&str>) -> Result<Option<Regex>, GateDomainError> {
    pattern.map(compile_anchored).transpose().map_err(GateDomainError::from)
}

/// Full-match opcional: sin patrón acepta todo; con patrón, el campo debe
/// existir y consumirse completo.
fn field_matches(re: &Option<Regex>, field: Option<&str>) -> bool {
    match re {
        None => true,
        Some(re) => field.is_some_and(|f| re.is_match(f)),
    }
}

impl ExpectedArtifact for ExpectedArtifactDef {
    type Artifact = Artifact;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, artifact: &Artifact) -> bool {
        match &self.strategy {
            MatchStrategy::Exact { kind, name, version } => {
                *kind == artifact.kind
                && *name == artifact.name
                && version.as_ref().map_or(true, |v| artifact.version.as_deref() == Some(v.as_str()))
            }
            MatchStrategy::Pattern { kind, name, version, location } => {
                *kind == artifact.kind
                && field_matches(name, Some(artifact.name.as_str()))
                && field_matches(version, artifact.version.as_deref())
                && field_matches(location, artifact.location.as_deref())
            }
            MatchStrategy::AnyOfKind { kind } => *kind == artifact.kind,
        }
    }
}
