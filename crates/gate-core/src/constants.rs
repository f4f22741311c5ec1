//! Constantes del núcleo de matching.

/// Marcador reservado que distingue una clave de constraint como expresión de
/// ruta sobre el payload (en vez de clave literal de primer nivel). Cambiarlo
/// rompería la compatibilidad con constraints ya configurados.
pub const PATH_EXPR_MARKER: &str = "$.";
