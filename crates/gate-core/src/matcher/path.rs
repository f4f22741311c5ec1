//! Resolución de expresiones de ruta (`$.`) sobre payloads JSON.
//!
//! Soporta segmentos con punto (`$.a.b`), índices de secuencia (`[0]`) y
//! claves entre corchetes (`['k']`, `["k"]`). Reglas:
//! - Una ruta inexistente o mal formada resuelve a `None`, nunca a error: el
//!   caller la trata igual que una clave literal ausente.
//! - Un `null` JSON también resuelve a `None` (ausencia == null).

use serde_json::Value;

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Resuelve `expr` contra `payload`. Devuelve cero o un valor.
pub fn resolve_path<'a>(payload: &'a Value, expr: &str) -> Option<&'a Value> {
    let segments = parse_segments(expr)?;
    let mut current = payload;
    for segment in segments {
        current = match segment {
            Segment::Key(k) => current.get(k)?,
            Segment::Index(i) => current.get(i)?,
        };
    }
    if current.is_null() { None } else { Some(current) }
}

/// Parser mínimo de la expresión. `None` == expresión mal formada (la ruta
/// simplemente no resuelve; el error se traga a propósito).
fn parse_segments(expr: &str) -> Option<Vec<Segment<'_>>> {
    let mut rest = expr.strip_prefix('$')?;
    let mut segments = Vec::new();
    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix('.') {
            let end = r.find(|c| c == '.' || c == '[').unwrap_or(r.len());
            if end == 0 {
                return None; // `..` o `.[`
            }
            segments.push(Segment::Key(&r[..end]));
            rest = &r[end..];
        } else if let Some(r) = rest.strip_prefix('[') {
            let close = r.find(']')?;
            let inner = &r[..close];
            let segment = if let Some(k) = unquote(inner) {
                Segment::Key(k)
            } else {
                Segment::Index(inner.parse().ok()?)
            };
            segments.push(segment);
            rest = &r[close + 1..];
        } else {
            return None;
        }
    }
    if segments.is_empty() { None } else { Some(segments) }
}

fn unquote(inner: &str) -> Option<&str> {
    inner.strip_prefix('\'')
         .and_then(|s| s.strip_suffix('\''))
         .or_else(|| inner.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resuelve_rutas_anidadas_con_punto() {
        let payload = json!({"meta": {"region": "us-east-1"}});
        assert_eq!(resolve_path(&payload, "$.meta.region"), Some(&json!("us-east-1")));
    }

    #[test]
    fn resuelve_indices_y_claves_entre_corchetes() {
        let payload = json!({"builds": [{"status": "SUCCESS"}, {"status": "FAILED"}]});
        assert_eq!(resolve_path(&payload, "$.builds[1].status"), Some(&json!("FAILED")));
        assert_eq!(resolve_path(&payload, "$.builds[0]['status']"), Some(&json!("SUCCESS")));
        assert_eq!(resolve_path(&payload, "$[\"builds\"][0].status"), Some(&json!("SUCCESS")));
    }

    #[test]
    fn ruta_inexistente_resuelve_a_none() {
        let payload = json!({"meta": {"region": "us-east-1"}});
        assert_eq!(resolve_path(&payload, "$.meta.zone"), None);
        assert_eq!(resolve_path(&payload, "$.missing.deeper"), None);
        assert_eq!(resolve_path(&payload, "$.meta[0]"), None); // índice sobre mapping
    }

    #[test]
    fn null_explicito_cuenta_como_ausencia() {
        let payload = json!({"meta": {"region": null}});
        assert_eq!(resolve_path(&payload, "$.meta.region"), None);
    }

    #[test]
    fn expresion_mal_formada_resuelve_a_none() {
        let payload = json!({"a": 1});
        assert_eq!(resolve_path(&payload, "$..a"), None);
        assert_eq!(resolve_path(&payload, "$.a[zz]"), None);
        assert_eq!(resolve_path(&payload, "$.a["), None);
        assert_eq!(resolve_path(&payload, "no-marker"), None);
    }
}
