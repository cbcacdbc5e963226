//! OpenAPI document serialization.
//!
//! Only `components.schemas` is populated; `paths` is left empty.

use serde_json::{json, Map, Value};
use tracing::warn;

use crate::config::Config;
use crate::GenerationReport;

/// OpenAPI version written to the document.
pub const OPENAPI_VERSION: &str = "3.0.1";

/// Builds the OpenAPI document for a generation run. When two schemas share
/// a name the first one is kept.
#[must_use]
pub fn to_openapi(report: &GenerationReport, config: &Config) -> Value {
    let mut schemas = Map::new();
    for schema in &report.schemas {
        if schemas.contains_key(&schema.name) {
            warn!(name = %schema.name, iri = %schema.iri, "duplicate schema name dropped");
            continue;
        }
        schemas.insert(schema.name.clone(), schema.to_json());
    }
    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": config.name,
            "version": config.version,
        },
        "paths": {},
        "components": {
            "schemas": schemas,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ClassSchema;

    #[test]
    fn skeleton_document() {
        let report = GenerationReport {
            schemas: vec![ClassSchema::new("https://w3id.org/example#Course")],
            ..GenerationReport::default()
        };
        let config = Config {
            name: "University API".into(),
            ..Config::default()
        };
        let doc = to_openapi(&report, &config);
        assert_eq!(doc["openapi"], json!("3.0.1"));
        assert_eq!(doc["info"]["title"], json!("University API"));
        assert_eq!(doc["info"]["version"], json!("1.0.0"));
        assert_eq!(doc["paths"], json!({}));
        assert_eq!(
            doc["components"]["schemas"]["Course"],
            json!({ "type": "object", "properties": {} })
        );
    }

    #[test]
    fn duplicate_names_keep_first_schema() {
        let mut first = ClassSchema::new("https://w3id.org/a#Course");
        first.description = Some("first".into());
        let report = GenerationReport {
            schemas: vec![first, ClassSchema::new("https://w3id.org/b#Course")],
            ..GenerationReport::default()
        };
        let doc = to_openapi(&report, &Config::default());
        assert_eq!(doc["components"]["schemas"]["Course"]["description"], json!("first"));
    }
}
