//! OWL restriction → OpenAPI schema compiler.
//!
//! Turns every class of an ontology into an OpenAPI Schema Object whose
//! properties, cardinalities, unions, intersections, enumerations and
//! nullability mirror the class's restrictions.
//!
//! # Pipeline
//!
//! For each class, the [`assembler`] builds a skeleton, declares the
//! properties whose domain is the class, runs the [`compiler`] over the
//! class's own and inherited restrictions (writing through the [`builder`]),
//! then runs the [`postprocess`] passes. [`generate`] repeats this for every
//! class reachable from the seeds.
//!
//! ```
//! use oas_ontology::loader::load_turtle;
//! use oas_schemagen::{config::Config, diagnostics::Diagnostics};
//!
//! let ontology = load_turtle(oas_ontology::fixtures::UNIVERSITY).unwrap();
//! let config = Config::default();
//! let mut diagnostics = Diagnostics::new();
//! let report = oas_schemagen::generate(&ontology, &[], &config, &mut diagnostics).unwrap();
//! let document = oas_schemagen::document::to_openapi(&report, &config);
//! assert!(document["components"]["schemas"]["Course"].is_object());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assembler;
pub mod builder;
pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod mapping;
pub mod postprocess;
pub mod schema;

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

use oas_ontology::{AccessError, OntologyAccess};

use config::Config;
use diagnostics::{DiagnosticKind, Diagnostics};

pub use error::SchemaError;
pub use schema::{ClassSchema, PropertySchema};

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Compiled schemas, in compilation order.
    pub schemas: Vec<ClassSchema>,
    /// Number of properties across all schemas.
    pub property_count: usize,
    /// Number of required properties across all schemas.
    pub required_count: usize,
    /// Number of class-level enumerations.
    pub enum_count: usize,
}

impl GenerationReport {
    /// Returns the number of compiled schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Looks up a compiled schema by name.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&ClassSchema> {
        self.schemas.iter().find(|s| s.name == name)
    }
}

/// Compiles the seed classes and every class they reference, each once, in
/// discovery order. Empty `seeds` means every class of the ontology.
///
/// Referenced classes the ontology does not declare are skipped. Schemas are
/// keyed by local name: a class whose name is already taken by another class
/// is recorded as [`DiagnosticKind::SchemaNameCollision`] and left out.
///
/// # Errors
///
/// Returns [`SchemaError::Access`] if a seed class is not declared, or if a
/// class on a superclass walk cannot be resolved.
pub fn generate<A: OntologyAccess + ?Sized>(
    ontology: &A,
    seeds: &[String],
    config: &Config,
    diagnostics: &mut Diagnostics,
) -> Result<GenerationReport, SchemaError> {
    let seeds: Vec<String> = if seeds.is_empty() {
        ontology.classes().into_iter().map(str::to_owned).collect()
    } else {
        seeds.to_vec()
    };

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    for seed in seeds {
        if !ontology.contains_class(&seed) {
            return Err(AccessError::UnknownClass(seed).into());
        }
        if seen.insert(seed.clone()) {
            queue.push_back(seed);
        }
    }

    let mut report = GenerationReport::default();
    let mut names: IndexMap<String, String> = IndexMap::new();
    while let Some(class) = queue.pop_front() {
        let assembled = assembler::assemble(ontology, &class, &config.flags, diagnostics)?;
        for referenced in assembled.referenced {
            if seen.contains(&referenced) {
                continue;
            }
            if ontology.contains_class(&referenced) {
                seen.insert(referenced.clone());
                queue.push_back(referenced);
            } else {
                debug!(class = %referenced, "skipping undeclared referenced class");
            }
        }
        let schema = assembled.schema;
        if let Some(owner) = names.get(&schema.name) {
            diagnostics.record(
                DiagnosticKind::SchemaNameCollision,
                &class,
                owner,
                format!("schema name `{}` is already used by <{owner}>", schema.name),
            );
            continue;
        }
        names.insert(schema.name.clone(), class.clone());
        report.property_count += schema.properties.len();
        report.required_count += schema.required.len();
        if schema.is_enumeration() {
            report.enum_count += 1;
        }
        report.schemas.push(schema);
    }

    info!(
        schemas = report.schema_count(),
        properties = report.property_count,
        warnings = diagnostics.warning_count(),
        errors = diagnostics.error_count(),
        "generation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_ontology::fixtures::UNIVERSITY;
    use oas_ontology::loader::load_turtle;

    const EX: &str = "https://w3id.org/example#";

    #[test]
    fn seeds_pull_in_referenced_classes() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let report = generate(
            &onto,
            &[format!("{EX}StudyMaterial")],
            &Config::default(),
            &mut diagnostics,
        )
        .expect("generation succeeds");
        let names: Vec<&str> = report.schemas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[0], "StudyMaterial");
        assert!(names.contains(&"Organization"));
        assert!(names.contains(&"Person"));
        assert!(names.contains(&"Country"));
        assert!(!names.contains(&"Course"));
    }

    #[test]
    fn every_class_once_without_seeds() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let report = generate(&onto, &[], &Config::default(), &mut diagnostics)
            .expect("generation succeeds");
        assert_eq!(report.schema_count(), onto.classes().len());
        assert_eq!(report.enum_count, 1);
        assert!(report.schema("Weekday").is_some_and(ClassSchema::is_enumeration));
    }

    #[test]
    fn same_local_name_keeps_first_schema() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix a:    <https://w3id.org/a#> .
@prefix b:    <https://w3id.org/b#> .

a:Person a owl:Class .
b:Person a owl:Class .
"#;
        let onto = load_turtle(source).expect("ontology parses");
        let mut diagnostics = Diagnostics::new();
        let report = generate(&onto, &[], &Config::default(), &mut diagnostics)
            .expect("generation succeeds");
        assert_eq!(report.schema_count(), 1);
        assert_eq!(
            report.schema("Person").map(|s| s.iri.as_str()),
            Some("https://w3id.org/a#Person")
        );
        assert_eq!(diagnostics.count(DiagnosticKind::SchemaNameCollision), 1);
    }

    #[test]
    fn unknown_seed_is_fatal() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let result = generate(
            &onto,
            &[format!("{EX}Missing")],
            &Config::default(),
            &mut diagnostics,
        );
        assert!(matches!(result, Err(SchemaError::Access(_))));
    }
}
