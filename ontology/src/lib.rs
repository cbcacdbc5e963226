//! OWL ontology model, loader and structural queries.
//!
//! The `oas-ontology` crate holds the slice of OWL 2 that the schema
//! compiler consumes: named classes with their restriction axioms, object and
//! datatype properties with domain/range axioms, and named individuals. It
//! loads them from Turtle and answers the compiler's read-only questions
//! through the [`OntologyAccess`] trait.
//!
//! # Entry Point
//!
//! ```
//! use oas_ontology::{loader, OntologyAccess};
//!
//! let ontology = loader::load_turtle(oas_ontology::fixtures::UNIVERSITY).unwrap();
//! assert!(ontology.contains_class("https://w3id.org/example#Course"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod access;
pub mod fixtures;
pub mod loader;
pub mod model;

pub use access::{AccessError, DomainAxiom, OntologyAccess};
pub use loader::LoadError;
pub use model::{
    local_name, CardinalityKind, Class, ClassExpression, DataRange, Filler, Individual, Literal,
    Ontology, Property, PropertyKind, Quantifier, Value,
};
