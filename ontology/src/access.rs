//! Read-only structural queries over an ontology.
//!
//! The schema compiler never touches the ontology's storage directly; it asks
//! these questions through [`OntologyAccess`]. The in-memory [`Ontology`]
//! answers them from its declared axioms, without reasoning.

use thiserror::Error;

use crate::model::iris::OWL_THING;
use crate::model::{ClassExpression, Filler, Ontology, PropertyKind};

/// Failure to resolve an entity the caller expected to exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No class with this IRI is declared.
    #[error("unknown class <{0}>")]
    UnknownClass(String),
    /// No property with this IRI is declared.
    #[error("unknown property <{0}>")]
    UnknownProperty(String),
}

/// A property domain axiom: `property rdfs:domain domain`.
#[derive(Debug, Clone, Copy)]
pub struct DomainAxiom<'a> {
    /// Full IRI of the property.
    pub property: &'a str,
    /// The declared domain.
    pub domain: &'a ClassExpression,
}

impl DomainAxiom<'_> {
    /// Returns true if the domain is `class` itself, or a union naming it.
    #[must_use]
    pub fn applies_to(&self, class: &str) -> bool {
        match self.domain {
            ClassExpression::Class(iri) => iri == class,
            ClassExpression::Union(ops) => ops.iter().any(|op| op.as_class() == Some(class)),
            _ => false,
        }
    }
}

/// Structural queries consumed by the schema compiler.
///
/// Implementations must be free of side effects; compilations of different
/// classes may share one implementation.
pub trait OntologyAccess {
    /// Returns the IRIs of every named class, in declaration order.
    fn classes(&self) -> Vec<&str>;

    /// Returns true if a class with this IRI is declared.
    fn contains_class(&self, class: &str) -> bool;

    /// Returns the named direct superclasses of `class`, excluding `owl:Thing`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownClass`] if `class` is not declared.
    fn direct_superclasses(&self, class: &str) -> Result<Vec<&str>, AccessError>;

    /// Returns the anonymous superclass expressions of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownClass`] if `class` is not declared.
    fn restriction_axioms(&self, class: &str) -> Result<&[ClassExpression], AccessError>;

    /// Returns the expressions `class` is declared equivalent to.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownClass`] if `class` is not declared.
    fn equivalent_class_axioms(&self, class: &str) -> Result<&[ClassExpression], AccessError>;

    /// Returns every domain axiom of properties of the given kind.
    fn property_domain_axioms(&self, kind: PropertyKind) -> Vec<DomainAxiom<'_>>;

    /// Returns the range axioms of `property`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownProperty`] if `property` is not declared.
    fn property_range_axioms(&self, property: &str) -> Result<&[Filler], AccessError>;

    /// Returns true if `property` is declared functional.
    fn is_functional(&self, property: &str) -> bool;

    /// Returns the description of an entity, if it has one.
    fn description(&self, entity: &str) -> Option<&str>;

    /// Returns the domain axioms of the given kind that apply to `class`.
    fn domain_axioms_for(&self, class: &str, kind: PropertyKind) -> Vec<DomainAxiom<'_>> {
        self.property_domain_axioms(kind)
            .into_iter()
            .filter(|ax| ax.applies_to(class))
            .collect()
    }
}

impl OntologyAccess for Ontology {
    fn classes(&self) -> Vec<&str> {
        self.classes
            .keys()
            .map(String::as_str)
            .filter(|iri| *iri != OWL_THING)
            .collect()
    }

    fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    fn direct_superclasses(&self, class: &str) -> Result<Vec<&str>, AccessError> {
        let found = self
            .find_class(class)
            .ok_or_else(|| AccessError::UnknownClass(class.to_owned()))?;
        Ok(found
            .subclass_of
            .iter()
            .map(String::as_str)
            .filter(|iri| *iri != OWL_THING)
            .collect())
    }

    fn restriction_axioms(&self, class: &str) -> Result<&[ClassExpression], AccessError> {
        self.find_class(class)
            .map(|c| c.restrictions.as_slice())
            .ok_or_else(|| AccessError::UnknownClass(class.to_owned()))
    }

    fn equivalent_class_axioms(&self, class: &str) -> Result<&[ClassExpression], AccessError> {
        self.find_class(class)
            .map(|c| c.equivalent_to.as_slice())
            .ok_or_else(|| AccessError::UnknownClass(class.to_owned()))
    }

    fn property_domain_axioms(&self, kind: PropertyKind) -> Vec<DomainAxiom<'_>> {
        self.properties
            .values()
            .filter(|p| p.kind == kind)
            .flat_map(|p| {
                p.domains.iter().map(move |domain| DomainAxiom {
                    property: p.id.as_str(),
                    domain,
                })
            })
            .collect()
    }

    fn property_range_axioms(&self, property: &str) -> Result<&[Filler], AccessError> {
        self.find_property(property)
            .map(|p| p.ranges.as_slice())
            .ok_or_else(|| AccessError::UnknownProperty(property.to_owned()))
    }

    fn is_functional(&self, property: &str) -> bool {
        self.find_property(property).is_some_and(|p| p.functional)
    }

    fn description(&self, entity: &str) -> Option<&str> {
        let comment = if let Some(class) = self.find_class(entity) {
            class.comment.as_deref()
        } else if let Some(property) = self.find_property(entity) {
            property.comment.as_deref()
        } else {
            self.find_individual(entity)
                .and_then(|i| i.comment.as_deref())
        };
        comment.filter(|c| !c.trim().is_empty())
    }
}
