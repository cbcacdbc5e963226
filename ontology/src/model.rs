//! Core ontology model types.
//!
//! These types represent the slice of OWL 2 the schema compiler consumes:
//! named classes with their anonymous superclass expressions, object and
//! datatype properties with domain/range axioms, and named individuals.
//! Class expressions and data ranges are plain tagged unions so consumers can
//! match on them exhaustively.

use indexmap::IndexMap;

/// Whether a property relates a resource to another resource or to a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`: relates two resources.
    Object,
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
}

impl PropertyKind {
    /// Returns the local name of the OWL class declaring this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Object => "ObjectProperty",
            PropertyKind::Datatype => "DatatypeProperty",
        }
    }
}

/// Quantifier of a `someValuesFrom` / `allValuesFrom` restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// `owl:someValuesFrom`: at least one value from the filler.
    Some,
    /// `owl:allValuesFrom`: every value (possibly none) from the filler.
    All,
}

/// Kind of a cardinality restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalityKind {
    /// `owl:minCardinality` / `owl:minQualifiedCardinality`.
    Min,
    /// `owl:maxCardinality` / `owl:maxQualifiedCardinality`.
    Max,
    /// `owl:cardinality` / `owl:qualifiedCardinality`.
    Exact,
}

/// A typed literal, kept in lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The lexical form (e.g. `"42"`, `"female"`).
    pub lexical: String,
    /// Full IRI of the datatype, or `None` for plain strings.
    pub datatype: Option<String>,
}

impl Literal {
    /// Creates a plain string literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
        }
    }

    /// Creates a literal with an explicit datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
        }
    }
}

/// An OWL data range: a datatype or a boolean combination of data ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    /// A named datatype, by full IRI (e.g. `xsd:string`).
    Datatype(String),
    /// `owl:unionOf` over data ranges.
    Union(Vec<DataRange>),
    /// `owl:intersectionOf` over data ranges.
    Intersection(Vec<DataRange>),
    /// `owl:datatypeComplementOf`.
    Complement(Box<DataRange>),
    /// `owl:oneOf` over literals.
    OneOf(Vec<Literal>),
}

/// The filler of a restriction: a class expression for object properties, a
/// data range for datatype properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filler {
    /// Object-valued filler.
    Class(ClassExpression),
    /// Data-valued filler.
    Data(DataRange),
}

impl Filler {
    /// Returns the kind of property a restriction with this filler constrains.
    #[must_use]
    pub fn property_kind(&self) -> PropertyKind {
        match self {
            Filler::Class(_) => PropertyKind::Object,
            Filler::Data(_) => PropertyKind::Datatype,
        }
    }
}

/// The fixed value of an `owl:hasValue` restriction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A named individual, by full IRI.
    Individual(String),
    /// A literal.
    Literal(Literal),
}

/// An OWL class expression.
///
/// Restrictions carry the IRI of the property they constrain; whether the
/// restriction is object- or data-valued follows from the filler (or value)
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class, by full IRI.
    Class(String),
    /// `owl:unionOf`.
    Union(Vec<ClassExpression>),
    /// `owl:intersectionOf`.
    Intersection(Vec<ClassExpression>),
    /// `owl:complementOf`.
    Complement(Box<ClassExpression>),
    /// `owl:oneOf` over named individuals.
    OneOf(Vec<String>),
    /// `owl:someValuesFrom` / `owl:allValuesFrom`.
    Quantified {
        /// Full IRI of the restricted property.
        property: String,
        /// Existential or universal.
        kind: Quantifier,
        /// The filler.
        filler: Box<Filler>,
    },
    /// A (possibly qualified) cardinality restriction.
    Cardinality {
        /// Full IRI of the restricted property.
        property: String,
        /// Min, max or exact.
        kind: CardinalityKind,
        /// The cardinality bound.
        bound: u32,
        /// The qualifying filler, if any.
        filler: Option<Box<Filler>>,
    },
    /// `owl:hasValue`.
    HasValue {
        /// Full IRI of the restricted property.
        property: String,
        /// The fixed value.
        value: Value,
    },
}

impl ClassExpression {
    /// Returns the IRI if this expression is a named class.
    #[must_use]
    pub fn as_class(&self) -> Option<&str> {
        match self {
            ClassExpression::Class(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the IRI of the restricted property, if this is a restriction.
    #[must_use]
    pub fn restricted_property(&self) -> Option<&str> {
        match self {
            ClassExpression::Quantified { property, .. }
            | ClassExpression::Cardinality { property, .. }
            | ClassExpression::HasValue { property, .. } => Some(property),
            _ => None,
        }
    }

    /// Collects every named class mentioned anywhere in this expression.
    pub fn classes_in_signature<'a>(&'a self, out: &mut Vec<&'a str>) {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                ClassExpression::Class(iri) => {
                    if !out.contains(&iri.as_str()) {
                        out.push(iri);
                    }
                }
                ClassExpression::Union(ops) | ClassExpression::Intersection(ops) => {
                    stack.extend(ops.iter().rev());
                }
                ClassExpression::Complement(inner) => stack.push(inner),
                ClassExpression::Quantified { filler, .. } => {
                    if let Filler::Class(inner) = filler.as_ref() {
                        stack.push(inner);
                    }
                }
                ClassExpression::Cardinality { filler, .. } => {
                    if let Some(Filler::Class(inner)) = filler.as_deref() {
                        stack.push(inner);
                    }
                }
                ClassExpression::OneOf(_) | ClassExpression::HasValue { .. } => {}
            }
        }
    }
}

/// An OWL class definition.
#[derive(Debug, Clone, Default)]
pub struct Class {
    /// Full IRI (e.g. `"https://w3id.org/example#Course"`).
    pub id: String,
    /// Human-readable label (`rdfs:label`).
    pub label: Option<String>,
    /// Description (`rdfs:comment` or `skos:definition`).
    pub comment: Option<String>,
    /// Full IRIs of named parent classes (`rdfs:subClassOf`).
    pub subclass_of: Vec<String>,
    /// Anonymous superclass expressions (`rdfs:subClassOf` restrictions,
    /// complements, enumerations, combinators).
    pub restrictions: Vec<ClassExpression>,
    /// Expressions this class is declared equivalent to (`owl:equivalentClass`).
    pub equivalent_to: Vec<ClassExpression>,
}

impl Class {
    /// Creates a class with no axioms.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// An OWL property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: String,
    /// Human-readable label.
    pub label: Option<String>,
    /// Description.
    pub comment: Option<String>,
    /// Object or datatype property.
    pub kind: PropertyKind,
    /// Whether this is also an `owl:FunctionalProperty`.
    pub functional: bool,
    /// Domain axioms (`rdfs:domain`).
    pub domains: Vec<ClassExpression>,
    /// Range axioms (`rdfs:range`).
    pub ranges: Vec<Filler>,
}

impl Property {
    /// Creates a property of the given kind with no axioms.
    pub fn new(id: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            label: None,
            comment: None,
            kind,
            functional: false,
            domains: Vec::new(),
            ranges: Vec::new(),
        }
    }
}

/// A named individual (`owl:NamedIndividual`).
#[derive(Debug, Clone, Default)]
pub struct Individual {
    /// Full IRI.
    pub id: String,
    /// Full IRIs of the classes this individual is asserted to belong to.
    pub types: Vec<String>,
    /// Human-readable label.
    pub label: Option<String>,
    /// Description.
    pub comment: Option<String>,
}

/// An in-memory ontology: every class, property and individual by IRI, in
/// declaration order.
#[derive(Debug, Default)]
pub struct Ontology {
    /// IRI of the `owl:Ontology` node, if declared.
    pub base_iri: Option<String>,
    /// All classes, keyed by IRI.
    pub classes: IndexMap<String, Class>,
    /// All object and datatype properties, keyed by IRI.
    pub properties: IndexMap<String, Property>,
    /// All named individuals, keyed by IRI.
    pub individuals: IndexMap<String, Individual>,
}

impl Ontology {
    /// Creates an empty ontology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.classes.get(iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.properties.get(iri)
    }

    /// Looks up a named individual by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, iri: &str) -> Option<&Individual> {
        self.individuals.get(iri)
    }

    /// Returns the class with the given IRI, declaring it first if needed.
    pub fn class_mut(&mut self, iri: &str) -> &mut Class {
        self.classes
            .entry(iri.to_owned())
            .or_insert_with(|| Class::new(iri))
    }

    /// Returns the property with the given IRI, declaring it with `kind` first
    /// if needed. An existing property keeps its kind.
    pub fn property_mut(&mut self, iri: &str, kind: PropertyKind) -> &mut Property {
        self.properties
            .entry(iri.to_owned())
            .or_insert_with(|| Property::new(iri, kind))
    }

    /// Adds a class, replacing any previous definition with the same IRI.
    pub fn add_class(&mut self, class: Class) {
        self.classes.insert(class.id.clone(), class);
    }

    /// Adds a property, replacing any previous definition with the same IRI.
    pub fn add_property(&mut self, property: Property) {
        self.properties.insert(property.id.clone(), property);
    }

    /// Adds a named individual, replacing any previous definition.
    pub fn add_individual(&mut self, individual: Individual) {
        self.individuals.insert(individual.id.clone(), individual);
    }

    /// Merges another ontology into this one. Axioms of entities present in
    /// both are concatenated; scalar annotations keep the first value seen.
    pub fn merge(&mut self, other: Ontology) {
        if self.base_iri.is_none() {
            self.base_iri = other.base_iri;
        }
        for (iri, class) in other.classes {
            let target = self.class_mut(&iri);
            target.label = target.label.take().or(class.label);
            target.comment = target.comment.take().or(class.comment);
            extend_unique(&mut target.subclass_of, class.subclass_of);
            extend_unique(&mut target.restrictions, class.restrictions);
            extend_unique(&mut target.equivalent_to, class.equivalent_to);
        }
        for (iri, property) in other.properties {
            let target = self.property_mut(&iri, property.kind);
            target.label = target.label.take().or(property.label);
            target.comment = target.comment.take().or(property.comment);
            target.functional |= property.functional;
            extend_unique(&mut target.domains, property.domains);
            extend_unique(&mut target.ranges, property.ranges);
        }
        for (iri, individual) in other.individuals {
            let target = self
                .individuals
                .entry(iri.clone())
                .or_insert_with(|| Individual {
                    id: iri,
                    ..Individual::default()
                });
            target.label = target.label.take().or(individual.label);
            target.comment = target.comment.take().or(individual.comment);
            extend_unique(&mut target.types, individual.types);
        }
    }

    /// Returns the total number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the total number of object and datatype properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Returns the total number of named individuals.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Standard IRI constants used by the loader and the schema compiler.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SKOS namespace.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:Datatype`.
    pub const RDFS_DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    /// `rdfs:Literal`.
    pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
    /// `skos:definition`.
    pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:NamedIndividual`.
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:equivalentClass`.
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:unionOf`.
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:intersectionOf`.
    pub const OWL_INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// `owl:complementOf`.
    pub const OWL_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    /// `owl:datatypeComplementOf`.
    pub const OWL_DATATYPE_COMPLEMENT_OF: &str =
        "http://www.w3.org/2002/07/owl#datatypeComplementOf";
    /// `owl:oneOf`.
    pub const OWL_ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:someValuesFrom`.
    pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    /// `owl:allValuesFrom`.
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    /// `owl:hasValue`.
    pub const OWL_HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    /// `owl:minCardinality`.
    pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    /// `owl:maxCardinality`.
    pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `owl:cardinality`.
    pub const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    /// `owl:minQualifiedCardinality`.
    pub const OWL_MIN_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
    /// `owl:maxQualifiedCardinality`.
    pub const OWL_MAX_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";
    /// `owl:qualifiedCardinality`.
    pub const OWL_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    /// `owl:onClass`.
    pub const OWL_ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    /// `owl:onDataRange`.
    pub const OWL_ON_DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#onDataRange";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// Extracts the local name from a full IRI (after the last `/` or `#`,
/// ignoring trailing separators).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let iri = iri.trim_end_matches(['/', '#']);
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_extraction() {
        assert_eq!(local_name("https://w3id.org/example#Course"), "Course");
        assert_eq!(local_name("https://schema.org/Person"), "Person");
        assert_eq!(
            local_name("http://www.w3.org/2001/XMLSchema#string"),
            "string"
        );
        assert_eq!(local_name("https://w3id.org/example#"), "example");
        assert_eq!(local_name("https://w3id.org/vocab/"), "vocab");
    }

    #[test]
    fn classes_in_signature_walks_fillers() {
        let expr = ClassExpression::Quantified {
            property: "urn:p".into(),
            kind: Quantifier::Some,
            filler: Box::new(Filler::Class(ClassExpression::Union(vec![
                ClassExpression::Class("urn:A".into()),
                ClassExpression::Complement(Box::new(ClassExpression::Class("urn:B".into()))),
                ClassExpression::Class("urn:A".into()),
            ]))),
        };
        let mut out = Vec::new();
        expr.classes_in_signature(&mut out);
        assert_eq!(out, vec!["urn:A", "urn:B"]);
    }

    #[test]
    fn merge_concatenates_axioms() {
        let mut first = Ontology::new();
        let mut a = Class::new("urn:A");
        a.subclass_of.push("urn:B".into());
        a.label = Some("A".into());
        first.add_class(a);

        let mut second = Ontology::new();
        let mut a2 = Class::new("urn:A");
        a2.subclass_of.push("urn:B".into());
        a2.subclass_of.push("urn:C".into());
        a2.label = Some("Other".into());
        second.add_class(a2);
        second.add_property(Property::new("urn:p", PropertyKind::Datatype));

        first.merge(second);
        let merged = first.find_class("urn:A");
        assert_eq!(
            merged.map(|c| c.subclass_of.clone()),
            Some(vec!["urn:B".to_owned(), "urn:C".to_owned()])
        );
        assert_eq!(merged.and_then(|c| c.label.as_deref()), Some("A"));
        assert_eq!(first.property_count(), 1);
    }
}
