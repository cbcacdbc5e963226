//! Turtle → [`Ontology`] loader.
//!
//! Parsing is delegated to `sophia_turtle`; the resulting triples are copied
//! into an owned, subject-indexed graph and then interpreted through the
//! OWL 2 RDF mapping. Only the constructs the schema compiler consumes are
//! interpreted. Anything else that is well-formed is skipped with a warning.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::iris::*;
use crate::model::{
    CardinalityKind, ClassExpression, DataRange, Filler, Individual, Literal, Ontology,
    PropertyKind, Quantifier, Value,
};

/// Nesting limit for anonymous class expressions and data ranges.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

/// Failure to load an ontology.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid Turtle.
    #[error("turtle syntax error: {0}")]
    Syntax(String),
    /// The document is valid Turtle but an OWL construct is structurally broken
    /// (e.g. a restriction without `owl:onProperty`, an unterminated list).
    #[error("malformed axiom on {subject}: {reason}")]
    Malformed {
        /// The node the broken construct hangs off.
        subject: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A well-formed construct outside the supported OWL subset.
    #[error("unsupported construct on {subject}: {reason}")]
    Unsupported {
        /// The node the construct hangs off.
        subject: String,
        /// What was found.
        reason: String,
    },
}

/// Loads an ontology from a Turtle document.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] if the document does not parse and
/// [`LoadError::Malformed`] if an OWL construct in it is structurally broken.
pub fn load_turtle(source: &str) -> Result<Ontology, LoadError> {
    let graph = Graph::parse(source)?;
    debug!(subjects = graph.len(), "parsed turtle document");
    Interpreter::new(&graph).run()
}

/// Loads an ontology from a Turtle file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the errors
/// of [`load_turtle`].
pub fn load_file(path: &Path) -> Result<Ontology, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_turtle(&source)
}

/// Loads and merges several Turtle files into one ontology.
///
/// # Errors
///
/// Returns the first error of [`load_file`].
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Ontology, LoadError> {
    let mut ontology = Ontology::new();
    for path in paths {
        ontology.merge(load_file(path.as_ref())?);
    }
    Ok(ontology)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Node {
    Iri(String),
    Blank(String),
    Literal(Literal),
}

impl Node {
    fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Iri(iri) => format!("<{iri}>"),
            Node::Blank(id) => format!("_:{id}"),
            Node::Literal(lit) => format!("{:?}", lit.lexical),
        }
    }
}

fn to_node<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Node::Blank(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|lexical| {
            Node::Literal(Literal {
                lexical: lexical.to_string(),
                datatype: term.datatype().map(|dt| dt.as_str().to_owned()),
            })
        }),
        _ => None,
    }
}

/// Owned triples indexed by subject, in first-seen order.
#[derive(Default)]
struct Graph {
    by_subject: IndexMap<Node, Vec<(String, Node)>>,
}

impl Graph {
    fn parse(source: &str) -> Result<Self, LoadError> {
        let mut graph = Graph::default();
        turtle::parse_str(source)
            .for_each_triple(|t| {
                let subject = to_node(t.s());
                let predicate = t.p().iri().map(|iri| iri.as_str().to_owned());
                let object = to_node(t.o());
                if let (Some(s), Some(p), Some(o)) = (subject, predicate, object) {
                    graph.by_subject.entry(s).or_default().push((p, o));
                }
            })
            .map_err(|err| LoadError::Syntax(err.to_string()))?;
        Ok(graph)
    }

    fn len(&self) -> usize {
        self.by_subject.len()
    }

    fn objects<'a>(&'a self, subject: &Node, predicate: &'a str) -> impl Iterator<Item = &'a Node> {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .filter(move |(p, _)| p == predicate)
            .map(|(_, o)| o)
    }

    fn object<'a>(&'a self, subject: &Node, predicate: &'a str) -> Option<&'a Node> {
        self.objects(subject, predicate).next()
    }

    fn has_type(&self, subject: &Node, class: &str) -> bool {
        self.objects(subject, RDF_TYPE)
            .any(|o| o.as_iri() == Some(class))
    }

    fn list(&self, head: &Node) -> Result<Vec<&Node>, LoadError> {
        let mut items = Vec::new();
        let mut cursor = head;
        while cursor.as_iri() != Some(RDF_NIL) {
            if items.len() > self.len() {
                return Err(malformed(head, "rdf:List does not terminate"));
            }
            let first = self
                .object(cursor, RDF_FIRST)
                .ok_or_else(|| malformed(cursor, "list node without rdf:first"))?;
            items.push(first);
            cursor = self
                .object(cursor, RDF_REST)
                .ok_or_else(|| malformed(cursor, "list node without rdf:rest"))?;
        }
        Ok(items)
    }
}

fn malformed(node: &Node, reason: impl Into<String>) -> LoadError {
    LoadError::Malformed {
        subject: node.label(),
        reason: reason.into(),
    }
}

/// Steps one level into a nested expression. Blank-node cycles surface here
/// as a nesting overflow.
fn nested(node: &Node, depth: usize) -> Result<usize, LoadError> {
    if depth >= MAX_EXPRESSION_DEPTH {
        return Err(malformed(
            node,
            format!("expression nested deeper than {MAX_EXPRESSION_DEPTH} levels or cyclic"),
        ));
    }
    Ok(depth + 1)
}

fn unsupported(node: &Node, reason: impl Into<String>) -> LoadError {
    LoadError::Unsupported {
        subject: node.label(),
        reason: reason.into(),
    }
}

fn is_datatype_iri(iri: &str) -> bool {
    iri.starts_with(XSD) || iri == RDFS_LITERAL
}

struct Interpreter<'g> {
    graph: &'g Graph,
    ontology: Ontology,
    datatypes: HashSet<String>,
}

impl<'g> Interpreter<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            ontology: Ontology::new(),
            datatypes: HashSet::new(),
        }
    }

    fn run(mut self) -> Result<Ontology, LoadError> {
        self.declarations();
        let graph = self.graph;
        for (subject, _) in &graph.by_subject {
            let Some(iri) = subject.as_iri() else {
                continue;
            };
            self.class_axioms(subject, iri)?;
            self.property_axioms(subject, iri)?;
            self.annotations(subject, iri);
        }
        self.individuals();
        Ok(self.ontology)
    }

    /// Declares every typed class and property before any axiom is read, so
    /// restriction fillers can be classified by their property's kind.
    fn declarations(&mut self) {
        let graph = self.graph;
        for (subject, _) in &graph.by_subject {
            let Some(iri) = subject.as_iri() else {
                continue;
            };
            if graph.has_type(subject, OWL_ONTOLOGY) && self.ontology.base_iri.is_none() {
                self.ontology.base_iri = Some(iri.to_owned());
            }
            if graph.has_type(subject, OWL_CLASS) && iri != OWL_THING {
                self.ontology.class_mut(iri);
            }
            if graph.has_type(subject, RDFS_DATATYPE) {
                self.datatypes.insert(iri.to_owned());
            }
            let object = graph.has_type(subject, OWL_OBJECT_PROPERTY);
            let data = graph.has_type(subject, OWL_DATATYPE_PROPERTY);
            if data {
                self.ontology.property_mut(iri, PropertyKind::Datatype);
            } else if object {
                self.ontology.property_mut(iri, PropertyKind::Object);
            }
            if graph.has_type(subject, OWL_FUNCTIONAL_PROPERTY) {
                let kind = if data {
                    PropertyKind::Datatype
                } else {
                    PropertyKind::Object
                };
                self.ontology.property_mut(iri, kind).functional = true;
            }
        }
    }

    fn class_axioms(&mut self, subject: &Node, iri: &str) -> Result<(), LoadError> {
        let graph = self.graph;
        for parent in graph.objects(subject, RDFS_SUBCLASS_OF) {
            match parent {
                Node::Iri(parent_iri) => {
                    if parent_iri != OWL_THING {
                        self.ontology.class_mut(parent_iri);
                    }
                    let class = self.ontology.class_mut(iri);
                    if !class.subclass_of.contains(parent_iri) {
                        class.subclass_of.push(parent_iri.clone());
                    }
                }
                _ => {
                    if let Some(expr) = self.recoverable(self.class_expression(parent, 0))? {
                        self.ontology.class_mut(iri).restrictions.push(expr);
                    }
                }
            }
        }
        for equivalent in graph.objects(subject, OWL_EQUIVALENT_CLASS) {
            if let Some(expr) = self.recoverable(self.class_expression(equivalent, 0))? {
                self.ontology.class_mut(iri).equivalent_to.push(expr);
            }
        }
        Ok(())
    }

    fn property_axioms(&mut self, subject: &Node, iri: &str) -> Result<(), LoadError> {
        let graph = self.graph;
        let has_domain = graph.object(subject, RDFS_DOMAIN).is_some();
        let has_range = graph.object(subject, RDFS_RANGE).is_some();
        if !has_domain && !has_range {
            return Ok(());
        }
        if self.ontology.find_property(iri).is_none() {
            // Undeclared property: classify it by its range.
            let data = graph
                .objects(subject, RDFS_RANGE)
                .any(|r| r.as_iri().is_some_and(|dt| self.is_datatype(dt)));
            let kind = if data {
                PropertyKind::Datatype
            } else {
                PropertyKind::Object
            };
            debug!(property = iri, kind = kind.as_str(), "inferred undeclared property");
            self.ontology.property_mut(iri, kind);
        }
        let kind = self
            .ontology
            .find_property(iri)
            .map_or(PropertyKind::Object, |p| p.kind);

        for domain in graph.objects(subject, RDFS_DOMAIN) {
            if let Some(expr) = self.recoverable(self.class_expression(domain, 0))? {
                self.ontology.property_mut(iri, kind).domains.push(expr);
            }
        }
        for range in graph.objects(subject, RDFS_RANGE) {
            if let Some(filler) =
                self.recoverable(self.filler(range, kind == PropertyKind::Datatype, 0))?
            {
                self.ontology.property_mut(iri, kind).ranges.push(filler);
            }
        }
        Ok(())
    }

    fn annotations(&mut self, subject: &Node, iri: &str) {
        let graph = self.graph;
        let label = graph.object(subject, RDFS_LABEL).and_then(literal_text);
        let comment = graph
            .object(subject, RDFS_COMMENT)
            .or_else(|| graph.object(subject, SKOS_DEFINITION))
            .and_then(literal_text);
        if let Some(class) = self.ontology.classes.get_mut(iri) {
            class.label = class.label.take().or_else(|| label.clone());
            class.comment = class.comment.take().or_else(|| comment.clone());
        }
        if let Some(property) = self.ontology.properties.get_mut(iri) {
            property.label = property.label.take().or(label);
            property.comment = property.comment.take().or(comment);
        }
    }

    fn individuals(&mut self) {
        let graph = self.graph;
        for (subject, _) in &graph.by_subject {
            let Some(iri) = subject.as_iri() else {
                continue;
            };
            let types: Vec<String> = graph
                .objects(subject, RDF_TYPE)
                .filter_map(Node::as_iri)
                .filter(|t| !t.starts_with(OWL) && !t.starts_with(RDFS))
                .map(str::to_owned)
                .collect();
            let named = graph.has_type(subject, OWL_NAMED_INDIVIDUAL);
            let typed = types.iter().any(|t| self.ontology.classes.contains_key(t));
            if named || typed {
                self.ontology.add_individual(Individual {
                    id: iri.to_owned(),
                    types,
                    label: graph.object(subject, RDFS_LABEL).and_then(literal_text),
                    comment: graph.object(subject, RDFS_COMMENT).and_then(literal_text),
                });
            }
        }
    }

    /// Turns an [`LoadError::Unsupported`] into a skipped axiom.
    fn recoverable<T>(&self, result: Result<T, LoadError>) -> Result<Option<T>, LoadError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(LoadError::Unsupported { subject, reason }) => {
                warn!(%subject, %reason, "skipping unsupported axiom");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn is_datatype(&self, iri: &str) -> bool {
        is_datatype_iri(iri) || self.datatypes.contains(iri)
    }

    fn class_expression(&self, node: &Node, depth: usize) -> Result<ClassExpression, LoadError> {
        let graph = self.graph;
        let depth = nested(node, depth)?;
        match node {
            Node::Iri(iri) => Ok(ClassExpression::Class(iri.clone())),
            Node::Literal(_) => Err(malformed(node, "literal used as a class expression")),
            Node::Blank(_) => {
                if let Some(head) = graph.object(node, OWL_UNION_OF) {
                    let ops = self.class_list(head, depth)?;
                    Ok(ClassExpression::Union(ops))
                } else if let Some(head) = graph.object(node, OWL_INTERSECTION_OF) {
                    let ops = self.class_list(head, depth)?;
                    Ok(ClassExpression::Intersection(ops))
                } else if let Some(inner) = graph.object(node, OWL_COMPLEMENT_OF) {
                    Ok(ClassExpression::Complement(Box::new(
                        self.class_expression(inner, depth)?,
                    )))
                } else if let Some(head) = graph.object(node, OWL_ONE_OF) {
                    let individuals = graph
                        .list(head)?
                        .into_iter()
                        .map(|item| {
                            item.as_iri()
                                .map(str::to_owned)
                                .ok_or_else(|| malformed(node, "owl:oneOf member is not an IRI"))
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(ClassExpression::OneOf(individuals))
                } else if graph.object(node, OWL_ON_PROPERTY).is_some() {
                    self.restriction(node, depth)
                } else {
                    Err(unsupported(node, "anonymous class expression of unknown shape"))
                }
            }
        }
    }

    fn class_list(&self, head: &Node, depth: usize) -> Result<Vec<ClassExpression>, LoadError> {
        self.graph
            .list(head)?
            .into_iter()
            .map(|item| self.class_expression(item, depth))
            .collect()
    }

    fn restriction(&self, node: &Node, depth: usize) -> Result<ClassExpression, LoadError> {
        let graph = self.graph;
        let property = graph
            .object(node, OWL_ON_PROPERTY)
            .and_then(Node::as_iri)
            .ok_or_else(|| malformed(node, "owl:onProperty is not an IRI"))?
            .to_owned();
        let data = self.is_data_restriction(node, &property);

        for (predicate, kind) in [
            (OWL_SOME_VALUES_FROM, Quantifier::Some),
            (OWL_ALL_VALUES_FROM, Quantifier::All),
        ] {
            if let Some(filler) = graph.object(node, predicate) {
                return Ok(ClassExpression::Quantified {
                    property,
                    kind,
                    filler: Box::new(self.filler(filler, data, depth)?),
                });
            }
        }

        if let Some(value) = graph.object(node, OWL_HAS_VALUE) {
            let value = match value {
                Node::Iri(iri) => Value::Individual(iri.clone()),
                Node::Literal(lit) => Value::Literal(lit.clone()),
                Node::Blank(_) => return Err(unsupported(node, "owl:hasValue on a blank node")),
            };
            return Ok(ClassExpression::HasValue { property, value });
        }

        for (predicate, kind, qualified) in [
            (OWL_MIN_CARDINALITY, CardinalityKind::Min, false),
            (OWL_MAX_CARDINALITY, CardinalityKind::Max, false),
            (OWL_CARDINALITY, CardinalityKind::Exact, false),
            (OWL_MIN_QUALIFIED_CARDINALITY, CardinalityKind::Min, true),
            (OWL_MAX_QUALIFIED_CARDINALITY, CardinalityKind::Max, true),
            (OWL_QUALIFIED_CARDINALITY, CardinalityKind::Exact, true),
        ] {
            let Some(bound) = graph.object(node, predicate) else {
                continue;
            };
            let bound = match bound {
                Node::Literal(lit) => lit.lexical.trim().parse::<u32>().ok(),
                _ => None,
            }
            .ok_or_else(|| malformed(node, "cardinality is not a non-negative integer"))?;
            let filler = if qualified {
                let target = graph
                    .object(node, OWL_ON_CLASS)
                    .or_else(|| graph.object(node, OWL_ON_DATA_RANGE))
                    .ok_or_else(|| {
                        malformed(node, "qualified cardinality without onClass/onDataRange")
                    })?;
                Some(Box::new(self.filler(target, data, depth)?))
            } else {
                None
            };
            return Ok(ClassExpression::Cardinality {
                property,
                kind,
                bound,
                filler,
            });
        }

        Err(unsupported(node, "restriction of unknown shape"))
    }

    fn is_data_restriction(&self, node: &Node, property: &str) -> bool {
        if let Some(declared) = self.ontology.find_property(property) {
            return declared.kind == PropertyKind::Datatype;
        }
        let graph = self.graph;
        if graph.object(node, OWL_ON_DATA_RANGE).is_some() {
            return true;
        }
        if matches!(graph.object(node, OWL_HAS_VALUE), Some(Node::Literal(_))) {
            return true;
        }
        [OWL_SOME_VALUES_FROM, OWL_ALL_VALUES_FROM]
            .into_iter()
            .filter_map(|p| graph.object(node, p))
            .any(|filler| self.looks_like_data_range(filler))
    }

    fn looks_like_data_range(&self, node: &Node) -> bool {
        match node {
            Node::Iri(iri) => self.is_datatype(iri),
            Node::Literal(_) => false,
            Node::Blank(_) => {
                let graph = self.graph;
                graph.has_type(node, RDFS_DATATYPE)
                    || graph.object(node, OWL_DATATYPE_COMPLEMENT_OF).is_some()
                    || graph
                        .object(node, OWL_ONE_OF)
                        .and_then(|head| graph.list(head).ok())
                        .and_then(|items| items.first().copied())
                        .is_some_and(|first| matches!(first, Node::Literal(_)))
            }
        }
    }

    fn filler(&self, node: &Node, data: bool, depth: usize) -> Result<Filler, LoadError> {
        if data {
            Ok(Filler::Data(self.data_range(node, depth)?))
        } else {
            Ok(Filler::Class(self.class_expression(node, depth)?))
        }
    }

    fn data_range(&self, node: &Node, depth: usize) -> Result<DataRange, LoadError> {
        let graph = self.graph;
        let depth = nested(node, depth)?;
        match node {
            Node::Iri(iri) => Ok(DataRange::Datatype(iri.clone())),
            Node::Literal(_) => Err(malformed(node, "literal used as a data range")),
            Node::Blank(_) => {
                if let Some(head) = graph.object(node, OWL_UNION_OF) {
                    Ok(DataRange::Union(self.data_list(head, depth)?))
                } else if let Some(head) = graph.object(node, OWL_INTERSECTION_OF) {
                    Ok(DataRange::Intersection(self.data_list(head, depth)?))
                } else if let Some(inner) = graph.object(node, OWL_DATATYPE_COMPLEMENT_OF) {
                    Ok(DataRange::Complement(Box::new(self.data_range(inner, depth)?)))
                } else if let Some(head) = graph.object(node, OWL_ONE_OF) {
                    let literals = graph
                        .list(head)?
                        .into_iter()
                        .map(|item| match item {
                            Node::Literal(lit) => Ok(lit.clone()),
                            _ => Err(malformed(node, "data owl:oneOf member is not a literal")),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(DataRange::OneOf(literals))
                } else if let Some(base) = graph
                    .object(node, &format!("{OWL}onDatatype"))
                    .and_then(Node::as_iri)
                {
                    warn!(datatype = base, "dropping facets of datatype restriction");
                    Ok(DataRange::Datatype(base.to_owned()))
                } else {
                    Err(unsupported(node, "anonymous data range of unknown shape"))
                }
            }
        }
    }

    fn data_list(&self, head: &Node, depth: usize) -> Result<Vec<DataRange>, LoadError> {
        self.graph
            .list(head)?
            .into_iter()
            .map(|item| self.data_range(item, depth))
            .collect()
    }
}

fn literal_text(node: &Node) -> Option<String> {
    match node {
        Node::Literal(lit) => Some(lit.lexical.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::OntologyAccess;
    use crate::fixtures::UNIVERSITY;

    const EX: &str = "https://w3id.org/example#";

    fn ex(local: &str) -> String {
        format!("{EX}{local}")
    }

    #[test]
    fn university_declarations() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        assert!(onto.contains_class(&ex("University")));
        assert!(onto.contains_class(&ex("AmericanStudent")));
        assert_eq!(
            onto.find_property(&ex("hasRector")).map(|p| (p.kind, p.functional)),
            Some((PropertyKind::Object, true))
        );
        assert_eq!(
            onto.find_property(&ex("label")).map(|p| p.kind),
            Some(PropertyKind::Datatype)
        );
        assert_eq!(
            onto.direct_superclasses(&ex("AmericanStudent")),
            Ok(vec![ex("Student").as_str()])
        );
    }

    #[test]
    fn union_filler_is_parsed() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let restrictions = onto
            .restriction_axioms(&ex("StudyMaterial"))
            .expect("class exists");
        let expected = ClassExpression::Quantified {
            property: ex("author"),
            kind: Quantifier::Some,
            filler: Box::new(Filler::Class(ClassExpression::Union(vec![
                ClassExpression::Class(ex("Organization")),
                ClassExpression::Class(ex("Person")),
            ]))),
        };
        assert!(restrictions.contains(&expected));
    }

    #[test]
    fn data_one_of_is_parsed() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let restrictions = onto.restriction_axioms(&ex("Person")).expect("class exists");
        let gender = restrictions
            .iter()
            .find(|r| r.restricted_property() == Some(ex("gender").as_str()));
        match gender {
            Some(ClassExpression::Quantified { filler, .. }) => match filler.as_ref() {
                Filler::Data(DataRange::OneOf(values)) => {
                    let lexical: Vec<&str> = values.iter().map(|v| v.lexical.as_str()).collect();
                    assert_eq!(lexical, vec!["female", "male"]);
                }
                other => panic!("unexpected filler {other:?}"),
            },
            other => panic!("unexpected restriction {other:?}"),
        }
    }

    #[test]
    fn exact_cardinality_and_complement() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let american = onto
            .restriction_axioms(&ex("AmericanStudent"))
            .expect("class exists");
        assert!(american.contains(&ClassExpression::Cardinality {
            property: ex("hasRecord"),
            kind: CardinalityKind::Exact,
            bound: 5,
            filler: None,
        }));
        let non_student = onto
            .equivalent_class_axioms(&ex("NonStudent"))
            .expect("class exists");
        assert_eq!(
            non_student,
            &[ClassExpression::Complement(Box::new(ClassExpression::Class(
                ex("Student")
            )))]
        );
    }

    #[test]
    fn broken_restriction_is_malformed() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <https://w3id.org/example#> .

ex:A a owl:Class ;
    rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:cardinality "many" ] .
"#;
        assert!(matches!(
            load_turtle(source),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn self_referencing_blank_node_is_malformed() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <https://w3id.org/example#> .

ex:A a owl:Class ;
    owl:equivalentClass _:c .
_:c owl:complementOf _:c .
"#;
        assert!(matches!(
            load_turtle(source),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn cyclic_union_is_malformed() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <https://w3id.org/example#> .

ex:A a owl:Class ;
    rdfs:subClassOf _:u .
_:u owl:unionOf ( ex:B _:u ) .
"#;
        assert!(matches!(
            load_turtle(source),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn unknown_shape_is_skipped() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <https://w3id.org/example#> .

ex:A a owl:Class ;
    rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:hasSelf true ] .
"#;
        let onto = load_turtle(source).expect("unsupported axioms are skipped");
        assert_eq!(onto.restriction_axioms(&ex("A")).map(<[_]>::len), Ok(0));
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(matches!(
            load_turtle("@prefix ex: <urn:x> . ex:a ex:b"),
            Err(LoadError::Syntax(_))
        ));
    }
}
