//! Restriction compiler.
//!
//! Walks a class and its named superclasses depth-first and resolves every
//! restriction and equivalent-class axiom into the class's property map
//! through the fragment builder. Both walks use explicit stacks: the class
//! walk over superclass edges, and the axiom walk over [`WorkItem`]s that
//! carry the property context their expression applies to.

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexSet;
use tracing::debug;

use oas_ontology::model::iris::OWL_THING;
use oas_ontology::{
    local_name, AccessError, CardinalityKind, ClassExpression, DataRange, Filler,
    OntologyAccess, PropertyKind, Quantifier, Value,
};

use crate::builder::{self, Findings, Outcome, Unrecognized};
use crate::config::{Flags, DEFAULT_DESCRIPTION};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::SchemaError;
use crate::mapping::{individual_value, literal_value};
use crate::schema::{BaseKind, ClassSchema, Composition, Fragment, PropertySchema};

/// One pending expression of the axiom walk.
#[derive(Debug, Clone, Copy)]
pub struct WorkItem<'a> {
    /// The expression to resolve.
    pub expr: &'a ClassExpression,
    /// IRI of the property the expression describes; `None` when it
    /// describes the class itself.
    pub context: Option<&'a str>,
}

/// Per-compilation traversal bookkeeping.
#[derive(Debug, Default)]
pub struct TraversalState<'a> {
    visited_classes: HashSet<String>,
    visited_owners: HashSet<String>,
    stack: Vec<WorkItem<'a>>,
}

impl TraversalState<'_> {
    /// Returns true if the class walk has reached `class`.
    #[must_use]
    pub fn is_visited(&self, class: &str) -> bool {
        self.visited_classes.contains(class)
    }

    /// Returns true if the axioms of `owner` have been resolved.
    #[must_use]
    pub fn is_resolved(&self, owner: &str) -> bool {
        self.visited_owners.contains(owner)
    }
}

/// Returns every named ancestor of `class` in depth-first order, excluding
/// the class itself and `owl:Thing`. Cycles are cut at the first revisit.
///
/// # Errors
///
/// Returns [`AccessError::UnknownClass`] if `class` or an ancestor is not
/// declared.
pub fn ancestors<A: OntologyAccess + ?Sized>(
    access: &A,
    class: &str,
) -> Result<Vec<String>, AccessError> {
    let mut seen: HashSet<String> = HashSet::from([class.to_owned()]);
    let mut order = Vec::new();
    let mut stack: Vec<String> = access
        .direct_superclasses(class)?
        .into_iter()
        .rev()
        .map(str::to_owned)
        .collect();
    while let Some(current) = stack.pop() {
        if !seen.insert(current.clone()) {
            continue;
        }
        stack.extend(
            access
                .direct_superclasses(&current)?
                .into_iter()
                .rev()
                .map(str::to_owned),
        );
        order.push(current);
    }
    Ok(order)
}

/// Compiles the axioms of one base class into its [`ClassSchema`].
pub struct RestrictionCompiler<'a, A: OntologyAccess + ?Sized> {
    access: &'a A,
    flags: &'a Flags,
    class: String,
    state: TraversalState<'a>,
    referenced: IndexSet<String>,
}

impl<'a, A: OntologyAccess + ?Sized> RestrictionCompiler<'a, A> {
    /// Creates a compiler for the class `class`.
    pub fn new(access: &'a A, flags: &'a Flags, class: &str) -> Self {
        Self {
            access,
            flags,
            class: class.to_owned(),
            state: TraversalState::default(),
            referenced: IndexSet::new(),
        }
    }

    /// Returns the traversal state.
    #[must_use]
    pub fn state(&self) -> &TraversalState<'a> {
        &self.state
    }

    /// Returns the IRIs of every class referenced so far.
    #[must_use]
    pub fn referenced(&self) -> &IndexSet<String> {
        &self.referenced
    }

    /// Consumes the compiler, returning the referenced classes in discovery
    /// order.
    #[must_use]
    pub fn into_referenced(self) -> Vec<String> {
        self.referenced.into_iter().collect()
    }

    /// Adds the properties whose domain is `owner` as plain declarations.
    /// Properties already declared from the ontology are kept.
    pub fn declare(
        &mut self,
        owner: &str,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) {
        let access = self.access;
        for kind in [PropertyKind::Datatype, PropertyKind::Object] {
            for axiom in access.domain_axioms_for(owner, kind) {
                self.property_mut(schema, axiom.property, diagnostics);
            }
        }
    }

    /// Resolves the restriction and equivalent-class axioms of the base class
    /// and all of its ancestors. Classes and owners already visited by this
    /// compiler are skipped, so repeated calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Access`] if a class on the walk is not declared.
    pub fn compile(
        &mut self,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), SchemaError> {
        let access = self.access;
        let mut classes = vec![self.class.clone()];
        while let Some(current) = classes.pop() {
            if current == OWL_THING || !self.state.visited_classes.insert(current.clone()) {
                continue;
            }
            self.resolve_owner(&current, schema, diagnostics)?;
            classes.extend(
                access
                    .direct_superclasses(&current)?
                    .into_iter()
                    .rev()
                    .map(str::to_owned),
            );
        }
        Ok(())
    }

    fn resolve_owner(
        &mut self,
        owner: &str,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), SchemaError> {
        if !self.state.visited_owners.insert(owner.to_owned()) {
            return Ok(());
        }
        let access = self.access;
        let restrictions = access.restriction_axioms(owner)?;
        let equivalents = access.equivalent_class_axioms(owner)?;
        debug!(
            owner = local_name(owner),
            restrictions = restrictions.len(),
            equivalents = equivalents.len(),
            "resolving axioms"
        );
        self.state.stack.extend(
            restrictions
                .iter()
                .chain(equivalents)
                .rev()
                .map(|expr| WorkItem { expr, context: None }),
        );
        while let Some(item) = self.state.stack.pop() {
            self.resolve(item, schema, diagnostics);
        }
        Ok(())
    }

    fn resolve(
        &mut self,
        item: WorkItem<'a>,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) {
        match (item.expr, item.context) {
            (ClassExpression::Class(iri), None) => {
                if iri != OWL_THING && self.flags.follow_references {
                    self.referenced.insert(iri.clone());
                }
            }
            (ClassExpression::Union(ops) | ClassExpression::Intersection(ops), None) => {
                self.state.stack.extend(
                    ops.iter()
                        .rev()
                        .map(|expr| WorkItem { expr, context: None }),
                );
            }
            (ClassExpression::Complement(inner), context) => {
                let mut findings = Findings::default();
                let follow = self.flags.follow_references;
                let built = builder::expression_fragment(inner, follow, &mut findings);
                match built {
                    Ok(fragment) => match context {
                        None => self.set_class_complement(schema, fragment, diagnostics),
                        Some(property) => {
                            let prop = self.property_mut(schema, property, diagnostics);
                            let outcome = builder::set_complement(prop, fragment);
                            self.report(outcome, property, "complementOf", diagnostics);
                        }
                    },
                    Err(err) => {
                        let subject = context.map_or_else(|| schema.iri.clone(), str::to_owned);
                        self.unrecognized(subject, err, diagnostics);
                    }
                }
                self.absorb(findings, diagnostics);
            }
            (ClassExpression::OneOf(individuals), None) => {
                for individual in individuals {
                    let value = individual_value(individual);
                    if !schema.enum_values.contains(&value) {
                        schema.enum_values.push(value);
                    }
                }
            }
            (ClassExpression::OneOf(individuals), Some(property)) => {
                let prop = self.property_mut(schema, property, diagnostics);
                let outcomes: Vec<Outcome> = individuals
                    .iter()
                    .map(|individual| {
                        let value = individual_value(individual);
                        builder::add_one_of(prop, value, Some(BaseKind::String))
                    })
                    .collect();
                for outcome in outcomes {
                    self.report(outcome, property, "oneOf", diagnostics);
                }
            }
            (
                ClassExpression::Quantified {
                    property,
                    kind,
                    filler,
                },
                None,
            ) => self.apply_quantified(property, *kind, filler, schema, diagnostics),
            (
                ClassExpression::Cardinality {
                    property,
                    kind,
                    bound,
                    filler,
                },
                None,
            ) => self.apply_cardinality(
                property,
                *kind,
                *bound,
                filler.as_deref(),
                schema,
                diagnostics,
            ),
            (ClassExpression::HasValue { property, value }, None) => {
                self.apply_has_value(property, value, schema, diagnostics);
            }
            (expr, Some(property)) => {
                let shape = match expr {
                    ClassExpression::Class(_) => "class",
                    ClassExpression::Union(_) | ClassExpression::Intersection(_) => "combinator",
                    _ => "restriction",
                };
                self.unrecognized(
                    property.to_owned(),
                    Unrecognized(format!("nested {shape} in the filler of <{property}>")),
                    diagnostics,
                );
            }
        }
    }

    fn apply_quantified(
        &mut self,
        property: &'a str,
        kind: Quantifier,
        filler: &'a Filler,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) {
        match filler {
            Filler::Class(expr @ (ClassExpression::OneOf(_) | ClassExpression::Complement(_))) => {
                let prop = self.property_mut(schema, property, diagnostics);
                if kind == Quantifier::Some {
                    prop.nullable = false;
                }
                self.state.stack.push(WorkItem {
                    expr,
                    context: Some(property),
                });
            }
            Filler::Class(ClassExpression::Class(iri)) if iri == OWL_THING => {
                let prop = self.property_mut(schema, property, diagnostics);
                prop.nullable = kind == Quantifier::All;
            }
            Filler::Data(DataRange::OneOf(literals)) => {
                let prop = self.property_mut(schema, property, diagnostics);
                let outcomes: Vec<Outcome> = literals
                    .iter()
                    .map(|literal| {
                        let (value, kind) = literal_value(literal);
                        builder::add_one_of(prop, value, kind)
                    })
                    .collect();
                for outcome in outcomes {
                    self.report(outcome, property, "oneOf", diagnostics);
                }
            }
            _ => {
                let mut findings = Findings::default();
                let built =
                    builder::filler_fragment(filler, self.flags.follow_references, &mut findings);
                match built {
                    Ok(fragment) => {
                        let prop = self.property_mut(schema, property, diagnostics);
                        let outcome = apply_quantified_fragment(prop, kind, fragment);
                        self.report(outcome, property, quantifier_name(kind), diagnostics);
                    }
                    Err(err) => self.unrecognized(property.to_owned(), err, diagnostics),
                }
                self.absorb(findings, diagnostics);
            }
        }
    }

    fn apply_cardinality(
        &mut self,
        property: &str,
        kind: CardinalityKind,
        bound: u32,
        filler: Option<&Filler>,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) {
        let prop = self.property_mut(schema, property, diagnostics);
        let (outcome, name) = match kind {
            CardinalityKind::Min => (builder::set_min_cardinality(prop, bound), "minCardinality"),
            CardinalityKind::Max => (builder::set_max_cardinality(prop, bound), "maxCardinality"),
            CardinalityKind::Exact => (builder::set_exact_cardinality(prop, bound), "cardinality"),
        };
        let filler = match filler {
            Some(filler) if outcome != Outcome::Conflict => filler,
            _ => {
                self.report(outcome, property, name, diagnostics);
                return;
            }
        };
        let mut findings = Findings::default();
        let narrowed = builder::filler_fragment(filler, self.flags.follow_references, &mut findings)
            .map(|fragment| builder::narrow_item(prop, fragment));
        self.report(outcome, property, name, diagnostics);
        match narrowed {
            Ok(Outcome::Blocked) => {
                debug!(
                    property = local_name(property),
                    "qualified filler ignored: item already restricted"
                );
            }
            Ok(_) => {}
            Err(err) => self.unrecognized(property.to_owned(), err, diagnostics),
        }
        self.absorb(findings, diagnostics);
    }

    fn apply_has_value(
        &mut self,
        property: &str,
        value: &Value,
        schema: &mut ClassSchema,
        diagnostics: &mut Diagnostics,
    ) {
        let (json, kind) = match value {
            Value::Individual(iri) => (individual_value(iri), Some(BaseKind::String)),
            Value::Literal(literal) => literal_value(literal),
        };
        let prop = self.property_mut(schema, property, diagnostics);
        let outcome = builder::set_has_value(prop, json, kind);
        self.report(outcome, property, "hasValue", diagnostics);
    }

    fn set_class_complement(
        &mut self,
        schema: &mut ClassSchema,
        fragment: Fragment,
        diagnostics: &mut Diagnostics,
    ) {
        match &schema.complement {
            None => schema.complement = Some(fragment),
            Some(current) if *current == fragment => {}
            Some(_) => diagnostics.record(
                DiagnosticKind::ConflictingRestriction,
                &self.class,
                &schema.iri,
                "complementOf discarded: the class already has a complement",
            ),
        }
    }

    /// Returns the schema of `property`, declaring it from its ranges first
    /// if the class has no ontology-backed property of that name yet.
    fn property_mut<'s>(
        &mut self,
        schema: &'s mut ClassSchema,
        property: &str,
        diagnostics: &mut Diagnostics,
    ) -> &'s mut PropertySchema {
        match schema.properties.entry(local_name(property).to_owned()) {
            Entry::Occupied(entry) if entry.get().iri.is_some() => entry.into_mut(),
            Entry::Occupied(mut entry) => {
                entry.insert(self.new_property(property, diagnostics));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(self.new_property(property, diagnostics)),
        }
    }

    fn new_property(&mut self, property: &str, diagnostics: &mut Diagnostics) -> PropertySchema {
        let access = self.access;
        let ranges = access.property_range_axioms(property).unwrap_or(&[]);
        let mut findings = Findings::default();
        let (mut prop, skipped) = builder::declared_property(
            property,
            ranges,
            self.flags.follow_references,
            &mut findings,
        );
        if ranges.is_empty() {
            diagnostics.record(
                DiagnosticKind::MissingRange,
                &self.class,
                property,
                "property has no range; emitting an untyped item",
            );
        }
        for err in skipped {
            self.unrecognized(property.to_owned(), err, diagnostics);
        }
        self.absorb(findings, diagnostics);
        if access.is_functional(property) {
            let _ = builder::set_functional(&mut prop);
        }
        prop.description = access
            .description(property)
            .map(str::to_owned)
            .or_else(|| {
                self.flags
                    .default_descriptions
                    .then(|| DEFAULT_DESCRIPTION.to_owned())
            });
        prop
    }

    fn absorb(&mut self, findings: Findings, diagnostics: &mut Diagnostics) {
        self.referenced.extend(findings.referenced);
        for datatype in findings.unmapped {
            diagnostics.record(
                DiagnosticKind::UnmappableDatatype,
                &self.class,
                &datatype,
                "datatype has no schema mapping; emitting an untyped item",
            );
        }
    }

    fn unrecognized(&self, subject: String, err: Unrecognized, diagnostics: &mut Diagnostics) {
        diagnostics.record(
            DiagnosticKind::UnrecognizedRestrictionShape,
            &self.class,
            &subject,
            format!("axiom skipped: {}", err.0),
        );
    }

    fn report(&self, outcome: Outcome, property: &str, what: &str, diagnostics: &mut Diagnostics) {
        match outcome {
            Outcome::Conflict => diagnostics.record(
                DiagnosticKind::ConflictingRestriction,
                &self.class,
                property,
                format!("{what} discarded: conflicts with an earlier restriction"),
            ),
            Outcome::Blocked => {
                debug!(
                    property = local_name(property),
                    what, "write blocked by higher-priority content"
                );
            }
            Outcome::Applied | Outcome::Unchanged => {}
        }
    }
}

fn quantifier_name(kind: Quantifier) -> &'static str {
    match kind {
        Quantifier::Some => "someValuesFrom",
        Quantifier::All => "allValuesFrom",
    }
}

/// Writes the fragment of a quantified restriction's filler.
fn apply_quantified_fragment(
    prop: &mut PropertySchema,
    kind: Quantifier,
    fragment: Fragment,
) -> Outcome {
    match fragment {
        Fragment::Composed {
            mode: mode @ (Composition::AnyOf | Composition::AllOf),
            children,
        } => {
            let outcome = builder::compose(prop, mode, children);
            if outcome.applied() {
                prop.nullable = kind == Quantifier::All;
            }
            outcome
        }
        Fragment::Composed {
            mode: Composition::Not,
            mut children,
        } if children.len() == 1 => builder::set_complement(prop, children.remove(0)),
        fragment => match kind {
            Quantifier::Some => builder::add_any_of(prop, fragment),
            Quantifier::All => builder::add_all_of(prop, fragment),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_ontology::fixtures::{INHERITANCE, UNIVERSITY};
    use oas_ontology::loader::load_turtle;
    use oas_ontology::Ontology;

    const EX: &str = "https://w3id.org/example#";

    fn ex(local: &str) -> String {
        format!("{EX}{local}")
    }

    fn compile(
        onto: &Ontology,
        class: &str,
        flags: &Flags,
    ) -> (ClassSchema, Vec<String>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let mut schema = ClassSchema::new(&ex(class));
        let mut compiler = RestrictionCompiler::new(onto, flags, &ex(class));
        compiler.declare(&ex(class), &mut schema, &mut diagnostics);
        compiler.compile(&mut schema, &mut diagnostics).expect("class compiles");
        (schema, compiler.into_referenced(), diagnostics)
    }

    #[test]
    fn ancestors_are_depth_first_and_cycle_safe() {
        let onto = load_turtle(INHERITANCE).expect("fixture parses");
        assert_eq!(
            ancestors(&onto, &ex("TeachingAssistant")).expect("declared"),
            vec![ex("Employee"), ex("Person"), ex("Agent"), ex("Student")]
        );
        assert_eq!(ancestors(&onto, &ex("Chicken")).expect("declared"), vec![ex("Egg")]);
    }

    #[test]
    fn functional_property_is_single_reference() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let (schema, referenced, _) = compile(&onto, "University", &Flags::default());
        let rector = &schema.properties["hasRector"];
        assert!(rector.array);
        assert_eq!(rector.item, Fragment::Reference(ex("Rector")));
        assert_eq!(rector.max_items, Some(1));
        assert!(rector.functional);
        assert!(!rector.nullable);
        assert!(!schema.properties["hasDepartment"].nullable);
        assert!(referenced.contains(&ex("Rector")));
        assert!(referenced.contains(&ex("Department")));
    }

    #[test]
    fn union_filler_becomes_any_of() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let (schema, referenced, diagnostics) = compile(&onto, "StudyMaterial", &Flags::default());
        let author = &schema.properties["author"];
        assert_eq!(
            author.item,
            Fragment::Composed {
                mode: Composition::AnyOf,
                children: vec![
                    Fragment::Reference(ex("Organization")),
                    Fragment::Reference(ex("Person")),
                ],
            }
        );
        assert!(!author.nullable);
        assert!(referenced.contains(&ex("Organization")));
        assert_eq!(diagnostics.count(DiagnosticKind::MissingRange), 1);
        assert_eq!(diagnostics.count(DiagnosticKind::UnmappableDatatype), 1);
        assert_eq!(schema.properties["isbn"].item, Fragment::Generic);
        assert_eq!(
            schema.properties["pages"].item,
            Fragment::Primitive(BaseKind::Integer)
        );
    }

    #[test]
    fn intersection_filler_becomes_all_of() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let (schema, _, _) = compile(&onto, "Course", &Flags::default());
        let method = &schema.properties["hasEvaluationMethod"];
        assert_eq!(method.item.composition(), Some(Composition::AllOf));
        assert!(method.nullable);
        assert_eq!(schema.properties["hasStudent"].max_items, Some(20));
        assert_eq!(
            schema.properties["credits"].item,
            Fragment::Primitive(BaseKind::Number)
        );
    }

    #[test]
    fn inherited_restrictions_are_applied() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let (schema, _, _) = compile(&onto, "AmericanStudent", &Flags::default());
        let record = &schema.properties["hasRecord"];
        assert_eq!((record.min_items, record.max_items), (Some(5), Some(5)));

        let courses = &schema.properties["takesCourse"];
        assert_eq!(courses.min_items, Some(2));
        assert_eq!(courses.item, Fragment::Reference(ex("Course")));

        let enrolled = &schema.properties["enrolledIn"];
        assert_eq!(enrolled.item.composition(), Some(Composition::AnyOf));
        assert!(!enrolled.nullable);

        let gender = &schema.properties["gender"];
        assert_eq!(
            gender.enum_values,
            vec![serde_json::json!("female"), serde_json::json!("male")]
        );
        assert_eq!(gender.item, Fragment::Primitive(BaseKind::String));

        let lives_in = &schema.properties["livesIn"];
        assert_eq!(lives_in.default, Some(serde_json::json!("USA")));
        assert!(lives_in.array);
    }

    #[test]
    fn complement_and_enumeration_at_class_level() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let (non_student, referenced, _) = compile(&onto, "NonStudent", &Flags::default());
        assert_eq!(non_student.complement, Some(Fragment::Reference(ex("Student"))));
        assert!(non_student.properties.is_empty());
        assert_eq!(referenced, vec![ex("Student")]);

        let (weekday, _, _) = compile(&onto, "Weekday", &Flags::default());
        assert_eq!(
            weekday.enum_values,
            vec![
                serde_json::json!("Monday"),
                serde_json::json!("Tuesday"),
                serde_json::json!("Wednesday")
            ]
        );
    }

    #[test]
    fn first_inherited_restriction_wins() {
        let onto = load_turtle(INHERITANCE).expect("fixture parses");
        let (schema, _, diagnostics) = compile(&onto, "TeachingAssistant", &Flags::default());
        assert_eq!(schema.properties["worksFor"].max_items, Some(1));
        assert_eq!(diagnostics.count(DiagnosticKind::ConflictingRestriction), 1);
    }

    #[test]
    fn discarded_qualified_cardinality_keeps_item() {
        let source = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <https://w3id.org/example#> .

ex:X a owl:Class .
ex:Y a owl:Class .
ex:Super a owl:Class ;
    rdfs:subClassOf [ a owl:Restriction ;
        owl:onProperty ex:p ;
        owl:maxQualifiedCardinality "2"^^xsd:nonNegativeInteger ;
        owl:onClass ex:Y ] .
ex:Sub a owl:Class ;
    rdfs:subClassOf ex:Super ,
        [ a owl:Restriction ;
          owl:onProperty ex:p ;
          owl:maxCardinality "1"^^xsd:nonNegativeInteger ] .
ex:p a owl:ObjectProperty ;
    rdfs:range ex:X .
"#;
        let onto = load_turtle(source).expect("ontology parses");
        let (schema, referenced, diagnostics) = compile(&onto, "Sub", &Flags::default());
        let p = &schema.properties["p"];
        assert_eq!(p.item, Fragment::Reference(ex("X")));
        assert_eq!(p.max_items, Some(1));
        assert_eq!(diagnostics.count(DiagnosticKind::ConflictingRestriction), 1);
        assert_eq!(referenced, vec![ex("X")]);
    }

    #[test]
    fn recompiling_is_a_no_op() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let flags = Flags::default();
        let mut diagnostics = Diagnostics::new();
        let mut schema = ClassSchema::new(&ex("AmericanStudent"));
        let mut compiler = RestrictionCompiler::new(&onto, &flags, &ex("AmericanStudent"));
        compiler.compile(&mut schema, &mut diagnostics).expect("class compiles");
        let first = schema.clone();
        let recorded = diagnostics.entries.len();
        compiler.compile(&mut schema, &mut diagnostics).expect("class compiles");
        assert_eq!(schema, first);
        assert_eq!(diagnostics.entries.len(), recorded);
        assert!(compiler.state().is_visited(&ex("Person")));
        assert!(compiler.state().is_resolved(&ex("Student")));
    }

    #[test]
    fn object_ranges_without_references() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let flags = Flags {
            follow_references: false,
            ..Flags::default()
        };
        let (schema, referenced, _) = compile(&onto, "University", &flags);
        assert_eq!(
            schema.properties["hasRector"].item,
            Fragment::Primitive(BaseKind::Object)
        );
        assert!(referenced.is_empty());
    }
}
