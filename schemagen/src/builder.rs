//! Schema fragment builder.
//!
//! Stateless operations turning ranges, fillers and single restrictions into
//! schema content. Writes to a [`PropertySchema`] respect one priority table:
//!
//! | rank | content             | written by                          |
//! |------|---------------------|-------------------------------------|
//! | 1    | default             | [`set_has_value`]                   |
//! | 2    | enum                | [`add_one_of`], [`set_has_value`]   |
//! | 3    | anyOf / allOf / not | [`add_any_of`], [`add_all_of`], [`compose`], [`set_complement`] |
//! | 4    | bare item           | ranges, qualified cardinalities     |
//!
//! A write clears lower-ranked content and is blocked by higher-ranked
//! content. Every operation returns an [`Outcome`] so the caller can log
//! writes that did not take effect.

use serde_json::Value;

use oas_ontology::model::iris::OWL_THING;
use oas_ontology::{ClassExpression, DataRange, Filler};

use crate::mapping::{map_datatype, DatatypeMapping};
use crate::schema::{BaseKind, Composition, Fragment, PropertySchema};

/// Deepest nesting of filler expressions turned into fragments.
pub const MAX_FILLER_DEPTH: usize = 16;

/// Result of a write to a [`PropertySchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The schema changed.
    Applied,
    /// The write was already present.
    Unchanged,
    /// Higher-priority content prevented the write.
    Blocked,
    /// A different restriction of the same kind was applied earlier.
    Conflict,
}

impl Outcome {
    /// Returns true if the schema changed.
    #[must_use]
    pub fn applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Side results of turning expressions into fragments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Findings {
    /// IRIs of classes referenced by the produced fragments.
    pub referenced: Vec<String>,
    /// IRIs of datatypes missing from the mapping table.
    pub unmapped: Vec<String>,
}

impl Findings {
    fn reference(&mut self, iri: &str) {
        if !self.referenced.iter().any(|r| r == iri) {
            self.referenced.push(iri.to_owned());
        }
    }
}

/// A filler shape that has no fragment translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized(pub String);

/// Returns the fragment of a named class.
pub fn class_fragment(iri: &str, follow_references: bool, findings: &mut Findings) -> Fragment {
    if iri == OWL_THING || !follow_references {
        return Fragment::Primitive(BaseKind::Object);
    }
    findings.reference(iri);
    Fragment::Reference(iri.to_owned())
}

/// Returns the fragment of a named datatype. Unknown datatypes yield
/// [`Fragment::Generic`] and are added to `findings.unmapped`.
pub fn datatype_fragment(iri: &str, findings: &mut Findings) -> Fragment {
    match map_datatype(iri) {
        DatatypeMapping::Typed(kind) => Fragment::Primitive(kind),
        DatatypeMapping::Untyped => Fragment::Generic,
        DatatypeMapping::Unknown => {
            if !findings.unmapped.iter().any(|u| u == iri) {
                findings.unmapped.push(iri.to_owned());
            }
            Fragment::Generic
        }
    }
}

/// Translates a filler into a fragment: named classes and datatypes, their
/// unions, intersections and complements, nested up to
/// [`MAX_FILLER_DEPTH`].
///
/// # Errors
///
/// Returns [`Unrecognized`] for enumerations, restrictions and fixed values
/// inside the filler, and for nesting beyond [`MAX_FILLER_DEPTH`].
pub fn filler_fragment(
    filler: &Filler,
    follow_references: bool,
    findings: &mut Findings,
) -> Result<Fragment, Unrecognized> {
    match filler {
        Filler::Class(expr) => class_expression_fragment(expr, follow_references, findings, 0),
        Filler::Data(range) => data_range_fragment(range, findings, 0),
    }
}

/// Translates a class expression into a fragment, like [`filler_fragment`].
///
/// # Errors
///
/// Returns [`Unrecognized`] under the same conditions as [`filler_fragment`].
pub fn expression_fragment(
    expr: &ClassExpression,
    follow_references: bool,
    findings: &mut Findings,
) -> Result<Fragment, Unrecognized> {
    class_expression_fragment(expr, follow_references, findings, 0)
}

fn class_expression_fragment(
    expr: &ClassExpression,
    follow_references: bool,
    findings: &mut Findings,
    depth: usize,
) -> Result<Fragment, Unrecognized> {
    if depth > MAX_FILLER_DEPTH {
        return Err(Unrecognized(format!(
            "class expression nested deeper than {MAX_FILLER_DEPTH}"
        )));
    }
    let composed = |mode,
                    ops: &[ClassExpression],
                    findings: &mut Findings|
     -> Result<Fragment, Unrecognized> {
        let children = ops
            .iter()
            .map(|op| class_expression_fragment(op, follow_references, findings, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Fragment::Composed { mode, children })
    };
    match expr {
        ClassExpression::Class(iri) => Ok(class_fragment(iri, follow_references, findings)),
        ClassExpression::Union(ops) => composed(Composition::AnyOf, ops, findings),
        ClassExpression::Intersection(ops) => composed(Composition::AllOf, ops, findings),
        ClassExpression::Complement(inner) => {
            composed(Composition::Not, std::slice::from_ref(inner.as_ref()), findings)
        }
        ClassExpression::OneOf(_) => Err(Unrecognized("nested enumeration of individuals".into())),
        ClassExpression::Quantified { property, .. }
        | ClassExpression::Cardinality { property, .. }
        | ClassExpression::HasValue { property, .. } => Err(Unrecognized(format!(
            "nested restriction on <{property}>"
        ))),
    }
}

fn data_range_fragment(
    range: &DataRange,
    findings: &mut Findings,
    depth: usize,
) -> Result<Fragment, Unrecognized> {
    if depth > MAX_FILLER_DEPTH {
        return Err(Unrecognized(format!(
            "data range nested deeper than {MAX_FILLER_DEPTH}"
        )));
    }
    let composed = |mode,
                    ops: &[DataRange],
                    findings: &mut Findings|
     -> Result<Fragment, Unrecognized> {
        let children = ops
            .iter()
            .map(|op| data_range_fragment(op, findings, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Fragment::Composed { mode, children })
    };
    match range {
        DataRange::Datatype(iri) => Ok(datatype_fragment(iri, findings)),
        DataRange::Union(ops) => composed(Composition::AnyOf, ops, findings),
        DataRange::Intersection(ops) => composed(Composition::AllOf, ops, findings),
        DataRange::Complement(inner) => {
            composed(Composition::Not, std::slice::from_ref(inner.as_ref()), findings)
        }
        DataRange::OneOf(_) => Err(Unrecognized("nested enumeration of literals".into())),
    }
}

/// Builds the default schema of a declared property: an array of its range,
/// or an `anyOf` of its ranges when it has several. Without ranges the item
/// is untyped.
///
/// Range fillers without a fragment translation are skipped and returned.
pub fn declared_property(
    iri: &str,
    ranges: &[Filler],
    follow_references: bool,
    findings: &mut Findings,
) -> (PropertySchema, Vec<Unrecognized>) {
    let mut schema = PropertySchema::new(iri);
    let mut skipped = Vec::new();
    let mut items = Vec::new();
    for range in ranges {
        match filler_fragment(range, follow_references, findings) {
            Ok(fragment) => {
                if !items.contains(&fragment) {
                    items.push(fragment);
                }
            }
            Err(err) => skipped.push(err),
        }
    }
    schema.item = match items.len() {
        0 => Fragment::Generic,
        1 => items.remove(0),
        _ => Fragment::Composed {
            mode: Composition::AnyOf,
            children: items,
        },
    };
    (schema, skipped)
}

/// Adds `fragment` to the property's `anyOf`. Sets `nullable: false`.
pub fn add_any_of(prop: &mut PropertySchema, fragment: Fragment) -> Outcome {
    let outcome = compose(prop, Composition::AnyOf, vec![fragment]);
    if outcome.applied() {
        prop.nullable = false;
    }
    outcome
}

/// Adds `fragment` to the property's `allOf`. Sets `nullable: true`, since
/// a universal restriction admits an empty set.
pub fn add_all_of(prop: &mut PropertySchema, fragment: Fragment) -> Outcome {
    let outcome = compose(prop, Composition::AllOf, vec![fragment]);
    if outcome.applied() {
        prop.nullable = true;
    }
    outcome
}

/// Writes `fragments` as one composition of `mode` (`AnyOf` or `AllOf`).
///
/// The first restriction write replaces content derived from ranges. A
/// later write of the same mode appends the fragments not yet present; a
/// later write of another composition mode is a [`Outcome::Conflict`]. A
/// single fragment written over nothing restricted stays bare.
pub fn compose(prop: &mut PropertySchema, mode: Composition, fragments: Vec<Fragment>) -> Outcome {
    if prop.default.is_some() || !prop.enum_values.is_empty() {
        return Outcome::Blocked;
    }
    let mut fragments = dedup(fragments);
    if fragments.is_empty() {
        return Outcome::Unchanged;
    }

    if prop.restricted {
        match &mut prop.item {
            Fragment::Composed { mode: current, children } if *current == mode => {
                let before = children.len();
                for fragment in fragments {
                    if !children.contains(&fragment) {
                        children.push(fragment);
                    }
                }
                return if children.len() == before {
                    Outcome::Unchanged
                } else {
                    Outcome::Applied
                };
            }
            Fragment::Composed {
                mode: Composition::OneOf,
                ..
            } => {}
            Fragment::Composed { .. } => return Outcome::Conflict,
            bare => {
                if fragments.len() == 1 && fragments[0] == *bare {
                    return Outcome::Unchanged;
                }
                // An anyOf keeps a bare item as an alternative; an allOf
                // replaces it.
                if mode == Composition::AnyOf && !fragments.contains(bare) {
                    fragments.insert(0, bare.clone());
                }
            }
        }
    }

    prop.item = if fragments.len() == 1 && mode != Composition::Not {
        fragments.remove(0)
    } else {
        Fragment::Composed {
            mode,
            children: fragments,
        }
    };
    prop.restricted = true;
    Outcome::Applied
}

/// Negates the property's item.
pub fn set_complement(prop: &mut PropertySchema, fragment: Fragment) -> Outcome {
    if prop.default.is_some() || !prop.enum_values.is_empty() {
        return Outcome::Blocked;
    }
    let negated = Fragment::Composed {
        mode: Composition::Not,
        children: vec![fragment],
    };
    if prop.restricted {
        if prop.item == negated {
            return Outcome::Unchanged;
        }
        if !prop.item.is_atomic() {
            return Outcome::Conflict;
        }
    }
    prop.item = negated;
    prop.restricted = true;
    Outcome::Applied
}

/// Replaces a composed or referencing item by the primitive type of
/// enumerated values.
fn enumerate_item(prop: &mut PropertySchema, kind: Option<BaseKind>) {
    let clear = match &prop.item {
        Fragment::Composed { .. } | Fragment::Reference(_) => true,
        Fragment::Generic => kind.is_some(),
        Fragment::Primitive(current) => kind.is_some_and(|k| k != *current),
    };
    if clear {
        prop.item = kind.map_or(Fragment::Generic, Fragment::Primitive);
    }
    prop.restricted = true;
}

/// Adds a value to the property's enumeration, clearing any composition.
/// Forces `nullable: false` and an array container.
pub fn add_one_of(prop: &mut PropertySchema, value: Value, kind: Option<BaseKind>) -> Outcome {
    if prop.default.is_some() {
        return Outcome::Blocked;
    }
    if prop.enum_values.contains(&value) {
        return Outcome::Unchanged;
    }
    if prop.enum_values.is_empty() {
        enumerate_item(prop, kind);
    }
    prop.enum_values.push(value);
    prop.nullable = false;
    prop.array = true;
    Outcome::Applied
}

/// Fixes the property's value: the first call sets the default, every call
/// adds the value to the enumeration. Forces an array container.
pub fn set_has_value(prop: &mut PropertySchema, value: Value, kind: Option<BaseKind>) -> Outcome {
    let known = prop.enum_values.contains(&value);
    if known && prop.default.is_some() {
        return Outcome::Unchanged;
    }
    if prop.default.is_none() {
        enumerate_item(prop, kind);
        prop.default = Some(value.clone());
    }
    if !known {
        prop.enum_values.push(value);
    }
    prop.array = true;
    Outcome::Applied
}

/// Sets `minItems`. A positive bound makes the property non-nullable.
pub fn set_min_cardinality(prop: &mut PropertySchema, n: u32) -> Outcome {
    match prop.min_items {
        Some(current) if current == n => Outcome::Unchanged,
        Some(_) => Outcome::Conflict,
        None => {
            prop.min_items = Some(n);
            if n > 0 {
                prop.nullable = false;
            }
            Outcome::Applied
        }
    }
}

/// Sets `maxItems`. A bound below 2 makes the property nullable.
pub fn set_max_cardinality(prop: &mut PropertySchema, n: u32) -> Outcome {
    match prop.max_items {
        Some(current) if current == n => Outcome::Unchanged,
        Some(_) => Outcome::Conflict,
        None => {
            prop.max_items = Some(n);
            if n < 2 {
                prop.nullable = true;
            }
            Outcome::Applied
        }
    }
}

/// Sets `minItems` and `maxItems` to `n`. The property is nullable only for
/// `n == 0`.
pub fn set_exact_cardinality(prop: &mut PropertySchema, n: u32) -> Outcome {
    let min_ok = prop.min_items.map_or(true, |m| m == n);
    let max_ok = prop.max_items.map_or(true, |m| m == n);
    if !min_ok || !max_ok {
        return Outcome::Conflict;
    }
    if prop.min_items == Some(n) && prop.max_items == Some(n) {
        return Outcome::Unchanged;
    }
    prop.min_items = Some(n);
    prop.max_items = Some(n);
    prop.nullable = n == 0;
    Outcome::Applied
}

/// Marks the property functional: `maxItems: 1` and `nullable: false`.
pub fn set_functional(prop: &mut PropertySchema) -> Outcome {
    let outcome = set_max_cardinality(prop, 1);
    if outcome == Outcome::Conflict {
        return outcome;
    }
    prop.functional = true;
    prop.nullable = false;
    Outcome::Applied
}

/// Narrows an item no restriction has written yet.
pub fn narrow_item(prop: &mut PropertySchema, fragment: Fragment) -> Outcome {
    if prop.restricted {
        return Outcome::Blocked;
    }
    if prop.item == fragment {
        prop.restricted = true;
        return Outcome::Unchanged;
    }
    prop.item = fragment;
    prop.restricted = true;
    Outcome::Applied
}

fn dedup(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !out.contains(&fragment) {
            out.push(fragment);
        }
    }
    out
}
