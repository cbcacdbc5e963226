//! Passes run over a compiled [`ClassSchema`].

use std::collections::HashSet;

use oas_ontology::{AccessError, OntologyAccess};

use crate::compiler::ancestors;
use crate::schema::ClassSchema;

/// Marks every property with a positive lower bound as required.
pub fn infer_required(schema: &mut ClassSchema) {
    for (name, prop) in &schema.properties {
        let required = matches!((prop.min_items, prop.max_items), (Some(1), Some(1)))
            || prop.min_items.is_some_and(|min| min > 0);
        if required && !schema.required.contains(name) {
            schema.required.push(name.clone());
        }
    }
}

/// Turns provably single-valued arrays into scalars.
///
/// A property qualifies when its item is bare, it is not functional, and its
/// bounds are exactly `{1,1}` or `{0,1}`. Its bounds are then cleared and,
/// since the upper bound was exactly one, it becomes nullable. Everything
/// else stays an array.
pub fn simplify_arrays(schema: &mut ClassSchema) {
    for prop in schema.properties.values_mut() {
        if !prop.array || prop.functional || !prop.is_bare() {
            continue;
        }
        if !matches!((prop.min_items, prop.max_items), (None | Some(0 | 1), Some(1))) {
            continue;
        }
        prop.array = false;
        prop.min_items = None;
        prop.max_items = None;
        prop.nullable = true;
    }
}

/// Replaces flattened inheritance by `allOf` references to the most specific
/// ancestors: an ancestor is kept unless it is itself an ancestor of another
/// ancestor. Returns the kept ancestors.
///
/// # Errors
///
/// Returns [`AccessError::UnknownClass`] if an ancestor is not declared.
pub fn dedup_superclass_references<A: OntologyAccess + ?Sized>(
    access: &A,
    schema: &mut ClassSchema,
    visited_ancestors: &[String],
) -> Result<Vec<String>, AccessError> {
    let mut reachable: HashSet<String> = HashSet::new();
    for ancestor in visited_ancestors {
        reachable.extend(ancestors(access, ancestor)?);
    }
    let kept: Vec<String> = visited_ancestors
        .iter()
        .filter(|ancestor| !reachable.contains(*ancestor))
        .cloned()
        .collect();
    schema.superclass_refs.clone_from(&kept);
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BaseKind, Composition, Fragment, PropertySchema};
    use oas_ontology::fixtures::{INHERITANCE, UNIVERSITY};
    use oas_ontology::loader::load_turtle;

    fn schema_with(props: Vec<PropertySchema>) -> ClassSchema {
        let mut schema = ClassSchema::new("https://w3id.org/example#C");
        for prop in props {
            schema.properties.insert(prop.name.clone(), prop);
        }
        schema
    }

    fn bounded(name: &str, min: Option<u32>, max: Option<u32>) -> PropertySchema {
        let mut prop = PropertySchema::new(&format!("https://w3id.org/example#{name}"));
        prop.item = Fragment::Primitive(BaseKind::String);
        prop.min_items = min;
        prop.max_items = max;
        prop
    }

    #[test]
    fn required_from_cardinality() {
        let mut schema = schema_with(vec![
            bounded("exact", Some(1), Some(1)),
            bounded("atLeastTwo", Some(2), Some(2)),
            bounded("optional", Some(0), Some(1)),
            bounded("unbounded", None, None),
        ]);
        infer_required(&mut schema);
        assert_eq!(schema.required, vec!["exact", "atLeastTwo"]);
    }

    #[test]
    fn single_values_become_scalars() {
        let mut schema = schema_with(vec![
            bounded("label", Some(1), Some(1)),
            bounded("nickname", None, Some(1)),
            bounded("tags", Some(1), Some(3)),
            bounded("free", None, None),
        ]);
        simplify_arrays(&mut schema);

        let label = &schema.properties["label"];
        assert!(!label.array);
        assert_eq!((label.min_items, label.max_items), (None, None));
        assert!(label.nullable);

        let nickname = &schema.properties["nickname"];
        assert!(!nickname.array);
        assert!(nickname.nullable);

        assert!(schema.properties["tags"].array);
        assert_eq!(schema.properties["tags"].max_items, Some(3));
        assert!(schema.properties["free"].array);
    }

    #[test]
    fn composed_functional_and_enum_stay_arrays() {
        let mut composed = bounded("composed", Some(1), Some(1));
        composed.item = Fragment::Composed {
            mode: Composition::AnyOf,
            children: vec![
                Fragment::Reference("urn:A".into()),
                Fragment::Reference("urn:B".into()),
            ],
        };
        let mut functional = bounded("functional", None, Some(1));
        functional.functional = true;
        let mut enumerated = bounded("enumerated", Some(1), Some(1));
        enumerated.enum_values = vec![serde_json::json!("x")];

        let mut schema = schema_with(vec![composed, functional, enumerated]);
        simplify_arrays(&mut schema);
        assert!(schema.properties.values().all(|p| p.array));
    }

    #[test]
    fn most_specific_ancestors_are_kept() {
        let onto = load_turtle(INHERITANCE).expect("fixture parses");
        let ta = "https://w3id.org/example#TeachingAssistant";
        let visited = ancestors(&onto, ta).expect("declared");
        let mut schema = ClassSchema::new(ta);
        let kept = dedup_superclass_references(&onto, &mut schema, &visited).expect("declared");
        assert_eq!(
            kept,
            vec![
                "https://w3id.org/example#Employee".to_owned(),
                "https://w3id.org/example#Student".to_owned()
            ]
        );
        assert_eq!(schema.superclass_refs, kept);
    }

    #[test]
    fn root_classes_have_no_references() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut schema = ClassSchema::new("https://w3id.org/example#Person");
        let kept = dedup_superclass_references(&onto, &mut schema, &[]).expect("declared");
        assert!(kept.is_empty());
        assert!(schema.to_json().get("allOf").is_none());
    }
}
