//! Class schema assembler.
//!
//! Runs the per-class pipeline: skeleton, plain property declarations,
//! restriction compilation, required inference, array simplification and
//! superclass dedup.

use tracing::{debug, info_span};

use oas_ontology::{local_name, AccessError, OntologyAccess};

use crate::compiler::{ancestors, RestrictionCompiler};
use crate::config::{Flags, DEFAULT_DESCRIPTION};
use crate::diagnostics::Diagnostics;
use crate::error::SchemaError;
use crate::postprocess;
use crate::schema::{BaseKind, ClassSchema, Fragment, PropertySchema};

/// A compiled class and the classes its schema refers to.
#[derive(Debug, Clone)]
pub struct AssembledClass {
    /// The finished schema.
    pub schema: ClassSchema,
    /// IRIs of every referenced class, in discovery order.
    pub referenced: Vec<String>,
}

/// Returns the starter property set injected into every class.
#[must_use]
pub fn starter_properties() -> Vec<PropertySchema> {
    let mut id = PropertySchema::starter("id", Fragment::Primitive(BaseKind::Integer));
    id.nullable = false;
    vec![
        id,
        PropertySchema::starter("label", Fragment::Primitive(BaseKind::String)),
        PropertySchema::starter("type", Fragment::Primitive(BaseKind::String)),
        PropertySchema::starter("description", Fragment::Primitive(BaseKind::String)),
        PropertySchema::starter("eventDateTime", Fragment::Primitive(BaseKind::DateTime)),
        PropertySchema::starter("isBool", Fragment::Primitive(BaseKind::Boolean)),
        PropertySchema::starter("quantity", Fragment::Primitive(BaseKind::Number)),
    ]
}

fn skeleton<A: OntologyAccess + ?Sized>(access: &A, class: &str, flags: &Flags) -> ClassSchema {
    let mut schema = ClassSchema::new(class);
    schema.description = access
        .description(class)
        .map(str::to_owned)
        .or_else(|| flags.default_descriptions.then(|| DEFAULT_DESCRIPTION.to_owned()));
    if flags.default_properties {
        for mut prop in starter_properties() {
            if flags.default_descriptions {
                prop.description = Some(DEFAULT_DESCRIPTION.to_owned());
            }
            schema.properties.insert(prop.name.clone(), prop);
        }
    }
    schema
}

/// Compiles one class.
///
/// # Errors
///
/// Returns [`SchemaError::Access`] if `class`, or a class on its superclass
/// walk, is not declared.
pub fn assemble<A: OntologyAccess + ?Sized>(
    access: &A,
    class: &str,
    flags: &Flags,
    diagnostics: &mut Diagnostics,
) -> Result<AssembledClass, SchemaError> {
    let span = info_span!("class", name = local_name(class));
    let _enter = span.enter();

    if !access.contains_class(class) {
        return Err(AccessError::UnknownClass(class.to_owned()).into());
    }

    let mut schema = skeleton(access, class, flags);
    let visited = ancestors(access, class)?;

    let mut compiler = RestrictionCompiler::new(access, flags, class);
    compiler.declare(class, &mut schema, diagnostics);
    if !flags.inherits_by_reference() {
        for ancestor in &visited {
            compiler.declare(ancestor, &mut schema, diagnostics);
        }
    }
    compiler.compile(&mut schema, diagnostics)?;
    let mut referenced = compiler.into_referenced();

    if flags.required_properties_from_cardinality {
        postprocess::infer_required(&mut schema);
    }
    if !flags.always_generate_arrays {
        postprocess::simplify_arrays(&mut schema);
    }
    if flags.inherits_by_reference() {
        for kept in postprocess::dedup_superclass_references(access, &mut schema, &visited)? {
            if !referenced.contains(&kept) {
                referenced.push(kept);
            }
        }
    }

    if schema.is_enumeration() {
        schema.properties.clear();
        schema.required.clear();
        schema.superclass_refs.clear();
    }

    debug!(
        properties = schema.properties.len(),
        required = schema.required.len(),
        referenced = referenced.len(),
        "assembled class"
    );
    Ok(AssembledClass { schema, referenced })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Composition;
    use oas_ontology::fixtures::{INHERITANCE, UNIVERSITY};
    use oas_ontology::loader::load_turtle;
    use serde_json::json;

    const EX: &str = "https://w3id.org/example#";

    fn ex(local: &str) -> String {
        format!("{EX}{local}")
    }

    #[test]
    fn skeleton_has_starter_properties_and_placeholder() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("Department"), &Flags::default(), &mut diagnostics)
            .expect("class compiles");
        let names: Vec<&str> = out.schema.properties.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["id", "label", "type", "description", "eventDateTime", "isBool", "quantity"]
        );
        assert_eq!(out.schema.description.as_deref(), Some(DEFAULT_DESCRIPTION));
        assert!(!out.schema.properties["id"].nullable);
        assert_eq!(
            out.schema.properties["quantity"].item,
            Fragment::Primitive(BaseKind::Number)
        );
    }

    #[test]
    fn ontology_property_replaces_starter_of_same_name() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("Person"), &Flags::default(), &mut diagnostics)
            .expect("class compiles");
        let label = &out.schema.properties["label"];
        assert_eq!(label.iri.as_deref(), Some(ex("label").as_str()));
        assert_eq!(label.description.as_deref(), Some("Display name."));
        assert_eq!(out.schema.description.as_deref(), Some("A human being."));
    }

    #[test]
    fn label_simplifies_to_scalar() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let flags = Flags {
            always_generate_arrays: false,
            required_properties_from_cardinality: true,
            ..Flags::default()
        };
        let mut diagnostics = Diagnostics::new();
        let out =
            assemble(&onto, &ex("Person"), &flags, &mut diagnostics).expect("class compiles");
        let label = &out.schema.properties["label"];
        assert!(!label.array);
        assert_eq!((label.min_items, label.max_items), (None, None));
        assert_eq!(label.to_json()["type"], json!("string"));
        assert_eq!(out.schema.required, vec!["label"]);
        assert!(out.schema.properties["gender"].array);
    }

    #[test]
    fn flattening_pulls_in_ancestor_domains() {
        let onto = load_turtle(INHERITANCE).expect("fixture parses");
        let flags = Flags {
            default_properties: false,
            ..Flags::default()
        };
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("TeachingAssistant"), &flags, &mut diagnostics)
            .expect("class compiles");
        let names: Vec<&str> = out.schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["salary", "worksFor", "name"]);
        assert!(out.schema.superclass_refs.is_empty());
    }

    #[test]
    fn inheritance_by_reference() {
        let onto = load_turtle(INHERITANCE).expect("fixture parses");
        let flags = Flags {
            default_properties: false,
            use_inheritance_references: true,
            ..Flags::default()
        };
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("TeachingAssistant"), &flags, &mut diagnostics)
            .expect("class compiles");
        assert_eq!(out.schema.superclass_refs, vec![ex("Employee"), ex("Student")]);
        assert!(out.referenced.contains(&ex("Employee")));
        assert!(!out.schema.properties.contains_key("name"));
        assert!(out.schema.properties.contains_key("worksFor"));
    }

    #[test]
    fn enumeration_class_drops_properties() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("Weekday"), &Flags::default(), &mut diagnostics)
            .expect("class compiles");
        assert!(out.schema.properties.is_empty());
        assert_eq!(
            out.schema.to_json(),
            json!({
                "type": "string",
                "description": DEFAULT_DESCRIPTION,
                "enum": ["Monday", "Tuesday", "Wednesday"]
            })
        );
    }

    #[test]
    fn composed_properties_never_simplify() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let flags = Flags {
            always_generate_arrays: false,
            ..Flags::default()
        };
        let mut diagnostics = Diagnostics::new();
        let out = assemble(&onto, &ex("StudyMaterial"), &flags, &mut diagnostics)
            .expect("class compiles");
        let author = &out.schema.properties["author"];
        assert!(author.array);
        assert_eq!(author.item.composition(), Some(Composition::AnyOf));
    }

    #[test]
    fn unknown_class_is_fatal() {
        let onto = load_turtle(UNIVERSITY).expect("fixture parses");
        let mut diagnostics = Diagnostics::new();
        let err = assemble(&onto, &ex("Nope"), &Flags::default(), &mut diagnostics);
        assert!(matches!(err, Err(SchemaError::Access(AccessError::UnknownClass(_)))));
    }
}
