//! Compiled schema types and their OpenAPI JSON rendering.
//!
//! A [`ClassSchema`] is the finished Schema Object of one ontology class. Its
//! properties are [`PropertySchema`]s whose item content is a [`Fragment`]:
//! a reference, a primitive, an untyped placeholder, or a composition of
//! further fragments.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use oas_ontology::local_name;

use crate::mapping::ref_path;

/// Primitive Schema Object type, with the `format` it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    /// `type: string`.
    String,
    /// `type: number`.
    Number,
    /// `type: integer`.
    Integer,
    /// `type: boolean`.
    Boolean,
    /// `type: string`, `format: date-time`.
    DateTime,
    /// `type: string`, `format: date`.
    Date,
    /// `type: object`.
    Object,
}

impl BaseKind {
    /// Returns the value of the `type` keyword.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            BaseKind::String | BaseKind::DateTime | BaseKind::Date => "string",
            BaseKind::Number => "number",
            BaseKind::Integer => "integer",
            BaseKind::Boolean => "boolean",
            BaseKind::Object => "object",
        }
    }

    /// Returns the value of the `format` keyword, if any.
    #[must_use]
    pub fn format(self) -> Option<&'static str> {
        match self {
            BaseKind::DateTime => Some("date-time"),
            BaseKind::Date => Some("date"),
            _ => None,
        }
    }
}

/// Composition keyword of a composed fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composition {
    /// `oneOf`.
    OneOf,
    /// `anyOf`.
    AnyOf,
    /// `allOf`.
    AllOf,
    /// `not`.
    Not,
}

impl Composition {
    /// Returns the JSON keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Composition::OneOf => "oneOf",
            Composition::AnyOf => "anyOf",
            Composition::AllOf => "allOf",
            Composition::Not => "not",
        }
    }
}

/// The content of a schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `$ref` to the schema of a class, by class IRI.
    Reference(String),
    /// A primitive type.
    Primitive(BaseKind),
    /// An untyped schema (`{}`).
    Generic,
    /// A composition of child fragments. `Not` has exactly one child.
    Composed {
        /// The composition keyword.
        mode: Composition,
        /// The composed fragments.
        children: Vec<Fragment>,
    },
}

impl Fragment {
    /// Returns true unless this is a composition.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        !matches!(self, Fragment::Composed { .. })
    }

    /// Returns the composition keyword at the top of this fragment, if any.
    #[must_use]
    pub fn composition(&self) -> Option<Composition> {
        match self {
            Fragment::Composed { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Renders the fragment as a Schema Object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Fragment::Reference(iri) => json!({ "$ref": ref_path(iri) }),
            Fragment::Primitive(kind) => {
                let mut obj = Map::new();
                obj.insert("type".to_owned(), json!(kind.type_name()));
                if let Some(format) = kind.format() {
                    obj.insert("format".to_owned(), json!(format));
                }
                Value::Object(obj)
            }
            Fragment::Generic => json!({}),
            Fragment::Composed {
                mode: Composition::Not,
                children,
            } => match children.as_slice() {
                [single] => json!({ "not": single.to_json() }),
                many => {
                    let any_of: Vec<Value> = many.iter().map(Fragment::to_json).collect();
                    json!({ "not": { "anyOf": any_of } })
                }
            },
            Fragment::Composed { mode, children } => {
                let rendered: Vec<Value> = children.iter().map(Fragment::to_json).collect();
                let mut obj = Map::new();
                obj.insert(mode.keyword().to_owned(), Value::Array(rendered));
                Value::Object(obj)
            }
        }
    }
}

/// The compiled schema of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// Property key in the class schema (the property's local name).
    pub name: String,
    /// Full IRI of the ontology property; `None` for injected starter
    /// properties.
    pub iri: Option<String>,
    /// Description, if known or defaulted.
    pub description: Option<String>,
    /// Whether the property is an array of `item`.
    pub array: bool,
    /// `nullable`.
    pub nullable: bool,
    /// `minItems`.
    pub min_items: Option<u32>,
    /// `maxItems`.
    pub max_items: Option<u32>,
    /// Item content (the property itself when not an array).
    pub item: Fragment,
    /// Enumerated values.
    pub enum_values: Vec<Value>,
    /// Default value (first `hasValue`).
    pub default: Option<Value>,
    /// Whether the property is functional.
    pub functional: bool,
    /// Whether `item` was written by a restriction rather than derived from
    /// declared ranges.
    pub restricted: bool,
}

impl PropertySchema {
    /// Creates an unrestricted, nullable array of untyped items.
    #[must_use]
    pub fn new(iri: &str) -> Self {
        Self {
            iri: Some(iri.to_owned()),
            ..Self::starter(local_name(iri), Fragment::Generic)
        }
    }

    /// Creates an injected property not backed by the ontology.
    #[must_use]
    pub fn starter(name: &str, item: Fragment) -> Self {
        Self {
            name: name.to_owned(),
            iri: None,
            description: None,
            array: true,
            nullable: true,
            min_items: None,
            max_items: None,
            item,
            enum_values: Vec::new(),
            default: None,
            functional: false,
            restricted: false,
        }
    }

    /// Returns true if the property may be written as a plain scalar: a bare
    /// atomic item with no enumeration or default.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.item.is_atomic() && self.enum_values.is_empty() && self.default.is_none()
    }

    /// Renders the property as a Schema Object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut item = self.item.to_json();
        if !self.enum_values.is_empty() {
            if let Value::Object(obj) = &mut item {
                obj.insert("enum".to_owned(), Value::Array(self.enum_values.clone()));
            }
        }

        let mut obj = if self.array {
            let mut obj = Map::new();
            obj.insert("type".to_owned(), json!("array"));
            obj.insert("items".to_owned(), item);
            obj
        } else {
            match item {
                Value::Object(obj) => obj,
                _ => Map::new(),
            }
        };

        if let Some(description) = &self.description {
            obj.insert("description".to_owned(), json!(description));
        }
        obj.insert("nullable".to_owned(), json!(self.nullable));
        if let Some(min) = self.min_items {
            obj.insert("minItems".to_owned(), json!(min));
        }
        if let Some(max) = self.max_items {
            obj.insert("maxItems".to_owned(), json!(max));
        }
        if let Some(default) = &self.default {
            obj.insert("default".to_owned(), default.clone());
        }
        Value::Object(obj)
    }
}

/// The compiled schema of one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSchema {
    /// Schema name (the class's local name).
    pub name: String,
    /// Full IRI of the class.
    pub iri: String,
    /// Description, if known or defaulted.
    pub description: Option<String>,
    /// Properties by name.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required properties.
    pub required: Vec<String>,
    /// IRIs of superclasses referenced through `allOf`.
    pub superclass_refs: Vec<String>,
    /// Class-level negation.
    pub complement: Option<Fragment>,
    /// Class-level enumeration; when non-empty the class renders as a string
    /// enum.
    pub enum_values: Vec<Value>,
}

impl ClassSchema {
    /// Creates an empty object schema for a class.
    #[must_use]
    pub fn new(iri: &str) -> Self {
        Self {
            name: local_name(iri).to_owned(),
            iri: iri.to_owned(),
            description: None,
            properties: IndexMap::new(),
            required: Vec::new(),
            superclass_refs: Vec::new(),
            complement: None,
            enum_values: Vec::new(),
        }
    }

    /// Returns true if the class is an enumeration of individuals.
    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Renders the class as a Schema Object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if self.is_enumeration() {
            obj.insert("type".to_owned(), json!("string"));
            if let Some(description) = &self.description {
                obj.insert("description".to_owned(), json!(description));
            }
            obj.insert("enum".to_owned(), Value::Array(self.enum_values.clone()));
            return Value::Object(obj);
        }

        obj.insert("type".to_owned(), json!("object"));
        if let Some(description) = &self.description {
            obj.insert("description".to_owned(), json!(description));
        }
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, prop)| (name.clone(), prop.to_json()))
            .collect();
        obj.insert("properties".to_owned(), Value::Object(properties));
        if !self.required.is_empty() {
            obj.insert("required".to_owned(), json!(self.required));
        }
        if !self.superclass_refs.is_empty() {
            let mut all_of = vec![json!({ "type": "object" })];
            all_of.extend(self.superclass_refs.iter().map(|iri| json!({ "$ref": ref_path(iri) })));
            obj.insert("allOf".to_owned(), Value::Array(all_of));
        }
        if let Some(complement) = &self.complement {
            obj.insert("not".to_owned(), complement.to_json());
        }
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_renders_components_path() {
        let frag = Fragment::Reference("https://w3id.org/example#Course".into());
        assert_eq!(frag.to_json(), json!({ "$ref": "#/components/schemas/Course" }));
    }

    #[test]
    fn datetime_carries_format() {
        assert_eq!(
            Fragment::Primitive(BaseKind::DateTime).to_json(),
            json!({ "type": "string", "format": "date-time" })
        );
    }

    #[test]
    fn array_property_puts_enum_on_items() {
        let mut prop = PropertySchema::new("https://w3id.org/example#gender");
        prop.item = Fragment::Primitive(BaseKind::String);
        prop.enum_values = vec![json!("female"), json!("male")];
        prop.nullable = false;
        assert_eq!(
            prop.to_json(),
            json!({
                "type": "array",
                "items": { "type": "string", "enum": ["female", "male"] },
                "nullable": false
            })
        );
    }

    #[test]
    fn scalar_property_merges_item() {
        let mut prop = PropertySchema::new("https://w3id.org/example#label");
        prop.item = Fragment::Primitive(BaseKind::String);
        prop.array = false;
        prop.description = Some("Display name.".into());
        assert_eq!(
            prop.to_json(),
            json!({ "type": "string", "description": "Display name.", "nullable": true })
        );
    }

    #[test]
    fn enumeration_class_renders_as_string_enum() {
        let mut class = ClassSchema::new("https://w3id.org/example#Weekday");
        class.enum_values = vec![json!("Monday"), json!("Tuesday")];
        assert_eq!(
            class.to_json(),
            json!({ "type": "string", "enum": ["Monday", "Tuesday"] })
        );
    }

    #[test]
    fn inheritance_renders_all_of() {
        let mut class = ClassSchema::new("https://w3id.org/example#Student");
        class.superclass_refs = vec!["https://w3id.org/example#Person".into()];
        let rendered = class.to_json();
        assert_eq!(
            rendered["allOf"],
            json!([{ "type": "object" }, { "$ref": "#/components/schemas/Person" }])
        );
        assert_eq!(rendered["properties"], json!({}));
    }
}
