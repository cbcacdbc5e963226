//! Ontology → OpenAPI mapping tables.
//!
//! Deterministic mappings from datatypes, literals and class IRIs to Schema
//! Object types, JSON values and component paths.

use serde_json::{json, Value};

use oas_ontology::model::iris::{RDF, RDFS_LITERAL, XSD, XSD_STRING};
use oas_ontology::{local_name, Literal};

use crate::schema::BaseKind;

/// Prefix of every component reference.
pub const COMPONENTS_PREFIX: &str = "#/components/schemas/";

/// Result of looking a datatype up in the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeMapping {
    /// Maps to a primitive type.
    Typed(BaseKind),
    /// A known datatype that maps to an untyped schema.
    Untyped,
    /// Not in the table.
    Unknown,
}

/// Maps a datatype IRI to a primitive type.
#[must_use]
pub fn map_datatype(iri: &str) -> DatatypeMapping {
    if iri == RDFS_LITERAL {
        return DatatypeMapping::Untyped;
    }
    if let Some(local) = iri.strip_prefix(RDF) {
        return match local {
            "langString" | "PlainLiteral" => DatatypeMapping::Typed(BaseKind::String),
            _ => DatatypeMapping::Unknown,
        };
    }
    let Some(local) = iri.strip_prefix(XSD) else {
        return DatatypeMapping::Unknown;
    };
    match local {
        "integer" | "int" | "long" | "short" | "byte" | "nonNegativeInteger"
        | "positiveInteger" | "nonPositiveInteger" | "negativeInteger" | "unsignedInt"
        | "unsignedLong" | "unsignedShort" | "unsignedByte" => {
            DatatypeMapping::Typed(BaseKind::Integer)
        }
        "decimal" | "float" | "double" => DatatypeMapping::Typed(BaseKind::Number),
        "boolean" => DatatypeMapping::Typed(BaseKind::Boolean),
        "dateTime" | "dateTimeStamp" => DatatypeMapping::Typed(BaseKind::DateTime),
        "date" => DatatypeMapping::Typed(BaseKind::Date),
        "string" | "normalizedString" | "token" | "language" | "Name" | "NCName" | "NMTOKEN"
        | "ID" | "IDREF" | "ENTITY" | "time" | "duration" | "gYear" | "gYearMonth" | "gMonth"
        | "gMonthDay" | "gDay" | "hexBinary" | "base64Binary" | "QName" | "NOTATION" => {
            DatatypeMapping::Typed(BaseKind::String)
        }
        "anyType" | "anySimpleType" | "anyURI" => DatatypeMapping::Untyped,
        _ => DatatypeMapping::Unknown,
    }
}

/// Returns the component path of the schema generated for a class.
#[must_use]
pub fn ref_path(class_iri: &str) -> String {
    format!("{COMPONENTS_PREFIX}{}", local_name(class_iri))
}

/// Converts a literal to a JSON value typed after its datatype, together
/// with the primitive kind it implies. Lexical forms that do not parse keep
/// their string form.
#[must_use]
pub fn literal_value(literal: &Literal) -> (Value, Option<BaseKind>) {
    let datatype = literal.datatype.as_deref().unwrap_or(XSD_STRING);
    let kind = match map_datatype(datatype) {
        DatatypeMapping::Typed(kind) => kind,
        DatatypeMapping::Untyped | DatatypeMapping::Unknown => {
            return (json!(literal.lexical), None);
        }
    };
    let lexical = literal.lexical.trim();
    let value = match kind {
        BaseKind::Integer => lexical.parse::<i64>().ok().map(Value::from),
        BaseKind::Number => lexical
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
        BaseKind::Boolean => match lexical {
            "true" | "1" => Some(Value::Bool(true)),
            "false" | "0" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    };
    (value.unwrap_or_else(|| json!(literal.lexical)), Some(kind))
}

/// Converts a named individual to its enumeration value.
#[must_use]
pub fn individual_value(iri: &str) -> Value {
    json!(local_name(iri))
}
