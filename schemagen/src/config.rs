//! Generation settings, read from TOML.
//!
//! ```toml
//! name = "University API"
//! version = "1.0.0"
//! ontologies = ["university.ttl"]
//! classes = ["https://w3id.org/example#Course"]
//!
//! [flags]
//! use_inheritance_references = true
//! always_generate_arrays = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SchemaError;

/// Placeholder written where an entity has no description.
pub const DEFAULT_DESCRIPTION: &str = "Description not available";

/// Switches controlling the shape of the generated schemas.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Fill missing descriptions with [`DEFAULT_DESCRIPTION`].
    pub default_descriptions: bool,
    /// Inject the starter property set into every class.
    pub default_properties: bool,
    /// Emit `$ref` items for object ranges instead of untyped objects.
    pub follow_references: bool,
    /// Reference superclasses through `allOf` instead of flattening their
    /// properties. Only effective with `follow_references`.
    pub use_inheritance_references: bool,
    /// Mark properties required from their cardinalities.
    pub required_properties_from_cardinality: bool,
    /// Keep every property an array.
    pub always_generate_arrays: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            default_descriptions: true,
            default_properties: true,
            follow_references: true,
            use_inheritance_references: false,
            required_properties_from_cardinality: false,
            always_generate_arrays: true,
        }
    }
}

impl Flags {
    /// Returns true if superclasses are referenced rather than flattened.
    #[must_use]
    pub fn inherits_by_reference(&self) -> bool {
        self.follow_references && self.use_inheritance_references
    }
}

/// A generation run's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API title.
    pub name: String,
    /// API version.
    pub version: String,
    /// Turtle files to load.
    pub ontologies: Vec<PathBuf>,
    /// IRIs of the classes to generate; empty means every class.
    pub classes: Vec<String>,
    /// Shape switches.
    pub flags: Flags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "OpenAPI definition".to_owned(),
            version: "1.0.0".to_owned(),
            ontologies: Vec::new(),
            classes: Vec::new(),
            flags: Flags::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ConfigParse`] if the text is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        toml::from_str(source).map_err(|source| SchemaError::ConfigParse {
            path: "<inline>".to_owned(),
            source,
        })
    }

    /// Reads a configuration file. Relative ontology paths are resolved
    /// against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ConfigRead`] if the file cannot be read and
    /// [`SchemaError::ConfigParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&source).map_err(|source| SchemaError::ConfigParse {
                path: path.display().to_string(),
                source,
            })?;
        if let Some(base) = path.parent() {
            for ontology in &mut config.ontologies {
                if ontology.is_relative() {
                    *ontology = base.join(&*ontology);
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").expect("empty TOML is valid");
        assert_eq!(config, Config::default());
        assert!(config.flags.default_descriptions);
        assert!(config.flags.always_generate_arrays);
        assert!(!config.flags.inherits_by_reference());
    }

    #[test]
    fn flags_are_snake_case() {
        let config = Config::from_toml_str(
            r#"
name = "University API"
classes = ["https://w3id.org/example#Course"]

[flags]
use_inheritance_references = true
always_generate_arrays = false
"#,
        )
        .expect("valid config");
        assert_eq!(config.name, "University API");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.classes.len(), 1);
        assert!(config.flags.inherits_by_reference());
        assert!(!config.flags.always_generate_arrays);
        assert!(config.flags.follow_references);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = Config::from_toml_str("[flags]\nfollow_references = \"yes\"\n");
        assert!(matches!(err, Err(SchemaError::ConfigParse { .. })));
    }
}
