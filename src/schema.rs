//! Schema data model for generators and their instances.
//!
//! A generator schema declares template identifiers and parameter names;
//! both may carry `<%= ... %>` patterns. An instance schema is the fully
//! resolved form persisted when a generator is bound to a concrete
//! instance name: every destination path and parameter value is a literal
//! string with no further meta-placeholder evaluation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared entries of a generator schema.
///
/// Serialized either as a bare list of names (the form written when a
/// generator is initialized) or as an ordered map of name to pattern (the
/// form users edit in to attach placeholder expressions). Both forms
/// deserialize transparently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SchemaEntries {
    Names(Vec<String>),
    Patterns(IndexMap<String, String>),
}

impl SchemaEntries {
    /// Iterates entries as `(name, pattern)` pairs; bare names carry no
    /// pattern and fall back to the caller's default.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        match self {
            SchemaEntries::Names(names) => {
                Box::new(names.iter().map(|n| (n.as_str(), None)))
            }
            SchemaEntries::Patterns(map) => {
                Box::new(map.iter().map(|(n, p)| (n.as_str(), Some(p.as_str()))))
            }
        }
    }
}

/// A generator's declared shape: which template bodies it owns and which
/// parameters an instance must bind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSchema {
    pub templates: SchemaEntries,
    pub parameters: SchemaEntries,
}

impl GeneratorSchema {
    /// The starter schema written by the `generator` command: one default
    /// template identifier and one default parameter.
    pub fn starter() -> Self {
        Self {
            templates: SchemaEntries::Names(vec!["index.js".to_string()]),
            parameters: SchemaEntries::Names(vec!["name".to_string()]),
        }
    }
}

/// Starter template body written alongside [`GeneratorSchema::starter`].
pub const STARTER_TEMPLATE_BODY: &str = "<%= name %>\nFill something here";

/// A resolved instance of a generator: template identifier to literal
/// destination path, parameter name to literal value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceSchema {
    pub templates: IndexMap<String, String>,
    pub parameters: IndexMap<String, String>,
}
