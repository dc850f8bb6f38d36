//! templateme is a file-scaffolding generator.
//! A generator bundles a parameter schema with a directory of template
//! bodies; instances of a generator materialize concrete files by
//! substituting `<%= ... %>` placeholders with derived string forms.

/// Command-line interface module for the templateme application
pub mod cli;

/// Error types and handling for the templateme application
pub mod error;

/// Template materialization
/// Renders template bodies against parameter bindings and writes outputs
pub mod materializer;

/// Placeholder parsing and modifier-chain application
pub mod placeholder;

/// Parameter resolution
/// Binds a generator schema to a concrete instance name
pub mod resolver;

/// Generator and instance schema data model
pub mod schema;

/// Generator store
/// On-disk layout of generators, template bodies and instances
pub mod store;

/// Pure string transforms (pluralize, capitalize, camel, snake)
pub mod transform;
