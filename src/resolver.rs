//! Parameter resolution: binds a generator schema to a concrete instance
//! name, producing the fully literal instance schema that materialization
//! later consumes.
//!
//! Destination-path patterns and parameter value patterns use a
//! simplified placeholder grammar: no parameter name, only a bare
//! transform keyword (`<%= snake %>`). This grammar is deliberately
//! distinct from the content-placeholder grammar, which binds parameter
//! names with modifier chains.

use crate::placeholder;
use crate::schema::{GeneratorSchema, InstanceSchema};
use crate::transform;
use indexmap::IndexMap;
use log::debug;

/// Which keyword table applies to a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternScope {
    /// Destination paths: `pluralize`, `normal`, `snake`, `snakes`
    Destination,
    /// Parameter values: the destination keywords plus `lower`, `attr`
    /// and `Attr`
    Value,
}

/// Destination-path pattern applied to bare template identifiers.
fn default_destination(template_id: &str) -> String {
    format!("test/{}", template_id)
}

/// Literal value applied to bare parameter names.
const DEFAULT_PARAMETER_VALUE: &str = "placeholder";

fn keyword_value(
    keyword: &str,
    scope: PatternScope,
    instance_name: &str,
    attr: Option<&str>,
) -> Option<String> {
    match keyword {
        "pluralize" => Some(transform::pluralize(instance_name)),
        "normal" => Some(instance_name.to_string()),
        "snake" => Some(transform::snake_case(instance_name)),
        "snakes" => Some(transform::snake_case(&transform::pluralize(instance_name))),
        "lower" if scope == PatternScope::Value => {
            Some(transform::camel_case(instance_name))
        }
        "attr" if scope == PatternScope::Value => attr.map(str::to_string),
        "Attr" if scope == PatternScope::Value => {
            attr.map(transform::capitalize_words)
        }
        _ => None,
    }
}

/// Substitutes recognized meta-keywords in `pattern`.
///
/// Only modifier-free placeholders are candidates; placeholders carrying
/// a modifier chain, unrecognized keywords, and `attr` with no extra
/// argument supplied all pass through as literal text.
fn resolve_pattern(
    pattern: &str,
    scope: PatternScope,
    instance_name: &str,
    attr: Option<&str>,
) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut last = 0;
    for m in placeholder::matches(pattern) {
        if !m.modifiers.is_empty() {
            continue;
        }
        if let Some(value) = keyword_value(&m.name, scope, instance_name, attr) {
            result.push_str(&pattern[last..m.start]);
            result.push_str(&value);
            last = m.end;
        }
    }
    result.push_str(&pattern[last..]);
    result
}

/// Resolves a generator schema against an instance name and the optional
/// extra positional argument into a persisted-ready instance schema.
pub fn resolve_instance(
    schema: &GeneratorSchema,
    instance_name: &str,
    attr: Option<&str>,
) -> InstanceSchema {
    let mut templates = IndexMap::new();
    for (template_id, pattern) in schema.templates.iter() {
        let destination = match pattern {
            Some(p) => resolve_pattern(p, PatternScope::Destination, instance_name, attr),
            None => default_destination(template_id),
        };
        debug!("Resolved template '{}' -> '{}'", template_id, destination);
        templates.insert(template_id.to_string(), destination);
    }

    let mut parameters = IndexMap::new();
    for (name, pattern) in schema.parameters.iter() {
        let value = match pattern {
            Some(p) => resolve_pattern(p, PatternScope::Value, instance_name, attr),
            None => DEFAULT_PARAMETER_VALUE.to_string(),
        };
        debug!("Resolved parameter '{}' -> '{}'", name, value);
        parameters.insert(name.to_string(), value);
    }

    InstanceSchema { templates, parameters }
}
