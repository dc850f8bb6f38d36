//! Template materialization: turns a resolved instance schema into
//! concrete output files.

use crate::error::Result;
use crate::placeholder;
use crate::schema::InstanceSchema;
use crate::store::GeneratorStore;
use indexmap::IndexMap;
use log::debug;
use std::path::PathBuf;

/// Outcome of one template entry within a materialization batch.
#[derive(Debug)]
pub struct EntryReport {
    pub template_id: String,
    pub destination: PathBuf,
    pub outcome: Result<()>,
}

/// Substitutes content placeholders in `body` against the parameter
/// bindings.
///
/// Substitution is occurrence-local: each match applies its own modifier
/// chain to the bound value, so two placeholders naming the same
/// parameter may resolve differently. Placeholders naming an unbound
/// parameter are left as literal text.
pub fn render(body: &str, parameters: &IndexMap<String, String>) -> String {
    let mut result = String::with_capacity(body.len());
    let mut last = 0;
    for m in placeholder::matches(body) {
        if let Some(value) = parameters.get(&m.name) {
            result.push_str(&body[last..m.start]);
            result.push_str(&placeholder::apply_chain(value, &m.modifiers));
            last = m.end;
        }
    }
    result.push_str(&body[last..]);
    result
}

/// Materializes every template entry of an instance.
///
/// Entries share no mutable state and are processed independently; every
/// entry is attempted and its outcome captured before the batch returns,
/// so the caller can report a complete per-entry summary instead of
/// failing opaquely on the first error. Existing files at a destination
/// are overwritten unconditionally.
pub fn materialize(
    store: &dyn GeneratorStore,
    generator: &str,
    instance: &InstanceSchema,
) -> Vec<EntryReport> {
    instance
        .templates
        .iter()
        .map(|(template_id, destination)| {
            debug!("Materializing '{}' -> '{}'", template_id, destination);
            let outcome = store.read_template_body(generator, template_id).and_then(|body| {
                let content = render(&body, &instance.parameters);
                store.write_output(&PathBuf::from(destination), &content)
            });
            EntryReport {
                template_id: template_id.clone(),
                destination: PathBuf::from(destination),
                outcome,
            }
        })
        .collect()
}
