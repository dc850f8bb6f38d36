use indexmap::IndexMap;
use std::fs;
use templateme::materializer::{materialize, render};
use templateme::schema::InstanceSchema;
use templateme::store::{FileSystemStore, GeneratorStore};
use tempfile::TempDir;

fn bindings(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_occurrence_local_substitution() {
    let params = bindings(&[("name", "cat")]);
    let result = render("<%= name %> and <%= name.pluralize() %>", &params);
    assert_eq!(result, "cat and cats");
}

#[test]
fn test_unresolved_parameter_passes_through() {
    let params = bindings(&[("name", "cat")]);
    let result = render("<%= missing %> <%= name %>", &params);
    assert_eq!(result, "<%= missing %> cat");
}

#[test]
fn test_modifier_order_in_source_does_not_matter() {
    let params = bindings(&[("name", "good_modal")]);

    let a = render("<%= name.camelcase().pluralize() %>", &params);
    let b = render("<%= name.pluralize().camelcase() %>", &params);

    assert_eq!(a, b);
    assert_eq!(a, "goodModals");
}

#[test]
fn test_unknown_modifier_leaves_value_unmodified() {
    let params = bindings(&[("name", "cat")]);
    let result = render("<%= name.reverse() %>", &params);
    assert_eq!(result, "cat");
}

#[test]
fn test_surrounding_text_is_preserved() {
    let params = bindings(&[("name", "good_modal")]);
    let result = render("export default <%= name.capitalize() %>;\n", &params);
    assert_eq!(result, "export default Good_modal;\n");
}

#[test]
fn test_materialize_writes_all_entries() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path());
    store.write_template_body("modal", "index.js", "<%= name %> index").unwrap();
    store.write_template_body("modal", "style.css", "/* <%= name %> */").unwrap();

    let instance = InstanceSchema {
        templates: bindings(&[
            ("index.js", "GoodModal/index.js"),
            ("style.css", "GoodModal/style.css"),
        ]),
        parameters: bindings(&[("name", "GoodModal")]),
    };

    let reports = materialize(&store, "modal", &instance);

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.outcome.is_ok()));
    let index = fs::read_to_string(temp_dir.path().join("GoodModal/index.js")).unwrap();
    assert_eq!(index, "GoodModal index");
    let style = fs::read_to_string(temp_dir.path().join("GoodModal/style.css")).unwrap();
    assert_eq!(style, "/* GoodModal */");
}

#[test]
fn test_materialize_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path());
    store.write_template_body("modal", "index.js", "fresh <%= name %>").unwrap();
    fs::create_dir_all(temp_dir.path().join("out")).unwrap();
    fs::write(temp_dir.path().join("out/index.js"), "stale").unwrap();

    let instance = InstanceSchema {
        templates: bindings(&[("index.js", "out/index.js")]),
        parameters: bindings(&[("name", "Modal")]),
    };

    let reports = materialize(&store, "modal", &instance);

    assert!(reports[0].outcome.is_ok());
    let content = fs::read_to_string(temp_dir.path().join("out/index.js")).unwrap();
    assert_eq!(content, "fresh Modal");
}

#[test]
fn test_materialize_reports_per_entry_failures() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path());
    store.write_template_body("modal", "index.js", "<%= name %>").unwrap();

    let instance = InstanceSchema {
        templates: bindings(&[
            ("index.js", "out/index.js"),
            ("missing.js", "out/missing.js"),
        ]),
        parameters: bindings(&[("name", "Modal")]),
    };

    let reports = materialize(&store, "modal", &instance);

    // Every entry is attempted; the good one still lands on disk
    assert_eq!(reports.len(), 2);
    assert!(reports[0].outcome.is_ok());
    assert!(reports[1].outcome.is_err());
    assert_eq!(reports[1].template_id, "missing.js");
    assert!(temp_dir.path().join("out/index.js").exists());
    assert!(!temp_dir.path().join("out/missing.js").exists());
}
