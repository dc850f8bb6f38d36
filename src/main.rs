//! templateme's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates the generator
//! store, parameter resolver and template materializer.

use templateme::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Error, Result},
    materializer, resolver,
    schema::{GeneratorSchema, STARTER_TEMPLATE_BODY},
    store::{FileSystemStore, GeneratorStore},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let store = FileSystemStore::new(&args.path);

    match args.command {
        Command::Generator { name } => init_generator(&store, &name),
        Command::Generate { name, instance, attr } => {
            generate_instance(&store, &name, &instance, attr.as_deref())
        }
        Command::Create { name, instance } => create_instance(&store, &name, &instance),
        Command::Delete { .. } => {
            Err(Error::Unimplemented { operation: "delete".to_string() })
        }
    }
}

/// Creates a new generator with the starter schema and template body.
fn init_generator(store: &dyn GeneratorStore, name: &str) -> Result<()> {
    let schema = GeneratorSchema::starter();
    store.write_generator_schema(name, &schema)?;
    store.write_template_body(name, "index.js", STARTER_TEMPLATE_BODY)?;
    println!("Created generator '{}'.", name);
    Ok(())
}

/// Resolves and persists an instance schema for a generator.
fn generate_instance(
    store: &dyn GeneratorStore,
    name: &str,
    instance: &str,
    attr: Option<&str>,
) -> Result<()> {
    let schema = store.read_generator_schema(name)?;
    let instance_schema = resolver::resolve_instance(&schema, instance, attr);
    store.write_instance_schema(name, instance, &instance_schema)?;
    println!("Generated instance '{}' of '{}'.", instance, name);
    Ok(())
}

/// Materializes output files from a previously persisted instance schema.
///
/// Every template entry is attempted; the per-entry outcomes are printed
/// as a complete summary before the invocation succeeds or fails.
fn create_instance(store: &dyn GeneratorStore, name: &str, instance: &str) -> Result<()> {
    let instance_schema = store.read_instance_schema(name, instance)?;
    let reports = materializer::materialize(store, name, &instance_schema);

    let total = reports.len();
    let mut failed = 0;
    for report in reports {
        match report.outcome {
            Ok(()) => println!("created: '{}'", report.destination.display()),
            Err(e) => {
                failed += 1;
                log::error!("'{}': {}", report.template_id, e);
            }
        }
    }

    if failed > 0 {
        return Err(Error::MaterializeError { failed, total });
    }
    println!("Materialized {} file(s) for instance '{}'.", total, instance);
    Ok(())
}
