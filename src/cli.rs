//! Command-line interface implementation for templateme.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for templateme.
#[derive(Parser, Debug)]
#[command(author, version, about = "templateme: file scaffolding generator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Base directory applied to all generator store paths
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new generator with a starter schema and template body
    Generator {
        /// Name of the generator
        name: String,
    },

    /// Bind a generator to an instance name and persist the resolved
    /// instance schema
    Generate {
        /// Name of the generator
        name: String,
        /// Name of the template instance
        instance: String,
        /// Extra positional attribute, bound by `attr`/`Attr` keywords
        attr: Option<String>,
    },

    /// Materialize output files from a previously generated instance
    Create {
        /// Name of the generator
        name: String,
        /// Name of the template instance
        instance: String,
    },

    /// Remove generated artifacts (not implemented)
    Delete {
        /// Name of the generator
        name: String,
        /// Name of the template instance
        instance: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
