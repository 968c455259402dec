mod build;
mod info;
mod path;
mod roles;
mod transform;

use clap::{Parser, Subcommand};
use namescope_core::NamescopeConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "namescope",
    version,
    about = "Infer roles from qualified names and rebuild sibling names",
    long_about = "Namescope splits qualified names such as User::Endpoint::Index into tokens, \
                  derives their scope, concept, resource, service, section and handle, and \
                  renders new names from a mix of literal words and role references."
)]
pub struct Cli {
    /// JSON configuration file (separator, detect_pattern, preload)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to stderr, at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every role of a qualified name as JSON
    Roles {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Build a qualified name into the registry and print its diagnostic dump
    Info {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Classify words and join them into a qualified name
    Path {
        #[arg(value_name = "ITEM", required = true)]
        items: Vec<String>,
    },
    /// Render a new name from a subject and a mix of words and role references
    #[command(
        long_about = "Role references are written __scope__, __concept__, __resource__, \
                      __service__, __section__ (or __section:N__) and __handle__. \
                      Anything else is a literal word."
    )]
    Transform {
        /// Subject the role references are resolved against
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(value_name = "ITEM", required = true)]
        items: Vec<String>,

        /// Resolve the result against the registry instead of printing the path
        #[arg(long)]
        resolve: bool,
    },
    /// Create every missing segment of a name and print the resulting entity
    Build {
        #[arg(value_name = "ITEM", required = true)]
        items: Vec<String>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = namescope_runtime::init_logging("cli", cli.verbose);

    let config = match &cli.config {
        Some(path) => NamescopeConfig::from_file(path)?,
        None => NamescopeConfig::default(),
    };
    let resolver = namescope_runtime::build_resolver(&config)?;

    match cli.command {
        Commands::Roles { name } => roles::run(&resolver, &name),
        Commands::Info { name } => info::run(&resolver, &name),
        Commands::Path { items } => path::run(&resolver, &items),
        Commands::Transform {
            name,
            items,
            resolve,
        } => transform::run(&resolver, &name, &items, resolve),
        Commands::Build { items } => build::run(&resolver, &items),
    }
}
