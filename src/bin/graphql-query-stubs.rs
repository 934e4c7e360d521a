//! GraphQL Query Stubs CLI
//!
//! Command-line interface for inferring response schemas and generating stub data.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use graphql_query_stubs::{
    build_schema, generate, generate_with_rng, load_overrides, load_schema, read_input,
    Overrides,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "graphql-query-stubs")]
#[command(about = "Generate stub data from GraphQL queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JSON Schema from a GraphQL query
    Schema {
        /// Query file (stdin if omitted or "-")
        query: Option<PathBuf>,

        /// JSON file mapping dot paths (e.g. data.pokemons.items.name) to types
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Generate stub data from a JSON Schema
    Stub {
        /// Schema file (stdin if omitted or "-")
        schema: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schema {
            query,
            overrides,
            output,
            compact,
        } => run_schema(query.as_deref(), overrides.as_deref(), output, compact),

        Commands::Stub {
            schema,
            seed,
            output,
            compact,
        } => run_stub(schema.as_deref(), seed, output, compact),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_schema(
    query_path: Option<&Path>,
    overrides_path: Option<&Path>,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<(), u8> {
    // Overrides first, so a bad table fails before reading stdin
    let overrides = match overrides_path {
        Some(path) => load_overrides(path).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?,
        None => Overrides::new(),
    };

    let query = read_input(query_path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let schema = build_schema(&query, &overrides).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    write_json(&schema, output, compact)
}

fn run_stub(
    schema_path: Option<&Path>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<(), u8> {
    let schema = load_schema(schema_path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let stub = match seed {
        Some(seed) => generate_with_rng(&schema, &mut StdRng::seed_from_u64(seed)),
        None => generate(&schema),
    };

    write_json(&stub, output, compact)
}

fn write_json(value: &Value, output: Option<PathBuf>, compact: bool) -> Result<(), u8> {
    let json_output = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json_output)).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}
