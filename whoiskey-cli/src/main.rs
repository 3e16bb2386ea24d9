use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use whoiskey_core::colors::CatppuccinExt;
use whoiskey_core::{FieldResolver, NormalizationTable, Role, TableBuilder, WhoisRecord};

#[derive(Parser)]
#[command(name = "whoiskey")]
#[command(about = "Resolve raw WHOIS field labels to canonical keys")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human", global = true)]
    format: String,

    /// JSON file of extra "label": "canonical_key" rules
    #[arg(short, long, global = true)]
    extend: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw label to its canonical key
    Resolve {
        /// Label as it appears in the response, e.g. "Admin E-Mail:"
        label: String,
        /// Contact role (registrant, admin, tech, billing)
        #[arg(short, long, default_value = "registrant")]
        role: Role,
    },
    /// Show the normalized form of a raw label
    Normalize {
        /// Label as it appears in the response
        label: String,
    },
    /// List every label known for a role
    Table {
        /// Contact role (registrant, admin, tech, billing)
        #[arg(short, long, default_value = "registrant")]
        role: Role,
    },
    /// Validate the rule table and report its size
    Check,
    /// Parse raw WHOIS responses into canonical records
    Parse {
        /// Files containing raw WHOIS text
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let output_format: whoiskey_core::OutputFormat = cli.format.parse().unwrap_or_default();

    let table = match load_table(cli.extend.as_ref()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{} {}", "Error:".ctp_red(), e);
            std::process::exit(1);
        }
    };

    execute_command(cli.command, output_format, &table)
}

/// Builds the rule table, applying an extension file if one was given.
fn load_table(extend: Option<&PathBuf>) -> anyhow::Result<NormalizationTable> {
    let builder = match extend {
        Some(path) => TableBuilder::new().extend_from_file(path)?,
        None => TableBuilder::new(),
    };
    Ok(builder.build()?)
}

fn execute_command(
    command: Commands,
    output_format: whoiskey_core::OutputFormat,
    table: &NormalizationTable,
) -> anyhow::Result<()> {
    let formatter = whoiskey_core::output::get_formatter(output_format);
    let resolver = FieldResolver::with_table(table);

    match command {
        Commands::Resolve { label, role } => {
            let resolution = resolver.resolve(&label, role);
            println!("{}", formatter.format_resolution(&label, role, &resolution));
        }
        Commands::Normalize { label } => {
            println!("{}", whoiskey_core::normalize(&label));
        }
        Commands::Table { role } => {
            println!("{}", formatter.format_table(role, &table.entries(role)));
        }
        Commands::Check => {
            for role in Role::ALL {
                println!(
                    "{} {:<10} {} labels",
                    "✓".ctp_green(),
                    role.as_str(),
                    table.len(role)
                );
            }
        }
        Commands::Parse { files } => {
            for file in files {
                let raw = std::fs::read_to_string(&file)?;
                let record = WhoisRecord::assemble(whoiskey_core::segment(&raw), &resolver);
                debug!(
                    file = %file.display(),
                    fields = record.fields.len(),
                    unmapped = record.unmapped.len(),
                    "Parsed response"
                );
                println!(
                    "{}",
                    formatter.format_record(&file.display().to_string(), &record)
                );
            }
        }
    }

    Ok(())
}
