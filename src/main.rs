use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::error;

use cinema_catalog_export::{
    config::Configuration,
    core::CatalogExtractor,
    graph::OntologyGraph,
    utils::write_catalog,
};

#[derive(Parser)]
#[command(
    name = "cinema_catalog_export",
    about = "Convert a cinema/movie Turtle ontology into a denormalized JSON catalog",
    long_about = None,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the ontology into the JSON catalog
    Convert {
        /// Configuration file path (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Turtle ontology input path (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON output path (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base namespace URI for ontology classes and predicates (overrides config)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Show counts for an ontology without writing output
    Stats {
        /// Configuration file path (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Turtle ontology input path (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Base namespace URI (overrides config)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Configuration file path
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Generate example configuration file
    GenerateConfig {
        /// Output path for configuration file
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration format (yaml or json)
        #[arg(short, long, default_value = "yaml")]
        format: ConfigFormat,
    },
}

#[derive(clap::ValueEnum, Clone)]
enum ConfigFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Convert {
            config,
            input,
            output,
            namespace,
        } => convert_command(config, input, output, namespace),
        Commands::Stats {
            config,
            input,
            namespace,
        } => stats_command(config, input, namespace),
        Commands::Validate { config } => validate_command(config),
        Commands::GenerateConfig { output, format } => generate_config_command(output, format),
    }
}

/// Start from the config file (or defaults) and let CLI flags win.
fn resolve_configuration(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    namespace: Option<String>,
) -> Result<Configuration> {
    let mut config = match config_path {
        Some(path) => Configuration::from_file(&path)?,
        None => Configuration::default(),
    };

    if let Some(input) = input {
        config.input_path = input;
    }
    if let Some(output) = output {
        config.output_path = output;
    }
    if let Some(namespace) = namespace {
        config.namespace = namespace;
    }

    config.validate()?;
    Ok(config)
}

fn convert_command(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    namespace: Option<String>,
) -> Result<()> {
    println!("{}", "Starting catalog export...".bright_blue().bold());

    let config = resolve_configuration(config_path, input, output, namespace)?;

    println!(" Input: {}", config.input_path.display().to_string().bright_green());
    println!(" Namespace: {}", config.namespace);

    let graph = OntologyGraph::load(&config.input_path, &config.namespace)?;
    println!(" Loaded {} triples", graph.triple_count()?.to_string().bright_cyan());

    let extraction = CatalogExtractor::new(&graph).extract()?;

    write_catalog(&extraction.catalog, &config.output_path)?;
    println!(
        " Catalog written to: {}",
        config.output_path.display().to_string().bright_green()
    );

    println!("\n{}", " Export Summary".bright_green().bold());
    println!(
        " Total cinemas: {}",
        extraction.catalog.cinemas.len().to_string().bright_cyan()
    );
    println!(
        " Total movies : {}",
        extraction.movie_count.to_string().bright_cyan()
    );

    if extraction.skipped_shows > 0 {
        println!(
            " {} showsMovie targets were not typed Movie and were skipped",
            extraction.skipped_shows.to_string().bright_yellow()
        );
    }

    Ok(())
}

fn stats_command(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    namespace: Option<String>,
) -> Result<()> {
    println!("{}", " Ontology Statistics".bright_blue().bold());

    let config = resolve_configuration(config_path, input, None, namespace)?;

    let graph = OntologyGraph::load(&config.input_path, &config.namespace)?;
    let extraction = CatalogExtractor::new(&graph).extract()?;

    println!(" Triples : {}", graph.triple_count()?.to_string().bright_cyan());
    println!(
        " Cinemas : {}",
        extraction.catalog.cinemas.len().to_string().bright_cyan()
    );
    println!(
        " Movies  : {}",
        extraction.movie_count.to_string().bright_cyan()
    );
    println!(
        " Skipped showsMovie targets: {}",
        extraction.skipped_shows.to_string().bright_cyan()
    );

    Ok(())
}

fn validate_command(config_path: PathBuf) -> Result<()> {
    println!("{}", " Validating configuration...".bright_blue().bold());

    match Configuration::from_file(&config_path) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                println!(" Configuration is valid!");
                println!(" Input: {}", config.input_path.display().to_string().bright_green());
                println!(" Output: {}", config.output_path.display().to_string().bright_green());
                println!(" Namespace: {}", config.namespace);
                Ok(())
            }
            Err(e) => {
                error!(" Configuration validation failed: {}", e);
                Err(e)
            }
        },
        Err(e) => {
            error!(" Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn generate_config_command(output_path: PathBuf, format: ConfigFormat) -> Result<()> {
    println!("{}", " Generating example configuration...".bright_blue().bold());

    let config = Configuration::example();

    let content = match format {
        ConfigFormat::Yaml => serde_yaml::to_string(&config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
    };

    std::fs::write(&output_path, content)?;

    println!(
        " Example configuration generated at: {}",
        output_path.display().to_string().bright_green()
    );
    println!(" Edit the file to customize for your use case");

    Ok(())
}
