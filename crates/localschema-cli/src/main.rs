mod site;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "localschema")]
#[command(about = "Assemble local-business structured-data graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the JSON-LD graph for a site description
    Render {
        /// Path to the site YAML file
        #[arg(long)]
        site: PathBuf,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Load and validate a site description without rendering
    Validate {
        /// Path to the site YAML file
        #[arg(long)]
        site: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { site, compact } => render(&site, compact),
        Commands::Validate { site } => validate(&site),
    }
}

fn render(path: &Path, compact: bool) -> anyhow::Result<()> {
    let site = site::load_site(path)?;
    localschema_core::validate_options(&site.options)?;
    let repo = site::build_repository(&site);

    let graph = localschema_graph::assemble(&site.options, &repo, &site.context);
    let document = serde_json::json!({
        "@context": "https://schema.org",
        "@graph": graph,
    });

    let rendered = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{rendered}");
    Ok(())
}

fn validate(path: &Path) -> anyhow::Result<()> {
    let site = site::load_site(path)?;
    localschema_core::validate_options(&site.options)?;
    println!(
        "{}: OK ({} locations)",
        path.display(),
        site.locations.len()
    );
    Ok(())
}
