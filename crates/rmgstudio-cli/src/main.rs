//! RMG Studio CLI
//!
//! Thin wrapper around rmgstudio-core for scripting and CI checks.
//!
//! ## Usage
//!
//! ```bash
//! # Summary of a template
//! rmgstudio info jebus.json
//!
//! # Check references and values (exit code 1 on errors)
//! rmgstudio validate jebus.json
//!
//! # List zones / connections
//! rmgstudio zones jebus.json
//! rmgstudio connections jebus.json
//!
//! # Render the zone graph
//! rmgstudio export-graph jebus.json -o jebus.png --width 800 --height 800
//!
//! # Start a new template with six zones in a ring
//! rmgstudio new ring.json --name "Ring" --zones 6
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rmgstudio_core::document::{self, ensure_extension};
use rmgstudio_core::graph::export_png;
use rmgstudio_core::validate::{tally, validate};
use rmgstudio_core::{logging, ExportOptions, GraphScene, GraphStyle, Template};

/// RMG Studio - template generation config tools
#[derive(Parser)]
#[command(name = "rmgstudio")]
#[command(version = "0.1.0")]
#[command(about = "RMG Studio - template generation config tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a template summary
    Info {
        /// Template file
        file: PathBuf,
    },

    /// Check a template for broken references and suspicious values
    Validate {
        /// Template file
        file: PathBuf,
    },

    /// List zones
    Zones {
        /// Template file
        file: PathBuf,
    },

    /// List connections
    Connections {
        /// Template file
        file: PathBuf,
    },

    /// Render the zone graph to a PNG file
    ExportGraph {
        /// Template file
        file: PathBuf,

        /// Output image
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Draw connections without arrowheads
        #[arg(long)]
        no_arrows: bool,
    },

    /// Write a starter template
    New {
        /// Destination file
        file: PathBuf,

        /// Template name
        #[arg(short, long, default_value = "New Template")]
        name: String,

        /// Number of zones joined in a ring
        #[arg(short, long, default_value_t = 4)]
        zones: usize,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn load(path: &Path) -> Result<Template> {
    document::load_template(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_info(path: &Path, template: &Template) {
    println!("Template: {}", template.name);
    println!("  File: {}", path.display());
    if let Some(version) = &template.version {
        println!("  Version: {}", version);
    }
    if let Some(size) = template.map_size {
        println!("  Map size: {}", size.label());
    }
    println!(
        "  Players: {} - {}",
        or_dash(template.min_players),
        or_dash(template.max_players)
    );
    if let Some(description) = &template.description {
        println!("  Description: {}", description);
    }
    println!();
    println!("Contents:");
    println!("  Zones: {}", template.zones.len());
    println!("  Connections: {}", template.connections.len());
    println!("  Shops: {}", template.shops.len());
    println!("  Terrain rules: {}", template.terrains.len());
    println!("  Pandora boxes: {}", template.pandora_boxes.len());
    println!("  Bans: {}", template.bans.total());

    let (errors, warnings) = tally(&validate(template));
    println!();
    println!("Validation: {} error(s), {} warning(s)", errors, warnings);
}

fn print_zones(template: &Template) {
    if template.zones.is_empty() {
        println!("No zones.");
        return;
    }
    println!(
        "{:<16} {:<8} {:<6} {:<14} {:<8} {:>6} {:>5}",
        "ID", "KIND", "OWNER", "TERRAIN", "GUARDS", "SIZE", "LINKS"
    );
    for zone in &template.zones {
        println!(
            "{:<16} {:<8} {:<6} {:<14} {:<8} {:>6} {:>5}",
            zone.id,
            zone.kind.key(),
            or_dash(zone.owner),
            zone.terrain.map(|t| t.key()).unwrap_or("-"),
            zone.guard_strength.map(|g| g.key()).unwrap_or("-"),
            or_dash(zone.size),
            template.degree(&zone.id),
        );
    }
}

fn print_connections(template: &Template) {
    if template.connections.is_empty() {
        println!("No connections.");
        return;
    }
    println!("{:>3}  {:<36} {:<5} {:<8} {:<5}", "#", "ROUTE", "MAIN", "GUARD", "ROAD");
    for (i, conn) in template.connections.iter().enumerate() {
        let guard = if conn.guarded {
            or_dash(conn.guard_value)
        } else {
            "none".to_string()
        };
        let road = match conn.road {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        println!(
            "{:>3}  {:<36} {:<5} {:<8} {:<5}",
            i,
            conn.label(),
            if conn.main { "yes" } else { "no" },
            guard,
            road,
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Commands::Info { file } => {
            let template = load(&file)?;
            print_info(&file, &template);
        }

        Commands::Validate { file } => {
            let template = load(&file)?;
            let issues = validate(&template);
            for issue in &issues {
                println!("{}", issue);
            }
            let (errors, warnings) = tally(&issues);
            println!("{} error(s), {} warning(s)", errors, warnings);
            if errors > 0 {
                bail!("{} failed validation", file.display());
            }
        }

        Commands::Zones { file } => print_zones(&load(&file)?),

        Commands::Connections { file } => print_connections(&load(&file)?),

        Commands::ExportGraph {
            file,
            output,
            width,
            height,
            no_arrows,
        } => {
            let template = load(&file)?;
            let defaults = ExportOptions::default();
            let options = ExportOptions {
                width: width.unwrap_or(defaults.width),
                height: height.unwrap_or(defaults.height),
                show_arrows: !no_arrows,
            };
            if options.width == 0 || options.height == 0 {
                bail!("Image size must be positive");
            }

            let output = ensure_extension(output, "png");
            let style = options.style(&GraphStyle::default());
            let scene = GraphScene::build(&template, &style, None);
            export_png(&scene, &output)
                .with_context(|| format!("Failed to export {}", output.display()))?;

            println!("Exported zone graph");
            println!("  Zones: {}", scene.nodes.len());
            println!("  Output: {}", output.display());
        }

        Commands::New {
            file,
            name,
            zones,
            force,
        } => {
            let file = document::with_template_extension(file);
            if file.exists() && !force {
                bail!("{} already exists (use --force to replace it)", file.display());
            }
            let template = Template::starter(name, zones);
            document::save_template(&file, &template)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::info!(path = %file.display(), zones, "wrote starter template");

            println!("Created template: {}", template.name);
            println!("  Zones: {}", template.zones.len());
            println!("  Connections: {}", template.connections.len());
            println!("  File: {}", file.display());
        }
    }

    Ok(())
}
