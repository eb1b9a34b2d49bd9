use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use domino_layout::common::config::{Config, DEFAULT_CONFIG, config_file};
use domino_layout::common::log;
use domino_layout::layout_engine::draw;
use domino_layout::model::TableSnapshot;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Lay a domino table out as a snake on a bounded board")]
struct Cli {
    /// Table snapshot as JSON. Read from stdin when missing or `-`.
    input: Option<PathBuf>,

    /// Path to configuration file to use (overrides default).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Board width in px (overrides the config file).
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// Short edge of a tile in px (overrides the config file).
    #[arg(long, value_name = "PX")]
    piece_size: Option<f64>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// More log output on stderr. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Check the configuration and exit without laying anything out.
    #[arg(long)]
    validate: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled default configuration
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Ascii,
}

fn main() {
    let opt = Cli::parse();

    if let Some(Commands::DefaultConfig) = &opt.command {
        print!("{DEFAULT_CONFIG}");
        return;
    }

    log::init_logging(opt.verbose);

    if let Err(e) = run(&opt) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(opt: &Cli) -> anyhow::Result<()> {
    let config_path = opt.config.clone().or_else(config_file);
    let mut config = Config::read_or_default(config_path.as_deref())?;
    if let Some(width) = opt.width {
        config.board.width = width;
    }
    if let Some(piece_size) = opt.piece_size {
        config.board.piece_size = piece_size;
    }

    let issues = config.validate();
    if opt.validate {
        if issues.is_empty() {
            println!("Config validation passed");
            return Ok(());
        }
        for issue in &issues {
            eprintln!("{issue}");
        }
        process::exit(1);
    }
    if !issues.is_empty() {
        anyhow::bail!("Invalid configuration: {}", issues.join("; "));
    }

    let snapshot = read_snapshot(opt.input.as_ref())?;
    info!(tiles = snapshot.table.len(), "Read table");
    let layout = snapshot.layout(&config).context("Could not lay out the table")?;

    match opt.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
        Format::Ascii => println!("{}", draw(&layout)),
    }
    Ok(())
}

fn read_snapshot(input: Option<&PathBuf>) -> anyhow::Result<TableSnapshot> {
    let buf = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Could not read stdin")?;
            buf
        }
    };
    TableSnapshot::from_json(&buf).context("Invalid table snapshot")
}
