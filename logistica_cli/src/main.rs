use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use logistica_routing::{
    parsers::{parser::NetworkParser, road_file::RoadFileParser},
    weather::Weather,
};
use mimalloc::MiMalloc;

use crate::{
    commands::{DEFAULT_DATA_FILE, DEFAULT_MAX_CITIES, ExportFormat, Settings},
    shell::Shell,
};

mod commands;
mod render;
mod shell;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Routes, graph center and distance tables for a weather-dependent road network
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Road network file with `from to normal rain snow storm` records
    #[arg(
        short,
        long,
        env = "LOGISTICA_DATA_FILE",
        default_value = DEFAULT_DATA_FILE,
        global = true
    )]
    file: PathBuf,

    /// Weather applied after loading (normal, rain, snow or storm)
    #[arg(
        short,
        long,
        env = "LOGISTICA_WEATHER",
        default_value_t = Weather::Normal,
        global = true
    )]
    weather: Weather,

    /// Largest network accepted by the center and distance queries
    #[arg(
        long,
        env = "LOGISTICA_MAX_CITIES",
        default_value_t = DEFAULT_MAX_CITIES,
        global = true
    )]
    max_cities: usize,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fastest route between two cities
    #[command(visible_alias = "r")]
    Route {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
    /// City with the smallest eccentricity
    Center,
    /// Direct connection times
    Matrix,
    /// Shortest travel times between every pair of cities
    Distances,
    /// Network snapshot as JSON or Graphviz DOT
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,

        /// Highlight the route starting here (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Highlight the route ending here (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Interactive menu
    Shell,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut graph = RoadFileParser
        .parse(&cli.file)
        .with_context(|| format!("Failed to load road network from {}", cli.file.display()))?;
    graph.set_weather(cli.weather);

    let settings = Settings {
        data_file: cli.file,
        max_cities: cli.max_cities,
    };
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Route { from, to } => {
            commands::route(&graph, &from, &to, &mut stdout)?;
        }
        Commands::Center => commands::center(&graph, settings.max_cities, &mut stdout)?,
        Commands::Matrix => commands::adjacency(&graph, &mut stdout)?,
        Commands::Distances => commands::distances(&graph, settings.max_cities, &mut stdout)?,
        Commands::Export {
            format,
            from,
            to,
            output,
        } => {
            let route = from.as_deref().zip(to.as_deref());
            commands::export(&graph, format, route, output.as_deref(), &mut stdout)?
        }
        Commands::Shell => {
            Shell::new(graph, settings, io::stdin().lock(), stdout).run()?;
        }
    }

    Ok(())
}
