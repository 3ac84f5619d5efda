//! TextQuest CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use textquest_foundation::Result;
use textquest_runtime::{Game, Repl, init_project};
use textquest_world::load_world;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Text-adventure interpreter
#[derive(Parser)]
#[command(name = "textquest")]
#[command(about = "Play and scaffold TextQuest adventures", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. `debug`, `textquest_engine=trace`)
    #[arg(long, global = true, env = "TEXTQUEST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a world and play it
    Run {
        /// World file
        #[arg(long, default_value = "config/world.yaml")]
        world: PathBuf,

        /// Extra plugin to enable, after those the world requests
        #[arg(long = "plugin", value_name = "NAME")]
        plugins: Vec<String>,

        /// Skip the welcome banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Create a new adventure project
    Init {
        /// Directory to create
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.context {
                Some(context) => eprintln!("\x1b[31mError: {} ({context})\x1b[0m", e.kind),
                None => eprintln!("\x1b[31mError: {}\x1b[0m", e.kind),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            world,
            plugins,
            no_banner,
        } => play(&world, &plugins, no_banner),
        Commands::Init { path } => {
            let world = init_project(&path)?;
            println!("Project initialized in '{}'.", path.display());
            println!(
                "Run 'textquest run --world {}' to start playing.",
                world.display()
            );
            Ok(())
        }
    }
}

fn play(world_path: &Path, extra_plugins: &[String], no_banner: bool) -> Result<()> {
    let world = load_world(world_path)?;
    let requested = world.plugins.iter().chain(extra_plugins);
    let plugins = textquest_stdlib::registry(requested)?;

    let game = Game::new(world, plugins)?;
    let mut repl = Repl::new(game)?;
    if no_banner {
        repl = repl.without_banner();
    }
    repl.run()
}
