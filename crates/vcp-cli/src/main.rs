//! VS Code projects launcher plugin
//!
//! Entry point for the `vcp` plugin handler. Provides:
//! - Default: serve launcher requests over stdin/stdout
//! - Subcommands for querying and inspecting the setup from a terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vcp_core::ProjectsPlugin;
use vcp_core::config::{Config, Directories, SourcePaths};
use vcp_core::plugin::Manifest;

/// VS Code projects plugin for the launcher
#[derive(Parser)]
#[command(name = "vcp")]
#[command(about = "Find and open VS Code projects from the launcher")]
#[command(version)]
#[command(after_help = "\
Examples:
  vcp                     Serve launcher requests on stdin/stdout
  vcp query blog          Show projects matching \"blog\"
  vcp query --plain ''    List every known project
  vcp paths               Show which source files are read
  vcp manifest            Print the launcher manifest for this plugin
")]
struct Cli {
    /// Config file (defaults to ~/.config/vcp/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve launcher requests (newline-delimited JSON on stdin/stdout)
    Serve,

    /// Resolve a query and print the results
    Query {
        /// Search text (without the trigger prefix)
        text: String,

        /// One line per project instead of JSON
        #[arg(long)]
        plain: bool,
    },

    /// Show the source files and whether they exist
    Paths,

    /// Print the effective configuration
    Config,

    /// Print the launcher manifest for this plugin
    Manifest,
}

/// Set up logging. Stdout carries the protocol, so logs go to stderr and
/// optionally to a file.
fn setup_logging(log_file: Option<&Path>) -> Result<()> {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vcp={default_level},vcp_core={default_level}")));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true);

    let file_layer = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;

            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // keep the writer alive for the whole process
            std::mem::forget(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_file.as_deref())?;

    let dirs = Directories::new().context("Failed to determine config directories")?;
    let config = load_config(cli.config.as_deref(), &dirs)?;
    let paths = SourcePaths::resolve(&config, &dirs);

    match cli.command {
        None | Some(Commands::Serve) => run_serve(config, paths),
        Some(Commands::Query { text, plain }) => run_query(config, paths, &text, plain),
        Some(Commands::Paths) => {
            run_paths(&paths, &config);
            Ok(())
        }
        Some(Commands::Config) => run_config(&config),
        Some(Commands::Manifest) => run_manifest(&config),
    }
}

/// An explicit `--config` must be readable; the default location is optional.
fn load_config(explicit: Option<&Path>, dirs: &Directories) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Config::load(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Ok(Config::load(&dirs.config_file).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {e}", dirs.config_file.display());
            Config::default()
        })),
    }
}

fn run_serve(config: Config, paths: SourcePaths) -> Result<()> {
    info!("Serving launcher requests");
    debug!("Sources: {paths:?}");

    let plugin = ProjectsPlugin::new(config, paths);
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    plugin
        .serve(stdin, stdout)
        .context("Plugin I/O failed")?;

    info!("Input closed, exiting");
    Ok(())
}

fn run_query(config: Config, paths: SourcePaths, text: &str, plain: bool) -> Result<()> {
    let plugin = ProjectsPlugin::new(config, paths);
    let items = plugin.search(text);

    if !plain {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    for item in &items {
        let path = item.description.as_deref().unwrap_or("");
        println!("  {:<24} {path}", item.name);
    }

    Ok(())
}

fn run_paths(paths: &SourcePaths, config: &Config) {
    let mark = |path: &Path| if path.exists() { "found" } else { "missing" };

    println!("\nRecents (first found is used):\n");
    if !config.include_recent {
        println!("  disabled (includeRecent = false)");
    }
    for path in &paths.storage_files {
        println!("  {:<8} {}", mark(path.as_path()), path.display());
    }

    println!("\nProject Manager:\n");
    println!(
        "  {:<8} {}",
        mark(paths.project_manager_file.as_path()),
        paths.project_manager_file.display()
    );
    println!();
}

fn run_config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn run_manifest(config: &Config) -> Result<()> {
    let exe = std::env::current_exe().context("Failed to locate the vcp binary")?;
    let manifest = Manifest::for_config(config, format!("{} serve", exe.display()));
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
