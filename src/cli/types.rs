use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustfolio")]
#[command(about = "Declarative multi-language static site generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site configuration file (defaults to ./config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the site
    #[command(alias = "b")]
    Build {
        /// Site configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Data directory (overrides the config file)
        #[arg(short, long, value_name = "DIR")]
        data: Option<PathBuf>,

        /// Destination directory (overrides the config file)
        #[arg(short = 'o', long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Enable debug logging
        #[arg(short = 'g', long, default_value_t = false)]
        debug: bool,
    },

    /// Remove the build output without building
    Clean {
        /// Site configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}
