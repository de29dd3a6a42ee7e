//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "dogdex")]
#[command(about = "Dogdex - dog breed directory client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Look up the sub-breeds of one or more dog breeds
    Lookup {
        /// Breed names to resolve (case- and whitespace-insensitive)
        #[arg(required = true)]
        breeds: Vec<String>,

        /// Show how many directory calls the lookup actually made
        #[arg(long)]
        stats: bool,
    },
}
