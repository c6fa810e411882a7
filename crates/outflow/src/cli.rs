//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Publish the result of a release run as named CI job outputs.
#[derive(Debug, Parser)]
#[command(name = "outflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Publish release outputs to the CI output file
    Publish(commands::publish::PublishArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Publish(args) => commands::publish::run(args),
        }
    }
}
