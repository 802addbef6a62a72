//! Theme preference command
//!
//! The only writer of the client config file.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{ClientConfig, Theme};

#[derive(Parser, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

/// Apply a theme command, returning the config as persisted.
pub fn run_theme(args: ThemeArgs, mut config: ClientConfig, path: &Path) -> Result<ClientConfig> {
    let next = match args.command {
        ThemeCommand::Show => {
            println!("{}", config.theme.as_str());
            return Ok(config);
        }
        ThemeCommand::Toggle => config.theme.toggled(),
        ThemeCommand::Set { theme } => theme,
    };

    config.theme = next;
    config.save(path)?;
    tracing::debug!(path = %path.display(), theme = next.as_str(), "client config saved");
    println!("{}", next.as_str());
    Ok(config)
}
