//! Agent settings commands
//!
//! The prompt can be passed as an argument or piped via stdin:
//!   postdeck settings set "Write in first person."
//!   postdeck settings set < prompt.md

use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use postdeck_server::actions;
use postdeck_server::views;

use crate::render::{self, Output};

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show the current agent prompt
    Show,
    /// Replace the agent prompt (reads stdin if not provided)
    Set {
        /// The new prompt
        prompt: Option<String>,
    },
}

pub async fn run_settings(args: SettingsArgs, database_url: Option<String>, output: &Output) -> Result<()> {
    let store = super::connect(database_url).await?;

    match args.command {
        SettingsCommand::Show => {
            let view = views::settings(&store).await?;
            output.emit(&view, |p| render::settings(&view, p))
        }
        SettingsCommand::Set { prompt } => {
            let raw = read_prompt(prompt)?;
            let outcome = actions::update_agent_config(&store, &raw).await?;
            if !outcome.value {
                bail!("agent_config row is missing; the prompt was not saved");
            }
            output.emit(&outcome, |p| format!("{}\n", p.ok.apply_to("Prompt saved")))
        }
    }
}

/// Read prompt from argument or stdin
fn read_prompt(arg: Option<String>) -> Result<String> {
    match arg {
        Some(prompt) => Ok(prompt),
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("No prompt provided. Either pass as argument or pipe via stdin.");
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read prompt from stdin")?;
            Ok(buf)
        }
    }
}
