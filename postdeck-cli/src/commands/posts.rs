//! Post commands - list, show, edit, delete

use std::io::IsTerminal;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use postdeck_server::actions;
use postdeck_server::models::{PostEdit, TagsInput};
use postdeck_server::views;

use crate::confirm::{Confirmation, ConfirmGate};
use crate::render::{self, Output, Palette};

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// List all posts, newest first
    List,
    /// Show one post in full
    Show {
        /// Post ID (UUID)
        id: Uuid,
    },
    /// Edit title, bodies, hashtags or status of a post
    Edit(EditArgs),
    /// Delete a post permanently
    Delete {
        /// Post ID (UUID)
        id: Uuid,
        /// Skip the interactive confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Post ID (UUID)
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New long-form post body
    #[arg(long)]
    pub body: Option<String>,

    /// New short-form post
    #[arg(long)]
    pub short: Option<String>,

    /// Hashtags, whitespace separated (e.g. "#rust #axum")
    #[arg(long)]
    pub tags: Option<String>,

    /// New status: generated, draft, published or error
    #[arg(long)]
    pub status: Option<String>,
}

impl From<EditArgs> for PostEdit {
    fn from(args: EditArgs) -> Self {
        Self {
            title: args.title,
            linkedin_post: args.body,
            short_post: args.short,
            hashtags: args.tags.map(TagsInput::Raw),
            status: args.status,
        }
    }
}

pub async fn run_posts(args: PostsArgs, database_url: Option<String>, output: &Output) -> Result<()> {
    let store = super::connect(database_url).await?;

    match args.command {
        PostsCommand::List => {
            let view = views::posts(&store).await?;
            output.emit(&view, |p| render::posts(&view, p))
        }
        PostsCommand::Show { id } => {
            let Some(post) = views::post(&store, id).await? else {
                bail!("post '{}' not found", id);
            };
            output.emit(&post, |p| render::post(&post, p))
        }
        PostsCommand::Edit(edit_args) => {
            let id = edit_args.id;
            let outcome = actions::update_post(&store, id, PostEdit::from(edit_args)).await?;
            output.emit(&outcome, |p| edit_message(id, outcome.value, p))
        }
        PostsCommand::Delete { id, yes } => {
            if !yes {
                // Read only to show the title in the prompt
                let Some(post) = views::post(&store, id).await? else {
                    let missing = actions::ActionOutcome {
                        value: false,
                        revalidate: Vec::new(),
                    };
                    return output.emit(&missing, |p| delete_message(id, false, p));
                };
                if !confirm_delete(post.display_title())? {
                    println!("Cancelled; post kept");
                    return Ok(());
                }
            }

            let outcome = actions::delete_post(&store, id).await?;
            output.emit(&outcome, |p| delete_message(id, outcome.value, p))
        }
    }
}

fn edit_message(id: Uuid, updated: bool, p: &Palette) -> String {
    if updated {
        format!("{}\n", p.ok.apply_to(format!("Saved post {id}")))
    } else {
        format!("{}\n", p.muted.apply_to(format!("No post {id}; nothing changed")))
    }
}

fn delete_message(id: Uuid, deleted: bool, p: &Palette) -> String {
    if deleted {
        format!("{}\n", p.warn.apply_to(format!("Deleted post {id}")))
    } else {
        format!("{}\n", p.muted.apply_to(format!("No post {id}; nothing deleted")))
    }
}

/// Arm a delete and ask for confirmation within the window.
fn confirm_delete(title: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        bail!("refusing to delete without confirmation; pass --yes when not on a terminal");
    }

    let mut gate = ConfirmGate::default();
    gate.arm(Instant::now());

    let question = format!(
        "Delete \"{}\"? Confirm within {}s",
        title,
        gate.window().as_secs()
    );
    let answer = inquire::Confirm::new(&question)
        .with_default(false)
        .prompt()
        .context("confirmation prompt failed")?;
    if !answer {
        return Ok(false);
    }

    match gate.confirm(Instant::now()) {
        Confirmation::Confirmed => Ok(true),
        Confirmation::Expired => {
            tracing::warn!("delete confirmation expired");
            bail!("confirmation window expired; post kept")
        }
        Confirmation::Idle => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    #[test]
    fn unknown_id_messages_are_not_errors() {
        let p = Palette::for_theme(Theme::Light);
        let id = Uuid::nil();

        let text = console::strip_ansi_codes(&edit_message(id, false, &p)).into_owned();
        assert!(text.contains("nothing changed"));

        let text = console::strip_ansi_codes(&delete_message(id, false, &p)).into_owned();
        assert!(text.contains("nothing deleted"));

        let text = console::strip_ansi_codes(&delete_message(id, true, &p)).into_owned();
        assert_eq!(text, format!("Deleted post {id}\n"));
    }

    #[test]
    fn edit_args_map_to_raw_tags() {
        let args = EditArgs {
            id: Uuid::nil(),
            title: None,
            body: Some("long".into()),
            short: None,
            tags: Some("#a #b".into()),
            status: Some("draft".into()),
        };
        let edit = PostEdit::from(args);
        assert_eq!(edit.linkedin_post.as_deref(), Some("long"));
        assert_eq!(edit.hashtags, Some(TagsInput::Raw("#a #b".into())));
    }
}
