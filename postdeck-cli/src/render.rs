//! Terminal rendering of dashboard views
//!
//! Every renderer takes the [`Palette`] built from the client theme and
//! returns a `String`; commands decide where it goes.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{DateTime, Utc};
use console::Style;
use serde::Serialize;

use postdeck_server::db::{PipelineRun, Post};
use postdeck_server::models::PostStatus;
use postdeck_server::views::{DashboardView, PipelineView, PostsView, SettingsView};

use crate::config::Theme;

/// Longest title shown in list rows
const TITLE_WIDTH: usize = 56;

/// Styles for one theme
#[derive(Debug, Clone)]
pub struct Palette {
    pub heading: Style,
    pub accent: Style,
    pub muted: Style,
    pub ok: Style,
    pub warn: Style,
    pub err: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: Style::new().bold().black(),
                accent: Style::new().blue(),
                muted: Style::new().dim(),
                ok: Style::new().green(),
                warn: Style::new().yellow(),
                err: Style::new().red(),
            },
            Theme::Dark => Self {
                heading: Style::new().bold().white(),
                accent: Style::new().cyan().bright(),
                muted: Style::new().color256(245),
                ok: Style::new().green().bright(),
                warn: Style::new().yellow().bright(),
                err: Style::new().red().bright(),
            },
        }
    }

    fn status(&self, raw: &str) -> String {
        let style = match raw.parse::<PostStatus>() {
            Ok(PostStatus::Published) => &self.ok,
            Ok(PostStatus::Draft) => &self.warn,
            Ok(PostStatus::Error) | Err(_) => &self.err,
            Ok(PostStatus::Generated) => &self.accent,
        };
        style.apply_to(PostStatus::label_for(raw)).to_string()
    }
}

/// Output mode chosen once in `main`
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub palette: Palette,
}

impl Output {
    pub fn new(json: bool, theme: Theme) -> Self {
        Self {
            json,
            palette: Palette::for_theme(theme),
        }
    }

    /// Print `value` as JSON in `--json` mode, else the rendered text.
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce(&Palette) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", render(&self.palette));
        }
        Ok(())
    }
}

fn timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn post_row(out: &mut String, post: &Post, p: &Palette) {
    let _ = writeln!(
        out,
        "  {}  {:<width$}  {}  {}",
        p.muted.apply_to(post.id),
        truncate(post.display_title(), TITLE_WIDTH),
        p.status(post.status()),
        p.muted.apply_to(timestamp(post.created_at)),
        width = TITLE_WIDTH,
    );
}

fn run_row(out: &mut String, run: &PipelineRun, p: &Palette) {
    let outcome = if run.succeeded() {
        p.ok.apply_to("ok").to_string()
    } else {
        p.err.apply_to("error").to_string()
    };
    let _ = writeln!(
        out,
        "  {}  {:<5}  found {:>3}  ok {:>3}  error {:>3}  {}",
        p.muted.apply_to(timestamp(run.executed_at)),
        outcome,
        run.pages_found(),
        run.pages_ok(),
        run.pages_error(),
        run.flow_execution.as_deref().unwrap_or("-"),
    );
    if let Some(detail) = run.error_detail.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "      {}", p.err.apply_to(detail));
    }
}

pub fn dashboard(view: &DashboardView, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.heading.apply_to("Dashboard"));
    let _ = writeln!(
        out,
        "  Posts {}  ({} published, {} generated)",
        p.accent.apply_to(view.total_posts),
        view.published_posts,
        view.generated_posts,
    );
    let _ = writeln!(
        out,
        "  Runs  {}  ({} successful)",
        p.accent.apply_to(view.total_runs),
        view.successful_runs,
    );
    match &view.last_run {
        Some(run) => {
            let _ = writeln!(out, "\n{}", p.heading.apply_to("Last run"));
            run_row(&mut out, run, p);
        }
        None => {
            let _ = writeln!(out, "  {}", p.muted.apply_to("No pipeline runs yet"));
        }
    }
    if !view.recent_posts.is_empty() {
        let _ = writeln!(out, "\n{}", p.heading.apply_to("Recent posts"));
        for post in &view.recent_posts {
            post_row(&mut out, post, p);
        }
    }
    out
}

pub fn posts(view: &PostsView, p: &Palette) -> String {
    let mut out = String::new();
    let plural = if view.count == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "{} {}",
        p.heading.apply_to("Posts"),
        p.muted.apply_to(format!("{} post{plural} in the database", view.count)),
    );
    if view.posts.is_empty() {
        let _ = writeln!(out, "  {}", p.muted.apply_to("Nothing generated yet"));
    }
    for post in &view.posts {
        post_row(&mut out, post, p);
    }
    out
}

pub fn post(post: &Post, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.heading.apply_to(post.display_title()));
    let _ = writeln!(out, "  id       {}", post.id);
    let _ = writeln!(out, "  source   {}", post.notion_page_id);
    let _ = writeln!(out, "  status   {}", p.status(post.status()));
    let _ = writeln!(out, "  created  {}", timestamp(post.created_at));
    let _ = writeln!(out, "  updated  {}", timestamp(post.updated_at));
    if !post.tags().is_empty() {
        let _ = writeln!(out, "  tags     {}", p.accent.apply_to(post.tags().join(" ")));
    }

    for (label, body) in [
        ("Post", &post.linkedin_post),
        ("Short version", &post.short_post),
        ("Original note", &post.original_content),
    ] {
        if let Some(body) = body.as_deref().filter(|b| !b.trim().is_empty()) {
            let _ = writeln!(out, "\n{}\n{}", p.heading.apply_to(label), body.trim_end());
        }
    }
    out
}

pub fn pipeline(view: &PipelineView, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.heading.apply_to("Pipeline"));
    let _ = writeln!(
        out,
        "  {} runs, {} successful, {} pages ok, {} pages with errors",
        p.accent.apply_to(view.total_runs),
        p.ok.apply_to(view.successful_runs),
        view.total_pages_ok,
        p.err.apply_to(view.total_pages_error),
    );
    if view.runs.is_empty() {
        let _ = writeln!(out, "  {}", p.muted.apply_to("No pipeline runs yet"));
    }
    for run in &view.runs {
        run_row(&mut out, run, p);
    }
    out
}

pub fn settings(view: &SettingsView, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.heading.apply_to("Agent prompt"));
    match &view.prompt {
        Some(prompt) => {
            let _ = writeln!(
                out,
                "{}\n{}",
                p.muted.apply_to(format!(
                    "{} characters, updated {}",
                    view.chars,
                    timestamp(view.updated_at)
                )),
                prompt
            );
        }
        None => {
            let _ = writeln!(
                out,
                "  {}",
                p.warn.apply_to("No agent_config row; seed it from the pipeline side")
            );
        }
    }
    out
}
