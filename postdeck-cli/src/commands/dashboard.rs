//! Dashboard command

use anyhow::Result;

use postdeck_server::views;

use crate::render::{self, Output};

/// Print headline counts, the last run and recent posts
pub async fn run_dashboard(database_url: Option<String>, output: &Output) -> Result<()> {
    let store = super::connect(database_url).await?;
    let view = views::dashboard(&store).await?;
    output.emit(&view, |p| render::dashboard(&view, p))
}
