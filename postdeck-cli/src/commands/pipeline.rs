//! Pipeline history command

use anyhow::Result;

use postdeck_server::views;

use crate::render::{self, Output};

/// Print pipeline runs (newest first) with totals
pub async fn run_pipeline(database_url: Option<String>, output: &Output) -> Result<()> {
    let store = super::connect(database_url).await?;
    let view = views::pipeline(&store).await?;
    output.emit(&view, |p| render::pipeline(&view, p))
}
