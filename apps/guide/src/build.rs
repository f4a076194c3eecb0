use std::path::{Path, PathBuf};

use anyhow::Context;
use catalog::GiftCatalog;
use render::page::PageShell;
use shared::error::RenderError;
use tracing::info;

use crate::{app_state::AppState, config::prepare_output_dir};

pub(crate) const INDEX_FILE: &str = "index.html";

/// Loads the shell and the data concurrently; whichever finishes second
/// triggers the render. Writes the page and returns its path.
pub(crate) async fn build_site(state: &AppState) -> anyhow::Result<PathBuf> {
    let dom = async {
        let shell = load_shell(state.settings.page_shell.as_deref()).await?;
        state.shell_ready(shell).await?;
        anyhow::Ok(())
    };
    let data = async {
        let catalog = load_catalog(&state.settings.data_root).await?;
        state.data_ready(catalog).await?;
        anyhow::Ok(())
    };
    tokio::try_join!(dom, data)?;

    let page = state.rendered_page().ok_or(RenderError::NotReady)?;
    let out_dir = prepare_output_dir(&state.settings.output_dir)?;
    let index = out_dir.join(INDEX_FILE);
    tokio::fs::write(&index, page)
        .await
        .with_context(|| format!("failed to write '{}'", index.display()))?;

    info!(path = %index.display(), bytes = page.len(), "guide written");
    Ok(index)
}

pub(crate) async fn load_catalog(data_root: &str) -> anyhow::Result<GiftCatalog> {
    let source = loader::source_for(data_root);
    let datasets = loader::load_datasets(source.as_ref())
        .await
        .with_context(|| format!("failed to load gift data from '{data_root}'"))?;
    let catalog = GiftCatalog::build(datasets.npcs, datasets.props, datasets.gifts)
        .context("gift data failed to join")?;
    Ok(catalog)
}

async fn load_shell(path: Option<&Path>) -> anyhow::Result<PageShell> {
    let Some(path) = path else {
        return Ok(PageShell::builtin());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read page shell '{}'", path.display()))?;
    PageShell::parse(&raw)
        .with_context(|| format!("page shell '{}' cannot host the guide", path.display()))
}

#[cfg(test)]
#[path = "tests/build_tests.rs"]
mod tests;
