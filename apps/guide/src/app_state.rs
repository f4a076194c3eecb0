use std::sync::OnceLock;

use catalog::GiftCatalog;
use render::{
    gate::{GateAction, GateInput, ReadyGate},
    page::{render_page, PageShell},
    RenderOptions,
};
use shared::error::RenderError;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::Settings;

/// Constructed once at startup, filled in by the shell and data loads, read
/// by the renderer.
pub(crate) struct AppState {
    pub(crate) settings: Settings,
    options: RenderOptions,
    gate: Mutex<ReadyGate>,
    shell: OnceLock<PageShell>,
    catalog: OnceLock<GiftCatalog>,
    page: OnceLock<String>,
}

impl AppState {
    pub(crate) fn new(settings: Settings, options: RenderOptions) -> Self {
        Self {
            settings,
            options,
            gate: Mutex::new(ReadyGate::new()),
            shell: OnceLock::new(),
            catalog: OnceLock::new(),
            page: OnceLock::new(),
        }
    }

    pub(crate) async fn shell_ready(&self, shell: PageShell) -> Result<(), RenderError> {
        if self.shell.set(shell).is_err() {
            warn!("page shell already set; keeping the first one");
        }
        self.signal(GateInput::DomReady).await
    }

    pub(crate) async fn data_ready(&self, catalog: GiftCatalog) -> Result<(), RenderError> {
        if self.catalog.set(catalog).is_err() {
            warn!("catalog already set; keeping the first one");
        }
        self.signal(GateInput::DataLoaded).await
    }

    pub(crate) fn rendered_page(&self) -> Option<&str> {
        self.page.get().map(String::as_str)
    }

    async fn signal(&self, input: GateInput) -> Result<(), RenderError> {
        let action = self.gate.lock().await.signal(input);
        debug!(?input, ?action, "ready gate signalled");
        if action == GateAction::Render {
            self.render()?;
        }
        Ok(())
    }

    fn render(&self) -> Result<(), RenderError> {
        let (Some(shell), Some(catalog)) = (self.shell.get(), self.catalog.get()) else {
            return Err(RenderError::NotReady);
        };
        let page = render_page(shell, catalog, &self.options)?;
        if self.page.set(page).is_err() {
            warn!("page already rendered");
        }
        Ok(())
    }
}
