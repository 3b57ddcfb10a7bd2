use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use parking_lot::RwLock as SyncRwLock;
use ropey::Rope;
use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::Url;
use tracing::trace;

use crate::analysis::SymbolTableBuilder;
use crate::config::AnalysisConfig;
use crate::lsp::models::LspDocument;

mod conversions;
mod handlers;
mod state;

pub use state::FcsBackend;

impl FcsBackend {
    /// Creates a backend with no open documents.
    ///
    /// `config` applies until the client's initialization options are read.
    pub fn new(client: Client, config: AnalysisConfig) -> Self {
        Self {
            client,
            documents_by_uri: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(SyncRwLock::new(config)),
            scan_tokens: Arc::new(DashMap::new()),
        }
    }

    /// Current analysis configuration.
    pub fn config(&self) -> AnalysisConfig {
        *self.config.read()
    }

    pub(super) fn symbol_table_builder(&self) -> SymbolTableBuilder {
        SymbolTableBuilder::new(self.config())
    }

    pub(super) async fn document(&self, uri: &Url) -> Option<Arc<LspDocument>> {
        self.documents_by_uri.read().await.get(uri).cloned()
    }

    /// Text snapshot of an open document.
    pub(super) async fn snapshot(&self, uri: &Url) -> Option<Rope> {
        match self.document(uri).await {
            Some(document) => Some(document.snapshot().await),
            None => None,
        }
    }

    /// Cancellation flag for a scan of `uri` starting now.
    pub(super) fn scan_token(&self, uri: &Url) -> Arc<AtomicBool> {
        self.scan_tokens
            .entry(uri.clone())
            .or_insert_with(|| Arc::new(AtomicBool::new(false)))
            .value()
            .clone()
    }

    /// Raises the flag of every scan of `uri` started before this call.
    pub(super) fn cancel_scans(&self, uri: &Url) {
        if let Some((_, token)) = self.scan_tokens.remove(uri) {
            token.store(true, Ordering::Relaxed);
            trace!("Cancelled running scans of {}", uri);
        }
    }
}
