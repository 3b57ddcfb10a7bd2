//! Backend state management
//!
//! This module defines the FcsBackend struct, which holds the open documents,
//! the analysis configuration and the cancellation flags of running scans.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use dashmap::DashMap;
use parking_lot::RwLock as SyncRwLock;
use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::Url;

use crate::config::AnalysisConfig;
use crate::lsp::models::LspDocument;

/// The FCS language server backend, managing state and handling LSP requests.
#[derive(Clone)]
pub struct FcsBackend {
    pub(super) client: Client,
    pub(super) documents_by_uri: Arc<RwLock<HashMap<Url, Arc<LspDocument>>>>,
    /// Replaced during `initialize` once the client's options are known.
    pub(super) config: Arc<SyncRwLock<AnalysisConfig>>,
    /// Cancellation flag shared by every scan started since the document last changed.
    pub(super) scan_tokens: Arc<DashMap<Url, Arc<AtomicBool>>>,
}

impl std::fmt::Debug for FcsBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FcsBackend")
            .field("config", &*self.config.read())
            .field("scans", &self.scan_tokens.len())
            .finish()
    }
}
