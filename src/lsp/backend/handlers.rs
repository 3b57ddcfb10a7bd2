//! LSP protocol handler implementations
//!
//! This module contains the `tower_lsp::LanguageServer` implementation for the
//! FCS backend:
//! - Lifecycle handlers (initialize, initialized, shutdown)
//! - Document lifecycle (did_open, did_change, did_close)
//! - Outline and navigation (document_symbol, goto_definition)
//! - Completion

use std::sync::Arc;

use tower_lsp::{LanguageServer, jsonrpc};
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, DocumentSymbolParams,
    DocumentSymbolResponse, GotoDefinitionParams, GotoDefinitionResponse, InitializeParams,
    InitializeResult, InitializedParams, MessageType, OneOf, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tower_lsp::jsonrpc::Result as LspResult;

use tracing::{debug, error, info, warn};

use super::conversions::{
    completion_item, document_symbol, from_lsp_position, location_link,
};
use super::state::FcsBackend;
use crate::analysis::locate_definition;
use crate::completion::{Catalog, complete};
use crate::config::AnalysisConfig;
use crate::lsp::models::LspDocument;

#[tower_lsp::async_trait]
impl LanguageServer for FcsBackend {
    /// Handles the LSP initialize request, reading analysis limits from the client options.
    async fn initialize(&self, params: InitializeParams) -> jsonrpc::Result<InitializeResult> {
        info!("Received initialize from {:?}", params.client_info.as_ref().map(|c| &c.name));

        let config = AnalysisConfig::from_env_or_default(params.initialization_options.as_ref());
        info!("Scanning at most {} lines per document", config.max_lines);
        *self.config.write() = config;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                document_symbol_provider: Some(OneOf::Left(true)),
                definition_provider: Some(OneOf::Left(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    /// Handles the LSP initialized notification.
    async fn initialized(&self, params: InitializedParams) {
        info!("Initialized: {:?}", params);
        self.client
            .log_message(MessageType::INFO, "FCS language server initialized")
            .await;
    }

    /// Handles the LSP shutdown request.
    async fn shutdown(&self) -> jsonrpc::Result<()> {
        info!("Received shutdown request");
        for entry in self.scan_tokens.iter() {
            entry.value().store(true, std::sync::atomic::Ordering::Relaxed);
        }
        Ok(())
    }

    /// Handles opening a text document.
    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        info!("Opening document: URI={}, version={}", uri, version);

        let document = Arc::new(LspDocument::new(&params.text_document.text, version));
        self.cancel_scans(&uri);
        self.documents_by_uri.write().await.insert(uri, document);
    }

    /// Handles text changes, cancelling scans of the previous text.
    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        debug!("Change to {} (version {}, {} edits)", uri, version, params.content_changes.len());

        self.cancel_scans(&uri);
        let Some(document) = self.document(&uri).await else {
            warn!("Change for unknown document: {}", uri);
            return;
        };
        if let Err(e) = document.apply(params.content_changes, version).await {
            warn!("Rejected change to {}: {}", uri, e);
        }
    }

    /// Handles closing a text document.
    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        info!("Closing document: {}", uri);
        self.cancel_scans(&uri);
        if self.documents_by_uri.write().await.remove(&uri).is_none() {
            warn!("Closed document not found: {}", uri);
        }
    }

    /// Provides the outline of definitions in the document.
    async fn document_symbol(&self, params: DocumentSymbolParams) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        debug!("Handling documentSymbol request for {}", uri);

        let Some(text) = self.snapshot(&uri).await else {
            debug!("Document not found: {}", uri);
            return Ok(None);
        };
        let builder = self.symbol_table_builder();
        let token = self.scan_token(&uri);

        let symbols = tokio::task::spawn_blocking(move || builder.build(&text, &token))
            .await
            .map_err(|e| {
                error!("Symbol scan of {} failed: {}", uri, e);
                jsonrpc::Error::internal_error()
            })?;

        debug!("Found {} symbols in document {}", symbols.len(), uri);
        Ok(Some(DocumentSymbolResponse::Nested(
            symbols.iter().map(document_symbol).collect(),
        )))
    }

    /// Handles going to the first definition of the word under the cursor.
    async fn goto_definition(&self, params: GotoDefinitionParams) -> LspResult<Option<GotoDefinitionResponse>> {
        let start = std::time::Instant::now();
        let uri = params.text_document_position_params.text_document.uri;
        let position = from_lsp_position(params.text_document_position_params.position);
        debug!("goto_definition request for {} at {:?}", uri, position);

        let Some(text) = self.snapshot(&uri).await else {
            debug!("Document not found: {}", uri);
            return Ok(None);
        };
        let builder = self.symbol_table_builder();
        let token = self.scan_token(&uri);

        let link = tokio::task::spawn_blocking(move || locate_definition(&builder, &text, position, &token))
            .await
            .map_err(|e| {
                error!("Definition lookup in {} failed: {}", uri, e);
                jsonrpc::Error::internal_error()
            })?;

        debug!("goto_definition completed in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);
        Ok(link.map(|link| GotoDefinitionResponse::Link(vec![location_link(&uri, &link)])))
    }

    /// Provides catalog completions for the dotted path before the cursor.
    async fn completion(&self, params: CompletionParams) -> LspResult<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = from_lsp_position(params.text_document_position.position);
        debug!("Completion request at {}:{:?}", uri, position);

        let Some(text) = self.snapshot(&uri).await else {
            debug!("Document not found: {}", uri);
            return Ok(None);
        };

        let items: Vec<_> = complete(&text, position, Catalog::builtin())
            .into_iter()
            .map(completion_item)
            .collect();

        debug!("Returning {} completion items", items.len());
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CompletionResponse::Array(items)))
        }
    }
}
