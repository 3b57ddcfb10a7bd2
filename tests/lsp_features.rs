use indoc::indoc;

use tower_lsp::{LanguageServer, LspService};
use tower_lsp::lsp_types::{
    CompletionParams, CompletionResponse, CompletionItemKind, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, DocumentSymbolParams,
    DocumentSymbolResponse, GotoDefinitionParams, GotoDefinitionResponse, InitializeParams,
    InsertTextFormat, OneOf, Position, Range, SymbolKind, TextDocumentContentChangeEvent,
    TextDocumentIdentifier, TextDocumentItem, TextDocumentPositionParams,
    TextDocumentSyncCapability, TextDocumentSyncKind, Url, VersionedTextDocumentIdentifier,
};

use fcs_language_server::config::AnalysisConfig;
use fcs_language_server::lsp::FcsBackend;

const REPORT: &str = indoc! {r#"
    gblock {Summary}
    width := 2.5
    area := (w, h) => {
      w * h
    }
    result := area(width, 3)
    load := Fcs.Action.LoadCase{ name := "dead" }
"#};

fn service() -> LspService<FcsBackend> {
    let (service, _socket) = LspService::new(|client| FcsBackend::new(client, AnalysisConfig::default()));
    service
}

fn report_uri() -> Url {
    Url::parse("file:///reports/beam.fcs").unwrap()
}

async fn open(backend: &FcsBackend, uri: &Url, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "fcs".to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

async fn outline(backend: &FcsBackend, uri: &Url) -> Vec<(String, SymbolKind)> {
    let response = backend
        .document_symbol(DocumentSymbolParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
        })
        .await
        .expect("documentSymbol should succeed");
    match response {
        Some(DocumentSymbolResponse::Nested(symbols)) => {
            symbols.into_iter().map(|symbol| (symbol.name, symbol.kind)).collect()
        }
        other => panic!("Expected nested symbols, got {:?}", other),
    }
}

async fn definition(backend: &FcsBackend, uri: &Url, position: Position) -> Option<GotoDefinitionResponse> {
    backend
        .goto_definition(GotoDefinitionParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri: uri.clone() },
                position,
            },
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
        })
        .await
        .expect("goto_definition should succeed")
}

async fn completion(backend: &FcsBackend, uri: &Url, position: Position) -> Option<CompletionResponse> {
    backend
        .completion(CompletionParams {
            text_document_position: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri: uri.clone() },
                position,
            },
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
            context: None,
        })
        .await
        .expect("completion should succeed")
}

#[tokio::test]
async fn test_initialize_advertises_capabilities() {
    let service = service();
    let result = service
        .inner()
        .initialize(InitializeParams {
            initialization_options: Some(serde_json::json!({ "maxScanLines": 250 })),
            ..Default::default()
        })
        .await
        .unwrap();

    let capabilities = result.capabilities;
    assert_eq!(
        capabilities.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL))
    );
    assert_eq!(capabilities.document_symbol_provider, Some(OneOf::Left(true)));
    assert_eq!(capabilities.definition_provider, Some(OneOf::Left(true)));
    let completion = capabilities.completion_provider.expect("completion provider");
    assert_eq!(completion.trigger_characters, Some(vec![".".to_string()]));

    if std::env::var_os("FCS_MAX_SCAN_LINES").is_none() {
        assert_eq!(service.inner().config().max_lines, 250);
    }
}

#[tokio::test]
async fn test_document_symbols() {
    let service = service();
    let backend = service.inner();
    let uri = report_uri();
    open(backend, &uri, REPORT).await;

    assert_eq!(
        outline(backend, &uri).await,
        vec![
            ("Summary".to_string(), SymbolKind::OBJECT),
            ("width".to_string(), SymbolKind::VARIABLE),
            ("area".to_string(), SymbolKind::FUNCTION),
            ("result".to_string(), SymbolKind::VARIABLE),
            ("load".to_string(), SymbolKind::VARIABLE),
        ]
    );
}

#[tokio::test]
async fn test_goto_definition_returns_link() {
    let service = service();
    let backend = service.inner();
    let uri = report_uri();
    open(backend, &uri, REPORT).await;

    // `area` in `result := area(width, 3)`
    let response = definition(backend, &uri, Position::new(5, 12)).await;
    let Some(GotoDefinitionResponse::Link(links)) = response else {
        panic!("Expected a location link, got {:?}", response);
    };
    assert_eq!(links.len(), 1);
    let link = &links[0];
    assert_eq!(link.target_uri, uri);
    assert_eq!(link.origin_selection_range, Some(Range::new(Position::new(5, 10), Position::new(5, 14))));
    assert_eq!(link.target_selection_range, Range::new(Position::new(2, 0), Position::new(2, 4)));
    assert_eq!(link.target_range, Range::new(Position::new(2, 0), Position::new(4, 1)));

    assert!(definition(backend, &uri, Position::new(6, 10)).await.is_none(), "Fcs has no definition");
}

#[tokio::test]
async fn test_completion_items() {
    let service = service();
    let backend = service.inner();
    let uri = report_uri();
    open(backend, &uri, "lc := Fcs.Action.Lo\nx := Math.\n").await;

    let Some(CompletionResponse::Array(items)) = completion(backend, &uri, Position::new(0, 19)).await else {
        panic!("Expected completion items");
    };
    let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["LoadCombination", "LoadCase"]);
    assert_eq!(items[1].kind, Some(CompletionItemKind::CLASS));
    assert_eq!(items[1].insert_text.as_deref(), Some("LoadCase{ ${1} }"));
    assert_eq!(items[1].insert_text_format, Some(InsertTextFormat::SNIPPET));

    let Some(CompletionResponse::Array(items)) = completion(backend, &uri, Position::new(1, 10)).await else {
        panic!("Expected completion items");
    };
    assert_eq!(items[0].label, "PI");
    assert_eq!(items[0].kind, Some(CompletionItemKind::CONSTANT));
    assert_eq!(items[0].insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
}

#[tokio::test]
async fn test_incremental_change_updates_outline() {
    let service = service();
    let backend = service.inner();
    let uri = report_uri();
    open(backend, &uri, "width := 2.5\n").await;

    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier { uri: uri.clone(), version: 2 },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: Some(Range::new(Position::new(0, 0), Position::new(0, 5))),
                range_length: None,
                text: "depth".to_string(),
            }],
        })
        .await;
    assert_eq!(outline(backend, &uri).await, vec![("depth".to_string(), SymbolKind::VARIABLE)]);

    // A stale version is ignored.
    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier { uri: uri.clone(), version: 2 },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: "other := 1\n".to_string(),
            }],
        })
        .await;
    assert_eq!(outline(backend, &uri).await, vec![("depth".to_string(), SymbolKind::VARIABLE)]);
}

#[tokio::test]
async fn test_closed_document_has_no_results() {
    let service = service();
    let backend = service.inner();
    let uri = report_uri();
    open(backend, &uri, REPORT).await;

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        })
        .await;

    let response = backend
        .document_symbol(DocumentSymbolParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
        })
        .await
        .unwrap();
    assert!(response.is_none());
    assert!(definition(backend, &uri, Position::new(5, 12)).await.is_none());
    assert!(completion(backend, &uri, Position::new(0, 0)).await.is_none());
}
