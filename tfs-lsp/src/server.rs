//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfs_analysis::colors::{color_presentations, document_colors, ColorMatch};
use tfs_analysis::completion::{completion_items, CompletionCandidate, TRIGGER_CHARACTERS};
use tfs_analysis::{compute_decorations, DecorationSet, HighlightOptions};
use tfs_parser::location::{LineIndex, Position as BytePosition};
use tfs_parser::Rgba;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    Color, ColorInformation, ColorPresentation, ColorPresentationParams, ColorProviderCapability,
    CompletionItem, CompletionOptions, CompletionParams, CompletionResponse,
    DidChangeConfigurationParams, Documentation, InitializeParams, InitializeResult,
    InitializedParams, MarkupContent, MarkupKind, Position, Range, ServerCapabilities, ServerInfo,
    TextDocumentItem, TextDocumentSyncCapability, TextDocumentSyncKind, Url,
};
use tower_lsp::Client;

pub trait LspClient: Send + Sync + Clone + 'static {}
impl LspClient for Client {}

/// Seam between the protocol layer and the pure feature layer; mocked in
/// tests to assert call routing without recomputing features.
pub trait FeatureProvider: Send + Sync + 'static {
    fn decorations(&self, text: &str, options: &HighlightOptions) -> DecorationSet;
    fn completions(&self, text: &str) -> Vec<CompletionCandidate>;
    fn document_colors(&self, text: &str) -> Vec<ColorMatch>;
    fn color_presentations(&self, color: Rgba) -> Vec<String>;
}

#[derive(Default)]
pub struct DefaultFeatureProvider;

impl DefaultFeatureProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn decorations(&self, text: &str, options: &HighlightOptions) -> DecorationSet {
        compute_decorations(text, options)
    }

    fn completions(&self, text: &str) -> Vec<CompletionCandidate> {
        completion_items(text)
    }

    fn document_colors(&self, text: &str) -> Vec<ColorMatch> {
        document_colors(text)
    }

    fn color_presentations(&self, color: Rgba) -> Vec<String> {
        color_presentations(color)
    }
}

#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<String>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        self.entries.write().await.insert(uri, Arc::new(text));
    }

    async fn get(&self, uri: &Url) -> Option<Arc<String>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

/// Parameters of the custom `tfs/decorations` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationParams {
    pub uri: Url,
}

/// One decorated identifier occurrence, in protocol positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDecoration {
    pub range: Range,
    /// Canonical hex, or absent for component markers without a palette
    /// token (client renders its default foreground).
    pub render_color: Option<String>,
    pub marker: String,
}

/// One `[state]` annotation, in protocol positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDecoration {
    pub range: Range,
    pub color: String,
}

/// Response of the custom `tfs/decorations` request: the full fresh span
/// sets. Clients must retract previously applied decorations before
/// applying these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationReport {
    pub inline: Vec<TokenDecoration>,
    pub swatch: Vec<TokenDecoration>,
    pub states: Vec<StateDecoration>,
}

pub struct TfsLanguageServer<C = Client, P = DefaultFeatureProvider> {
    _client: C,
    documents: DocumentStore,
    features: Arc<P>,
    options: RwLock<HighlightOptions>,
}

impl TfsLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(client, Arc::new(DefaultFeatureProvider::new()))
    }
}

impl<C, P> TfsLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>) -> Self {
        Self {
            _client: client,
            documents: DocumentStore::default(),
            features,
            options: RwLock::new(HighlightOptions::default()),
        }
    }

    async fn document(&self, uri: &Url) -> Option<Arc<String>> {
        self.documents.get(uri).await
    }

    async fn apply_settings(&self, value: serde_json::Value) {
        // settings may arrive nested under a "tfs" section or flat
        let section = match value.get("tfs") {
            Some(section) => section.clone(),
            None => value,
        };
        if let Ok(options) = serde_json::from_value::<HighlightOptions>(section) {
            *self.options.write().await = options;
        }
    }

    /// Handler for the custom `tfs/decorations` request. Unknown documents
    /// yield an empty report.
    pub async fn decorations(&self, params: DecorationParams) -> Result<DecorationReport> {
        let Some(text) = self.document(&params.uri).await else {
            return Ok(DecorationReport::default());
        };
        let options = *self.options.read().await;
        let set = self.features.decorations(&text, &options);
        Ok(to_decoration_report(&set, &text))
    }
}

fn to_lsp_position(position: BytePosition) -> Position {
    Position::new(position.line, position.character)
}

fn to_lsp_range(index: &LineIndex, text: &str, range: &std::ops::Range<usize>) -> Range {
    Range {
        start: to_lsp_position(index.position(text, range.start)),
        end: to_lsp_position(index.position(text, range.end)),
    }
}

fn to_decoration_report(set: &DecorationSet, text: &str) -> DecorationReport {
    let index = LineIndex::new(text);
    let token = |span: &tfs_analysis::DecorationSpan| TokenDecoration {
        range: to_lsp_range(&index, text, &span.range),
        render_color: span.render_color.clone(),
        marker: span.marker.to_string(),
    };
    DecorationReport {
        inline: set.inline.iter().map(token).collect(),
        swatch: set.swatch.iter().map(token).collect(),
        states: set
            .states
            .iter()
            .map(|span| StateDecoration {
                range: to_lsp_range(&index, text, &span.range),
                color: span.color.to_string(),
            })
            .collect(),
    }
}

fn to_completion_item(candidate: CompletionCandidate) -> CompletionItem {
    CompletionItem {
        label: candidate.label,
        kind: Some(candidate.kind),
        detail: candidate.detail,
        insert_text: candidate.insert_text,
        documentation: candidate.documentation.map(|value| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            })
        }),
        ..CompletionItem::default()
    }
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for TfsLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(value) = params.initialization_options {
            self.apply_settings(value).await;
        }

        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(
                    TRIGGER_CHARACTERS.iter().map(|c| c.to_string()).collect(),
                ),
                ..CompletionOptions::default()
            }),
            color_provider: Some(ColorProviderCapability::Simple(true)),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "tfs-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {}

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: tower_lsp::lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        self.documents.upsert(uri, text).await;
    }

    async fn did_change(&self, params: tower_lsp::lsp_types::DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents
                .upsert(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: tower_lsp::lsp_types::DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_settings(params.settings).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        if let Some(text) = self.document(&uri).await {
            let items: Vec<CompletionItem> = self
                .features
                .completions(&text)
                .into_iter()
                .map(to_completion_item)
                .collect();
            Ok(Some(CompletionResponse::Array(items)))
        } else {
            Ok(None)
        }
    }

    async fn document_color(
        &self,
        params: tower_lsp::lsp_types::DocumentColorParams,
    ) -> Result<Vec<ColorInformation>> {
        if let Some(text) = self.document(&params.text_document.uri).await {
            let index = LineIndex::new(&text);
            let infos = self
                .features
                .document_colors(&text)
                .into_iter()
                .map(|m| ColorInformation {
                    range: to_lsp_range(&index, &text, &m.range),
                    color: Color {
                        red: m.color.red as f32,
                        green: m.color.green as f32,
                        blue: m.color.blue as f32,
                        alpha: m.color.alpha as f32,
                    },
                })
                .collect();
            Ok(infos)
        } else {
            Ok(Vec::new())
        }
    }

    async fn color_presentation(
        &self,
        params: ColorPresentationParams,
    ) -> Result<Vec<ColorPresentation>> {
        let color = Rgba::new(
            params.color.red as f64,
            params.color.green as f64,
            params.color.blue as f64,
            params.color.alpha as f64,
        );
        let presentations = self
            .features
            .color_presentations(color)
            .into_iter()
            .map(|label| ColorPresentation {
                label,
                text_edit: None,
                additional_text_edits: None,
            })
            .collect();
        Ok(presentations)
    }
}
