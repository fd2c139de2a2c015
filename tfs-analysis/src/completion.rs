//! Completion candidates for TFS documents.
//!
//! Purely declarative surface: the fixed vocabularies plus the live palette
//! tokens of the document, translated into protocol items by the host.

use lsp_types::CompletionItemKind;
use tfs_parser::vocab::{DIRECTIVES, PROPERTIES, STATES};
use tfs_parser::{Rgba, TokenRegistry};

/// Characters that should re-trigger completion in hosts that support it.
pub const TRIGGER_CHARACTERS: &[&str] = &["@", "[", ":", "-", "_"];

/// A semantic completion candidate, translated into protocol items by the
/// host adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub detail: Option<String>,
    pub kind: CompletionItemKind,
    pub insert_text: Option<String>,
    /// Markdown, when present.
    pub documentation: Option<String>,
}

impl CompletionCandidate {
    fn new(label: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            label: label.into(),
            detail: None,
            kind,
            insert_text: None,
            documentation: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    fn with_documentation(mut self, markdown: impl Into<String>) -> Self {
        self.documentation = Some(markdown.into());
        self
    }
}

/// Produce every completion candidate for the document.
///
/// Properties insert with a trailing `: `, directives with a trailing
/// space; palette tokens carry their raw value as detail and a Markdown
/// documentation line when the value parses as a color.
pub fn completion_items(text: &str) -> Vec<CompletionCandidate> {
    let mut items = Vec::new();

    for property in PROPERTIES {
        items.push(
            CompletionCandidate::new(*property, CompletionItemKind::PROPERTY)
                .with_insert_text(format!("{property}: ")),
        );
    }
    for directive in DIRECTIVES {
        items.push(
            CompletionCandidate::new(*directive, CompletionItemKind::KEYWORD)
                .with_insert_text(format!("{directive} ")),
        );
    }
    for state in STATES {
        items.push(CompletionCandidate::new(
            *state,
            CompletionItemKind::ENUM_MEMBER,
        ));
    }

    for token in TokenRegistry::parse(text).tokens() {
        let mut item = CompletionCandidate::new(&token.name, CompletionItemKind::COLOR)
            .with_detail(&token.raw_value)
            .with_insert_text(&token.name);
        if Rgba::parse(&token.raw_value).is_some() {
            item = item.with_documentation(format!(
                "Color **{}** = `{}`",
                token.name, token.raw_value
            ));
        }
        items.push(item);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[CompletionCandidate]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn vocabularies_are_always_offered() {
        let items = completion_items("");
        let labels = labels(&items);
        assert!(labels.contains(&"color"));
        assert!(labels.contains(&"@colors"));
        assert!(labels.contains(&"hover"));
        assert_eq!(
            items.len(),
            PROPERTIES.len() + DIRECTIVES.len() + STATES.len()
        );
    }

    #[test]
    fn properties_insert_with_colon() {
        let items = completion_items("");
        let color = items.iter().find(|item| item.label == "color").unwrap();
        assert_eq!(color.insert_text.as_deref(), Some("color: "));
        assert_eq!(color.kind, CompletionItemKind::PROPERTY);
    }

    #[test]
    fn palette_tokens_carry_value_and_documentation() {
        let items = completion_items("@colors { brand: #ff0000; }");
        let brand = items.iter().find(|item| item.label == "brand").unwrap();
        assert_eq!(brand.kind, CompletionItemKind::COLOR);
        assert_eq!(brand.detail.as_deref(), Some("#ff0000"));
        assert_eq!(
            brand.documentation.as_deref(),
            Some("Color **brand** = `#ff0000`")
        );
    }

    #[test]
    fn unparsable_token_value_still_completes_without_documentation() {
        let items = completion_items("@colors { weird: dunno; }");
        let weird = items.iter().find(|item| item.label == "weird").unwrap();
        assert_eq!(weird.detail.as_deref(), Some("dunno"));
        assert_eq!(weird.documentation, None);
    }
}
