//! Palette token registry built from `@colors` blocks.
//!
//! Every `@colors { ... }` block in the document contributes `name: value;`
//! declarations to one ordered registry. Names keep their declared casing
//! for display; lookups compare case-insensitively. A duplicate declaration
//! (case-sensitive name) overwrites the earlier raw value in place, so the
//! registry keeps first-declaration order with last-declaration values.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static COLORS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@colors\s*\{(.*?)\}").expect("block pattern compiles"));
static DECLARATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_-]*)\s*:\s*([^;]+);").expect("line pattern compiles")
});

/// A named color declared in a palette block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    /// Declared casing, preserved for display.
    pub name: String,
    /// Unparsed right-hand side, trimmed. May or may not be a color literal.
    pub raw_value: String,
}

/// The identifier range of one palette declaration site.
///
/// Declaration identifiers are followed by `:`, so the general occurrence
/// scan would misread them as property keys; the span builder decorates
/// them from this list instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSite {
    pub range: Range<usize>,
    pub name: String,
}

/// Ordered registry of palette tokens for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRegistry {
    entries: Vec<ColorToken>,
    definitions: Vec<DefinitionSite>,
}

impl TokenRegistry {
    /// Scan every `@colors` block in `text`.
    pub fn parse(text: &str) -> Self {
        let mut entries: Vec<ColorToken> = Vec::new();
        let mut definitions = Vec::new();

        for block in COLORS_BLOCK.captures_iter(text) {
            let Some(body) = block.get(1) else { continue };
            for line in DECLARATION_LINE.captures_iter(body.as_str()) {
                let (Some(ident), Some(value)) = (line.get(1), line.get(2)) else {
                    continue;
                };
                let name = ident.as_str().to_string();
                let raw_value = value.as_str().trim().to_string();
                let start = body.start() + ident.start();
                definitions.push(DefinitionSite {
                    range: start..start + ident.as_str().len(),
                    name: name.clone(),
                });
                match entries.iter_mut().find(|token| token.name == name) {
                    Some(existing) => existing.raw_value = raw_value,
                    None => entries.push(ColorToken { name, raw_value }),
                }
            }
        }

        Self {
            entries,
            definitions,
        }
    }

    /// Case-insensitive lookup; returns the entry with its declared casing.
    pub fn get(&self, name: &str) -> Option<&ColorToken> {
        self.entries
            .iter()
            .find(|token| token.name.eq_ignore_ascii_case(name))
    }

    /// Tokens in declaration order.
    pub fn tokens(&self) -> &[ColorToken] {
        &self.entries
    }

    /// Every declaration site in scan order, including overwritten ones.
    pub fn definition_sites(&self) -> &[DefinitionSite] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_block() {
        let text = "@colors {\n  brand: #ff0000;\n  accent: rgba(1, 2, 3, 0.5);\n}";
        let registry = TokenRegistry::parse(text);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tokens()[0].name, "brand");
        assert_eq!(registry.tokens()[0].raw_value, "#ff0000");
        assert_eq!(registry.tokens()[1].raw_value, "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn multiple_blocks_feed_one_registry() {
        let text = "@colors { a: #111; }\nButton { }\n@colors { b: #222; }";
        let registry = TokenRegistry::parse(text);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tokens()[0].name, "a");
        assert_eq!(registry.tokens()[1].name, "b");
    }

    #[test]
    fn duplicate_name_keeps_order_takes_last_value() {
        let text = "@colors { brand: #111; brand: #222; }";
        let registry = TokenRegistry::parse(text);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.tokens()[0].raw_value, "#222");
        // both declaration sites remain recorded
        assert_eq!(registry.definition_sites().len(), 2);
    }

    #[test]
    fn differently_cased_names_stay_distinct() {
        let text = "@colors { Brand: #111; brand: #222; }";
        let registry = TokenRegistry::parse(text);
        assert_eq!(registry.len(), 2);
        // case-insensitive lookup returns the first declaration
        assert_eq!(registry.get("BRAND").map(|t| t.name.as_str()), Some("Brand"));
    }

    #[test]
    fn definition_sites_cover_the_identifier_exactly() {
        let text = "x\n@colors {\n  brand: #123456;\n}";
        let registry = TokenRegistry::parse(text);
        let site = &registry.definition_sites()[0];
        assert_eq!(&text[site.range.clone()], "brand");
        assert_eq!(site.name, "brand");
    }

    #[test]
    fn values_are_trimmed_but_not_validated() {
        let text = "@colors { weird:   not-a-color  ; }";
        let registry = TokenRegistry::parse(text);
        assert_eq!(registry.tokens()[0].raw_value, "not-a-color");
    }

    #[test]
    fn document_without_palette_is_empty() {
        assert!(TokenRegistry::parse("Button { color: red; }").is_empty());
    }
}
