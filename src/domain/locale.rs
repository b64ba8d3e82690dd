//! Locale resolution for multi-language provider text.

use super::status_document::LocalizedText;

/// Locale preferred when picking display text.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Picks the display text out of a list of locale variants.
///
/// Returns the content tagged [`DEFAULT_LOCALE`]; when several entries carry
/// that tag the last one wins. Without a match the first entry's content is
/// returned. An empty list has no text and yields `None`.
#[must_use]
pub fn resolve_locale(texts: &[LocalizedText]) -> Option<&str> {
    texts
        .iter()
        .rev()
        .find(|t| t.locale == DEFAULT_LOCALE)
        .or_else(|| texts.first())
        .map(|t| t.content.as_str())
}
