use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Per-call options for [`make_with_options`](super::make_with_options).
///
/// Every field has a default, so a partially filled JSON object deserializes
/// into a complete set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    /// Inserted between words. Empty falls back to [`DEFAULT_SEPARATOR`].
    pub separator: String,
    /// Maximum output length in characters; `0` means unlimited.
    pub max_length: usize,
    /// Input character to literal replacement text. Keys are matched against
    /// the lowercased input, and each match forces a boundary before it.
    pub custom_replacements: BTreeMap<char, String>,
    /// Drop a trailing `.ext` suffix before building the slug.
    pub strip_extension: bool,
    /// Keep Latin letters with diacritics and non-ASCII decimal digits.
    pub unicode_letters: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: 0,
            custom_replacements: BTreeMap::new(),
            strip_extension: true,
            unicode_letters: false,
        }
    }
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_replacement(mut self, from: char, to: impl Into<String>) -> Self {
        self.custom_replacements.insert(from, to.into());
        self
    }

    pub fn with_strip_extension(mut self, strip: bool) -> Self {
        self.strip_extension = strip;
        self
    }

    pub fn with_unicode_letters(mut self, enabled: bool) -> Self {
        self.unicode_letters = enabled;
        self
    }

    /// The separator actually emitted: the configured one, or the default if empty.
    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    /// The length limit, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.max_length > 0).then_some(self.max_length)
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = SlugOptions::default();
        assert_eq!(opts.effective_separator(), "-");
        assert_eq!(opts.limit(), None);
        assert!(opts.custom_replacements.is_empty());
        assert!(opts.strip_extension);
        assert!(!opts.unicode_letters);
    }

    #[test]
    fn empty_separator_falls_back() {
        let opts = SlugOptions::new().with_separator("");
        assert_eq!(opts.effective_separator(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn zero_max_length_is_unlimited() {
        assert_eq!(SlugOptions::new().with_max_length(0).limit(), None);
        assert_eq!(SlugOptions::new().with_max_length(12).limit(), Some(12));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: SlugOptions =
            serde_json::from_str(r#"{"separator": "_", "custom_replacements": {"&": "and"}}"#)
                .unwrap();
        assert_eq!(opts.separator, "_");
        assert_eq!(opts.custom_replacements.get(&'&').map(String::as_str), Some("and"));
        assert_eq!(opts.max_length, 0);
        assert!(opts.strip_extension);
    }

    #[test]
    fn pretty_json_lists_replacements() {
        let json = SlugOptions::new()
            .with_replacement('+', "plus")
            .to_pretty_json()
            .unwrap();
        assert!(json.contains("\"+\": \"plus\""));
        assert!(json.contains("\"strip_extension\": true"));
    }
}
