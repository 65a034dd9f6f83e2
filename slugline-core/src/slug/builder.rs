use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::ControlFlow;

use super::alphabet::{is_separator, transliterate};
use super::options::SlugOptions;

static LATIN_OR_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Script=Latin}\p{Nd}]$").expect("static pattern is valid")
});

/// Convert text to a slug using default options.
///
/// ```
/// assert_eq!(slugline_core::make("Hello world"), "hello-world");
/// assert_eq!(slugline_core::make("Москва"), "moskva");
/// ```
pub fn make(text: &str) -> String {
    make_with_options(text, &SlugOptions::default())
}

/// Convert text to a slug.
///
/// The input is lowercased, trimmed of separator characters and (unless
/// disabled) stripped of its file extension. Each remaining character is then
/// classified and emitted: runs of separators collapse to one, custom
/// replacements open a new word, Cyrillic is transliterated, Latin letters and
/// digits pass through and everything else is dropped. Never fails.
pub fn make_with_options(text: &str, options: &SlugOptions) -> String {
    let prepared = prepare(text, options.strip_extension);
    let mut builder = SlugBuilder::new(options);
    for c in prepared.chars() {
        if builder.push(c).is_break() {
            break;
        }
    }
    let slug = builder.finish();
    log::trace!("slug {text:?} -> {slug:?}");
    slug
}

fn prepare(text: &str, strip_extension: bool) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| is_separator(c) || c.is_whitespace());
    if strip_extension {
        remove_extension(trimmed).to_string()
    } else {
        trimmed.to_string()
    }
}

/// Drop everything from the last `.` on, unless the dot leads the name.
fn remove_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

#[derive(Debug, PartialEq)]
enum CharClass<'a> {
    Separator,
    Replacement(&'a str),
    Transliterated(&'static str),
    Kept,
    Dropped,
}

/// Accumulates one slug. Lives for a single call.
struct SlugBuilder<'a> {
    options: &'a SlugOptions,
    separator: &'a str,
    separator_len: usize,
    limit: Option<usize>,
    out: String,
    len: usize,
}

impl<'a> SlugBuilder<'a> {
    fn new(options: &'a SlugOptions) -> Self {
        let separator = options.effective_separator();
        Self {
            options,
            separator,
            separator_len: separator.chars().count(),
            limit: options.limit(),
            out: String::new(),
            len: 0,
        }
    }

    fn classify(&self, c: char) -> CharClass<'a> {
        let options: &'a SlugOptions = self.options;
        if is_separator(c) {
            return CharClass::Separator;
        }
        if let Some(replacement) = options.custom_replacements.get(&c) {
            return CharClass::Replacement(replacement.as_str());
        }
        if let Some(latin) = transliterate(c) {
            return CharClass::Transliterated(latin);
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            return CharClass::Kept;
        }
        if options.unicode_letters && is_latin_or_digit(c) {
            return CharClass::Kept;
        }
        CharClass::Dropped
    }

    fn push(&mut self, c: char) -> ControlFlow<()> {
        if self.is_full() {
            return ControlFlow::Break(());
        }
        match self.classify(c) {
            CharClass::Separator => self.boundary(),
            CharClass::Replacement(text) => {
                self.boundary()?;
                self.emit(text)
            }
            CharClass::Transliterated(latin) => self.emit(latin),
            CharClass::Kept => self.emit_char(c),
            CharClass::Dropped => ControlFlow::Continue(()),
        }
    }

    /// Emit the separator unless nothing has been written yet or the output
    /// already ends with one. The separator is never split by the limit.
    fn boundary(&mut self) -> ControlFlow<()> {
        if self.out.is_empty() || self.out.ends_with(self.separator) {
            return ControlFlow::Continue(());
        }
        if let Some(limit) = self.limit {
            if self.len + self.separator_len > limit {
                self.len = limit;
                return ControlFlow::Break(());
            }
        }
        self.out.push_str(self.separator);
        self.len += self.separator_len;
        ControlFlow::Continue(())
    }

    fn emit(&mut self, text: &str) -> ControlFlow<()> {
        for c in text.chars() {
            self.emit_char(c)?;
        }
        ControlFlow::Continue(())
    }

    fn emit_char(&mut self, c: char) -> ControlFlow<()> {
        if self.is_full() {
            return ControlFlow::Break(());
        }
        self.out.push(c);
        self.len += 1;
        ControlFlow::Continue(())
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.len >= limit)
    }

    fn finish(mut self) -> String {
        if let Some(stripped) = self.out.strip_suffix(self.separator) {
            let keep = stripped.len();
            self.out.truncate(keep);
        }
        self.out
    }
}

fn is_latin_or_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    LATIN_OR_DIGIT.is_match(c.encode_utf8(&mut buf))
}
