//! Default slug options for the `slugline` CLI.
//!
//! Resolution order: **env var > `<dir>/config` file > hardcoded default**.
//! Command-line flags are applied on top by the binary.
//!
//! ```text
//! Field             Env Var                     Config Key        Default
//! ───────────────── ─────────────────────────── ───────────────── ─────────
//! separator         SLUGLINE_SEPARATOR          separator         "-"
//! max_length        SLUGLINE_MAX_LENGTH         max_length        0 (none)
//! strip_extension   SLUGLINE_STRIP_EXTENSION    strip_extension   true
//! unicode_letters   SLUGLINE_UNICODE_LETTERS    unicode_letters   false
//! replacements      —                           replace (C=TEXT)  —
//! dir               SLUGLINE_DIR                —                 ~/.slugline
//! ```

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::slug::SlugOptions;

/// Name of the config file inside the slugline directory.
pub const CONFIG_FILE: &str = "config";

/// The set of recognized config file keys.
pub const KNOWN_KEYS: &[&str] = &[
    "separator",
    "max_length",
    "strip_extension",
    "unicode_letters",
    "replace",
];

/// Return the slugline directory ($SLUGLINE_DIR or ~/.slugline).
pub fn default_slugline_dir() -> PathBuf {
    if let Ok(dir) = env::var("SLUGLINE_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(".slugline");
    }
    PathBuf::from(".slugline")
}

/// Loaded configuration: where it came from and the options it resolves to.
#[derive(Debug, Clone)]
pub struct Config {
    pub slugline_dir: PathBuf,
    pub options: SlugOptions,
}

impl Config {
    /// Load options from env vars, `<dir>/config`, and defaults.
    pub fn load(slugline_dir: &Path) -> Result<Self> {
        Self::load_with_env(slugline_dir, |k| env::var(k).ok())
    }

    fn load_with_env(
        slugline_dir: &Path,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut options = SlugOptions::default();

        let config_file = slugline_dir.join(CONFIG_FILE);
        if config_file.exists() {
            log::debug!("reading config file {}", config_file.display());
            parse_config_file(&config_file, |key, value| {
                apply_file_entry(&mut options, key, value);
            })?;
        }

        apply_env_overrides(&mut options, get_env);

        Ok(Self {
            slugline_dir: slugline_dir.to_path_buf(),
            options,
        })
    }
}

fn apply_file_entry(options: &mut SlugOptions, key: &str, value: &str) {
    match key {
        "separator" => options.separator = value.to_string(),
        "max_length" => match value.parse::<usize>() {
            Ok(n) => options.max_length = n,
            Err(_) => log::warn!("ignoring max_length={value}: expected a non-negative integer"),
        },
        "strip_extension" => match parse_bool(value) {
            Some(b) => options.strip_extension = b,
            None => log::warn!("ignoring strip_extension={value}: expected true or false"),
        },
        "unicode_letters" => match parse_bool(value) {
            Some(b) => options.unicode_letters = b,
            None => log::warn!("ignoring unicode_letters={value}: expected true or false"),
        },
        "replace" => match parse_replacement(value) {
            Ok((from, to)) => {
                options.custom_replacements.insert(from, to);
            }
            Err(e) => log::warn!("ignoring replace={value}: {e}"),
        },
        _ => log::warn!("ignoring unknown config key {key:?}"),
    }
}

fn apply_env_overrides(options: &mut SlugOptions, get_env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = get_env("SLUGLINE_SEPARATOR") {
        log::debug!("separator from SLUGLINE_SEPARATOR");
        options.separator = v;
    }
    if let Some(v) = get_env("SLUGLINE_MAX_LENGTH") {
        if let Ok(n) = v.trim().parse::<usize>() {
            options.max_length = n;
        }
    }
    if let Some(v) = get_env("SLUGLINE_STRIP_EXTENSION") {
        if let Some(b) = parse_bool(v.trim()) {
            options.strip_extension = b;
        }
    }
    if let Some(v) = get_env("SLUGLINE_UNICODE_LETTERS") {
        if let Some(b) = parse_bool(v.trim()) {
            options.unicode_letters = b;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse a `C=TEXT` replacement spec.
///
/// The first character is always the key, so `==equals` maps `=` to "equals".
pub fn parse_replacement(spec: &str) -> Result<(char, String)> {
    let mut chars = spec.chars();
    let Some(from) = chars.next() else {
        bail!("empty replacement, expected C=TEXT");
    };
    let Some(to) = chars.as_str().strip_prefix('=') else {
        bail!("expected C=TEXT with a single character before '=', got {spec:?}");
    };
    Ok((from, to.to_string()))
}

/// Parse a `key=value` config file, calling `f` for each entry.
///
/// Lines starting with `#` and empty lines are skipped.
fn parse_config_file(path: &Path, mut f: impl FnMut(&str, &str)) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            f(k.trim(), v.trim());
        }
    }
    Ok(())
}

/// Validation status for a single config file entry.
#[derive(Debug, PartialEq)]
pub enum ConfigEntryStatus {
    /// Key and value are valid.
    Ok,
    /// Key is recognized but the value cannot be used.
    InvalidValue { note: String },
    /// Key is not recognized. May include a suggestion for the closest known key.
    UnknownKey { suggestion: Option<String> },
}

impl ConfigEntryStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ConfigEntryStatus::Ok)
    }
}

/// A single parsed and validated entry from the config file.
#[derive(Debug)]
pub struct ConfigEntry {
    pub line: usize,
    pub key: String,
    pub value: String,
    pub status: ConfigEntryStatus,
}

/// Parse and validate all entries in the config file at `path`.
///
/// Comment lines, blank lines, and lines without `=` are skipped.
pub fn validate_config_file(path: &Path) -> Result<Vec<ConfigEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        let key = k.trim().to_string();
        let value = v.trim().to_string();
        let status = validate_config_entry(&key, &value);
        entries.push(ConfigEntry {
            line: idx + 1,
            key,
            value,
            status,
        });
    }
    Ok(entries)
}

fn validate_config_entry(key: &str, value: &str) -> ConfigEntryStatus {
    match key {
        "separator" => ConfigEntryStatus::Ok,
        "max_length" => {
            if value.parse::<usize>().is_ok() {
                ConfigEntryStatus::Ok
            } else {
                ConfigEntryStatus::InvalidValue {
                    note: "expected a non-negative integer (0 = unlimited)".to_string(),
                }
            }
        }
        "strip_extension" | "unicode_letters" => {
            if parse_bool(value).is_some() {
                ConfigEntryStatus::Ok
            } else {
                ConfigEntryStatus::InvalidValue {
                    note: "expected \"true\" or \"false\"".to_string(),
                }
            }
        }
        "replace" => match parse_replacement(value) {
            Ok((from, _)) if from.is_uppercase() => {
                ConfigEntryStatus::InvalidValue {
                    note: format!("{from:?} never matches: input is lowercased first"),
                }
            }
            Ok(_) => ConfigEntryStatus::Ok,
            Err(e) => ConfigEntryStatus::InvalidValue {
                note: e.to_string(),
            },
        },
        _ => ConfigEntryStatus::UnknownKey {
            suggestion: closest_known_key(key),
        },
    }
}

/// Return the closest known config key to `input` by Levenshtein distance,
/// or `None` if no key is within edit-distance 3.
fn closest_known_key(input: &str) -> Option<String> {
    const MAX_DISTANCE: usize = 3;
    KNOWN_KEYS
        .iter()
        .map(|k| (*k, levenshtein(input, k)))
        .filter(|(_, d)| *d <= MAX_DISTANCE)
        .min_by_key(|(_, d)| *d)
        .map(|(k, _)| k.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
