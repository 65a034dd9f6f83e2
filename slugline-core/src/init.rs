use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CONFIG_FILE;

const TEMPLATE: &str = "\
# slugline config — key=value, one per line.
# Environment variables (SLUGLINE_SEPARATOR, SLUGLINE_MAX_LENGTH, ...) win over this file.

# separator=-
# max_length=0
# strip_extension=true
# unicode_letters=false

# One line per replacement; the first character is the key.
# replace=&=and
# replace=+=plus
";

/// Create the slugline directory and a commented template config (idempotent).
///
/// An existing config file is never overwritten. Returns whether anything was created.
pub fn init_dir(slugline_dir: &Path) -> Result<bool> {
    let mut created = false;

    if !slugline_dir.exists() {
        std::fs::create_dir_all(slugline_dir)
            .with_context(|| format!("failed to create {}", slugline_dir.display()))?;
        println!("Created: {}", slugline_dir.display());
        created = true;
    }

    let config_file = slugline_dir.join(CONFIG_FILE);
    if !config_file.exists() {
        std::fs::write(&config_file, TEMPLATE)
            .with_context(|| format!("failed to write {}", config_file.display()))?;
        println!("Created: {}", config_file.display());
        created = true;
    }

    if created {
        println!("Initialized: {}", slugline_dir.display());
    } else {
        println!("Already initialized: {}", slugline_dir.display());
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_config_file, Config};
    use tempfile::TempDir;

    #[test]
    fn test_init_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("slugline");
        assert!(init_dir(&target).unwrap());
        assert!(target.join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_init_dir_idempotent() {
        let dir = TempDir::new().unwrap();
        assert!(init_dir(dir.path()).unwrap());
        assert!(!init_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "separator=_\n").unwrap();
        assert!(!init_dir(dir.path()).unwrap());
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "separator=_\n");
    }

    #[test]
    fn test_template_is_all_comments() {
        let dir = TempDir::new().unwrap();
        init_dir(dir.path()).unwrap();
        assert!(validate_config_file(&dir.path().join(CONFIG_FILE))
            .unwrap()
            .is_empty());
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.slugline_dir, dir.path());
    }
}
