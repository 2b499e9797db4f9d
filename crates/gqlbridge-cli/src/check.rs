//! `gqlbridge check`

use anyhow::{Context, Result};
use gqlbridge_core::Config;
use std::path::PathBuf;

pub fn run(config: Option<String>) -> Result<()> {
    let path = match config {
        Some(path) => PathBuf::from(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Config::find_default_config(&cwd).with_context(|| {
                format!("No configuration file found in {}", cwd.display())
            })?
        }
    };

    let config = Config::from_file(&path)
        .with_context(|| format!("Invalid configuration: {}", path.display()))?;

    println!("✓ {} is valid", path.display());
    println!();
    print!("{}", effective_settings(&config)?);
    Ok(())
}

/// The configuration after defaults and version overrides, as YAML
fn effective_settings(config: &Config) -> Result<String> {
    Ok(config.to_yaml_string()?)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run___valid_file___succeeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gqlbridge.yaml");
        std::fs::write(&path, "java:\n  version: 21\n").unwrap();

        run(Some(path.to_string_lossy().into_owned())).unwrap();
    }

    #[test]
    fn run___invalid_file___fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gqlbridge.yaml");
        std::fs::write(&path, "java:\n  version: 10\n").unwrap();

        let err = run(Some(path.to_string_lossy().into_owned())).unwrap_err();

        assert!(format!("{err:#}").contains("unsupported Java version"));
    }

    #[test]
    fn effective_settings___java_8___shows_forced_javax() {
        let config = Config::from_yaml_str("java:\n  version: 8\n").unwrap();

        let yaml = effective_settings(&config).unwrap();

        assert!(yaml.contains("package: javax"));
    }
}
