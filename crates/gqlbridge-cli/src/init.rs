//! `gqlbridge init`

use anyhow::{Context, Result};
use gqlbridge_core::Config;
use std::path::Path;

pub fn run(path: &str, force: bool) -> Result<()> {
    let path = Path::new(path);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to replace it)",
            path.display()
        );
    }

    write_default_config(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    let yaml = Config::default().to_yaml_string()?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run___new_file___round_trips_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gqlbridge.yaml");

        run(path.to_str().unwrap(), false).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.java, Config::default().java);
        assert_eq!(loaded.output.package, "com.example.model");
    }

    #[test]
    fn run___existing_file_without_force___fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gqlbridge.yaml");
        std::fs::write(&path, "keep me").unwrap();

        let result = run(path.to_str().unwrap(), false);

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn run___existing_file_with_force___overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gqlbridge.yaml");
        std::fs::write(&path, "old").unwrap();

        run(path.to_str().unwrap(), true).unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("package"));
    }
}
