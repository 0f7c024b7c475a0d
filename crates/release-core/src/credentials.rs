//! Temporary npm registry credentials.
//!
//! [`NpmCredentials`] owns `~/.npmrc` for the duration of one publish. The
//! file is removed when the guard drops, whether the publish succeeded,
//! returned an error, or panicked.

use crate::error::Result;
use crate::io;
use std::path::{Path, PathBuf};

/// Render the `.npmrc` body: the registry line plus the scoped token line.
pub fn render_npmrc(registry: &str, auth_key: &str, token: &str) -> String {
    format!("registry={registry}\n{auth_key}:_authToken={token}")
}

/// RAII guard over a written credentials file.
#[derive(Debug)]
pub struct NpmCredentials {
    path: PathBuf,
    replaced_existing: bool,
}

impl NpmCredentials {
    /// Write the credentials file at `path`, replacing any stale copy.
    pub fn install(path: &Path, registry: &str, auth_key: &str, token: &str) -> Result<Self> {
        let replaced_existing = path.is_file();
        if replaced_existing {
            io::remove_if_exists(path)?;
            tracing::warn!(
                "{} already exists. It should be deleted after each use",
                path.display()
            );
            tracing::warn!("Overriding existing {}", path.display());
        } else {
            tracing::info!("Creating {}", path.display());
        }

        io::atomic_write(path, render_npmrc(registry, auth_key, token).as_bytes())?;
        Ok(Self {
            path: path.to_path_buf(),
            replaced_existing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a leftover file from an earlier run was overwritten.
    pub fn replaced_existing(&self) -> bool {
        self.replaced_existing
    }
}

impl Drop for NpmCredentials {
    fn drop(&mut self) {
        tracing::info!("Deleting {}", self.path.display());
        if let Err(e) = io::remove_if_exists(&self.path) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to delete credentials file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const REGISTRY: &str = "http://registry.npmjs.org/";
    const AUTH_KEY: &str = "//registry.npmjs.org/";

    #[test]
    fn render_matches_npm_format() {
        assert_eq!(
            render_npmrc(REGISTRY, AUTH_KEY, "abc123"),
            "registry=http://registry.npmjs.org/\n//registry.npmjs.org/:_authToken=abc123"
        );
    }

    #[test]
    fn file_exists_while_guard_lives() {
        let home = TempDir::new().unwrap();
        let path = home.path().join(".npmrc");
        {
            let guard = NpmCredentials::install(&path, REGISTRY, AUTH_KEY, "abc123").unwrap();
            assert!(!guard.replaced_existing());
            assert_eq!(guard.path(), path);
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.ends_with(":_authToken=abc123"));
        }
        assert!(!path.exists());
    }

    #[test]
    fn stale_file_is_replaced_then_removed() {
        let home = TempDir::new().unwrap();
        let path = home.path().join(".npmrc");
        std::fs::write(&path, "//registry.npmjs.org/:_authToken=old").unwrap();
        {
            let guard = NpmCredentials::install(&path, REGISTRY, AUTH_KEY, "new").unwrap();
            assert!(guard.replaced_existing());
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(!content.contains("old"));
            assert!(content.contains("_authToken=new"));
        }
        assert!(!path.exists());
    }

    #[test]
    fn removed_even_on_panic() {
        let home = TempDir::new().unwrap();
        let path = home.path().join(".npmrc");
        let p = path.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = NpmCredentials::install(&p, REGISTRY, AUTH_KEY, "tok").unwrap();
            panic!("publish blew up");
        });
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_externally_deleted_file() {
        let home = TempDir::new().unwrap();
        let path = home.path().join(".npmrc");
        let guard = NpmCredentials::install(&path, REGISTRY, AUTH_KEY, "tok").unwrap();
        std::fs::remove_file(&path).unwrap();
        drop(guard);
        assert!(!path.exists());
    }
}
