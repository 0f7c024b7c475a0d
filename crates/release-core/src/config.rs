use crate::error::{ReleaseError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

// ---------------------------------------------------------------------------
// VersionReader
// ---------------------------------------------------------------------------

/// How the manifest version is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionReader {
    /// Ask `node` to print the field, exactly as npm itself would see it.
    #[default]
    Node,
    /// Parse the manifest directly.
    Json,
}

// ---------------------------------------------------------------------------
// ReleaseConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    #[serde(default = "default_registry")]
    pub registry: String,
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    #[serde(default)]
    pub version_reader: VersionReader,
    #[serde(default = "default_node_bin")]
    pub node_bin: String,
    #[serde(default = "default_npm_bin")]
    pub npm_bin: String,
    /// Extra arguments appended to `npm publish`.
    #[serde(default)]
    pub publish_args: Vec<String>,
}

fn default_registry() -> String {
    "http://registry.npmjs.org/".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from(paths::PACKAGE_JSON)
}

fn default_node_bin() -> String {
    "node".to_string()
}

fn default_npm_bin() -> String {
    "npm".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            manifest: default_manifest(),
            version_reader: VersionReader::default(),
            node_bin: default_node_bin(),
            npm_bin: default_npm_bin(),
            publish_args: Vec::new(),
        }
    }
}

impl ReleaseConfig {
    /// Load `.npm-release.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded release config");
        Ok(config)
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// The `.npmrc` key scoping the token to the registry, e.g.
    /// `//registry.npmjs.org/` for `http://registry.npmjs.org/`.
    pub fn registry_auth_key(&self) -> Result<String> {
        let invalid = |reason: String| ReleaseError::InvalidRegistry {
            url: self.registry.clone(),
            reason,
        };
        let url = Url::parse(&self.registry).map_err(|e| invalid(e.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| invalid("missing host".to_string()))?;
        let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
        let path = url.path();
        let sep = if path.ends_with('/') { "" } else { "/" };
        Ok(format!("//{host}{port}{path}{sep}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
