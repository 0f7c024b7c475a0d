pub mod check;
pub mod publish;

use clap::{Args, ValueEnum};
use release_core::config::{ReleaseConfig, VersionReader};
use std::path::Path;

#[derive(Clone, Copy, ValueEnum)]
pub enum ReaderArg {
    /// Ask node to print the version
    Node,
    /// Parse package.json directly
    Json,
}

impl From<ReaderArg> for VersionReader {
    fn from(arg: ReaderArg) -> Self {
        match arg {
            ReaderArg::Node => VersionReader::Node,
            ReaderArg::Json => VersionReader::Json,
        }
    }
}

/// Flags that override `.npm-release.yaml`.
#[derive(Args)]
pub struct ConfigOverrides {
    /// How to read the manifest version
    #[arg(long, value_enum)]
    pub reader: Option<ReaderArg>,

    /// Path to package.json, relative to the root
    #[arg(long)]
    pub manifest: Option<std::path::PathBuf>,

    /// node executable used to read the manifest
    #[arg(long, env = "NPM_RELEASE_NODE")]
    pub node: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut ReleaseConfig) {
        if let Some(reader) = self.reader {
            config.version_reader = reader.into();
        }
        if let Some(manifest) = self.manifest {
            config.manifest = manifest;
        }
        if let Some(node) = self.node {
            config.node_bin = node;
        }
    }
}

pub fn load_config(root: &Path, overrides: ConfigOverrides) -> anyhow::Result<ReleaseConfig> {
    use anyhow::Context;
    let mut config = ReleaseConfig::load(root).context("failed to load .npm-release.yaml")?;
    overrides.apply(&mut config);
    Ok(config)
}
