//! The release pipeline: verify the tag, install credentials, publish.

use crate::config::{ReleaseConfig, VersionReader};
use crate::credentials::NpmCredentials;
use crate::env::ReleaseEnv;
use crate::error::Result;
use crate::manifest;
use crate::paths;
use crate::process;
use serde::Serialize;
use std::path::Path;

/// Per-run switches that are not part of the persisted config.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Pass `--dry-run` to npm: everything runs, nothing is uploaded.
    pub dry_run: bool,
    /// Arguments appended after the configured `publish_args`.
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    pub tag: String,
    pub manifest_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub tag: String,
    pub manifest_version: String,
    pub command: String,
    pub dry_run: bool,
    pub replaced_existing_npmrc: bool,
    pub stdout: String,
}

/// Fail unless the manifest version under `root` equals `tag`.
pub fn verify_version(root: &Path, config: &ReleaseConfig, tag: &str) -> Result<VersionCheck> {
    let manifest_version = match config.version_reader {
        VersionReader::Node => {
            let stdout = manifest::read_version_with_node(&config.node_bin, root, &config.manifest)?;
            manifest::check_version(tag, &stdout)?
        }
        VersionReader::Json => {
            let version = manifest::read_version_from_json(&config.manifest_path(root))?;
            manifest::check_tag(tag, &version)?
        }
    };
    tracing::info!(tag, "tag matches manifest version");
    Ok(VersionCheck {
        tag: tag.to_string(),
        manifest_version,
    })
}

/// Build the argument list for `npm publish`.
pub fn publish_args(config: &ReleaseConfig, opts: &PublishOptions) -> Vec<String> {
    let mut args = vec!["publish".to_string()];
    args.extend(config.publish_args.iter().cloned());
    args.extend(opts.extra_args.iter().cloned());
    if opts.dry_run {
        args.push("--dry-run".to_string());
    }
    args
}

/// Run the full release: version check, then `npm publish` with
/// credentials written under `home` for the duration of the command.
pub fn publish(
    root: &Path,
    config: &ReleaseConfig,
    env: &ReleaseEnv,
    home: &Path,
    opts: &PublishOptions,
) -> Result<PublishReport> {
    let check = verify_version(root, config, &env.tag)?;
    let auth_key = config.registry_auth_key()?;

    let args = publish_args(config, opts);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let credentials = NpmCredentials::install(
        &paths::npmrc_path(home),
        &config.registry,
        &auth_key,
        &env.auth_token,
    )?;
    let replaced_existing_npmrc = credentials.replaced_existing();
    let result = process::execute_checked(&config.npm_bin, &arg_refs, root);
    drop(credentials);

    let output = result?;
    Ok(PublishReport {
        tag: check.tag,
        manifest_version: check.manifest_version,
        command: output.command,
        dry_run: opts.dry_run,
        replaced_existing_npmrc,
        stdout: output.stdout,
    })
}
