//! Reading `package.json`'s version and comparing it against the release tag.

use crate::error::{ReleaseError, Result};
use crate::process;
use std::path::Path;

/// Prints the `version` field of the manifest passed as the first argument.
const NODE_VERSION_SCRIPT: &str = "var fs=require('fs'); \
     var m=JSON.parse(fs.readFileSync(process.argv[1], 'utf8')); \
     console.log(m['version']);";

/// Ask `node` for the manifest version and return its raw stdout.
///
/// Node's stderr is logged rather than treated as fatal; only a non-zero
/// exit aborts.
pub fn read_version_with_node(node_bin: &str, root: &Path, manifest: &Path) -> Result<String> {
    let manifest_arg = manifest.to_string_lossy();
    let output = process::execute_checked(
        node_bin,
        &["-e", NODE_VERSION_SCRIPT, manifest_arg.as_ref()],
        root,
    )?;
    if !output.stderr.trim().is_empty() {
        tracing::warn!("{}", output.stderr.trim_end());
    }
    Ok(output.stdout)
}

/// Parse the manifest and return its `version` string.
pub fn read_version_from_json(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    value
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ReleaseError::VersionNotFound(format!(
                "{} has no string \"version\" field",
                path.display()
            ))
        })
}

/// Check `node`'s output against the tag.
///
/// The first non-empty line is the manifest version. Returns it when it
/// equals `tag` exactly.
pub fn check_version(tag: &str, node_stdout: &str) -> Result<String> {
    for line in node_stdout.lines() {
        tracing::info!("{line}");
        if line.is_empty() {
            continue;
        }
        return check_tag(tag, line);
    }
    Err(ReleaseError::VersionNotFound(node_stdout.to_string()))
}

/// Exact, byte-for-byte comparison of tag and manifest version.
pub fn check_tag(tag: &str, version: &str) -> Result<String> {
    if version != tag {
        return Err(ReleaseError::VersionMismatch {
            tag: tag.to_string(),
            manifest: version.to_string(),
        });
    }
    Ok(version.to_string())
}
