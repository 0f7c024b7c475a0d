use release_core::paths::PACKAGE_JSON;
use std::path::{Path, PathBuf};

/// Resolve the package root directory.
///
/// Priority:
/// 1. `--root` flag / `NPM_RELEASE_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `package.json`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_package_root(&cwd).unwrap_or(cwd)
}

fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PACKAGE_JSON).is_file())
        .map(Path::to_path_buf)
}
