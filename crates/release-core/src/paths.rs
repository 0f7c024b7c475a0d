use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const PACKAGE_JSON: &str = "package.json";
pub const NPMRC: &str = ".npmrc";
pub const CONFIG_FILE: &str = ".npm-release.yaml";

pub const TAG_ENV: &str = "TRAVIS_TAG";
pub const TOKEN_ENV: &str = "NPM_AUTH_TOKEN";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// The current user's home directory, where npm looks for `.npmrc`.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(ReleaseError::HomeNotFound)
}

pub fn npmrc_path(home: &Path) -> PathBuf {
    home.join(NPMRC)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        assert_eq!(
            npmrc_path(Path::new("/home/ci")),
            PathBuf::from("/home/ci/.npmrc")
        );
        assert_eq!(
            config_path(Path::new("/tmp/pkg")),
            PathBuf::from("/tmp/pkg/.npm-release.yaml")
        );
    }
}
