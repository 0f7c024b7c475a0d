//! Required CI inputs: the release tag and the registry token.

use crate::error::{ReleaseError, Result};
use crate::paths::{TAG_ENV, TOKEN_ENV};

/// Tag and token for one publish attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct ReleaseEnv {
    pub tag: String,
    pub auth_token: String,
}

impl std::fmt::Debug for ReleaseEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseEnv")
            .field("tag", &self.tag)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl ReleaseEnv {
    /// Validate values looked up from `TRAVIS_TAG` and `NPM_AUTH_TOKEN`
    /// (or the flags bound to them). The tag is checked first.
    pub fn resolve(tag: Option<String>, auth_token: Option<String>) -> Result<Self> {
        let tag = require_tag(tag)?;
        let auth_token = non_empty(auth_token).ok_or(ReleaseError::MissingEnv(TOKEN_ENV))?;
        Ok(Self { tag, auth_token })
    }
}

/// Validate the tag alone, for flows that never touch the registry.
pub fn require_tag(tag: Option<String>) -> Result<String> {
    non_empty(tag).ok_or(ReleaseError::MissingEnv(TAG_ENV))
}

// An empty variable is as useless as an unset one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_both_values() {
        let env = ReleaseEnv::resolve(Some("1.2.0".into()), Some("tok".into())).unwrap();
        assert_eq!(env.tag, "1.2.0");
        assert_eq!(env.auth_token, "tok");
    }

    #[test]
    fn missing_tag_is_reported_first() {
        let err = ReleaseEnv::resolve(None, None).unwrap_err();
        assert!(matches!(err, ReleaseError::MissingEnv("TRAVIS_TAG")));
        assert_eq!(
            err.to_string(),
            "Environment variable TRAVIS_TAG is unavailable"
        );
    }

    #[test]
    fn missing_token_names_the_variable() {
        let err = ReleaseEnv::resolve(Some("1.0.0".into()), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable NPM_AUTH_TOKEN is unavailable"
        );
    }

    #[test]
    fn empty_values_count_as_missing() {
        assert!(require_tag(Some(String::new())).is_err());
        let err = ReleaseEnv::resolve(Some("1.0.0".into()), Some(String::new())).unwrap_err();
        assert!(matches!(err, ReleaseError::MissingEnv("NPM_AUTH_TOKEN")));
    }

    #[test]
    fn debug_output_hides_token() {
        let env = ReleaseEnv::resolve(Some("1.0.0".into()), Some("s3cr3t".into())).unwrap();
        let dbg = format!("{env:?}");
        assert!(dbg.contains("1.0.0"));
        assert!(!dbg.contains("s3cr3t"));
    }
}
