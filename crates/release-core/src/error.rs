use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Environment variable {0} is unavailable")]
    MissingEnv(&'static str),

    #[error(
        "Version from TRAVIS_TAG [{tag}] doesn't match the version declared in package.json [{manifest}]"
    )]
    VersionMismatch { tag: String, manifest: String },

    #[error("cannot find version in manifest output:\n{0}")]
    VersionNotFound(String),

    #[error("'{program}' could not be started: {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("command [{command}] exited with {}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("invalid registry url '{url}': {reason}")]
    InvalidRegistry { url: String, reason: String },

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
