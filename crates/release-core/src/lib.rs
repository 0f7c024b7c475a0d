pub mod config;
pub mod credentials;
pub mod env;
pub mod error;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod process;
pub mod publish;

pub use error::{ReleaseError, Result};
