use miette::Diagnostic;
use thiserror::Error;

/// Main error type for identicon operations.
///
/// The derivation pipeline itself never fails; every variant here belongs
/// to the I/O edge (encoding, writing, manifests, CLI misuse).
#[derive(Error, Diagnostic, Debug)]
pub enum IdenticonError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(identicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(identicon::write))]
    Write {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(identicon::encode))]
    Encode { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(identicon::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(identicon::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
