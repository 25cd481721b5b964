//! jkcli error types.

/// jkcli errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Jenkins API interaction failed.
    #[error(transparent)]
    Api(#[from] jk_api::error::Error),

    /// Connection settings could not be resolved.
    #[error(transparent)]
    Config(#[from] jk_config::error::Error),

    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// Pattern matched too many jobs to open at once.
    #[error("{0} jobs match. This is probably not what you expected. Please narrow down your search")]
    TooManyMatches(usize),
}
