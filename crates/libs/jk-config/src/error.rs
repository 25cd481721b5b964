//! Configuration error types.

/// Configuration errors.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No server URL from flags or the environment.
    #[error("Jenkins URL is missing. Set JENKINS_URL environment variable or use --url cli argument")]
    MissingUrl,

    /// No user from flags or the environment.
    #[error("Jenkins user is missing. Set JENKINS_USER environment variable or use --user cli argument")]
    MissingUser,
}
