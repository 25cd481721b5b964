//! Configuration management for the JK command line tools.
//!
//! Connection settings are resolved once at startup from command-line flags
//! with environment-variable fallback, and handed to the rest of the program
//! as a plain struct.
//!
//! # Usage
//!
//! ```rust
//! use jk_config::Config;
//!
//! // Flags win over JENKINS_URL, JENKINS_USER, and JENKINS_PW.
//! let config = Config::resolve(
//!     Some("https://ci.example.com".to_string()),
//!     Some("admin".to_string()),
//!     Some("token".to_string()),
//! )
//! .unwrap();
//! assert_eq!(config.user, "admin");
//! ```

use tracing::debug;

use crate::prelude::*;

pub mod error;
pub mod prelude;

/// Environment variable naming the server base URL.
pub const URL_VAR: &str = "JENKINS_URL";
/// Environment variable naming the user.
pub const USER_VAR: &str = "JENKINS_USER";
/// Environment variable naming the API token or password.
pub const TOKEN_VAR: &str = "JENKINS_PW";

/// Resolved connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server base URL.
    pub url: String,
    /// User to authenticate as.
    pub user: String,
    /// API token or password; requests go out unauthenticated without one.
    pub token: Option<String>,
}

impl Config {
    /// Resolves settings from the environment alone.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None, None)
    }

    /// Resolves settings from flag values with environment fallback.
    ///
    /// Empty strings count as unset, so `JENKINS_URL=""` behaves like an
    /// absent variable.
    pub fn resolve(
        url: Option<String>,
        user: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let url = non_empty(url)
            .or_else(|| env_var(URL_VAR))
            .ok_or(Error::MissingUrl)?;
        let user = non_empty(user)
            .or_else(|| env_var(USER_VAR))
            .ok_or(Error::MissingUser)?;
        let token = non_empty(token).or_else(|| env_var(TOKEN_VAR));
        debug!("resolved connection settings for {user}@{url}");
        Ok(Self { url, user, token })
    }
}

fn env_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // SAFETY: every test mutating the process environment is #[serial].
    fn clear_env() {
        unsafe {
            std::env::remove_var(URL_VAR);
            std::env::remove_var(USER_VAR);
            std::env::remove_var(TOKEN_VAR);
        }
    }

    fn set_env(name: &str, value: &str) {
        unsafe {
            std::env::set_var(name, value);
        }
    }

    #[test]
    #[serial]
    fn resolves_from_the_environment() {
        clear_env();
        set_env(URL_VAR, "http://ci.internal:8080");
        set_env(USER_VAR, "robot");
        set_env(TOKEN_VAR, "secret");

        let config = Config::from_env().unwrap();

        assert_eq!(
            config,
            Config {
                url: "http://ci.internal:8080".to_string(),
                user: "robot".to_string(),
                token: Some("secret".to_string()),
            }
        );
    }

    #[test]
    #[serial]
    fn flags_win_over_the_environment() {
        clear_env();
        set_env(URL_VAR, "http://ci.internal:8080");
        set_env(USER_VAR, "robot");

        let config = Config::resolve(
            Some("http://other:8080".to_string()),
            None,
            Some("flag-token".to_string()),
        )
        .unwrap();

        assert_eq!(config.url, "http://other:8080");
        assert_eq!(config.user, "robot");
        assert_eq!(config.token, Some("flag-token".to_string()));
    }

    #[test]
    #[serial]
    fn missing_url_names_the_variable() {
        clear_env();
        set_env(USER_VAR, "robot");

        let err = Config::from_env().unwrap_err();

        assert_eq!(err, Error::MissingUrl);
        assert!(err.to_string().contains("JENKINS_URL"));
    }

    #[test]
    #[serial]
    fn missing_user_names_the_variable() {
        clear_env();
        set_env(URL_VAR, "http://ci.internal:8080");

        let err = Config::from_env().unwrap_err();

        assert_eq!(err, Error::MissingUser);
        assert!(err.to_string().contains("JENKINS_USER"));
    }

    #[test]
    #[serial]
    fn empty_values_count_as_unset() {
        clear_env();
        set_env(URL_VAR, "");
        set_env(USER_VAR, "robot");

        assert_eq!(Config::from_env().unwrap_err(), Error::MissingUrl);
    }

    #[test]
    #[serial]
    fn token_is_optional() {
        clear_env();
        set_env(URL_VAR, "http://ci.internal:8080");
        set_env(USER_VAR, "robot");

        let config = Config::from_env().unwrap();

        assert_eq!(config.token, None);
    }
}
