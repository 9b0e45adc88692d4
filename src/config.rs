//! Client configuration, built once at start-up.

use eyre::{ensure, Result};
use once_cell::sync::Lazy;
use std::time::Duration;
use url::Url;

/// Photo API used when none is specified.
pub static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api.unsplash.com/").expect("valid default API URL")
});
/// Account whose likes are listed in the favorites.
pub const DEFAULT_USERNAME: &str = "user1a";
/// Upper bound for a whole request (connect, send and read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the photo API.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, every endpoint is resolved against it.
    base_url: Url,
    /// Static bearer token.
    access_token: String,
    /// Owner of the favorites.
    username: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl Config {
    /// Initializes a configuration targeting the default API.
    pub fn new(access_token: &str) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.clone(), access_token)
    }

    /// Initializes a configuration targeting the API at `base_url`.
    pub fn with_base_url(base_url: Url, access_token: &str) -> Result<Self> {
        ensure!(
            !base_url.cannot_be_a_base(),
            "{base_url} cannot be used as API root"
        );
        let access_token = access_token.trim();
        ensure!(!access_token.is_empty(), "empty access token");

        Ok(Self {
            base_url,
            access_token: access_token.to_owned(),
            username: DEFAULT_USERNAME.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the account whose likes are listed.
    pub fn username(mut self, username: &str) -> Result<Self> {
        let username = username.trim();
        ensure!(!username.is_empty(), "empty username");
        username.clone_into(&mut self.username);

        Ok(self)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the URL of the endpoint at `segments`, below the API root.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL checked at init")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// Returns the value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub(crate) fn user(&self) -> &str {
        &self.username
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        self.timeout
    }
}
