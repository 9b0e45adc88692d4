//! HTTP client to interact with the photo API.

use crate::{models, Config, NetworkError, Photo, PhotoId, PhotoPage};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Query used to fill the feed with arbitrary photos.
const RANDOM_QUERY: &str = "random";
/// API version we speak.
const API_VERSION: &str = "v1";
/// Expected status for a successful like.
const LIKED_STATUS: u16 = 201;
/// Expected status for a successful unlike.
const UNLIKED_STATUS: u16 = 200;
/// Identify ourselves.
const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Operations offered by the photo API.
///
/// Fetches report their outcome, mutations are fire-and-forget: failures are
/// logged and never reach the caller.
pub trait PhotoApi: Send + Sync {
    /// Fetches a page of the random feed.
    fn random_photos(&self, page: u32) -> Result<PhotoPage, NetworkError>;

    /// Fetches the first page of photos matching `query`.
    fn search_photos(&self, query: &str) -> Result<PhotoPage, NetworkError>;

    /// Fetches every photo liked by the configured user.
    fn liked_photos(&self) -> Result<Vec<Photo>, NetworkError>;

    /// Likes a photo on behalf of the configured user.
    fn like_photo(&self, id: &PhotoId);

    /// Removes the like of the configured user from a photo.
    fn unlike_photo(&self, id: &PhotoId);
}

impl<T> PhotoApi for Arc<T>
where
    T: PhotoApi + ?Sized,
{
    fn random_photos(&self, page: u32) -> Result<PhotoPage, NetworkError> {
        (**self).random_photos(page)
    }

    fn search_photos(&self, query: &str) -> Result<PhotoPage, NetworkError> {
        (**self).search_photos(query)
    }

    fn liked_photos(&self) -> Result<Vec<Photo>, NetworkError> {
        (**self).liked_photos()
    }

    fn like_photo(&self, id: &PhotoId) {
        (**self).like_photo(id);
    }

    fn unlike_photo(&self, id: &PhotoId) {
        (**self).unlike_photo(id);
    }
}

// -----------------------------------------------------------------------------

/// A simple HTTP client, one attempt per request.
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    agent: ureq::Agent,
    /// API settings.
    config: Arc<Config>,
    /// Precomputed `Authorization` header.
    authorization: String,
}

impl Client {
    /// Initialize a new client.
    pub fn new(config: Config) -> Self {
        Self {
            agent: ureq::builder()
                .user_agent(USER_AGENT)
                .timeout(config.request_timeout())
                .build(),
            authorization: config.authorization(),
            config: Arc::new(config),
        }
    }

    /// Calls `url` and parses the JSON response.
    fn get_json<T>(&self, url: &Url) -> Result<T, NetworkError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = match self.request("GET", url).call() {
            // Error payloads are decoded too: they fail like any bad body.
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(err.into()),
        };
        let body = response.into_string()?;

        decode(&body).map_err(|err| {
            tracing::debug!(%url, %err, "cannot decode response");
            err
        })
    }

    /// Sends a body-less mutation, expecting the `expected` status.
    fn mutate(&self, method: &str, url: &Url, expected: u16) {
        tracing::debug!(%url, method, "mutation");
        let status = match self.request(method, url).call() {
            Ok(response) => response.status(),
            Err(ureq::Error::Status(code, _)) => code,
            Err(err) => {
                tracing::warn!(%url, method, %err, "mutation failed");
                return;
            },
        };

        if status != expected {
            tracing::warn!(%url, method, status, expected, "mutation rejected");
        }
    }

    /// Prepares a request, with the headers every endpoint expects.
    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        self.agent
            .request_url(method, url)
            .set("Accept", "application/json")
            .set("Accept-Version", API_VERSION)
            .set("Authorization", &self.authorization)
    }

    /// Returns the URL of the like endpoint of a photo.
    fn like_url(&self, id: &PhotoId) -> Url {
        self.config.endpoint(&["photos", id.as_str(), "like"])
    }
}

impl PhotoApi for Client {
    fn random_photos(&self, page: u32) -> Result<PhotoPage, NetworkError> {
        let mut url = self.config.endpoint(&["search", "photos"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("query", RANDOM_QUERY);

        let mut photos = self
            .get_json::<models::photo::SearchResults>(&url)
            .map(PhotoPage::from)?;
        // The server doesn't reliably echo the page number.
        photos.stamp(page);

        Ok(photos)
    }

    fn search_photos(&self, query: &str) -> Result<PhotoPage, NetworkError> {
        let mut url = self.config.endpoint(&["search", "photos"]);
        url.query_pairs_mut().append_pair("query", query);

        self.get_json::<models::photo::SearchResults>(&url)
            .map(PhotoPage::from)
    }

    fn liked_photos(&self) -> Result<Vec<Photo>, NetworkError> {
        let url = self.config.endpoint(&["users", self.config.user(), "likes"]);

        Ok(self
            .get_json::<Vec<models::photo::Photo>>(&url)?
            .into_iter()
            .map(Photo::from)
            .collect())
    }

    fn like_photo(&self, id: &PhotoId) {
        self.mutate("POST", &self.like_url(id), LIKED_STATUS);
    }

    fn unlike_photo(&self, id: &PhotoId) {
        self.mutate("DELETE", &self.like_url(id), UNLIKED_STATUS);
    }
}

/// Parses a JSON body, telling apart empty and malformed bodies.
pub(crate) fn decode<T>(body: &str) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
{
    if body.trim().is_empty() {
        return Err(NetworkError::EmptyBody);
    }

    Ok(serde_json::from_str(body)?)
}
