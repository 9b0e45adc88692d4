use crate::models;
use eyre::{ensure, Result};
use std::{fmt, str::FromStr};
use url::Url;

/// A photo, as listed by the feed, the search or the favorites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Photo ID.
    id: PhotoId,
    /// Description, if the author wrote one.
    description: Option<String>,
    /// Creation timestamp, as reported by the server.
    created_at: String,
    /// Number of downloads (not always reported).
    downloads: Option<u64>,
    /// Is the photo liked by the current user?
    liked_by_user: bool,
    /// Number of likes (not always reported).
    likes: Option<u64>,
    /// Full resolution image, as sent by the server.
    full_url: String,
    /// Thumbnail image, as sent by the server.
    thumb_url: String,
    /// Photo author.
    author: Author,
}

impl Photo {
    /// Returns the photo ID.
    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    /// Returns the photo description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the number of downloads.
    pub fn downloads(&self) -> Option<u64> {
        self.downloads
    }

    /// Tests if the current user likes this photo.
    pub fn is_liked(&self) -> bool {
        self.liked_by_user
    }

    /// Returns the number of likes.
    pub fn likes(&self) -> Option<u64> {
        self.likes
    }

    /// Returns the URL of the full resolution image.
    ///
    /// `None` if the server sent something that isn't an absolute URL.
    pub fn full_url(&self) -> Option<Url> {
        Url::parse(&self.full_url).ok()
    }

    /// Returns the URL of the thumbnail.
    ///
    /// `None` if the server sent something that isn't an absolute URL.
    pub fn thumb_url(&self) -> Option<Url> {
        Url::parse(&self.thumb_url).ok()
    }

    /// Returns the photo author.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Flips the liked flag, returning the new value.
    ///
    /// Only the favorites coordinator gets to do this.
    pub(crate) fn toggle_liked(&mut self) -> bool {
        self.liked_by_user = !self.liked_by_user;
        self.liked_by_user
    }
}

impl From<models::photo::Photo> for Photo {
    fn from(value: models::photo::Photo) -> Self {
        Self {
            id: value.id.into(),
            description: value.description,
            created_at: value.created_at,
            downloads: value.downloads,
            liked_by_user: value.liked_by_user,
            likes: value.likes,
            full_url: value.urls.full,
            thumb_url: value.urls.thumb,
            author: Author {
                name: value.user.name,
                location: value.user.location,
            },
        }
    }
}

// -----------------------------------------------------------------------------

/// The author of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    name: String,
    /// Where the author lives, if public.
    location: Option<String>,
}

impl Author {
    /// Returns the author display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the author location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

// -----------------------------------------------------------------------------

/// Photo ID on the photo API.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PhotoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for PhotoId {
    type Err = eyre::Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        ensure!(!value.is_empty(), "empty photo ID");

        Ok(Self(value.to_owned()))
    }
}
