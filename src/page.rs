use crate::{models, Photo};

/// A batch of photos returned by one call to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPage {
    /// Number of matches server-side.
    total: u64,
    /// Page number, as requested by the client.
    page: Option<u32>,
    /// Photos, in server order.
    photos: Vec<Photo>,
}

impl PhotoPage {
    /// Returns the number of matches reported by the server.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the page number.
    ///
    /// The server doesn't reliably echo it back, so this is only set for pages
    /// fetched by number (and it's always the requested number).
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Returns the photos of this page.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Consumes the page, returning its photos.
    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }

    /// Stamps the page with the number it was requested with.
    pub(crate) fn stamp(&mut self, page: u32) {
        self.page = Some(page);
    }
}

impl From<models::photo::SearchResults> for PhotoPage {
    fn from(value: models::photo::SearchResults) -> Self {
        Self {
            total: value.total,
            page: None,
            photos: value.results.into_iter().map(Photo::from).collect(),
        }
    }
}
