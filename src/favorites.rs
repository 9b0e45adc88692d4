//! The favorites: photos liked by the configured user.

use crate::{dispatch::Request, Alert, NetworkError, Photo};

/// Owns the list of liked photos and issues like/unlike mutations.
///
/// Nothing is cached: the list is fetched again each time the favorites are
/// shown, and dropped once they're hidden.
#[derive(Debug, Default)]
pub struct FavoritesCoordinator {
    /// Liked photos, as last fetched.
    photos: Vec<Photo>,
    /// Are the favorites on screen?
    visible: bool,
}

impl FavoritesCoordinator {
    /// Initializes an empty, hidden, favorites list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the favorites, starting a fresh fetch of the liked photos.
    pub fn load_favorites(&mut self) -> Request {
        self.photos.clear();
        self.visible = true;

        Request::LikedPhotos
    }

    /// Hides the favorites, dropping the list.
    pub fn hide(&mut self) {
        self.photos.clear();
        self.visible = false;
    }

    /// Returns the liked photos.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub(crate) fn photo_mut(&mut self, index: usize) -> Option<&mut Photo> {
        self.photos.get_mut(index)
    }

    /// Applies the outcome of a liked photos request.
    pub fn apply_favorites(
        &mut self,
        result: Result<Vec<Photo>, NetworkError>,
    ) -> Option<Alert> {
        if !self.visible {
            tracing::debug!("favorites hidden, response dropped");
            return None;
        }

        match result {
            Ok(photos) => {
                self.photos = photos;
                None
            },
            Err(err) => Some(Alert::connection("favorites", &err)),
        }
    }

    /// Likes `photo` if it isn't, unlikes it otherwise.
    ///
    /// The flag is flipped right away and stays flipped whatever the server
    /// says: the returned mutation is never confirmed.
    pub fn toggle_like(photo: &mut Photo) -> Request {
        let id = photo.id().clone();

        if photo.toggle_liked() {
            Request::Like(id)
        } else {
            Request::Unlike(id)
        }
    }
}
