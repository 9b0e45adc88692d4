//! Mininal model of the data returned by `/search/photos` and
//! `/users/<USER>/likes`.

use serde::Deserialize;

// From `/search/photos` {{{

#[derive(Debug, Deserialize)]
pub struct SearchResults {
    // Number of matches server-side.
    pub total: u64,
    // Matches for the requested page.
    pub results: Vec<Photo>,
}

// }}}
// Shared by every endpoint {{{

#[derive(Debug, Deserialize)]
pub struct Photo {
    // Photo ID.
    pub id: String,
    // Free-text description.
    pub description: Option<String>,
    // Creation timestamp.
    pub created_at: String,
    // Download count.
    pub downloads: Option<u64>,
    // Liked by the account behind the token?
    pub liked_by_user: bool,
    // Like count.
    pub likes: Option<u64>,
    // Image locations.
    pub urls: Urls,
    // Author.
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct Urls {
    // Kept raw: one odd URL must not spoil a whole page.
    pub full: String,
    pub thumb: String,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub name: String,
    pub location: Option<String>,
}

// }}}
