pub mod dispatch;
pub mod logging;
pub mod termio;

mod alert;
mod app;
mod client;
mod config;
mod detail;
mod error;
mod favorites;
mod feed;
mod models;
mod page;
mod photo;

#[cfg(test)]
mod testing;

pub use alert::Alert;
pub use app::App;
pub use client::{Client, PhotoApi};
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USERNAME};
pub use detail::{LikeAction, PhotoDetail};
pub use error::NetworkError;
pub use favorites::FavoritesCoordinator;
pub use feed::{FeedCoordinator, PAGE_SIZE};
pub use page::PhotoPage;
pub use photo::{Author, Photo, PhotoId};
