//! Glue between the UI events, the coordinators and the dispatcher.
//!
//! The [`App`] is the single owner of every piece of mutable state: UI events
//! and API responses are both applied on the thread holding it.

use crate::{
    dispatch::{Dispatcher, Response},
    Alert, FavoritesCoordinator, FeedCoordinator, PhotoApi,
};

/// A photo browsing session.
pub struct App<A> {
    /// Runs requests in the background.
    dispatcher: Dispatcher<A>,
    /// Random feed and search.
    feed: FeedCoordinator,
    /// Liked photos.
    favorites: FavoritesCoordinator,
    /// Alerts not yet shown to the user.
    alerts: Vec<Alert>,
}

impl<A> App<A>
where
    A: PhotoApi + 'static,
{
    /// Initializes a new session on top of `api`.
    pub fn new(api: A) -> Self {
        Self {
            dispatcher: Dispatcher::new(api),
            feed: FeedCoordinator::new(),
            favorites: FavoritesCoordinator::new(),
            alerts: Vec::new(),
        }
    }

    /// Returns the feed state.
    pub fn feed(&self) -> &FeedCoordinator {
        &self.feed
    }

    /// Returns the favorites state.
    pub fn favorites(&self) -> &FavoritesCoordinator {
        &self.favorites
    }

    /// (Re)loads the feed from its first page.
    pub fn load_feed(&mut self) {
        let request = self.feed.load_initial();
        self.dispatcher.submit(request);
    }

    /// Feeds the prefetch signal of the list, for every index about to show.
    pub fn scroll_feed<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            if let Some(request) = self.feed.on_scroll_proximity(index) {
                self.dispatcher.submit(request);
            }
        }
    }

    /// Updates the search query (one call per keystroke).
    pub fn search(&mut self, query: &str) {
        if let Some(request) = self.feed.set_search_query(query) {
            self.dispatcher.submit(request);
        }
    }

    /// Shows the favorites, fetching them again.
    pub fn show_favorites(&mut self) {
        let request = self.favorites.load_favorites();
        self.dispatcher.submit(request);
    }

    /// Hides the favorites.
    pub fn hide_favorites(&mut self) {
        self.favorites.hide();
    }

    /// Toggles the like of the displayed feed photo at `index`.
    ///
    /// Returns the new liked state, or `None` if there's no such photo.
    pub fn toggle_feed_like(&mut self, index: usize) -> Option<bool> {
        let photo = self.feed.displayed_mut(index)?;
        let request = FavoritesCoordinator::toggle_like(photo);
        let liked = photo.is_liked();
        self.dispatcher.submit(request);

        Some(liked)
    }

    /// Toggles the like of the favorite photo at `index`.
    ///
    /// Returns the new liked state, or `None` if there's no such photo.
    pub fn toggle_favorite_like(&mut self, index: usize) -> Option<bool> {
        let photo = self.favorites.photo_mut(index)?;
        let request = FavoritesCoordinator::toggle_like(photo);
        let liked = photo.is_liked();
        self.dispatcher.submit(request);

        Some(liked)
    }

    /// Applies every response already received, without blocking.
    ///
    /// Returns the number of applied responses.
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        while let Some(response) = self.dispatcher.try_recv() {
            self.apply(response);
            count += 1;
        }
        count
    }

    /// Waits for every request in flight, applying responses as they come.
    pub fn run_until_idle(&mut self) {
        while let Some(response) = self.dispatcher.recv() {
            self.apply(response);
        }
    }

    /// Returns the number of requests in flight.
    pub fn in_flight(&self) -> usize {
        self.dispatcher.in_flight()
    }

    /// Returns the pending alerts, oldest first.
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    /// Routes a response to its coordinator.
    fn apply(&mut self, response: Response) {
        let alert = match response {
            Response::RandomPhotos { page, result } => {
                self.feed.apply_page(page, result)
            },
            Response::SearchPhotos { ticket, result } => {
                self.feed.apply_search(ticket, result)
            },
            Response::LikedPhotos(result) => {
                self.favorites.apply_favorites(result)
            },
            Response::MutationSent => None,
        };

        self.alerts.extend(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{liked_photo, FakeApi};
    use std::sync::Arc;

    fn app() -> (Arc<FakeApi>, App<Arc<FakeApi>>) {
        let api = Arc::new(FakeApi::default());
        (Arc::clone(&api), App::new(api))
    }

    fn displayed_ids<A>(app: &App<A>) -> Vec<String>
    where
        A: PhotoApi + 'static,
    {
        app.feed()
            .current_display_list()
            .iter()
            .map(|photo| photo.id().to_string())
            .collect()
    }

    #[test]
    fn scrolling_loads_pages_in_order() {
        let (api, mut app) = app();
        app.load_feed();
        app.run_until_idle();
        assert_eq!(app.feed().loaded_count(), 10);

        // The list asks for the cells 0 to 5, then 3 to 8, repeatedly.
        app.scroll_feed(0..6);
        app.scroll_feed(3..9);
        app.run_until_idle();
        app.scroll_feed(10..19);
        app.run_until_idle();

        assert_eq!(*api.pages.lock().expect("lock"), vec![1, 2, 3]);
        assert_eq!(app.feed().loaded_count(), 30);
        assert_eq!(displayed_ids(&app)[20], "p3-0");
        assert!(app.take_alerts().is_empty());
    }

    #[test]
    fn typing_then_clearing_shows_feed() {
        let (api, mut app) = app();
        app.load_feed();
        app.run_until_idle();
        let feed = displayed_ids(&app);

        for query in ["d", "do", "dog"] {
            app.search(query);
        }
        app.search("");
        app.run_until_idle();

        assert_eq!(api.queries.lock().expect("lock").len(), 3);
        assert_eq!(displayed_ids(&app), feed);
    }

    #[test]
    fn typing_shows_latest_query() {
        let (_, mut app) = app();

        for query in ["c", "ca", "cat"] {
            app.search(query);
        }
        app.run_until_idle();

        assert!(app.feed().is_filter_active());
        assert_eq!(displayed_ids(&app).len(), 10);
        assert!(displayed_ids(&app).iter().all(|id| id.starts_with("cat-")));
    }

    #[test]
    fn offline_raises_alerts() {
        let (api, mut app) = app();
        api.go_offline();

        app.load_feed();
        app.show_favorites();
        app.run_until_idle();

        assert_eq!(app.take_alerts().len(), 2);
        assert!(app.take_alerts().is_empty());
        assert!(app.feed().current_display_list().is_empty());
        assert!(app.favorites().photos().is_empty());
    }

    #[test]
    fn favorites_refetched_on_show() {
        let (api, mut app) = app();
        api.liked.lock().expect("lock").push(liked_photo("a"));

        app.show_favorites();
        app.run_until_idle();
        assert_eq!(app.favorites().photos().len(), 1);

        api.liked.lock().expect("lock").push(liked_photo("b"));
        app.hide_favorites();
        assert!(app.favorites().photos().is_empty());
        app.show_favorites();
        app.run_until_idle();

        assert_eq!(app.favorites().photos().len(), 2);
    }

    #[test]
    fn like_from_feed_is_optimistic() {
        let (api, mut app) = app();
        app.load_feed();
        app.run_until_idle();

        assert_eq!(app.toggle_feed_like(4), Some(true));
        // Flipped before the server got a say.
        assert!(app.feed().current_display_list()[4].is_liked());
        app.run_until_idle();

        assert!(app.feed().current_display_list()[4].is_liked());
        assert_eq!(*api.mutations.lock().expect("lock"), vec!["like p1-4"]);
        assert_eq!(app.toggle_feed_like(42), None);
    }

    #[test]
    fn rejected_unlike_is_not_rolled_back() {
        let (api, mut app) = app();
        api.liked.lock().expect("lock").push(liked_photo("a"));
        app.show_favorites();
        app.run_until_idle();

        // The fake drops every mutation on the floor, like a server error.
        assert_eq!(app.toggle_favorite_like(0), Some(false));
        app.run_until_idle();

        assert!(!app.favorites().photos()[0].is_liked());
        assert!(app.take_alerts().is_empty());
        assert_eq!(*api.mutations.lock().expect("lock"), vec!["unlike a"]);
    }

    #[test]
    fn pump_does_not_block() {
        let (_, mut app) = app();

        assert_eq!(app.pump(), 0);
        app.load_feed();
        while app.in_flight() > 0 {
            app.pump();
            std::thread::yield_now();
        }

        assert_eq!(app.feed().loaded_count(), 10);
    }
}
