//! The photo feed: random photos, paginated on scroll, and the search results
//! shown in place of them while a query is typed.

use crate::{
    dispatch::{Request, SearchTicket},
    Alert, NetworkError, Photo, PhotoPage,
};
use std::collections::BTreeSet;

/// Number of photos per page, fixed server-side.
pub const PAGE_SIZE: usize = 10;
/// How far ahead of the prefetched cell we look for a page boundary.
const PREFETCH_LOOKAHEAD: usize = 7;

/// Owns the feed state.
///
/// The coordinator never talks to the network itself: operations return the
/// [`Request`] to run (if any), and outcomes are fed back through
/// [`apply_page`](Self::apply_page) and [`apply_search`](Self::apply_search).
#[derive(Debug, Default)]
pub struct FeedCoordinator {
    /// Photos of the random feed, every loaded page in order.
    base_results: Vec<Photo>,
    /// Results of the latest search.
    filtered_results: Vec<Photo>,
    /// Are the search results displayed?
    is_filter_active: bool,
    /// Feed pages being fetched.
    pending_pages: BTreeSet<u32>,
    /// Ticket of the latest search.
    search_ticket: SearchTicket,
}

impl FeedCoordinator {
    /// Initializes an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading the first page, which replaces the current feed.
    pub fn load_initial(&mut self) -> Request {
        self.pending_pages.insert(1);

        Request::RandomPhotos { page: 1 }
    }

    /// Handles the prefetch signal for the cell at `index`.
    ///
    /// Looks [`PREFETCH_LOOKAHEAD`] cells ahead: when that lands on a page
    /// boundary `10 * p` and exactly `p` pages are loaded, page `p + 1` is
    /// requested. Every other call is a no-op.
    pub fn on_scroll_proximity(&mut self, index: usize) -> Option<Request> {
        let target = index.checked_add(PREFETCH_LOOKAHEAD)?;
        if target % PAGE_SIZE != 0 {
            return None;
        }

        let loaded_pages = target / PAGE_SIZE;
        if self.base_results.len() / PAGE_SIZE != loaded_pages {
            return None;
        }

        let page = u32::try_from(loaded_pages + 1).ok()?;
        if !self.pending_pages.insert(page) {
            tracing::debug!(page, "page already requested");
            return None;
        }

        tracing::debug!(page, index, "prefetch next page");
        Some(Request::RandomPhotos { page })
    }

    /// Updates the search query.
    ///
    /// An empty query goes back to the feed. Anything else switches to the
    /// search results and starts a new search, superseding those in flight.
    pub fn set_search_query(&mut self, query: &str) -> Option<Request> {
        // Whatever is in flight is now stale.
        self.search_ticket = self.search_ticket.next();

        if query.is_empty() {
            self.is_filter_active = false;
            return None;
        }

        self.is_filter_active = true;
        Some(Request::SearchPhotos {
            ticket: self.search_ticket,
            query: query.to_owned(),
        })
    }

    /// Returns the photos to display.
    pub fn current_display_list(&self) -> &[Photo] {
        if self.is_filter_active {
            &self.filtered_results
        } else {
            &self.base_results
        }
    }

    /// Tests if the search results are displayed.
    pub fn is_filter_active(&self) -> bool {
        self.is_filter_active
    }

    /// Returns the number of photos loaded in the feed (ignoring searches).
    pub fn loaded_count(&self) -> usize {
        self.base_results.len()
    }

    /// Returns the displayed photo at `index`, for in-place updates.
    pub(crate) fn displayed_mut(&mut self, index: usize) -> Option<&mut Photo> {
        if self.is_filter_active {
            self.filtered_results.get_mut(index)
        } else {
            self.base_results.get_mut(index)
        }
    }

    /// Applies the outcome of a feed page request.
    pub fn apply_page(
        &mut self,
        page: u32,
        result: Result<PhotoPage, NetworkError>,
    ) -> Option<Alert> {
        self.pending_pages.remove(&page);

        match result {
            Ok(photos) if page == 1 => {
                self.base_results = photos.into_photos();
                None
            },
            // No deduplication: the server may send a photo twice.
            Ok(photos) => {
                self.base_results.extend(photos.into_photos());
                None
            },
            Err(err) => Some(Alert::connection(&format!("page {page}"), &err)),
        }
    }

    /// Applies the outcome of a search.
    ///
    /// Outcomes of superseded searches are dropped, errors included.
    pub fn apply_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<PhotoPage, NetworkError>,
    ) -> Option<Alert> {
        if ticket != self.search_ticket {
            tracing::debug!(?ticket, latest = ?self.search_ticket, "drop superseded search");
            return None;
        }

        match result {
            Ok(photos) => {
                self.filtered_results = photos.into_photos();
                None
            },
            Err(err) => Some(Alert::connection("search results", &err)),
        }
    }
}
