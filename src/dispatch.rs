//! Runs API requests off the owning thread and brings their outcome back.
//!
//! Each submitted [`Request`] runs on its own worker thread. The worker sends
//! exactly one [`Response`] on the dispatcher channel, and the thread that owns
//! the dispatcher (the one holding the coordinators) is the only one to ever
//! look at it. Workers never touch coordinator state.

use crate::{NetworkError, Photo, PhotoApi, PhotoId, PhotoPage};
use std::{
    sync::{mpsc, Arc},
    thread,
};

/// Tags a search request, newer searches get greater tickets.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Returns the ticket following this one.
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Work to perform against the photo API.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Request {
    /// Fetch a page of the random feed.
    RandomPhotos {
        /// Page number, starting at 1.
        page: u32,
    },
    /// Search photos.
    SearchPhotos {
        /// Identifies the search among the ones in flight.
        ticket: SearchTicket,
        /// Free-text query.
        query: String,
    },
    /// Fetch the liked photos.
    LikedPhotos,
    /// Like a photo.
    Like(PhotoId),
    /// Remove a like.
    Unlike(PhotoId),
}

impl Request {
    /// Performs the request, blocking until completion.
    pub fn execute<A>(self, api: &A) -> Response
    where
        A: PhotoApi + ?Sized,
    {
        match self {
            Self::RandomPhotos { page } => Response::RandomPhotos {
                page,
                result: api.random_photos(page),
            },
            Self::SearchPhotos { ticket, query } => Response::SearchPhotos {
                ticket,
                result: api.search_photos(&query),
            },
            Self::LikedPhotos => Response::LikedPhotos(api.liked_photos()),
            Self::Like(id) => {
                api.like_photo(&id);
                Response::MutationSent
            },
            Self::Unlike(id) => {
                api.unlike_photo(&id);
                Response::MutationSent
            },
        }
    }
}

/// Outcome of a [`Request`].
#[derive(Debug)]
pub enum Response {
    /// A page of the random feed, or why it couldn't be fetched.
    RandomPhotos {
        /// Requested page.
        page: u32,
        /// Fetched page.
        result: Result<PhotoPage, NetworkError>,
    },
    /// Search results, or why they couldn't be fetched.
    SearchPhotos {
        /// Ticket of the originating request.
        ticket: SearchTicket,
        /// Search results.
        result: Result<PhotoPage, NetworkError>,
    },
    /// The liked photos, or why they couldn't be fetched.
    LikedPhotos(Result<Vec<Photo>, NetworkError>),
    /// A like or unlike went out. Whether the server accepted it is unknown.
    MutationSent,
}

// -----------------------------------------------------------------------------

/// Spawns requests and collects their responses.
pub struct Dispatcher<A> {
    /// Shared with every worker.
    api: Arc<A>,
    /// Cloned into every worker.
    sender: mpsc::Sender<Response>,
    /// Read by the owning thread only.
    receiver: mpsc::Receiver<Response>,
    /// Number of submitted requests whose response hasn't been received yet.
    in_flight: usize,
}

impl<A> Dispatcher<A>
where
    A: PhotoApi + 'static,
{
    /// Initializes a dispatcher on top of `api`.
    pub fn new(api: A) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            api: Arc::new(api),
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Runs `request` in the background.
    pub fn submit(&mut self, request: Request) {
        tracing::debug!(?request, "submit");
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();

        thread::spawn(move || {
            let response = request.execute(api.as_ref());
            if sender.send(response).is_err() {
                tracing::debug!("dispatcher gone, response dropped");
            }
        });
        self.in_flight += 1;
    }

    /// Returns a response if one is ready, without blocking.
    pub fn try_recv(&mut self) -> Option<Response> {
        let response = self.receiver.try_recv().ok()?;
        self.in_flight -= 1;

        Some(response)
    }

    /// Waits for the next response.
    ///
    /// Returns `None` right away when nothing is in flight.
    pub fn recv(&mut self) -> Option<Response> {
        if self.in_flight == 0 {
            return None;
        }
        // Can't be disconnected: we hold a sender.
        let response = self.receiver.recv().ok()?;
        self.in_flight -= 1;

        Some(response)
    }

    /// Returns the number of requests still running.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
