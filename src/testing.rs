//! Fixtures shared by the unit tests.

use crate::{models, NetworkError, Photo, PhotoApi, PhotoId, PhotoPage};
use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
    thread,
};
use url::Url;

/// Returns the JSON payload of a photo.
pub(crate) fn photo_json(id: &str, liked: bool) -> String {
    format!(
        concat!(
            r#"{{"id":"{id}","description":"{id} photo","#,
            r#""created_at":"2016-05-03T11:00:28-04:00","downloads":42,"#,
            r#""liked_by_user":{liked},"likes":7,"#,
            r#""urls":{{"full":"https://images.example.com/{id}/full","#,
            r#""thumb":"https://images.example.com/{id}/thumb"}},"#,
            r#""user":{{"name":"Author {id}","location":"Paris"}}}}"#,
        ),
        id = id,
        liked = liked,
    )
}

/// Returns the JSON payload of a search page.
pub(crate) fn page_json(total: u64, ids: &[String]) -> String {
    let results = ids
        .iter()
        .map(|id| photo_json(id, false))
        .collect::<Vec<_>>()
        .join(",");

    format!(r#"{{"total":{total},"results":[{results}]}}"#)
}

/// Returns a photo, not liked.
pub(crate) fn photo(id: &str) -> Photo {
    serde_json::from_str::<models::photo::Photo>(&photo_json(id, false))
        .expect("valid photo fixture")
        .into()
}

/// Returns a liked photo.
pub(crate) fn liked_photo(id: &str) -> Photo {
    serde_json::from_str::<models::photo::Photo>(&photo_json(id, true))
        .expect("valid photo fixture")
        .into()
}

/// Returns `count` IDs, prefixed by `prefix`.
pub(crate) fn ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}-{i}")).collect()
}

/// Returns a page of photos with the given IDs.
pub(crate) fn page(page: Option<u32>, ids: &[String]) -> PhotoPage {
    let mut photos = serde_json::from_str::<models::photo::SearchResults>(
        &page_json(100, ids),
    )
    .map(PhotoPage::from)
    .expect("valid page fixture");
    if let Some(number) = page {
        photos.stamp(number);
    }
    photos
}

// HTTP {{{

/// Builds a raw HTTP/1.1 response.
pub(crate) fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Answers a single request with `response`.
///
/// Returns the server root URL and a handle yielding the raw request head.
pub(crate) fn serve_once(
    response: String,
) -> (Url, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut request = Vec::new();
        let mut buf = [0; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let count = stream.read(&mut buf).expect("read request");
            if count == 0 {
                break;
            }
            request.extend_from_slice(&buf[..count]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");

        String::from_utf8_lossy(&request).into_owned()
    });

    let url = Url::parse(&format!("http://{addr}/")).expect("server URL");
    (url, handle)
}

/// Returns the root URL of a port nobody listens on.
pub(crate) fn closed_port() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    Url::parse(&format!("http://{addr}/")).expect("server URL")
}

// }}}
// In-memory API {{{

/// Scripted photo API.
///
/// Random pages are made of 10 photos named `p<PAGE>-<N>`, search pages of 10
/// photos named `<QUERY>-<N>`.
#[derive(Default)]
pub(crate) struct FakeApi {
    /// Fail every fetch.
    pub(crate) offline: AtomicBool,
    /// Liked photos.
    pub(crate) liked: Mutex<Vec<Photo>>,
    /// Requested random pages.
    pub(crate) pages: Mutex<Vec<u32>>,
    /// Issued queries.
    pub(crate) queries: Mutex<Vec<String>>,
    /// Issued mutations, as `like <ID>` or `unlike <ID>`.
    pub(crate) mutations: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), NetworkError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(NetworkError::Transport("offline".to_owned()));
        }
        Ok(())
    }
}

impl PhotoApi for FakeApi {
    fn random_photos(&self, page: u32) -> Result<PhotoPage, NetworkError> {
        self.pages.lock().expect("pages lock").push(page);
        self.check_online()?;

        Ok(self::page(Some(page), &ids(&format!("p{page}"), 10)))
    }

    fn search_photos(&self, query: &str) -> Result<PhotoPage, NetworkError> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_owned());
        self.check_online()?;

        Ok(self::page(None, &ids(query, 10)))
    }

    fn liked_photos(&self) -> Result<Vec<Photo>, NetworkError> {
        self.check_online()?;

        Ok(self.liked.lock().expect("liked lock").clone())
    }

    fn like_photo(&self, id: &PhotoId) {
        // Whatever happens server-side, nothing is reported back.
        self.mutations
            .lock()
            .expect("mutations lock")
            .push(format!("like {id}"));
    }

    fn unlike_photo(&self, id: &PhotoId) {
        self.mutations
            .lock()
            .expect("mutations lock")
            .push(format!("unlike {id}"));
    }
}

// }}}
