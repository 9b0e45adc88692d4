//! Raw payloads, as returned by the photo API.

pub mod photo;
