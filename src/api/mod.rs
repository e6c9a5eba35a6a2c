/// Remote API module
///
/// This module talks to the JSONPlaceholder demo API:
/// - Typed collection fetches (client.rs)
/// - Photo/thumbnail byte downloads (images.rs)

pub mod client;
pub mod images;

pub use client::{fetch_collection, fetch_photos, Endpoint, FetchError};
pub use images::fetch_image;
