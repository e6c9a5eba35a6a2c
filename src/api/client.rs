/// Remote collection fetcher
///
/// One-shot GET requests against the JSONPlaceholder endpoints, decoding
/// each JSON array into typed records. The five collection fetches are
/// issued concurrently at startup with no ordering between them; a slow
/// users fetch and a fast photos fetch may land in either order.
///
/// There is no retry and no user-visible error: a failed fetch is logged
/// and the target collection keeps its previous (initially empty) value.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::data::Photo;

/// Base URL of the demo API
pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The photos collection is huge (5000 rows of placeholder images);
/// only the first entries are kept
pub const PHOTO_LIMIT: usize = 100;

/// The five collection endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Users,
    Posts,
    Comments,
    Albums,
    Photos,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Users => "/users",
            Endpoint::Posts => "/posts",
            Endpoint::Comments => "/comments",
            Endpoint::Albums => "/albums",
            Endpoint::Photos => "/photos",
        }
    }

    pub fn url(self) -> String {
        format!("{}{}", BASE_URL, self.path())
    }
}

/// Fetch failures, stringly-typed so results can ride inside (Clone)
/// application messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never produced a usable response (DNS, connection, HTTP status)
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON array
    #[error("decode error: {0}")]
    Decode(String),
}

/// Fetch one collection and decode it as a JSON array of `T`
pub async fn fetch_collection<T: DeserializeOwned>(
    client: reqwest::Client,
    endpoint: Endpoint,
) -> Result<Vec<T>, FetchError> {
    let url = endpoint.url();

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the photos collection, truncated to [`PHOTO_LIMIT`] entries
pub async fn fetch_photos(client: reqwest::Client) -> Result<Vec<Photo>, FetchError> {
    let photos = fetch_collection(client, Endpoint::Photos).await?;
    Ok(cap_photos(photos))
}

/// Keep only the first [`PHOTO_LIMIT`] photos, preserving order
fn cap_photos(mut photos: Vec<Photo>) -> Vec<Photo> {
    photos.truncate(PHOTO_LIMIT);
    photos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Comment, Post};

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoint::Users.url(),
            "https://jsonplaceholder.typicode.com/users"
        );
        assert_eq!(
            Endpoint::Photos.url(),
            "https://jsonplaceholder.typicode.com/photos"
        );
    }

    #[test]
    fn test_collection_decode_shape() {
        // The same decode path fetch_collection uses on the response body
        let body = r#"[
            {"userId": 1, "id": 1, "title": "t1", "body": "b1"},
            {"userId": 1, "id": 2, "title": "t2", "body": "b2"}
        ]"#;

        let posts: Vec<Post> = serde_json::from_str(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "t2");
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let body = r#"{"not": "an array"}"#;
        let result: Result<Vec<Comment>, _> = serde_json::from_str(body)
            .map_err(|e: serde_json::Error| FetchError::Decode(e.to_string()));
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_cap_photos_keeps_first_hundred_in_order() {
        let photos: Vec<Photo> = (1..=150)
            .map(|id| Photo {
                id,
                album_id: 1,
                title: format!("photo {id}"),
                url: format!("https://via.placeholder.com/600/{id}"),
                thumbnail_url: format!("https://via.placeholder.com/150/{id}"),
            })
            .collect();

        let capped = cap_photos(photos);
        assert_eq!(capped.len(), PHOTO_LIMIT);
        assert_eq!(capped[0].id, 1);
        assert_eq!(capped[99].id, 100);
    }

    #[test]
    fn test_cap_photos_leaves_short_collections_alone() {
        let photos = vec![Photo {
            id: 1,
            album_id: 1,
            title: "only".to_string(),
            url: String::new(),
            thumbnail_url: String::new(),
        }];

        assert_eq!(cap_photos(photos).len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_fetch_error() {
        // Point the client at a port nothing listens on
        let client = reqwest::Client::new();
        let result = client
            .get("http://127.0.0.1:9/users")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()));
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
