/// Shared data structures for the application state
///
/// These structs mirror the JSONPlaceholder collections and flow between
/// the API layer, the data store, and the UI layer. The API uses camelCase
/// field names (`userId`, `albumId`, ...), mapped to snake_case via serde.

use serde::{Deserialize, Serialize};

/// A registered user of the demo API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique id within the users collection
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub company: Company,
}

/// The company block nested inside a user record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A post authored by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// An album owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

/// A photo inside an album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    #[serde(rename = "albumId")]
    pub album_id: u64,
    pub title: String,
    pub url: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_from_api_shape() {
        // Extra fields like address/phone are present on the wire and ignored
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn test_photo_camel_case_fields() {
        let json = r#"{
            "albumId": 1,
            "id": 2,
            "title": "reprehenderit est deserunt velit ipsam",
            "url": "https://via.placeholder.com/600/771796",
            "thumbnailUrl": "https://via.placeholder.com/150/771796"
        }"#;

        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/771796");
    }

    #[test]
    fn test_post_round_trips_through_json() {
        let post = Post {
            id: 7,
            user_id: 2,
            title: "hello".to_string(),
            body: "world".to_string(),
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"userId\":2"));

        let restored: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, restored);
    }
}
