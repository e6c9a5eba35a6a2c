/// The shared data store: single source of truth for the five API
/// collections and the current session.
///
/// Screens never hold private copies of server data, only search strings
/// and carousel positions. All mutation goes through the replace_* entry
/// points, which swap a whole collection at once, so readers always see
/// either the pre-fetch empty state or a fully-replaced later one.
///
/// Name lookups for foreign keys (post author, photo album owner) are
/// served from HashMaps rebuilt on each replacement instead of a linear
/// scan per row.

use std::collections::HashMap;
use thiserror::Error;

use super::data::{Album, Comment, Photo, Post, User};

/// Validation errors for local post/comment creation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required text field was empty (after trimming)
    #[error("{0} is required!")]
    EmptyField(&'static str),
}

/// In-memory store for the five collections plus the current user.
///
/// Constructed once at startup and passed by reference to every consumer;
/// there is no ambient global.
#[derive(Debug, Default)]
pub struct DataStore {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    albums: Vec<Album>,
    photos: Vec<Photo>,
    current_user: Option<User>,

    /// user id -> user name, rebuilt whenever users are replaced
    user_names: HashMap<u64, String>,
    /// album id -> album title, rebuilt whenever albums are replaced
    album_titles: HashMap<u64, String>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Reads ==========

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Name of the user with the given id, if that user has been fetched
    pub fn user_name(&self, user_id: u64) -> Option<&str> {
        self.user_names.get(&user_id).map(String::as_str)
    }

    /// Title of the album with the given id, if that album has been fetched
    pub fn album_title(&self, album_id: u64) -> Option<&str> {
        self.album_titles.get(&album_id).map(String::as_str)
    }

    pub fn user_names(&self) -> &HashMap<u64, String> {
        &self.user_names
    }

    pub fn album_titles(&self) -> &HashMap<u64, String> {
        &self.album_titles
    }

    /// The most recently fetched post (the Home screen shows this one)
    pub fn latest_post(&self) -> Option<&Post> {
        self.posts.last()
    }

    /// All posts authored by the given user, in collection order
    pub fn posts_by_user(&self, user_id: u64) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.user_id == user_id).collect()
    }

    /// All comments attached to the given post, in collection order
    pub fn comments_for_post(&self, post_id: u64) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .collect()
    }

    // ========== Whole-collection replacement ==========

    pub fn replace_users(&mut self, users: Vec<User>) {
        self.user_names = users.iter().map(|u| (u.id, u.name.clone())).collect();
        self.users = users;
    }

    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    pub fn replace_albums(&mut self, albums: Vec<Album>) {
        self.album_titles = albums.iter().map(|a| (a.id, a.title.clone())).collect();
        self.albums = albums;
    }

    pub fn replace_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
    }

    // ========== Session ==========

    pub fn set_current_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    /// Email recorded on locally created comments: the current user's, or
    /// empty when no one is logged in
    pub fn comment_author_email(&self) -> String {
        self.current_user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    }

    // ========== Local mutation ==========

    /// Create a post locally, inserted at the front of the collection.
    ///
    /// The new id is max existing id + 1, or 1 when the collection is
    /// empty. Returns the assigned id.
    pub fn add_post(&mut self, title: &str, body: &str, user_id: u64) -> Result<u64, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyField("Title"));
        }
        if body.trim().is_empty() {
            return Err(StoreError::EmptyField("Body"));
        }

        let id = next_id(self.posts.iter().map(|p| p.id));
        let post = Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        };

        let mut next = Vec::with_capacity(self.posts.len() + 1);
        next.push(post);
        next.extend(self.posts.iter().cloned());
        self.replace_posts(next);

        Ok(id)
    }

    pub fn delete_post(&mut self, post_id: u64) {
        let next = self
            .posts
            .iter()
            .filter(|p| p.id != post_id)
            .cloned()
            .collect();
        self.replace_posts(next);
    }

    /// Create a comment locally, inserted at the front of the collection.
    pub fn add_comment(
        &mut self,
        post_id: u64,
        name: &str,
        body: &str,
        email: &str,
    ) -> Result<u64, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("Name"));
        }
        if body.trim().is_empty() {
            return Err(StoreError::EmptyField("Body"));
        }

        let id = next_id(self.comments.iter().map(|c| c.id));
        let comment = Comment {
            id,
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        };

        let mut next = Vec::with_capacity(self.comments.len() + 1);
        next.push(comment);
        next.extend(self.comments.iter().cloned());
        self.replace_comments(next);

        Ok(id)
    }

    pub fn delete_comment(&mut self, comment_id: u64) {
        let next = self
            .comments
            .iter()
            .filter(|c| c.id != comment_id)
            .cloned()
            .collect();
        self.replace_comments(next);
    }
}

/// Next local id for a collection: max + 1, or 1 when empty
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Company;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_string(),
            body: "x".to_string(),
        }
    }

    #[test]
    fn test_next_id_on_empty_collection_is_one() {
        // The original assigned NaN + 1 here; that bug is fixed
        let mut store = DataStore::new();
        let id = store.add_post("C", "x", 1).unwrap();
        assert_eq!(id, 1);
        assert_eq!(store.posts()[0].id, 1);
    }

    #[test]
    fn test_add_post_assigns_max_plus_one_and_inserts_at_front() {
        let mut store = DataStore::new();
        store.replace_posts(vec![post(1, "A"), post(3, "B")]);

        let id = store.add_post("C", "x", 1).unwrap();
        assert_eq!(id, 4);
        assert_eq!(store.posts()[0].title, "C");
        assert_eq!(store.posts().len(), 3);
    }

    #[test]
    fn test_add_post_rejects_empty_fields() {
        let mut store = DataStore::new();
        assert_eq!(
            store.add_post("  ", "body", 1),
            Err(StoreError::EmptyField("Title"))
        );
        assert_eq!(
            store.add_post("title", "", 1),
            Err(StoreError::EmptyField("Body"))
        );
        // Nothing was inserted
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_delete_post_removes_only_that_post() {
        let mut store = DataStore::new();
        store.replace_posts(vec![post(1, "A"), post(2, "B"), post(3, "C")]);

        store.delete_post(2);

        let ids: Vec<u64> = store.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_add_and_delete_comment() {
        let mut store = DataStore::new();
        let id = store
            .add_comment(5, "first", "hello", "me@example.com")
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(store.comments_for_post(5).len(), 1);

        store.delete_comment(id);
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_comment_validation_matches_post_validation() {
        let mut store = DataStore::new();
        assert_eq!(
            store.add_comment(1, "", "body", "a@b.c"),
            Err(StoreError::EmptyField("Name"))
        );
        assert_eq!(
            store.add_comment(1, "name", "   ", "a@b.c"),
            Err(StoreError::EmptyField("Body"))
        );
    }

    #[test]
    fn test_comment_author_email_follows_the_session() {
        let mut store = DataStore::new();

        // Logged out: empty, never a display label
        assert_eq!(store.comment_author_email(), "");

        store.set_current_user(Some(User {
            id: 1,
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            company: Company::default(),
        }));
        assert_eq!(store.comment_author_email(), "ada@example.com");
    }

    #[test]
    fn test_replace_users_rebuilds_name_lookup() {
        let mut store = DataStore::new();
        store.replace_users(vec![User {
            id: 9,
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            company: Company {
                name: "Analytical".to_string(),
            },
        }]);

        assert_eq!(store.user_name(9), Some("Ada"));
        assert_eq!(store.user_name(1), None);

        store.replace_users(Vec::new());
        assert_eq!(store.user_name(9), None);
    }

    #[test]
    fn test_replace_albums_rebuilds_title_lookup() {
        let mut store = DataStore::new();
        store.replace_albums(vec![Album {
            id: 3,
            user_id: 1,
            title: "quidem".to_string(),
        }]);

        assert_eq!(store.album_title(3), Some("quidem"));
        assert_eq!(store.album_title(4), None);
    }

    #[test]
    fn test_latest_post_is_last_element() {
        let mut store = DataStore::new();
        assert!(store.latest_post().is_none());

        store.replace_posts(vec![post(1, "A"), post(2, "B")]);
        assert_eq!(store.latest_post().unwrap().title, "B");
    }

    #[test]
    fn test_posts_by_user_filters_on_author() {
        let mut store = DataStore::new();
        let mut p = post(1, "mine");
        p.user_id = 7;
        store.replace_posts(vec![p, post(2, "theirs")]);

        let mine = store.posts_by_user(7);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }
}
