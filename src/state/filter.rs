/// List filter engines
///
/// Pure derivations of a filtered view from a collection snapshot plus the
/// current search text. Each screen's filtering used to live inline in its
/// render path; here it is one function per screen, recomputed on every
/// input change and testable without any UI harness.
///
/// Matching policy is uniform: case-insensitive substring, where the empty
/// search text matches everything. Foreign-key joins go through the store's
/// lookup maps and fall back to a configurable label when the referenced
/// record is missing or not yet fetched.

use std::collections::HashMap;

use super::data::{Album, Photo, User};

/// Labels shown when a foreign key does not resolve.
///
/// The albums collection loading after the photos collection is the common
/// case; every photo then resolves to `unknown_album` until it lands.
#[derive(Debug, Clone)]
pub struct FallbackLabels {
    pub unknown_album: String,
    pub unknown_user: String,
}

impl Default for FallbackLabels {
    fn default() -> Self {
        Self {
            unknown_album: "Unknown Album".to_string(),
            unknown_user: "Unknown User".to_string(),
        }
    }
}

/// Case-insensitive substring match; an empty needle matches everything
pub fn matches(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Users screen: match against name OR email OR company name
pub fn filter_users<'a>(users: &'a [User], search: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| {
            matches(&user.name, search)
                || matches(&user.email, search)
                || matches(&user.company.name, search)
        })
        .collect()
}

/// Photos screen: title search AND album-name search, combined
///
/// The album name is resolved through the album-title lookup map and falls
/// back to `unknown_album` when the join misses, so an album search against
/// the fallback text still behaves sensibly before albums have loaded.
pub fn filter_photos<'a>(
    photos: &'a [Photo],
    album_titles: &HashMap<u64, String>,
    title_search: &str,
    album_search: &str,
    unknown_album: &str,
) -> Vec<&'a Photo> {
    photos
        .iter()
        .filter(|photo| {
            let album_name = album_titles
                .get(&photo.album_id)
                .map(String::as_str)
                .unwrap_or(unknown_album);

            matches(&photo.title, title_search) && matches(album_name, album_search)
        })
        .collect()
}

/// Albums screen: title search AND (when non-empty) owning user's name
pub fn filter_albums<'a>(
    albums: &'a [Album],
    user_names: &HashMap<u64, String>,
    title_search: &str,
    owner_search: &str,
    unknown_user: &str,
) -> Vec<&'a Album> {
    albums
        .iter()
        .filter(|album| {
            if !matches(&album.title, title_search) {
                return false;
            }
            if owner_search.is_empty() {
                return true;
            }
            let owner = user_names
                .get(&album.user_id)
                .map(String::as_str)
                .unwrap_or(unknown_user);
            matches(owner, owner_search)
        })
        .collect()
}

/// Photos belonging to one album, in collection order
pub fn photos_in_album(photos: &[Photo], album_id: u64) -> Vec<&Photo> {
    photos.iter().filter(|p| p.album_id == album_id).collect()
}

/// Album detail screen: the album's photos narrowed by a title search
pub fn filter_album_photos<'a>(
    photos: &'a [Photo],
    album_id: u64,
    title_search: &str,
) -> Vec<&'a Photo> {
    photos_in_album(photos, album_id)
        .into_iter()
        .filter(|p| matches(&p.title, title_search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Company;

    fn user(id: u64, name: &str, email: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: String::new(),
            email: email.to_string(),
            company: Company {
                name: company.to_string(),
            },
        }
    }

    fn photo(id: u64, album_id: u64, title: &str) -> Photo {
        Photo {
            id,
            album_id,
            title: title.to_string(),
            url: format!("https://via.placeholder.com/600/{id}"),
            thumbnail_url: format!("https://via.placeholder.com/150/{id}"),
        }
    }

    fn album(id: u64, user_id: u64, title: &str) -> Album {
        Album {
            id,
            user_id,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(matches("Romaguera-Crona", "crona"));
        assert!(matches("Romaguera-Crona", "ROMA"));
        assert!(!matches("Romaguera-Crona", "deckow"));
        // Empty search matches everything
        assert!(matches("anything", ""));
    }

    #[test]
    fn test_filter_users_matches_any_of_the_three_fields() {
        let users = vec![
            user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
        ];

        assert_eq!(filter_users(&users, "leanne").len(), 1);
        assert_eq!(filter_users(&users, "melissa")[0].id, 2);
        assert_eq!(filter_users(&users, "crist")[0].id, 2);
        assert_eq!(filter_users(&users, "nobody").len(), 0);
    }

    #[test]
    fn test_filter_users_company_search_is_exact_subset() {
        let users: Vec<User> = (1..=6)
            .map(|i| {
                user(
                    i,
                    &format!("User {i}"),
                    &format!("u{i}@example.com"),
                    &format!("Company {i}"),
                )
            })
            .collect();

        let found = filter_users(&users, "company 2");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].company.name, "Company 2");
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let users = vec![
            user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
            user(3, "Clementine Bauch", "Nathan@yesenia.net", "Romaguera-Jacobson"),
        ];

        let once = filter_users(&users, "romaguera");
        assert!(once.iter().all(|f| users.iter().any(|u| u.id == f.id)));

        let owned: Vec<User> = once.iter().map(|u| (*u).clone()).collect();
        let twice = filter_users(&owned, "romaguera");
        let once_ids: Vec<u64> = once.iter().map(|u| u.id).collect();
        let twice_ids: Vec<u64> = twice.iter().map(|u| u.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_filter_photos_title_only_ignores_album() {
        let photos = vec![
            photo(1, 1, "foo bar"),
            photo(2, 2, "other foo"),
            photo(3, 3, "baz"),
        ];
        let titles: HashMap<u64, String> =
            [(1, "Nature".to_string()), (2, "City".to_string())].into();

        let found = filter_photos(&photos, &titles, "foo", "", "Unknown Album");
        let ids: Vec<u64> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_photos_combines_title_and_album_with_and() {
        let photos = vec![photo(1, 1, "foo"), photo(2, 2, "foo")];
        let titles: HashMap<u64, String> =
            [(1, "Nature".to_string()), (2, "City".to_string())].into();

        let found = filter_photos(&photos, &titles, "foo", "city", "Unknown Album");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_filter_photos_falls_back_when_albums_not_loaded() {
        let photos = vec![photo(1, 42, "foo")];
        let titles = HashMap::new();

        // Searching within the fallback label still works
        let found = filter_photos(&photos, &titles, "", "unknown", "Unknown Album");
        assert_eq!(found.len(), 1);

        let none = filter_photos(&photos, &titles, "", "nature", "Unknown Album");
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_albums_title_and_owner() {
        let albums = vec![
            album(1, 1, "quidem molestiae"),
            album(2, 2, "sunt qui quidem"),
        ];
        let names: HashMap<u64, String> =
            [(1, "Leanne Graham".to_string()), (2, "Ervin Howell".to_string())].into();

        // Title only
        assert_eq!(
            filter_albums(&albums, &names, "quidem", "", "Unknown User").len(),
            2
        );
        // Title AND owner
        let found = filter_albums(&albums, &names, "quidem", "ervin", "Unknown User");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_filter_albums_unresolved_owner_uses_fallback() {
        let albums = vec![album(1, 99, "lonely album")];
        let names = HashMap::new();

        let found = filter_albums(&albums, &names, "", "unknown user", "Unknown User");
        assert_eq!(found.len(), 1);
        assert!(filter_albums(&albums, &names, "", "leanne", "Unknown User").is_empty());
    }

    #[test]
    fn test_photos_in_album_scoping() {
        let photos = vec![photo(1, 1, "a"), photo(2, 2, "b"), photo(3, 1, "c")];

        let scoped = photos_in_album(&photos, 1);
        let ids: Vec<u64> = scoped.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_album_photos_by_title() {
        let photos = vec![photo(1, 1, "sunset"), photo(2, 1, "sunrise"), photo(3, 2, "sunset")];

        let found = filter_album_photos(&photos, 1, "sunset");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
