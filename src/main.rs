use iced::widget::image;
use iced::{Element, Task, Theme};
use std::collections::HashMap;

mod api;
mod state;
mod ui;

use api::{Endpoint, FetchError};
use state::carousel::Carousel;
use state::data::{Album, Comment, Photo, Post, User};
use state::filter::{self, FallbackLabels};
use state::session::{self, SessionStore};
use state::store::DataStore;

/// Which surface is showing: the login gate or the main tab row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Tabs,
}

/// The browsing tabs behind the login gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Users,
    Posts,
    Photos,
    Albums,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Users,
        Tab::Posts,
        Tab::Photos,
        Tab::Albums,
        Tab::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Users => "Users",
            Tab::Posts => "Posts",
            Tab::Photos => "Photos",
            Tab::Albums => "Albums",
            Tab::Profile => "Profile",
        }
    }
}

/// Main application state
pub struct PlaceView {
    /// Shared store for the five collections and the current user
    pub(crate) store: DataStore,
    /// Durable session persistence
    pub(crate) session_store: SessionStore,
    /// Labels for unresolved foreign keys
    pub(crate) labels: FallbackLabels,
    /// Shared HTTP client for all fetches
    pub(crate) http: reqwest::Client,

    pub(crate) screen: Screen,
    pub(crate) active_tab: Tab,
    /// Status line shown on the Home screen
    pub(crate) status: String,

    // Login form
    pub(crate) login_email: String,
    pub(crate) login_password: String,
    pub(crate) login_error: Option<String>,

    // Users screen
    pub(crate) users_search: String,

    // Posts screen
    pub(crate) new_post_title: String,
    pub(crate) new_post_body: String,
    pub(crate) post_error: Option<String>,
    /// Post whose comments section is expanded, if any
    pub(crate) open_comments: Option<u64>,
    pub(crate) new_comment_name: String,
    pub(crate) new_comment_body: String,
    pub(crate) comment_error: Option<String>,

    // Photos screen
    pub(crate) photo_title_search: String,
    pub(crate) photo_album_search: String,

    // Albums screen
    pub(crate) album_title_search: String,
    pub(crate) album_owner_search: String,
    pub(crate) selected_album: Option<u64>,
    pub(crate) album_photo_search: String,

    // Lightbox
    pub(crate) carousel: Carousel,
    /// Thumbnail handles cached by photo id
    pub(crate) thumbnails: HashMap<u64, image::Handle>,
    /// Full-size handles cached by photo id
    pub(crate) full_photos: HashMap<u64, image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    // Collection fetches completing, in any order
    UsersFetched(Result<Vec<User>, FetchError>),
    PostsFetched(Result<Vec<Post>, FetchError>),
    CommentsFetched(Result<Vec<Comment>, FetchError>),
    AlbumsFetched(Result<Vec<Album>, FetchError>),
    PhotosFetched(Result<Vec<Photo>, FetchError>),
    ThumbnailFetched(u64, Result<image::Handle, FetchError>),
    FullPhotoFetched(u64, Result<image::Handle, FetchError>),

    TabSelected(Tab),

    // Login / logout
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginSubmitted,
    LogoutPressed,

    // Users screen
    UserSearchChanged(String),

    // Posts screen
    PostTitleChanged(String),
    PostBodyChanged(String),
    AddPostPressed,
    DeletePostPressed(u64),
    ToggleComments(u64),
    CommentNameChanged(String),
    CommentBodyChanged(String),
    AddCommentPressed(u64),
    DeleteCommentPressed(u64),

    // Photos screen
    PhotoTitleSearchChanged(String),
    PhotoAlbumSearchChanged(String),

    // Albums screen
    AlbumTitleSearchChanged(String),
    AlbumOwnerSearchChanged(String),
    AlbumSelected(u64),
    BackToAlbums,
    AlbumPhotoSearchChanged(String),

    // Lightbox
    PhotoOpened(u64),
    CarouselClosed,
    CarouselPrevious,
    CarouselNext,
}

impl PlaceView {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot persist sessions
        // without its database
        let session_store = SessionStore::new()
            .expect("Failed to initialize session database. Check permissions and disk space.");

        let mut store = DataStore::new();

        // Hydrate the session before the first render; any failure was
        // already logged and leaves us unauthenticated
        let screen = match session_store.load_user() {
            Some(user) => {
                println!("👤 Restored session for {}", user.email);
                store.set_current_user(Some(user));
                Screen::Tabs
            }
            None => Screen::Login,
        };

        let http = reqwest::Client::new();

        // Kick off all five collection fetches concurrently; they resolve
        // in any order and failures leave the collection empty
        let fetches = Task::batch([
            Task::perform(
                api::fetch_collection::<User>(http.clone(), Endpoint::Users),
                Message::UsersFetched,
            ),
            Task::perform(
                api::fetch_collection::<Post>(http.clone(), Endpoint::Posts),
                Message::PostsFetched,
            ),
            Task::perform(
                api::fetch_collection::<Comment>(http.clone(), Endpoint::Comments),
                Message::CommentsFetched,
            ),
            Task::perform(
                api::fetch_collection::<Album>(http.clone(), Endpoint::Albums),
                Message::AlbumsFetched,
            ),
            Task::perform(api::fetch_photos(http.clone()), Message::PhotosFetched),
        ]);

        (
            PlaceView {
                store,
                session_store,
                labels: FallbackLabels::default(),
                http,
                screen,
                active_tab: Tab::Home,
                status: "Loading data...".to_string(),
                login_email: String::new(),
                login_password: String::new(),
                login_error: None,
                users_search: String::new(),
                new_post_title: String::new(),
                new_post_body: String::new(),
                post_error: None,
                open_comments: None,
                new_comment_name: String::new(),
                new_comment_body: String::new(),
                comment_error: None,
                photo_title_search: String::new(),
                photo_album_search: String::new(),
                album_title_search: String::new(),
                album_owner_search: String::new(),
                selected_album: None,
                album_photo_search: String::new(),
                carousel: Carousel::new(),
                thumbnails: HashMap::new(),
                full_photos: HashMap::new(),
            },
            fetches,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UsersFetched(Ok(users)) => {
                println!("👥 Loaded {} users", users.len());
                self.store.replace_users(users);
                self.refresh_status();
                Task::none()
            }
            Message::UsersFetched(Err(e)) => {
                eprintln!("❌ Error fetching users: {e}");
                Task::none()
            }
            Message::PostsFetched(Ok(posts)) => {
                println!("📝 Loaded {} posts", posts.len());
                self.store.replace_posts(posts);
                self.refresh_status();
                Task::none()
            }
            Message::PostsFetched(Err(e)) => {
                eprintln!("❌ Error fetching posts: {e}");
                Task::none()
            }
            Message::CommentsFetched(Ok(comments)) => {
                println!("💬 Loaded {} comments", comments.len());
                self.store.replace_comments(comments);
                Task::none()
            }
            Message::CommentsFetched(Err(e)) => {
                eprintln!("❌ Error fetching comments: {e}");
                Task::none()
            }
            Message::AlbumsFetched(Ok(albums)) => {
                println!("📚 Loaded {} albums", albums.len());
                self.store.replace_albums(albums);
                Task::none()
            }
            Message::AlbumsFetched(Err(e)) => {
                eprintln!("❌ Error fetching albums: {e}");
                Task::none()
            }
            Message::PhotosFetched(Ok(photos)) => {
                println!("📷 Loaded {} photos", photos.len());

                // Queue a thumbnail download per photo; each lands in the
                // cache independently as it completes
                let downloads = Task::batch(photos.iter().map(|photo| {
                    Task::perform(
                        api::fetch_image(self.http.clone(), photo.id, photo.thumbnail_url.clone()),
                        |(id, result)| Message::ThumbnailFetched(id, result),
                    )
                }));

                self.store.replace_photos(photos);
                downloads
            }
            Message::PhotosFetched(Err(e)) => {
                eprintln!("❌ Error fetching photos: {e}");
                Task::none()
            }
            Message::ThumbnailFetched(id, Ok(handle)) => {
                self.thumbnails.insert(id, handle);
                Task::none()
            }
            Message::ThumbnailFetched(id, Err(e)) => {
                eprintln!("⚠️  Thumbnail {id} failed: {e}");
                Task::none()
            }
            Message::FullPhotoFetched(id, Ok(handle)) => {
                self.full_photos.insert(id, handle);
                Task::none()
            }
            Message::FullPhotoFetched(id, Err(e)) => {
                eprintln!("⚠️  Photo {id} failed: {e}");
                Task::none()
            }

            Message::TabSelected(tab) => {
                self.active_tab = tab;
                self.carousel.close();
                Task::none()
            }

            Message::LoginEmailChanged(email) => {
                self.login_email = email;
                Task::none()
            }
            Message::LoginPasswordChanged(password) => {
                self.login_password = password;
                Task::none()
            }
            Message::LoginSubmitted => {
                let user = match session::authenticate(
                    self.store.users(),
                    &self.login_email,
                    &self.login_password,
                ) {
                    Ok(user) => user.clone(),
                    Err(e) => {
                        self.login_error = Some(e.to_string());
                        return Task::none();
                    }
                };

                if let Err(e) = self.session_store.save_user(&user) {
                    // The in-memory session still works for this run
                    eprintln!("⚠️  Failed to persist session: {e}");
                }

                println!("👤 Logged in as {}", user.email);
                self.store.set_current_user(Some(user));
                self.login_email.clear();
                self.login_password.clear();
                self.login_error = None;
                self.screen = Screen::Tabs;
                self.active_tab = Tab::Home;
                Task::none()
            }
            Message::LogoutPressed => {
                if let Err(e) = self.session_store.clear_user() {
                    eprintln!("⚠️  Failed to clear persisted session: {e}");
                }
                self.store.set_current_user(None);
                self.screen = Screen::Login;
                Task::none()
            }

            Message::UserSearchChanged(search) => {
                self.users_search = search;
                Task::none()
            }

            Message::PostTitleChanged(title) => {
                self.new_post_title = title;
                Task::none()
            }
            Message::PostBodyChanged(body) => {
                self.new_post_body = body;
                Task::none()
            }
            Message::AddPostPressed => {
                let title = self.new_post_title.clone();
                let body = self.new_post_body.clone();
                let user_id = self.store.current_user().map(|u| u.id).unwrap_or(0);

                match self.store.add_post(&title, &body, user_id) {
                    Ok(_) => {
                        self.new_post_title.clear();
                        self.new_post_body.clear();
                        self.post_error = None;
                    }
                    Err(e) => self.post_error = Some(e.to_string()),
                }
                Task::none()
            }
            Message::DeletePostPressed(post_id) => {
                self.store.delete_post(post_id);
                if self.open_comments == Some(post_id) {
                    self.open_comments = None;
                }
                Task::none()
            }
            Message::ToggleComments(post_id) => {
                self.open_comments = if self.open_comments == Some(post_id) {
                    None
                } else {
                    Some(post_id)
                };
                self.new_comment_name.clear();
                self.new_comment_body.clear();
                self.comment_error = None;
                Task::none()
            }
            Message::CommentNameChanged(name) => {
                self.new_comment_name = name;
                Task::none()
            }
            Message::CommentBodyChanged(body) => {
                self.new_comment_body = body;
                Task::none()
            }
            Message::AddCommentPressed(post_id) => {
                let name = self.new_comment_name.clone();
                let body = self.new_comment_body.clone();
                let email = self.store.comment_author_email();

                match self.store.add_comment(post_id, &name, &body, &email) {
                    Ok(_) => {
                        self.new_comment_name.clear();
                        self.new_comment_body.clear();
                        self.comment_error = None;
                    }
                    Err(e) => self.comment_error = Some(e.to_string()),
                }
                Task::none()
            }
            Message::DeleteCommentPressed(comment_id) => {
                self.store.delete_comment(comment_id);
                Task::none()
            }

            Message::PhotoTitleSearchChanged(search) => {
                self.photo_title_search = search;
                Task::none()
            }
            Message::PhotoAlbumSearchChanged(search) => {
                self.photo_album_search = search;
                Task::none()
            }

            Message::AlbumTitleSearchChanged(search) => {
                self.album_title_search = search;
                Task::none()
            }
            Message::AlbumOwnerSearchChanged(search) => {
                self.album_owner_search = search;
                Task::none()
            }
            Message::AlbumSelected(album_id) => {
                self.selected_album = Some(album_id);
                self.album_photo_search.clear();
                self.carousel.close();
                Task::none()
            }
            Message::BackToAlbums => {
                self.selected_album = None;
                self.carousel.close();
                Task::none()
            }
            Message::AlbumPhotoSearchChanged(search) => {
                self.album_photo_search = search;
                Task::none()
            }

            Message::PhotoOpened(photo_id) => {
                self.carousel.open(photo_id);
                self.load_open_photo()
            }
            Message::CarouselClosed => {
                self.carousel.close();
                Task::none()
            }
            Message::CarouselPrevious => {
                let visible = self.visible_photo_ids();
                self.carousel.previous(&visible);
                self.load_open_photo()
            }
            Message::CarouselNext => {
                let visible = self.visible_photo_ids();
                self.carousel.next(&visible);
                self.load_open_photo()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.screen {
            Screen::Login => ui::login::view(self),
            Screen::Tabs => {
                // The lightbox replaces the whole surface while open
                if self.carousel.is_open() {
                    return ui::lightbox::view(self);
                }

                let content = match self.active_tab {
                    Tab::Home => ui::home::view(self),
                    Tab::Users => ui::users::view(self),
                    Tab::Posts => ui::posts::view(self),
                    Tab::Photos => ui::photos::view(self),
                    Tab::Albums => ui::albums::view(self),
                    Tab::Profile => ui::profile::view(self),
                };

                iced::widget::column![ui::tab_bar(self.active_tab), content].into()
            }
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Ids of the photos the open lightbox can step through, in display
    /// order: the filtered photo grid, or the filtered album detail view
    pub(crate) fn visible_photo_ids(&self) -> Vec<u64> {
        match self.active_tab {
            Tab::Photos => filter::filter_photos(
                self.store.photos(),
                self.store.album_titles(),
                &self.photo_title_search,
                &self.photo_album_search,
                &self.labels.unknown_album,
            )
            .iter()
            .map(|p| p.id)
            .collect(),
            Tab::Albums => match self.selected_album {
                Some(album_id) => filter::filter_album_photos(
                    self.store.photos(),
                    album_id,
                    &self.album_photo_search,
                )
                .iter()
                .map(|p| p.id)
                .collect(),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Look up a photo record by id
    pub(crate) fn photo_by_id(&self, photo_id: u64) -> Option<&Photo> {
        self.store.photos().iter().find(|p| p.id == photo_id)
    }

    /// Fetch the full-size image for the photo the lightbox is showing,
    /// unless it is already cached
    fn load_open_photo(&mut self) -> Task<Message> {
        let Some(photo_id) = self.carousel.current_id() else {
            return Task::none();
        };
        if self.full_photos.contains_key(&photo_id) {
            return Task::none();
        }
        let Some(photo) = self.photo_by_id(photo_id) else {
            return Task::none();
        };

        Task::perform(
            api::fetch_image(self.http.clone(), photo_id, photo.url.clone()),
            |(id, result)| Message::FullPhotoFetched(id, result),
        )
    }

    fn refresh_status(&mut self) {
        self.status = format!(
            "{} users, {} posts loaded.",
            self.store.users().len(),
            self.store.posts().len()
        );
    }
}

fn main() -> iced::Result {
    iced::application("Placeview", PlaceView::update, PlaceView::view)
        .theme(PlaceView::theme)
        .centered()
        .run_with(PlaceView::new)
}
