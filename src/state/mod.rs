/// State management module
///
/// This module handles all application state, including:
/// - The shared data store for the five API collections (store.rs)
/// - Shared data structures (data.rs)
/// - Pure list filtering for the search screens (filter.rs)
/// - Lightbox navigation over filtered photo sequences (carousel.rs)
/// - Login, logout, and the persisted session (session.rs)

pub mod carousel;
pub mod data;
pub mod filter;
pub mod session;
pub mod store;
