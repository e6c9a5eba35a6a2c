/// Albums screen
///
/// Without a selection: the album list, searchable by title and by owning
/// user's name. With a selection: that album's photos with a title search
/// and the shared lightbox.

use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{photo_card, search_box};
use crate::state::filter;
use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    match app.selected_album {
        Some(album_id) => album_detail(app, album_id),
        None => album_list(app),
    }
}

fn album_list(app: &PlaceView) -> Element<'_, Message> {
    let filtered = filter::filter_albums(
        app.store.albums(),
        app.store.user_names(),
        &app.album_title_search,
        &app.album_owner_search,
        &app.labels.unknown_user,
    );

    let mut list = Column::new().spacing(10);
    if filtered.is_empty() {
        list = list.push(text("No albums found.").size(16));
    }
    for album in filtered {
        let owner = app
            .store
            .user_name(album.user_id)
            .unwrap_or(app.labels.unknown_user.as_str());

        list = list.push(
            button(
                column![
                    text(album.title.as_str()).size(16),
                    text(format!("by {owner}")).size(13),
                ]
                .spacing(2),
            )
            .on_press(Message::AlbumSelected(album.id))
            .padding(12)
            .width(Length::Fill),
        );
    }

    column![
        text("Albums").size(24),
        search_box(
            "Search Albums...",
            &app.album_title_search,
            Message::AlbumTitleSearchChanged,
        ),
        search_box(
            "Search by user...",
            &app.album_owner_search,
            Message::AlbumOwnerSearchChanged,
        ),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(10)
    .padding(20)
    .into()
}

fn album_detail(app: &PlaceView, album_id: u64) -> Element<'_, Message> {
    let title = app
        .store
        .album_title(album_id)
        .unwrap_or(app.labels.unknown_album.as_str());

    let filtered =
        filter::filter_album_photos(app.store.photos(), album_id, &app.album_photo_search);

    let cells: Vec<Element<'_, Message>> = filtered
        .into_iter()
        .map(|photo| photo_card(app, photo))
        .collect();

    let grid: Element<'_, Message> = if cells.is_empty() {
        // Also the case while the truncated photo collection has no rows
        // for this album
        text("No photos in this album.").size(16).into()
    } else {
        Wrap::with_elements(cells)
            .spacing(10.0)
            .line_spacing(10.0)
            .into()
    };

    column![
        text(title).size(24),
        button("Back to Albums")
            .on_press(Message::BackToAlbums)
            .padding(8),
        search_box(
            "Search Photos...",
            &app.album_photo_search,
            Message::AlbumPhotoSearchChanged,
        ),
        container(scrollable(grid).height(Length::Fill)).width(Length::Fill),
    ]
    .spacing(10)
    .padding(20)
    .into()
}
