/// Photos screen: two independent search boxes (title, album name) over a
/// thumbnail grid; clicking a cell opens the lightbox

use iced::widget::{column, scrollable, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{photo_card, search_box};
use crate::state::filter;
use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let filtered = filter::filter_photos(
        app.store.photos(),
        app.store.album_titles(),
        &app.photo_title_search,
        &app.photo_album_search,
        &app.labels.unknown_album,
    );

    let cells: Vec<Element<'_, Message>> = filtered
        .into_iter()
        .map(|photo| photo_card(app, photo))
        .collect();

    let grid: Element<'_, Message> = if cells.is_empty() {
        text("No photos found.").size(16).into()
    } else {
        Wrap::with_elements(cells)
            .spacing(10.0)
            .line_spacing(10.0)
            .into()
    };

    column![
        search_box(
            "Search by title...",
            &app.photo_title_search,
            Message::PhotoTitleSearchChanged,
        ),
        search_box(
            "Search by album name...",
            &app.photo_album_search,
            Message::PhotoAlbumSearchChanged,
        ),
        scrollable(grid).height(Length::Fill),
    ]
    .spacing(10)
    .padding(20)
    .into()
}
