/// Screen views
///
/// One module per screen, each a plain function from the application
/// state to an iced element. All filtering and navigation decisions live
/// in the state module; these functions only lay widgets out.

use iced::widget::{button, column, container, image, row, text, text_input, TextInput};
use iced::{Alignment, Element, Length};

use crate::state::data::Photo;
use crate::{Message, PlaceView, Tab};

pub mod albums;
pub mod home;
pub mod lightbox;
pub mod login;
pub mod photos;
pub mod posts;
pub mod profile;
pub mod users;

/// Side length of a thumbnail cell in the photo grids
const THUMBNAIL_SIZE: u16 = 150;

/// The tab row shown on every screen behind the login gate
pub fn tab_bar<'a>(active: Tab) -> Element<'a, Message> {
    let mut bar = row![].spacing(5).padding(10);

    for tab in Tab::ALL {
        let label = text(tab.label()).size(16);
        let entry = if tab == active {
            // The active tab is not clickable
            button(label)
        } else {
            button(label).on_press(Message::TabSelected(tab))
        };
        bar = bar.push(entry.padding(8));
    }

    container(bar).width(Length::Fill).center_x(Length::Fill).into()
}

/// A standard single-line search box
pub(crate) fn search_box<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> TextInput<'a, Message> {
    text_input(placeholder, value).on_input(on_input).padding(10)
}

/// Red line under a form when validation failed
pub(crate) fn form_error(error: Option<&str>) -> Element<'_, Message> {
    match error {
        Some(message) => text(message)
            .size(14)
            .color([0.9, 0.3, 0.3])
            .into(),
        None => text("").size(14).into(),
    }
}

/// A clickable photo cell: thumbnail (or placeholder while it downloads),
/// album name, and title
pub(crate) fn photo_card<'a>(app: &'a PlaceView, photo: &'a Photo) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match app.thumbnails.get(&photo.id) {
        Some(handle) => image(handle.clone())
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .into(),
        None => container(text("Loading..."))
            .center_x(THUMBNAIL_SIZE)
            .center_y(THUMBNAIL_SIZE)
            .into(),
    };

    let album_name = app
        .store
        .album_title(photo.album_id)
        .unwrap_or(app.labels.unknown_album.as_str());

    let card = column![
        thumbnail,
        text(format!("Album: {album_name}")).size(13),
        text(photo.title.as_str()).size(13),
    ]
    .spacing(5)
    .width(THUMBNAIL_SIZE + 20)
    .align_x(Alignment::Center);

    button(container(card).padding(10).style(container::rounded_box))
        .on_press(Message::PhotoOpened(photo.id))
        .padding(0)
        .style(button::text)
        .into()
}
