/// Full-screen photo lightbox with previous / next / close controls
///
/// Shown over the photos and album-detail screens. Navigation is handled
/// by the carousel in the state module; this view only renders whatever
/// photo is currently open. While the full-size image downloads, the
/// cached thumbnail (if any) stands in.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::{Message, PlaceView};

/// Rendered size of the full photo
const PHOTO_SIZE: u16 = 600;

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let Some(photo_id) = app.carousel.current_id() else {
        // The caller only renders the lightbox while it is open
        return text("").into();
    };

    let picture: Element<'_, Message> = match app
        .full_photos
        .get(&photo_id)
        .or_else(|| app.thumbnails.get(&photo_id))
    {
        Some(handle) => image(handle.clone())
            .width(PHOTO_SIZE)
            .height(PHOTO_SIZE)
            .into(),
        None => container(text("Loading...").size(20))
            .center_x(PHOTO_SIZE)
            .center_y(PHOTO_SIZE)
            .into(),
    };

    let caption = match app.photo_by_id(photo_id) {
        Some(photo) => {
            let album = app
                .store
                .album_title(photo.album_id)
                .unwrap_or(app.labels.unknown_album.as_str());
            format!("{} (Album: {album})", photo.title)
        }
        None => String::new(),
    };

    let controls = row![
        button(text("<").size(30))
            .on_press(Message::CarouselPrevious)
            .padding(10),
        picture,
        button(text(">").size(30))
            .on_press(Message::CarouselNext)
            .padding(10),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let content = column![
        button(text("×").size(24))
            .on_press(Message::CarouselClosed)
            .padding(10),
        controls,
        text(caption).size(14),
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
