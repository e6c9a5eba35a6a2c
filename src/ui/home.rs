/// Home screen: the app title and the latest fetched post

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let content = match app.store.latest_post() {
        Some(post) => {
            let author = app
                .store
                .user_name(post.user_id)
                .unwrap_or(app.labels.unknown_user.as_str());

            column![
                text("Latest Post").size(20),
                container(
                    column![
                        text(author).size(14),
                        text(post.title.as_str()).size(18),
                        text(post.body.as_str()).size(16),
                    ]
                    .spacing(10)
                )
                .padding(15)
                .style(container::rounded_box),
            ]
            .spacing(10)
        }
        None => column![text("No posts available").size(20)],
    };

    container(
        column![
            text("Placeview").size(32),
            content,
            text(app.status.as_str()).size(14),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(20)
    .center_x(Length::Fill)
    .into()
}
