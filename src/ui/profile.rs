/// Profile screen: the logged-in user's details, their posts, and logout

use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let Some(user) = app.store.current_user() else {
        // Unreachable behind the login gate, but render something sane
        return container(text("Not logged in.").size(18))
            .width(Length::Fill)
            .padding(20)
            .center_x(Length::Fill)
            .into();
    };

    let mut posts = Column::new().spacing(10);
    for post in app.store.posts_by_user(user.id) {
        posts = posts.push(
            container(
                column![
                    text(post.title.as_str()).size(16),
                    text(post.body.as_str()).size(14),
                ]
                .spacing(5),
            )
            .padding(12)
            .width(Length::Fill)
            .style(container::rounded_box),
        );
    }

    column![
        button("Logout").on_press(Message::LogoutPressed).padding(8),
        text(user.name.as_str()).size(24),
        text(format!("Email: {}", user.email)).size(14),
        text(format!("Company: {}", user.company.name)).size(14),
        text("Posts").size(20),
        scrollable(posts).height(Length::Fill),
    ]
    .spacing(10)
    .padding(20)
    .align_x(Alignment::Center)
    .into()
}
