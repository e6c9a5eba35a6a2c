/// Users screen: one search box matching name, email, or company name

use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Length};

use super::search_box;
use crate::state::filter;
use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let filtered = filter::filter_users(app.store.users(), &app.users_search);

    let mut list = Column::new().spacing(10);
    if filtered.is_empty() {
        list = list.push(text("No users found.").size(16));
    }
    for user in filtered {
        list = list.push(
            container(
                column![
                    text(user.name.as_str()).size(18),
                    text(user.email.as_str()).size(14),
                    text(user.company.name.as_str()).size(14),
                ]
                .spacing(2),
            )
            .padding(15)
            .width(Length::Fill)
            .style(container::rounded_box),
        );
    }

    column![
        search_box("Search...", &app.users_search, Message::UserSearchChanged),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(15)
    .padding(20)
    .into()
}
