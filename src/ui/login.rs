/// Login screen
///
/// Email/password form over the fetched users. The password is the shared
/// demo literal; a mismatch shows an error line and changes nothing.

use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use super::form_error;
use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let form = column![
        text("Placeview").size(32),
        text_input("Email", &app.login_email)
            .on_input(Message::LoginEmailChanged)
            .padding(10),
        text_input("Password", &app.login_password)
            .on_input(Message::LoginPasswordChanged)
            .secure(true)
            .on_submit(Message::LoginSubmitted)
            .padding(10),
        form_error(app.login_error.as_deref()),
        button("Login").on_press(Message::LoginSubmitted).padding(10),
    ]
    .spacing(20)
    .max_width(400)
    .align_x(Alignment::Center);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
