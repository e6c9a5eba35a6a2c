/// Posts screen: add-post form, the post list with resolved author names,
/// and an expandable comments section per post
///
/// Delete buttons only appear on the current user's own posts, and on
/// comments whose email matches the current user's.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Element, Length};

use super::form_error;
use crate::{Message, PlaceView};

pub fn view(app: &PlaceView) -> Element<'_, Message> {
    let form = container(
        column![
            text_input("Enter post title", &app.new_post_title)
                .on_input(Message::PostTitleChanged)
                .padding(10),
            text_input("Enter post text", &app.new_post_body)
                .on_input(Message::PostBodyChanged)
                .padding(10),
            form_error(app.post_error.as_deref()),
            button("Add Post").on_press(Message::AddPostPressed).padding(8),
        ]
        .spacing(10),
    )
    .padding(10)
    .width(Length::Fill)
    .style(container::rounded_box);

    let current_user = app.store.current_user();

    let mut list = Column::new().spacing(10);
    for post in app.store.posts() {
        let author = app
            .store
            .user_name(post.user_id)
            .unwrap_or(app.labels.unknown_user.as_str());

        let comments_open = app.open_comments == Some(post.id);
        let comments_label = if comments_open {
            "Hide Comments"
        } else {
            "Show Comments"
        };

        let mut actions = row![].spacing(10);
        if current_user.map(|u| u.id) == Some(post.user_id) {
            actions = actions.push(
                button("Delete Post")
                    .on_press(Message::DeletePostPressed(post.id))
                    .padding(5),
            );
        }
        actions = actions.push(
            button(comments_label)
                .on_press(Message::ToggleComments(post.id))
                .padding(5),
        );

        let mut card = column![
            text(author).size(14),
            text(post.title.as_str()).size(18),
            text(post.body.as_str()).size(15),
            actions,
        ]
        .spacing(8);

        if comments_open {
            card = card.push(comments_section(app, post.id));
        }

        list = list.push(
            container(card)
                .padding(15)
                .width(Length::Fill)
                .style(container::rounded_box),
        );
    }

    column![form, scrollable(list).height(Length::Fill)]
        .spacing(15)
        .padding(20)
        .into()
}

/// The comment form plus the comments for one post
fn comments_section(app: &PlaceView, post_id: u64) -> Element<'_, Message> {
    let form = column![
        text_input("Enter comment title", &app.new_comment_name)
            .on_input(Message::CommentNameChanged)
            .padding(8),
        text_input("Enter comment text", &app.new_comment_body)
            .on_input(Message::CommentBodyChanged)
            .padding(8),
        form_error(app.comment_error.as_deref()),
        button("Add Comment")
            .on_press(Message::AddCommentPressed(post_id))
            .padding(5),
    ]
    .spacing(8);

    let current_email = app.store.current_user().map(|u| u.email.as_str());

    let mut list = Column::new().spacing(8);
    for comment in app.store.comments_for_post(post_id) {
        let mut entry = column![
            text(comment.email.as_str()).size(12),
            text(comment.name.as_str()).size(14),
            text(comment.body.as_str()).size(13),
        ]
        .spacing(3);

        if current_email == Some(comment.email.as_str()) {
            entry = entry.push(
                button("Delete Comment")
                    .on_press(Message::DeleteCommentPressed(comment.id))
                    .padding(3),
            );
        }

        list = list.push(container(entry).padding(10).style(container::rounded_box));
    }

    container(column![form, list].spacing(10))
        .padding(10)
        .width(Length::Fill)
        .into()
}
