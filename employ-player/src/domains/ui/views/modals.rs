use employ_core::roster::EditSession;
use employ_model::DraftField;
use iced::widget::{
    Space, button, center, column, container, opaque, row, text, text_input,
};
use iced::{Alignment, Color, Element, Length};

use crate::domains::user_management::messages::Message;

/// Edit form over the roster.
pub fn view_edit_user(session: &EditSession) -> Element<'_, Message> {
    let fields: Vec<Element<'_, Message>> = DraftField::ALL
        .into_iter()
        .map(|field| {
            column![
                text(field.label()).size(14),
                text_input(field.label(), session.draft.get(field))
                    .on_input(move |value| Message::DraftChanged(field, value))
                    .on_submit(Message::SubmitEdit)
                    .padding(10),
            ]
            .spacing(4)
            .into()
        })
        .collect();

    let save_label = if session.submitting { "Saving..." } else { "Save" };
    let buttons = row![
        button(text("Cancel"))
            .on_press(Message::CancelEdit)
            .style(button::secondary),
        button(text(save_label))
            .on_press_maybe(
                (!session.submitting).then_some(Message::SubmitEdit),
            )
            .style(button::primary),
    ]
    .spacing(8);

    dialog(
        column![
            text("Edit User").size(22),
            column(fields).spacing(12),
            buttons,
        ]
        .spacing(16)
        .width(360),
    )
}

/// Delete confirmation over the roster.
pub fn view_confirm_delete<'a>() -> Element<'a, Message> {
    dialog(
        column![
            text("Confirm Deletion").size(22),
            text("Are you sure you want to delete this user?"),
            Space::new().height(8),
            row![
                button(text("Cancel"))
                    .on_press(Message::CancelDelete)
                    .style(button::secondary),
                button(text("Delete"))
                    .on_press(Message::ConfirmDelete)
                    .style(button::danger),
            ]
            .spacing(8),
        ]
        .spacing(12)
        .align_x(Alignment::Start)
        .width(360),
    )
}

fn dialog<'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let card = container(content)
        .padding(24)
        .style(container::rounded_box);

    opaque(
        center(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(
                    Color::from_rgba(0.0, 0.0, 0.0, 0.6).into(),
                ),
                ..Default::default()
            }),
    )
}
