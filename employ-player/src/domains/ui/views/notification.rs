use employ_core::{FeedbackKind, Notification};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::domains::ui::feedback_ui::FeedbackMessage;

/// The current notification, pinned to the top-right corner.
pub fn view_notification(
    notification: &Notification,
) -> Element<'_, FeedbackMessage> {
    let kind = notification.kind;

    let content = row![
        column![
            text(&notification.title).size(16),
            text(&notification.message).size(14),
        ]
        .spacing(4),
        Space::new().width(12),
        button(text("x").size(14))
            .on_press(FeedbackMessage::Dismiss)
            .padding(4)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let toast = container(content).padding(12).style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let pair = match kind {
            FeedbackKind::Success => palette.success.base,
            FeedbackKind::Error => palette.danger.base,
        };
        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    container(toast)
        .width(Length::Fill)
        .padding(20)
        .align_x(Alignment::End)
        .into()
}
