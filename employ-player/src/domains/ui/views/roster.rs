//! The user roster screen: search, sort, cards and pagination.

use employ_core::Roster;
use employ_model::UserRecord;
use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length};

use crate::domains::user_management::messages::{Message, SortOption};

pub fn view_roster(roster: &Roster) -> Element<'_, Message> {
    let search = text_input("Search by name or email", roster.search())
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::Fill);

    let sort = pick_list(
        SortOption::ALL,
        Some(SortOption(roster.sort())),
        Message::SortChanged,
    )
    .padding(10);

    let controls = row![search, sort]
        .spacing(12)
        .align_y(Alignment::Center);

    let status: Element<'_, Message> = if let Some(error) = roster.error() {
        text(error).style(text::danger).into()
    } else if roster.is_loading() {
        text("Loading users...").into()
    } else {
        text(roster.view().summary()).size(14).into()
    };

    let cards = roster
        .view()
        .records()
        .iter()
        .map(user_card)
        .collect::<Vec<_>>();
    let list = scrollable(column(cards).spacing(8).width(Length::Fill))
        .height(Length::Fill);

    column![
        text("User Management").size(28),
        controls,
        status,
        list,
        pagination(roster),
    ]
    .spacing(16)
    .padding(24)
    .into()
}

fn user_card(user: &UserRecord) -> Element<'_, Message> {
    let avatar = container(text(user.initials()).size(18))
        .padding(12)
        .style(container::rounded_box);

    let details = column![
        text(user.full_name()).size(18),
        text(&user.email).size(14),
    ]
    .spacing(4);

    let actions = row![
        button(text("Edit"))
            .on_press(Message::EditUser(user.id))
            .style(button::secondary),
        button(text("Delete"))
            .on_press(Message::DeleteUser(user.id))
            .style(button::danger),
    ]
    .spacing(8);

    container(
        row![avatar, details, Space::new().width(Length::Fill), actions]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn pagination(roster: &Roster) -> Element<'_, Message> {
    let window = roster.window();

    row![
        button(text("Previous")).on_press_maybe(
            window.has_previous().then_some(Message::PreviousPage)
        ),
        text(window.label()),
        button(text("Next"))
            .on_press_maybe(window.has_next().then_some(Message::NextPage)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}
