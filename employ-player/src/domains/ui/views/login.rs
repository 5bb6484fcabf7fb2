use iced::widget::{Space, button, center, column, container, text, text_input};
use iced::{Alignment, Element};

use crate::domains::auth::messages::Message;
use crate::domains::auth::LoginForm;

/// View the login screen
pub fn view_login(form: &LoginForm) -> Element<'_, Message> {
    let title = text("Login").size(32);

    let email_input = text_input("Email", &form.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(12)
        .size(16)
        .width(300);

    let password_input = text_input("Password", &form.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(true)
        .padding(12)
        .size(16)
        .width(300);

    let label = if form.submitting { "Signing in..." } else { "Login" };
    let submit = button(text(label).size(16))
        .on_press_maybe((!form.submitting).then_some(Message::Submit))
        .padding([10, 24])
        .style(button::primary);

    let content = column![
        title,
        Space::new().height(24),
        email_input,
        password_input,
        Space::new().height(8),
        submit,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    center(container(content).padding(32).style(container::rounded_box))
        .into()
}
