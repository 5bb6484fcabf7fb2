pub mod bootstrap;

pub use bootstrap::{AppConfig, Services};

use crate::{update, view};

/// Build and run the Employ application with the given services.
pub fn run(services: Services) -> iced::Result {
    iced::application(
        move || bootstrap::boot(&services),
        update::update,
        view::view,
    )
    .title("Employ")
    .window_size(iced::Size::new(1024.0, 720.0))
    .run()
}
