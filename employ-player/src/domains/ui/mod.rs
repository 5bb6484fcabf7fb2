//! Presentation: notifications and the screen views.

pub mod feedback_ui;
pub mod views;
