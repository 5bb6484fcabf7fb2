pub mod login;
pub mod modals;
pub mod notification;
pub mod roster;

pub use login::view_login;
pub use modals::{view_confirm_delete, view_edit_user};
pub use notification::view_notification;
pub use roster::view_roster;
