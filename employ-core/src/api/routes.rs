/// Route definitions of the remote user API, relative to the configured base.
pub mod v1 {
    #[allow(missing_docs)]
    pub mod auth {
        pub const LOGIN: &str = "/login";
    }

    #[allow(missing_docs)]
    pub mod users {
        pub const COLLECTION: &str = "/users";
        pub const ITEM: &str = "/users/{id}";
    }
}

/// Default base URL of the public demo API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Path builders for parameterised routes.
pub mod utils {
    /// Replace a single `{param}` placeholder.
    pub fn replace_param(
        template: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        template.replacen(param, value.as_ref(), 1)
    }

    /// Path of a single user item.
    pub fn user_item(id: impl std::fmt::Display) -> String {
        replace_param(super::v1::users::ITEM, "{id}", id.to_string())
    }

    /// Listing path for one page.
    pub fn users_page(page: u32) -> String {
        format!("{}?page={}", super::v1::users::COLLECTION, page)
    }
}
