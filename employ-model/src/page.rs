use crate::user::UserRecord;

/// One page of users as returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub page: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub per_page: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<UserRecord>,
}

impl UserPage {
    pub fn new(data: Vec<UserRecord>, total_pages: u32) -> Self {
        Self {
            page: 0,
            per_page: data.len() as u32,
            total: 0,
            total_pages,
            data,
        }
    }
}
