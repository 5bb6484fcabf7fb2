//! User records and the shapes used to edit them.

use crate::ids::UserId;

/// One user as listed by the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Avatar image URL; empty when the server sent none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<UserId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            avatar: String::new(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials used as a placeholder where the avatar is not rendered.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Returns a copy with every field present in `patch` taking precedence.
    pub fn merged_with(&self, patch: &UserPatch) -> UserRecord {
        UserRecord {
            id: self.id,
            first_name: patch
                .first_name
                .clone()
                .unwrap_or_else(|| self.first_name.clone()),
            last_name: patch
                .last_name
                .clone()
                .unwrap_or_else(|| self.last_name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            avatar: patch.avatar.clone().unwrap_or_else(|| self.avatar.clone()),
        }
    }
}

/// Editable fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
}

impl DraftField {
    pub const ALL: [DraftField; 3] =
        [Self::FirstName, Self::LastName, Self::Email];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
        }
    }
}

/// Working copy of a record's editable fields, also the body sent on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Email => self.email = value,
        }
    }

    /// Every field is required before the draft may be submitted.
    pub fn is_complete(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Server response to an update. Absent fields leave the local value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "updatedAt", alias = "updated_at")
    )]
    pub updated_at: Option<String>,
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            email: Some(draft.email),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserRecord {
        UserRecord::new(1, "Ann", "Lee", "a@x.com")
            .with_avatar("https://img/1.jpg")
    }

    #[test]
    fn merge_prefers_server_fields() {
        let patch = UserPatch {
            first_name: Some("Annie".into()),
            ..UserPatch::default()
        };

        let merged = ann().merged_with(&patch);

        assert_eq!(merged.id, UserId(1));
        assert_eq!(merged.first_name, "Annie");
        assert_eq!(merged.last_name, "Lee");
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.avatar, "https://img/1.jpg");
    }

    #[test]
    fn draft_round_trips_editable_fields() {
        let mut draft = UserDraft::from(&ann());
        assert_eq!(draft.get(DraftField::Email), "a@x.com");

        draft.set(DraftField::LastName, "Li".into());
        assert_eq!(draft.last_name, "Li");
        assert!(draft.is_complete());

        draft.set(DraftField::Email, "   ".into());
        assert!(!draft.is_complete());
    }

    #[test]
    fn initials_use_first_letters() {
        assert_eq!(ann().initials(), "AL");
        assert_eq!(UserRecord::new(2, "", "", "").initials(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_deserializes_without_avatar() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":3,"first_name":"Emma","last_name":"Wong","email":"e@x"}"#,
        )
        .unwrap();
        assert_eq!(record.id, UserId(3));
        assert!(record.avatar.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn patch_ignores_unknown_fields() {
        let patch: UserPatch = serde_json::from_str(
            r#"{"first_name":"Annie","job":"x","updatedAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Annie"));
        assert_eq!(patch.last_name, None);
        assert_eq!(patch.updated_at.as_deref(), Some("2024-01-01"));
    }
}
