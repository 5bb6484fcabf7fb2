use std::str::FromStr;

use crate::error::ModelError;

/// Server-assigned identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u64);

impl UserId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(UserId)
            .map_err(|_| ModelError::InvalidUserId(s.to_string()))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("42".parse::<UserId>(), Ok(UserId(42)));
        assert_eq!(" 7 ".parse::<UserId>(), Ok(UserId(7)));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            "abc".parse::<UserId>(),
            Err(ModelError::InvalidUserId("abc".to_string()))
        );
    }
}
