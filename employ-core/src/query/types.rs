use std::fmt;

/// Fields available for sorting the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SortField {
    FirstName,
    LastName,
    Email,
}

impl SortField {
    fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// A to Z.
    Ascending,
    /// Z to A.
    Descending,
}

/// One entry of the fixed sort enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Field compared.
    pub field: SortField,
    /// Direction of the comparison.
    pub order: SortOrder,
}

impl SortKey {
    /// Every key, in menu order.
    pub const ALL: [SortKey; 6] = [
        SortKey::new(SortField::FirstName, SortOrder::Ascending),
        SortKey::new(SortField::FirstName, SortOrder::Descending),
        SortKey::new(SortField::LastName, SortOrder::Ascending),
        SortKey::new(SortField::LastName, SortOrder::Descending),
        SortKey::new(SortField::Email, SortOrder::Ascending),
        SortKey::new(SortField::Email, SortOrder::Descending),
    ];

    #[allow(missing_docs)]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Parses the wire form (`first_name_desc`, ...). Anything outside the
    /// fixed enumeration yields `None`, which leaves server order untouched.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    /// Wire name, the inverse of [`SortKey::parse`].
    pub fn as_str(&self) -> &'static str {
        match (self.field, self.order) {
            (SortField::FirstName, SortOrder::Ascending) => "first_name_asc",
            (SortField::FirstName, SortOrder::Descending) => "first_name_desc",
            (SortField::LastName, SortOrder::Ascending) => "last_name_asc",
            (SortField::LastName, SortOrder::Descending) => "last_name_desc",
            (SortField::Email, SortOrder::Ascending) => "email_asc",
            (SortField::Email, SortOrder::Descending) => "email_desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.order {
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        };
        write!(f, "{} ({})", self.field.label(), direction)
    }
}
