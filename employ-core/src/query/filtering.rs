use employ_model::UserRecord;

/// Case-insensitive substring match against first name, last name or email.
/// An empty term matches every record.
pub fn matches_search(record: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&record.first_name, &record.last_name, &record.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
