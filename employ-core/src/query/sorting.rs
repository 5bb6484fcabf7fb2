use std::cmp::Ordering;

use employ_model::UserRecord;

use super::types::{SortField, SortKey, SortOrder};

/// Collation used for every roster sort.
///
/// Levels, each consulted only on a tie of the previous one:
/// 1. case-folded text with Latin diacritics removed (`Émile` sorts with `e`),
/// 2. case-folded text with diacritics kept (`Emile` before `Émile`),
/// 3. lower case before upper case at the first differing position,
/// 4. raw byte order, keeping the ordering total.
///
/// Only Latin-1 and Latin Extended-A accents are folded; other scripts
/// compare by code point at the first level.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let primary = folded(a)
        .map(strip_accent)
        .cmp(folded(b).map(strip_accent));

    primary
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

fn strip_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }
        match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

fn field_of(record: &UserRecord, field: SortField) -> &str {
    match field {
        SortField::FirstName => &record.first_name,
        SortField::LastName => &record.last_name,
        SortField::Email => &record.email,
    }
}

/// Compare two records by the key's field in the key's direction.
pub fn compare_records(
    a: &UserRecord,
    b: &UserRecord,
    key: SortKey,
) -> Ordering {
    let ord = compare_text(field_of(a, key.field), field_of(b, key.field));
    match key.order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

/// Stable in-place sort; records comparing equal keep their relative order.
pub fn sort_records(records: &mut [UserRecord], key: SortKey) {
    records.sort_by(|a, b| compare_records(a, b, key));
}
