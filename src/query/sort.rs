use diacritics::remove_diacritics;
use dto::member::Member;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::fmt::{Display, Formatter};

/// Sorts `ñ` after every other `n` sequence and before `o`.
const ENYE_WEIGHT: &str = "n\u{10FFFF}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    CountryAsc,
    InstitutionAsc,
    /// Any unknown key: members keep their original order.
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::CountryAsc => "country-asc",
            SortKey::InstitutionAsc => "institution-asc",
            SortKey::Unsorted => "unsorted",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "country-asc" => SortKey::CountryAsc,
            "institution-asc" => SortKey::InstitutionAsc,
            _ => SortKey::Unsorted,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spanish collation, level by level:
/// base letters first (case and accents ignored), then accents, then the raw text.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base_letters: String,
    accents: String,
    raw: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let lowercase = text.to_lowercase();
        let with_enye_weight = lowercase.replace('ñ', ENYE_WEIGHT);
        Self {
            base_letters: remove_diacritics(&with_enye_weight),
            accents: lowercase,
            raw: text.to_owned(),
        }
    }
}

pub fn locale_cmp(left: &str, right: &str) -> Ordering {
    CollationKey::new(left).cmp(&CollationKey::new(right))
}

/// Stable: members with equal keys keep their relative order, whatever the direction.
pub fn sort_members(members: &mut [&Member], sort_key: SortKey) {
    match sort_key {
        SortKey::NameAsc => members.sort_by_cached_key(|member| CollationKey::new(member.name())),
        SortKey::NameDesc => {
            members.sort_by_cached_key(|member| Reverse(CollationKey::new(member.name())))
        }
        SortKey::CountryAsc => {
            members.sort_by_cached_key(|member| CollationKey::new(member.country()))
        }
        SortKey::InstitutionAsc => {
            members.sort_by_cached_key(|member| CollationKey::new(member.institution()))
        }
        SortKey::Unsorted => {}
    }
}
