use crate::tools::normalize;
use dto::member::Member;

/// A normalized, non-empty free-text search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    normalized: String,
}

impl SearchTerm {
    /// Returns `None` when the raw input is blank: such a search matches everything.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                normalized: normalize(trimmed),
            })
        }
    }

    /// The term has to be found within a single field.
    pub fn matches(&self, member: &Member) -> bool {
        searchable_fields(member)
            .iter()
            .any(|field| normalize(field).contains(&self.normalized))
    }
}

fn searchable_fields(member: &Member) -> [&str; 5] {
    [
        member.name(),
        member.institution(),
        member.position(),
        member.email(),
        member.country(),
    ]
}
