//! Filter, search, sort and paginate the directory's members.
//!
//! [evaluate] is a pure function of the members and a [QuerySpec]:
//! evaluating the same query twice gives the same result, in the same order.

use derive_getters::Getters;
use dto::member::Member;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

use crate::query::pagination::total_pages;
use crate::query::search::SearchTerm;
use crate::query::sort::{SortKey, sort_members};

pub mod pagination;
pub mod search;
pub mod sort;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();
const ALL_SECTORS: &str = "all";

// region SectorFilter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Sector(String),
}

impl SectorFilter {
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Sector(sector) => member.belongs_to(sector),
        }
    }
}

impl From<&str> for SectorFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_SECTORS {
            SectorFilter::All
        } else {
            SectorFilter::Sector(value.to_owned())
        }
    }
}

impl Display for SectorFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectorFilter::All => write!(f, "{ALL_SECTORS}"),
            SectorFilter::Sector(sector) => write!(f, "{sector}"),
        }
    }
}

impl Serialize for SectorFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
// endregion

// region QuerySpec
/// Everything a single evaluation depends on. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct QuerySpec {
    sector_filter: SectorFilter,
    search_term: String,
    sort_key: SortKey,
    page: usize,
    page_size: NonZeroUsize,
}

impl QuerySpec {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            sector_filter: SectorFilter::All,
            search_term: String::new(),
            sort_key: SortKey::default(),
            page: 1,
            page_size,
        }
    }

    pub fn with_sector_filter(self, sector_filter: SectorFilter) -> Self {
        Self {
            sector_filter,
            ..self
        }
    }

    pub fn with_search_term<S: Into<String>>(self, search_term: S) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_sort_key(self, sort_key: SortKey) -> Self {
        Self { sort_key, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
// endregion

// region Results
/// The members displayed on one page.
/// `start_index` and `end_index` are 1-based and inclusive; both are 0 when the window is empty.
#[derive(Debug, PartialEq, Eq, Getters, Serialize)]
pub struct ResultWindow<'a> {
    members: Vec<&'a Member>,
    page: usize,
    total_pages: usize,
    total_matches: usize,
    start_index: usize,
    end_index: usize,
}

impl<'a> ResultWindow<'a> {
    /// No bound check on `page`: a page out of range gives an empty window.
    fn slice(matches: &[&'a Member], page: usize, page_size: NonZeroUsize) -> Self {
        let size = page_size.get();
        let offset = page.checked_sub(1).map(|index| index.saturating_mul(size));
        let members: Vec<&Member> = match offset {
            Some(offset) => matches.iter().skip(offset).take(size).copied().collect(),
            None => vec![],
        };
        let (start_index, end_index) = match offset {
            Some(offset) if !members.is_empty() => (offset + 1, offset + members.len()),
            _ => (0, 0),
        };

        Self {
            members,
            page,
            total_pages: total_pages(matches.len(), page_size),
            total_matches: matches.len(),
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// All the matching members, sorted, and the window for the requested page.
#[derive(Debug, PartialEq, Eq, Getters)]
pub struct QueryResult<'a> {
    matches: Vec<&'a Member>,
    window: ResultWindow<'a>,
}
// endregion

pub fn evaluate<'a>(members: &'a [Member], spec: &QuerySpec) -> QueryResult<'a> {
    let mut matches: Vec<&Member> = members
        .iter()
        .filter(|member| spec.sector_filter.matches(member))
        .collect();

    if let Some(search_term) = SearchTerm::parse(&spec.search_term) {
        matches.retain(|member| search_term.matches(member));
    }

    sort_members(&mut matches, spec.sort_key);

    let window = ResultWindow::slice(&matches, spec.page, spec.page_size);
    QueryResult { matches, window }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::tests::sample_directory;
    use parameterized::{ide, parameterized};

    ide!();

    const ENERGY: &str = "Energía";

    fn page_size(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).unwrap()
    }

    fn ids<'a>(members: &[&'a Member]) -> Vec<&'a str> {
        members.iter().map(|member| member.id().as_str()).collect()
    }

    #[test]
    fn should_be_idempotent() {
        let directory = sample_directory();
        let spec = QuerySpec::default()
            .with_sector_filter(SectorFilter::from(ENERGY))
            .with_search_term("energía")
            .with_sort_key(SortKey::CountryAsc);

        let first = evaluate(&directory, &spec);
        let second = evaluate(&directory, &spec);

        assert_eq!(first, second);
    }

    #[parameterized(
        search_term = {"", "a", "gob", "zzz"},
        sort_key = {SortKey::NameAsc, SortKey::NameDesc, SortKey::CountryAsc, SortKey::Unsorted}
    )]
    fn should_only_keep_members_of_the_sector(search_term: &str, sort_key: SortKey) {
        let directory = sample_directory();
        let spec = QuerySpec::default()
            .with_sector_filter(SectorFilter::from(ENERGY))
            .with_search_term(search_term)
            .with_sort_key(sort_key);

        let result = evaluate(&directory, &spec);

        assert!(
            result
                .matches()
                .iter()
                .all(|member| member.sectors().contains(&ENERGY.to_owned()))
        );
    }

    #[parameterized(sort_key = {SortKey::NameAsc, SortKey::NameDesc, SortKey::CountryAsc, SortKey::InstitutionAsc, SortKey::Unsorted})]
    fn should_count_every_member_of_the_sector_whatever_the_sort(sort_key: SortKey) {
        let directory = sample_directory();
        let expected = directory
            .iter()
            .filter(|member| member.belongs_to(ENERGY))
            .count();
        let spec = QuerySpec::default()
            .with_sector_filter(SectorFilter::from(ENERGY))
            .with_sort_key(sort_key);

        let result = evaluate(&directory, &spec);

        assert_eq!(5, expected);
        assert_eq!(expected, result.matches().len());
        assert_eq!(expected, *result.window().total_matches());
    }

    #[test]
    fn should_not_filter_when_all_sectors() {
        let directory = sample_directory();
        let spec = QuerySpec::default()
            .with_sector_filter(SectorFilter::from("all"))
            .with_sort_key(SortKey::Unsorted);

        let result = evaluate(&directory, &spec);

        assert_eq!(directory.iter().collect::<Vec<_>>(), *result.matches());
    }

    #[test]
    fn should_not_match_unknown_sector() {
        let directory = sample_directory();
        let spec = QuerySpec::default().with_sector_filter(SectorFilter::from("Energia"));

        let result = evaluate(&directory, &spec);

        assert!(result.matches().is_empty());
        assert!(result.window().is_empty());
        assert_eq!(0, *result.window().total_pages());
        assert_eq!(0, *result.window().start_index());
    }

    #[parameterized(search_term = {"mexico", "MÉXICO", "México", "  mexico "})]
    fn should_search_regardless_of_case_and_accents(search_term: &str) {
        let directory = sample_directory();
        let spec = QuerySpec::default().with_search_term(search_term);

        let result = evaluate(&directory, &spec);

        assert_eq!(vec!["member-011", "member-001"], ids(result.matches()));
    }

    #[test]
    fn should_search_email_substring() {
        let directory = sample_directory();
        let spec = QuerySpec::default().with_search_term("gob.mx");

        let result = evaluate(&directory, &spec);

        assert_eq!(vec!["member-011", "member-001"], ids(result.matches()));
        assert!(
            result
                .matches()
                .iter()
                .all(|member| member.email().ends_with("gob.mx"))
        );
    }

    #[test]
    fn should_not_search_across_fields() {
        let member = Member::new_test("1", "Ana", "Panamá", &[ENERGY]);
        let members = vec![member];
        let spec = QuerySpec::default().with_search_term("ana panama");

        let result = evaluate(&members, &spec);

        assert!(result.matches().is_empty());
    }

    #[test]
    fn should_keep_original_order_of_members_with_same_name() {
        let members = vec![
            Member::new_test("1", "Jon Doe", "Panamá", &[ENERGY]),
            Member::new_test("2", "Ana Smith", "Belice", &[ENERGY]),
            Member::new_test("3", "Jon Doe", "México", &[ENERGY]),
        ];
        let spec = QuerySpec::default();

        let result = evaluate(&members, &spec);

        assert_eq!(vec!["2", "1", "3"], ids(result.matches()));
    }

    #[parameterized(size = {1, 2, 3, 5, 12, 20})]
    fn should_cover_all_matches_with_pages(size: usize) {
        let directory = sample_directory();
        let spec = QuerySpec::new(page_size(size)).with_sort_key(SortKey::CountryAsc);
        let expected = evaluate(&directory, &spec);

        let total_pages = *expected.window().total_pages();
        let concatenated: Vec<&Member> = (1..=total_pages)
            .flat_map(|page| {
                let result = evaluate(&directory, &spec.clone().with_page(page));
                result.window().members().clone()
            })
            .collect();

        assert_eq!(*expected.matches(), concatenated);
    }

    #[test]
    fn should_describe_window() {
        let directory = sample_directory();
        let spec = QuerySpec::new(page_size(5)).with_page(3);

        let result = evaluate(&directory, &spec);
        let window = result.window();

        assert_eq!(2, window.members().len());
        assert_eq!(3, *window.page());
        assert_eq!(3, *window.total_pages());
        assert_eq!(12, *window.total_matches());
        assert_eq!(11, *window.start_index());
        assert_eq!(12, *window.end_index());
    }

    #[parameterized(page = {0, 4, 99, usize::MAX})]
    fn should_return_empty_window_when_page_out_of_range(page: usize) {
        let directory = sample_directory();
        let spec = QuerySpec::new(page_size(5)).with_page(page);

        let result = evaluate(&directory, &spec);

        assert!(result.window().is_empty());
        assert_eq!(12, result.matches().len());
        assert_eq!(0, *result.window().start_index());
        assert_eq!(0, *result.window().end_index());
    }

    #[test]
    fn should_return_empty_window_for_page_99_of_2() {
        let directory = sample_directory();
        let spec = QuerySpec::new(page_size(3))
            .with_sector_filter(SectorFilter::from(ENERGY))
            .with_page(99);

        let result = evaluate(&directory, &spec);

        assert_eq!(2, *result.window().total_pages());
        assert!(result.window().is_empty());
    }
}
