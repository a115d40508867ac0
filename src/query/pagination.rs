use serde::{Serialize, Serializer};
use std::cmp::{max, min};
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Maximum number of page selectors displayed at once.
pub const MAX_PAGINATION_BUTTONS: usize = 7;
/// Below this, there is no room for both ellipses and a window around the current page.
const MIN_PAGINATION_BUTTONS: usize = 5;
pub const ELLIPSIS: &str = "…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl Display for PageLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageLabel::Page(page) => write!(f, "{page}"),
            PageLabel::Ellipsis => write!(f, "{ELLIPSIS}"),
        }
    }
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Page(page) => serializer.serialize_u64(*page as u64),
            PageLabel::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

pub fn total_pages(total_matches: usize, page_size: NonZeroUsize) -> usize {
    total_matches.div_ceil(page_size.get())
}

/// Page selectors to display, e.g. `1 … 4 5 6 7 8 … 20` for page 6 out of 20.
///
/// First and last pages are always displayed.
/// An ellipsis replaces the pages hidden between them and the window around the current page.
pub fn page_labels(total_pages: usize, current_page: usize, cap: usize) -> Vec<PageLabel> {
    let cap = max(cap, MIN_PAGINATION_BUTTONS);
    if total_pages <= cap {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let (start, end) = if current_page <= 3 {
        (2, cap - 1)
    } else if current_page >= total_pages - 2 {
        (total_pages - (cap - 2), total_pages - 1)
    } else {
        (
            max(2, current_page - 2),
            min(total_pages - 1, current_page + 2),
        )
    };

    let mut labels = vec![PageLabel::Page(1)];
    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.extend((start..=end).map(PageLabel::Page));
    if end < total_pages - 1 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(total_pages));

    labels
}

/// Caller-side clamp: any page outside `[1, total_pages]` goes back to the first one.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if (1..=total_pages).contains(&page) {
        page
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageLabel::{Ellipsis, Page};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        total_pages = {20, 5, 7, 8, 20, 20, 20, 20, 10, 0},
        current_page = {6, 1, 4, 1, 1, 3, 4, 18, 10, 1},
        expected = {
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(20)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(8)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)],
            vec![Page(1), Ellipsis, Page(15), Page(16), Page(17), Page(18), Page(19), Page(20)],
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)],
            vec![],
        }
    )]
    fn should_build_page_labels(total_pages: usize, current_page: usize, expected: Vec<PageLabel>) {
        let labels = page_labels(total_pages, current_page, MAX_PAGINATION_BUTTONS);
        assert_eq!(expected, labels);
    }

    #[parameterized(
        total_pages = {4, 5, 6, 20},
        current_page = {1, 5, 1, 10},
        cap = {3, 0, 3, 1},
        expected = {
            vec![Page(1), Page(2), Page(3), Page(4)],
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)],
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)],
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)],
        }
    )]
    fn should_raise_small_cap(
        total_pages: usize,
        current_page: usize,
        cap: usize,
        expected: Vec<PageLabel>,
    ) {
        assert_eq!(expected, page_labels(total_pages, current_page, cap));
    }

    #[test]
    fn should_serialize_page_labels() {
        let labels = page_labels(20, 6, MAX_PAGINATION_BUTTONS);

        let json = rocket::serde::json::to_string(&labels).unwrap();

        assert_eq!(r#"[1,"…",4,5,6,7,8,"…",20]"#, json);
    }

    #[parameterized(
        total_matches = {0, 1, 5, 6, 12},
        expected = {0, 1, 1, 2, 3}
    )]
    fn should_count_total_pages(total_matches: usize, expected: usize) {
        let page_size = NonZeroUsize::new(5).unwrap();
        assert_eq!(expected, total_pages(total_matches, page_size));
    }

    #[parameterized(
        page = {1, 2, 3, 0, 99},
        total_pages = {2, 2, 2, 2, 2},
        expected = {1, 2, 1, 1, 1}
    )]
    fn should_clamp_page(page: usize, total_pages: usize, expected: usize) {
        assert_eq!(expected, clamp_page(page, total_pages));
    }
}
