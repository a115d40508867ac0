use crate::query::DEFAULT_PAGE_SIZE;
use crate::query::pagination::MAX_PAGINATION_BUTTONS;
use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use derive_getters::Getters;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

const MEMBERS_FILE_ARG: &str = "--members-file";
const PAGE_SIZE_ARG: &str = "--page-size";
pub const SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Where members are read from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembersSource {
    /// The sample dataset shipped with the application.
    Bundled,
    File(PathBuf),
}

#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct DirectoryConfig {
    members_source: MembersSource,
    page_size: NonZeroUsize,
    pagination_cap: usize,
    search_delay: Duration,
}

impl DirectoryConfig {
    pub fn new(members_source: MembersSource, page_size: NonZeroUsize) -> Self {
        Self {
            members_source,
            page_size,
            pagination_cap: MAX_PAGINATION_BUTTONS,
            search_delay: SEARCH_DELAY,
        }
    }

    /// Build the configuration from `--members-file=<path>` and `--page-size=<size>`.
    pub fn from_args() -> Self {
        let members_source = retrieve_arg_value(MEMBERS_FILE_ARG)
            .filter(|path| !path.is_empty())
            .map(|path| MembersSource::File(PathBuf::from(path)))
            .unwrap_or(MembersSource::Bundled);
        let page_size = retrieve_parsed_arg_value(PAGE_SIZE_ARG).unwrap_or(DEFAULT_PAGE_SIZE);

        Self::new(members_source, page_size)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(MembersSource::Bundled, DEFAULT_PAGE_SIZE)
    }
}
