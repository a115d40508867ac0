//! State of one directory page: the latest query, the view mode and what they currently display.
//!
//! Every interaction builds a new [QuerySpec] and evaluates it right away,
//! except for the free-text search which waits for the user to stop typing.

use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::query::pagination::{PageLabel, clamp_page, page_labels};
use crate::query::sort::SortKey;
use crate::query::{QuerySpec, SectorFilter, evaluate};
use crate::tools::debounce::Debouncer;
use derive_getters::Getters;
use dto::member::Member;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

impl From<&str> for ViewMode {
    fn from(value: &str) -> Self {
        match value {
            "grid" => ViewMode::Grid,
            _ => ViewMode::List,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

/// Everything needed to render the directory page, detached from the session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct DirectorySnapshot {
    query: QuerySpec,
    view: ViewMode,
    members: Vec<Member>,
    total_matches: usize,
    total_pages: usize,
    start_index: usize,
    end_index: usize,
    page_labels: Vec<PageLabel>,
}

impl DirectorySnapshot {
    pub fn evaluate(directory: &Directory, query: QuerySpec, view: ViewMode, cap: usize) -> Self {
        let result = evaluate(directory, &query);
        let window = result.window();

        Self {
            members: window.members().iter().map(|member| (*member).clone()).collect(),
            total_matches: *window.total_matches(),
            total_pages: *window.total_pages(),
            start_index: *window.start_index(),
            end_index: *window.end_index(),
            page_labels: page_labels(*window.total_pages(), *query.page(), cap),
            query,
            view,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug)]
struct SessionState {
    directory: Arc<Directory>,
    pagination_cap: usize,
    snapshot: DirectorySnapshot,
}

impl SessionState {
    fn update(&mut self, query: QuerySpec, view: ViewMode) {
        self.snapshot = DirectorySnapshot::evaluate(&self.directory, query, view, self.pagination_cap);
    }

    fn update_query<F: FnOnce(QuerySpec) -> QuerySpec>(&mut self, change: F) {
        let query = change(self.snapshot.query.clone());
        let view = self.snapshot.view;
        self.update(query, view);
    }
}

pub struct DirectorySession {
    state: Arc<Mutex<SessionState>>,
    search_debouncer: Debouncer,
}

impl DirectorySession {
    pub fn new(directory: Arc<Directory>, config: &DirectoryConfig) -> Self {
        let query = QuerySpec::new(*config.page_size());
        let snapshot = DirectorySnapshot::evaluate(
            &directory,
            query,
            ViewMode::default(),
            *config.pagination_cap(),
        );
        let state = SessionState {
            directory,
            pagination_cap: *config.pagination_cap(),
            snapshot,
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            search_debouncer: Debouncer::new(*config.search_delay()),
        }
    }

    pub fn snapshot(&self) -> DirectorySnapshot {
        lock(&self.state).snapshot.clone()
    }

    /// Search once no other input has been received for the configured delay.
    /// Must be called from within a Tokio runtime.
    pub fn search(&mut self, input: &str) {
        let state = self.state.clone();
        let search_term = input.trim().to_owned();
        self.search_debouncer.schedule(move || {
            lock(&state).update_query(|query| query.with_search_term(search_term).with_page(1));
        });
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_debouncer.is_pending()
    }

    pub fn clear_search(&mut self) {
        self.search_debouncer.cancel();
        lock(&self.state).update_query(|query| query.with_search_term("").with_page(1));
    }

    pub fn select_sector(&self, sector_filter: SectorFilter) {
        lock(&self.state).update_query(|query| query.with_sector_filter(sector_filter).with_page(1));
    }

    pub fn sort_by(&self, sort_key: SortKey) {
        lock(&self.state).update_query(|query| query.with_sort_key(sort_key).with_page(1));
    }

    /// Out of range pages go back to the first one.
    pub fn go_to_page(&self, page: usize) {
        let mut state = lock(&self.state);
        let page = clamp_page(page, state.snapshot.total_pages);
        state.update_query(|query| query.with_page(page));
    }

    pub fn change_view(&self, view: ViewMode) {
        let mut state = lock(&self.state);
        let query = state.snapshot.query.clone();
        state.update(query, view);
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
