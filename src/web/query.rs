use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::query::pagination::clamp_page;
use crate::query::sort::SortKey;
use crate::query::{QuerySpec, SectorFilter};
use crate::session::{DirectorySnapshot, ViewMode};

/// Query string of the directory pages, e.g. `?sector=Energía&search=mexico&sort=name-desc&page=2`.
/// Missing or invalid values fall back to their defaults.
///
/// `changed` names the control the user has just used (`sector`, `sort` or `view`).
/// Links and forms which merely carry the current state leave it out.
#[derive(Debug, Default, FromForm)]
pub struct DirectoryQuery {
    sector: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
    view: Option<String>,
    changed: Option<String>,
}

impl DirectoryQuery {
    pub fn to_query_spec(&self, config: &DirectoryConfig) -> QuerySpec {
        QuerySpec::new(*config.page_size())
            .with_sector_filter(
                self.sector
                    .as_deref()
                    .map(SectorFilter::from)
                    .unwrap_or_default(),
            )
            .with_search_term(self.search.clone().unwrap_or_default())
            .with_sort_key(self.to_sort_key())
            .with_page(self.page.unwrap_or(1))
    }

    pub fn view(&self) -> ViewMode {
        self.view.as_deref().map(ViewMode::from).unwrap_or_default()
    }

    /// Event worth logging when the user has just changed the sector, the sort order or the view.
    pub fn event(&self) -> Option<(&'static str, String)> {
        match self.changed.as_deref()? {
            "sector" => Some((
                "Filtro Sector",
                self.sector.clone().unwrap_or_else(|| SectorFilter::All.to_string()),
            )),
            "sort" => Some(("Ordenamiento", self.to_sort_key().as_str().to_owned())),
            "view" => {
                let view = match self.view() {
                    ViewMode::Grid => "Cuadrícula",
                    ViewMode::List => "Lista",
                };
                Some(("Cambio Vista", view.to_owned()))
            }
            _ => None,
        }
    }

    fn to_sort_key(&self) -> SortKey {
        self.sort.as_deref().map(SortKey::from).unwrap_or_default()
    }

    /// Evaluate the query as is: a page out of range gives an empty window.
    pub fn evaluate(&self, directory: &Directory, config: &DirectoryConfig) -> DirectorySnapshot {
        DirectorySnapshot::evaluate(
            directory,
            self.to_query_spec(config),
            self.view(),
            *config.pagination_cap(),
        )
    }

    /// Evaluate the query, going back to the first page when the requested one doesn't exist.
    pub fn evaluate_clamped(
        &self,
        directory: &Directory,
        config: &DirectoryConfig,
    ) -> DirectorySnapshot {
        let snapshot = self.evaluate(directory, config);
        let requested_page = *snapshot.query().page();
        let page = clamp_page(requested_page, *snapshot.total_pages());
        if page == requested_page {
            snapshot
        } else {
            let query = snapshot.query().clone().with_page(page);
            DirectorySnapshot::evaluate(directory, query, self.view(), *config.pagination_cap())
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::directory::tests::sample_directory;
    use parameterized::{ide, parameterized};

    ide!();

    impl DirectoryQuery {
        pub fn new_test(sector: Option<&str>, search: Option<&str>, page: Option<usize>) -> Self {
            Self {
                sector: sector.map(str::to_owned),
                search: search.map(str::to_owned),
                sort: None,
                page,
                view: None,
                changed: None,
            }
        }
    }

    #[test]
    fn should_build_default_query_spec() {
        let spec = DirectoryQuery::default().to_query_spec(&DirectoryConfig::default());

        assert_eq!(QuerySpec::default(), spec);
    }

    #[test]
    fn should_build_query_spec() {
        let query = DirectoryQuery {
            sector: Some("Energía".to_owned()),
            search: Some("mexico".to_owned()),
            sort: Some("country-asc".to_owned()),
            page: Some(2),
            view: Some("grid".to_owned()),
            changed: None,
        };

        let spec = query.to_query_spec(&DirectoryConfig::default());

        assert_eq!(&SectorFilter::Sector("Energía".to_owned()), spec.sector_filter());
        assert_eq!("mexico", spec.search_term());
        assert_eq!(SortKey::CountryAsc, *spec.sort_key());
        assert_eq!(2, *spec.page());
        assert_eq!(ViewMode::Grid, query.view());
    }

    #[parameterized(
        changed = {Some("sector"), Some("sort"), Some("view"), Some("page"), None},
        expected = {
            Some(("Filtro Sector", "Transporte".to_owned())),
            Some(("Ordenamiento", "country-asc".to_owned())),
            Some(("Cambio Vista", "Cuadrícula".to_owned())),
            None,
            None,
        }
    )]
    fn should_log_changed_control_only(
        changed: Option<&str>,
        expected: Option<(&'static str, String)>,
    ) {
        let query = DirectoryQuery {
            sector: Some("Transporte".to_owned()),
            search: Some("mexico".to_owned()),
            sort: Some("country-asc".to_owned()),
            page: Some(2),
            view: Some("grid".to_owned()),
            changed: changed.map(str::to_owned),
        };

        assert_eq!(expected, query.event());
    }

    #[test]
    fn should_log_all_sectors_when_sector_is_missing() {
        let query = DirectoryQuery {
            changed: Some("sector".to_owned()),
            ..DirectoryQuery::default()
        };

        assert_eq!(Some(("Filtro Sector", "all".to_owned())), query.event());
    }

    #[test]
    fn should_not_clamp_page_when_evaluating_as_is() {
        let query = DirectoryQuery::new_test(None, None, Some(99));

        let snapshot = query.evaluate(&sample_directory(), &DirectoryConfig::default());

        assert!(snapshot.is_empty());
        assert_eq!(99, *snapshot.query().page());
    }

    #[test]
    fn should_go_back_to_first_page_when_out_of_range() {
        let query = DirectoryQuery::new_test(Some("Energía"), None, Some(99));

        let snapshot = query.evaluate_clamped(&sample_directory(), &DirectoryConfig::default());

        assert_eq!(1, *snapshot.query().page());
        assert_eq!(5, snapshot.members().len());
    }
}
