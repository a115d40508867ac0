//! Exports always work on every member matching the query, not only the displayed page.

use crate::query::{QuerySpec, SectorFilter};
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::member::Member;
use thiserror::Error;

pub mod csv;
pub mod pdf;

const FILE_NAME_PREFIX: &str = "Directorio_Redes_PM";

pub type Result<T, E = ExportError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("Members can't be written as CSV.")]
    CantWriteCsv,
    #[error("Members can't be written as PDF.")]
    CantWritePdf,
}

pub fn file_name(generated_on: NaiveDate, extension: &str) -> String {
    format!(
        "{FILE_NAME_PREFIX}_{}.{extension}",
        generated_on.format("%Y-%m-%d")
    )
}

/// What the PDF document is made of: the filters that have been applied and the matches.
#[derive(Debug, Getters)]
pub struct ExportDocument<'a> {
    sector: Option<String>,
    search_term: Option<String>,
    total_members: usize,
    generated_on: String,
    members: &'a [&'a Member],
}

impl<'a> ExportDocument<'a> {
    pub fn new(spec: &QuerySpec, matches: &'a [&'a Member], generated_on: NaiveDate) -> Self {
        let sector = match spec.sector_filter() {
            SectorFilter::All => None,
            SectorFilter::Sector(sector) => Some(sector.clone()),
        };
        let search_term = Some(spec.search_term().trim())
            .filter(|search_term| !search_term.is_empty())
            .map(str::to_owned);

        Self {
            sector,
            search_term,
            total_members: matches.len(),
            generated_on: generated_on.format("%d/%m/%Y").to_string(),
            members: matches,
        }
    }
}
