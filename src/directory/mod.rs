use crate::directory::catalog::Sector;
use crate::directory::config::MembersSource;
use crate::directory::error::DirectoryError::{
    CantOpenMembersFile, DuplicateId, MalformedMembersFile, NoSector,
};
use crate::directory::error::{DirectoryError, Result};
use crate::query::sort::locale_cmp;
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use dto::member::Member;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::ops::Deref;

pub mod catalog;
pub mod config;
pub mod error;

const BUNDLED_MEMBERS: &str = include_str!("../../data/members.json");

/// The members of the directory, loaded once and never modified afterward.
///
/// Every member has a unique id and belongs to at least one sector.
/// Can be dereferenced into a slice of [Member]s, in file order.
#[derive(Debug, Getters, PartialEq)]
pub struct Directory {
    members: Vec<Member>,
}

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct Statistics {
    total_members: usize,
    total_countries: usize,
    countries: Vec<String>,
}

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct SectorCount {
    sector: &'static Sector,
    count: usize,
}

impl Deref for Directory {
    type Target = [Member];

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}

impl TryFrom<Vec<Member>> for Directory {
    type Error = DirectoryError;

    fn try_from(members: Vec<Member>) -> Result<Self> {
        let mut ids = HashSet::new();
        for member in &members {
            if member.sectors().is_empty() {
                return Err(NoSector(member.id().to_owned()));
            }
            if !ids.insert(member.id()) {
                return Err(DuplicateId(member.id().to_owned()));
            }
        }

        Ok(Self { members })
    }
}

impl Directory {
    pub fn load(source: &MembersSource) -> Result<Self> {
        let content = match source {
            MembersSource::Bundled => Cow::Borrowed(BUNDLED_MEMBERS),
            MembersSource::File(path) => {
                let content = fs::read_to_string(path).map_err(log_message_and_return(
                    &format!("Can't read members file [{}]", path.display()),
                    CantOpenMembersFile,
                ))?;
                Cow::Owned(content)
            }
        };

        let directory = Self::from_json(&content)?;
        info!("{} members loaded from {source:?}", directory.len());
        Ok(directory)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let members: Vec<Member> = rocket::serde::json::from_str(json).map_err(
            log_message_and_return("Can't parse members", MalformedMembersFile),
        )?;

        Self::try_from(members)
    }

    pub fn find(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == id)
    }

    pub fn statistics(&self) -> Statistics {
        let mut countries: Vec<String> = self
            .members
            .iter()
            .map(|member| member.country().to_owned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        countries.sort_by(|left, right| locale_cmp(left, right));

        Statistics {
            total_members: self.members.len(),
            total_countries: countries.len(),
            countries,
        }
    }

    /// Number of members for each sector of the catalog, in catalog order.
    pub fn sector_counts(&self) -> Vec<SectorCount> {
        catalog::sectors()
            .iter()
            .map(|sector| SectorCount {
                sector,
                count: self
                    .members
                    .iter()
                    .filter(|member| member.belongs_to(sector.name()))
                    .count(),
            })
            .collect()
    }
}
