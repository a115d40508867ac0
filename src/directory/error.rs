use thiserror::Error;

pub type Result<T, E = DirectoryError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("The members file can't be opened.")]
    CantOpenMembersFile,
    #[error("The members file is not a valid list of members.")]
    MalformedMembersFile,
    #[error("Several members share the identifier [{0}].")]
    DuplicateId(String),
    #[error("Member [{0}] doesn't belong to any sector.")]
    NoSector(String),
}
