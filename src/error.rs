use crate::directory::error::DirectoryError;
use crate::event_log::error::EventLogError;
use crate::export::ExportError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Error while loading the directory.")]
    Directory(#[from] DirectoryError),
    #[error("Error while logging an event.")]
    EventLog(#[from] EventLogError),
    #[error("Error while exporting members.")]
    Export(#[from] ExportError),
}
