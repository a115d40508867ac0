use thiserror::Error;

pub type Result<T, E = EventLogError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum EventLogError {
    #[error("The event log folder can't be created.")]
    CantCreateLogFolder,
    #[error("The event log file can't be opened.")]
    CantOpenLogFile,
    #[error("The event log file can't be locked.")]
    CantLockLogFile,
    #[error("The event can't be written to the log file.")]
    CantWriteLogFile,
}
