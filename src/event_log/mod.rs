//! Append-only log of the directory's usage events, one line per event.

use crate::event_log::error::EventLogError::{
    CantCreateLogFolder, CantLockLogFile, CantOpenLogFile, CantWriteLogFile,
};
use crate::event_log::error::Result;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_message_and_return;
use chrono::{Local, NaiveDateTime};
use derive_getters::Getters;
use dto::event::EventRequest;
use rocket::tokio::task;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub mod error;

const EVENT_LOG_ARG: &str = "--event-log";
const DEFAULT_EVENT_LOG: &str = "data/directory_events.txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const USER_AGENT_MAX_LENGTH: usize = 100;
const UNKNOWN_ACTION: &str = "Unknown";
const NO_DETAIL: &str = "No detail";
const UNKNOWN: &str = "Unknown";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

// region EventEntry
#[derive(Debug, Clone, Getters, PartialEq)]
pub struct EventEntry {
    action: String,
    detail: String,
    address: String,
    user_agent: String,
    timestamp: NaiveDateTime,
}

impl EventEntry {
    pub fn new(
        action: Option<&str>,
        detail: Option<&str>,
        address: Option<IpAddr>,
        user_agent: Option<&str>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            action: single_line(action.unwrap_or(UNKNOWN_ACTION)),
            detail: single_line(detail.unwrap_or(NO_DETAIL)),
            address: address
                .map(|address| address.to_string())
                .unwrap_or(UNKNOWN.to_owned()),
            user_agent: single_line(
                &user_agent
                    .unwrap_or(UNKNOWN)
                    .chars()
                    .take(USER_AGENT_MAX_LENGTH)
                    .collect::<String>(),
            ),
            timestamp,
        }
    }

    pub fn from_request(
        request: &EventRequest,
        address: Option<IpAddr>,
        user_agent: Option<&str>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(
            request.action().as_deref(),
            request.detail().as_deref(),
            address,
            user_agent,
            timestamp,
        )
    }

    pub fn to_line(&self) -> String {
        format!(
            "[{}] Action: {} | Detail: {} | IP: {} | User-Agent: {}\n",
            format_timestamp(&self.timestamp),
            self.action,
            self.detail,
            self.address,
            self.user_agent
        )
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
// endregion

// region EventLog
/// Writers of the same process are serialized by a mutex,
/// writers from other processes by an exclusive lock on the file.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
    writer: Arc<Mutex<()>>,
}

impl EventLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Build the event log from `--event-log=<path>`.
    pub fn from_args() -> Self {
        let path = retrieve_arg_value(EVENT_LOG_ARG)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_EVENT_LOG.to_owned());
        Self::new(PathBuf::from(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the entry as a single line. Return the number of bytes written.
    pub fn append(&self, entry: &EventEntry) -> Result<usize> {
        let line = entry.to_line();
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(folder) = self.path.parent().filter(|folder| !folder.as_os_str().is_empty()) {
            fs::create_dir_all(folder).map_err(log_message_and_return(
                "Can't create event log folder",
                CantCreateLogFolder,
            ))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(log_message_and_return(
                "Can't open event log file",
                CantOpenLogFile,
            ))?;
        file.lock().map_err(log_message_and_return(
            "Can't lock event log file",
            CantLockLogFile,
        ))?;
        file.write_all(line.as_bytes())
            .map_err(log_message_and_return(
                "Can't write to event log file",
                CantWriteLogFile,
            ))?;

        debug!("Event logged: {}", line.trim_end());
        Ok(line.len())
    }
}
// endregion

/// Log an event without waiting for it to be written.
/// A failure is only reported in the application logs.
pub fn record_in_background(event_log: &EventLog, entry: EventEntry) {
    let event_log = event_log.clone();
    task::spawn_blocking(move || {
        if let Err(error) = event_log.append(&entry) {
            warn!("Event [{}] has not been logged: {error}", entry.action());
        }
    });
}
