use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::event_log::EventLog;
use crate::web::api::{events_controller, members_controller};
use crate::web::server::Server;
use rocket::{Build, Rocket};
use std::sync::Arc;

pub struct ApiServer {
    directory: Arc<Directory>,
    config: DirectoryConfig,
    event_log: EventLog,
}

impl ApiServer {
    pub fn new(directory: Arc<Directory>, config: DirectoryConfig, event_log: EventLog) -> Self {
        Self {
            directory,
            config,
            event_log,
        }
    }
}

impl Server for ApiServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.directory.clone())
            .manage(self.config.clone())
            .manage(self.event_log.clone())
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount(
            "/api/",
            routes![
                events_controller::log_event,
                events_controller::log_event_wrong_method,
                members_controller::list_members,
                members_controller::find_member,
                members_controller::share_member,
                members_controller::export_csv,
            ],
        )
    }
}
