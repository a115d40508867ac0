use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::error::Result;
use crate::event_log::EventLog;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;
use rocket::{Build, Rocket};
use std::sync::Arc;

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub trait Server {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let config = DirectoryConfig::from_args();
    let directory = match load_directory(&config) {
        Ok(directory) => directory,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };
    let event_log = EventLog::from_args();
    info!("Events are logged to {}", event_log.path().display());

    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", get_port())));
    build_rocket(rocket_build, Arc::new(directory), config, event_log)
}

pub fn build_rocket(
    rocket_build: Rocket<Build>,
    directory: Arc<Directory>,
    config: DirectoryConfig,
    event_log: EventLog,
) -> Rocket<Build> {
    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new(directory, config, event_log)),
        Box::new(FrontendServer::new()),
    ];
    servers.iter().fold(rocket_build, |rocket_build, server| {
        server.mount_routes(server.initialize_managed_states(rocket_build))
    })
}

fn load_directory(config: &DirectoryConfig) -> Result<Directory> {
    Ok(Directory::load(config.members_source())?)
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ENV_ARG).unwrap_or(DEFAULT_PORT)
}
