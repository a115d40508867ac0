use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
mod attachment;
mod client_info;
mod frontend;
mod query;
mod server;

pub fn start_servers() -> Rocket<Build> {
    build_server()
}
