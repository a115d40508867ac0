pub mod events_controller;
pub mod members_controller;
pub mod server;
