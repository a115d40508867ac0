use crate::web::frontend::{filters, frontend_controller};
use crate::web::server::Server;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub struct FrontendServer {}

impl FrontendServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for FrontendServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.attach(Template::custom(|engines| {
            engines
                .tera
                .register_filter("sector_icon", filters::sector_icon);
            engines.tera.register_filter("whatsapp", filters::whatsapp);
        }))
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/",
                routes![
                    frontend_controller::index,
                    frontend_controller::member_detail,
                    frontend_controller::export_document,
                ],
            )
            .mount("/", FileServer::from("./public/static"))
            .register("/", catchers![frontend_controller::not_found])
    }
}
