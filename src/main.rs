#[macro_use]
extern crate rocket;

use directorio_redes::web::start_servers;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    start_servers()
}
