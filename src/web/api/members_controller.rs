use crate::contact::share_text;
use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::event_log::{EventLog, record_in_background};
use crate::export::csv::write_members;
use crate::export::file_name;
use crate::query::evaluate;
use crate::session::DirectorySnapshot;
use crate::tools::log_error_and_return;
use crate::web::attachment::Attachment;
use crate::web::client_info::ClientInfo;
use crate::web::query::DirectoryQuery;
use chrono::Local;
use dto::member::Member;
use rocket::State;
use rocket::http::{ContentType, Status};
use rocket::serde::json::Json;
use std::sync::Arc;

/// Run the query as is: no page clamping, a page out of range gives an empty window.
#[get("/members?<query..>")]
pub async fn list_members(
    directory: &State<Arc<Directory>>,
    config: &State<DirectoryConfig>,
    query: DirectoryQuery,
) -> Json<DirectorySnapshot> {
    Json(query.evaluate(directory, config))
}

#[get("/members/<id>")]
pub async fn find_member(directory: &State<Arc<Directory>>, id: &str) -> Option<Json<Member>> {
    directory.find(id).cloned().map(Json)
}

#[get("/members/<id>/share")]
pub async fn share_member(
    directory: &State<Arc<Directory>>,
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    id: &str,
) -> Option<String> {
    let member = directory.find(id)?;
    record_in_background(
        event_log,
        client_info.event("Compartir Contacto", member.name()),
    );
    Some(share_text(member))
}

/// Every member matching the query, whatever the page, as a CSV attachment.
#[get("/export.csv?<query..>")]
pub async fn export_csv(
    directory: &State<Arc<Directory>>,
    config: &State<DirectoryConfig>,
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    query: DirectoryQuery,
) -> Result<Attachment, Status> {
    let spec = query.to_query_spec(config);
    let result = evaluate(directory, &spec);
    let csv = write_members(result.matches())
        .map_err(log_error_and_return(Status::InternalServerError))?;

    record_in_background(
        event_log,
        client_info.event(
            "Descargar CSV",
            &format!("{} miembros", result.matches().len()),
        ),
    );
    Ok(Attachment::new(
        ContentType::CSV,
        csv.into_bytes(),
        &file_name(Local::now().date_naive(), "csv"),
    ))
}
