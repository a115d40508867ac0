use crate::directory::Directory;
use crate::directory::config::DirectoryConfig;
use crate::event_log::{EventLog, record_in_background};
use crate::export::pdf::write_document;
use crate::export::{ExportDocument, file_name};
use crate::query::evaluate;
use crate::tools::log_error_and_return;
use crate::web::attachment::Attachment;
use crate::web::client_info::ClientInfo;
use crate::web::query::DirectoryQuery;
use chrono::Local;
use rocket::http::{ContentType, Status};
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};
use std::sync::Arc;

const TITLE: &str = "Directorio de Redes de Proyecto Mesoamérica";

/// The directory page. A page out of range brings the user back to the first one.
#[get("/?<query..>")]
pub async fn index(
    directory: &State<Arc<Directory>>,
    config: &State<DirectoryConfig>,
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    query: DirectoryQuery,
) -> Template {
    if let Some((action, detail)) = query.event() {
        record_in_background(event_log, client_info.event(action, &detail));
    }
    let snapshot = query.evaluate_clamped(directory, config);

    Template::render(
        "directory",
        context! {
            title: TITLE,
            statistics: directory.statistics(),
            sectors: directory.sector_counts(),
            snapshot: snapshot,
        },
    )
}

#[get("/members/<id>")]
pub async fn member_detail(
    directory: &State<Arc<Directory>>,
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    id: &str,
) -> Option<Template> {
    let member = directory.find(id)?;
    record_in_background(
        event_log,
        client_info.event("Ver Detalle Completo", member.name()),
    );

    Some(Template::render(
        "member",
        context! {
            title: member.name(),
            member: member,
        },
    ))
}

/// Every member matching the query, whatever the page, as a PDF document.
#[get("/export?<query..>")]
pub async fn export_document(
    directory: &State<Arc<Directory>>,
    config: &State<DirectoryConfig>,
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    query: DirectoryQuery,
) -> Result<Attachment, Status> {
    let spec = query.to_query_spec(config);
    let result = evaluate(directory, &spec);
    let today = Local::now().date_naive();
    let document = ExportDocument::new(&spec, result.matches(), today);
    let pdf = write_document(&document).map_err(log_error_and_return(Status::InternalServerError))?;

    record_in_background(
        event_log,
        client_info.event(
            "Descargar PDF",
            &format!("{} miembros", result.matches().len()),
        ),
    );
    Ok(Attachment::new(
        ContentType::PDF,
        pdf,
        &file_name(today, "pdf"),
    ))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: TITLE,
            uri: req.uri()
        },
    )
}
