use crate::event_log::error::EventLogError;
use crate::event_log::{EventEntry, EventLog, format_timestamp, now};
use crate::tools::log_message_and_return;
use crate::web::client_info::ClientInfo;
use dto::event::{EventRequest, EventResponse};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::tokio::task;

/// Append the event to the event log.
/// The client gets a JSON status whatever happens, including when the body can't be decoded.
#[post("/events", data = "<event>")]
pub async fn log_event(
    event_log: &State<EventLog>,
    client_info: ClientInfo,
    event: Result<Json<EventRequest>, json::Error<'_>>,
) -> (Status, Json<EventResponse>) {
    let timestamp = now();
    let event = match event {
        Ok(event) => event.into_inner(),
        Err(error) => {
            warn!("Invalid event received: {error:?}");
            return (
                Status::BadRequest,
                Json(EventResponse::error(
                    "Invalid event".to_owned(),
                    Some(format_timestamp(&timestamp)),
                )),
            );
        }
    };

    let entry = EventEntry::from_request(
        &event,
        client_info.address(),
        client_info.user_agent(),
        timestamp,
    );
    let event_log = event_log.inner().clone();
    let written = task::spawn_blocking(move || event_log.append(&entry))
        .await
        .map_err(log_message_and_return(
            "Event writer has been interrupted",
            EventLogError::CantWriteLogFile,
        ))
        .and_then(|written| written);
    match written {
        Ok(bytes_written) => (
            Status::Ok,
            Json(EventResponse::success(
                "Event logged".to_owned(),
                format_timestamp(&timestamp),
                bytes_written,
            )),
        ),
        Err(error) => (
            Status::InternalServerError,
            Json(EventResponse::error(
                error.to_string(),
                Some(format_timestamp(&timestamp)),
            )),
        ),
    }
}

#[get("/events")]
pub async fn log_event_wrong_method() -> (Status, Json<EventResponse>) {
    (
        Status::MethodNotAllowed,
        Json(EventResponse::error(
            "Events must be sent with POST".to_owned(),
            None,
        )),
    )
}
