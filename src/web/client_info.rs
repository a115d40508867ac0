use crate::event_log::{EventEntry, now};
use rocket::request::{self, FromRequest, Outcome, Request};
use std::convert::Infallible;
use std::net::IpAddr;

const USER_AGENT_HEADER: &str = "User-Agent";

/// Who's calling: reported along with each logged event.
/// Never fails: unknown values are left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInfo {
    address: Option<IpAddr>,
    user_agent: Option<String>,
}

impl ClientInfo {
    pub fn address(&self) -> Option<IpAddr> {
        self.address
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// An event triggered by this client on the server side.
    pub fn event(&self, action: &str, detail: &str) -> EventEntry {
        EventEntry::new(
            Some(action),
            Some(detail),
            self.address,
            self.user_agent(),
            now(),
        )
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientInfo {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        Outcome::Success(ClientInfo {
            address: req.client_ip(),
            user_agent: req
                .headers()
                .get_one(USER_AGENT_HEADER)
                .map(str::to_owned),
        })
    }
}
