use crate::{AdminTicket, Credentials, Priority, Ticket, TicketStatus};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::borrow::Cow;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry the bearer token.
    const AUTHENTICATED: bool;
    /// The URL path, relative to the API base address.
    fn path(&self) -> Cow<'static, str>;
}

/// Response of endpoints whose body the client does not read.
///
/// Decodes from any JSON value, including `null` (used for empty bodies).
pub type Acknowledgement = Option<serde::de::IgnoredAny>;

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = crate::LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/auth/login")
    }
}

/// Create an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/auth/register")
    }
}

/// List the caller's own tickets.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTicketsRequest;

impl ApiRequest for ListTicketsRequest {
    type Response = Vec<Ticket>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/tickets")
    }
}

/// Same endpoint as `ListTicketsRequest`; the server adds the creator's
/// email when the bearer belongs to an administrator.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListAdminTicketsRequest;

impl ApiRequest for ListAdminTicketsRequest {
    type Response = Vec<AdminTicket>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/tickets")
    }
}

/// Open a new ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub description: String,
    pub priority: Priority,
}

impl ApiRequest for CreateTicketRequest {
    type Response = Ticket;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/tickets")
    }
}

/// Set the status of one ticket. The id travels in the path only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(skip)]
    pub id: i64,
    pub status: TicketStatus,
}

impl ApiRequest for UpdateStatusRequest {
    type Response = Acknowledgement;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/tickets/{}/status", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_status_keeps_id_out_of_body() {
        let req = UpdateStatusRequest {
            id: 42,
            status: TicketStatus::Resolved,
        };
        assert_eq!(req.path(), "/tickets/42/status");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"status":"resolvido"}"#
        );
    }

    #[test]
    fn login_body_is_plain_credentials() {
        let req = LoginRequest(Credentials {
            email: "a@x.com".into(),
            password: "secret".into(),
        });
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"email":"a@x.com","password":"secret"}"#
        );
    }

    #[test]
    fn acknowledgement_accepts_null_and_objects() {
        let empty: Acknowledgement = serde_json::from_str("null").unwrap();
        assert!(empty.is_none());
        let body: Acknowledgement = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert!(body.is_some());
    }
}
