use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;
pub use protocol::{
    Acknowledgement, ApiRequest, CreateTicketRequest, HttpMethod, ListAdminTicketsRequest,
    ListTicketsRequest, LoginRequest, RegisterRequest, UpdateStatusRequest,
};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Descriptions longer than this are cut in list views.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// Ticket priority as exchanged with the API (`baixa`, `media`, `alta`).
///
/// Values the client does not know are kept verbatim in `Unknown` so a
/// ticket list never fails to decode because of a new priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Unknown(String),
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Case-insensitive parse, falling back to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "baixa" => Priority::Low,
            "media" | "média" => Priority::Medium,
            "alta" => Priority::High,
            _ => Priority::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "baixa",
            Priority::Medium => "media",
            Priority::High => "alta",
            Priority::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::parse(&value)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// Ticket status as exchanged with the API (`pendente`, `resolvido`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    Pending,
    Resolved,
    Unknown(String),
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 2] = [TicketStatus::Pending, TicketStatus::Resolved];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pendente" => TicketStatus::Pending,
            "resolvido" => TicketStatus::Resolved,
            _ => TicketStatus::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Pending => "pendente",
            TicketStatus::Resolved => "resolvido",
            TicketStatus::Unknown(raw) => raw,
        }
    }

    /// The status an admin toggle requests. Only `Pending` moves to
    /// `Resolved`; anything else goes back to `Pending`.
    pub fn toggled(&self) -> TicketStatus {
        match self {
            TicketStatus::Pending => TicketStatus::Resolved,
            TicketStatus::Resolved | TicketStatus::Unknown(_) => TicketStatus::Pending,
        }
    }
}

impl From<String> for TicketStatus {
    fn from(value: String) -> Self {
        TicketStatus::parse(&value)
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A ticket as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub created_at: Timestamp,
}

impl Ticket {
    /// Description shortened to `limit` characters with a trailing ellipsis.
    pub fn preview(&self, limit: usize) -> String {
        if self.description.chars().count() > limit {
            let head: String = self.description.chars().take(limit).collect();
            format!("{}...", head)
        } else {
            self.description.clone()
        }
    }

    pub fn is_truncated(&self, limit: usize) -> bool {
        self.description.chars().count() > limit
    }
}

/// A ticket as seen by an administrator: the owner's record plus the creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTicket {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub email: String,
}

/// Body of both auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_is_case_insensitive_with_fallback() {
        assert_eq!(Priority::parse("ALTA"), Priority::High);
        assert_eq!(Priority::parse("Média"), Priority::Medium);
        assert_eq!(
            Priority::parse("urgent"),
            Priority::Unknown("urgent".to_string())
        );
    }

    #[test]
    fn status_toggle_is_complement() {
        assert_eq!(TicketStatus::Pending.toggled(), TicketStatus::Resolved);
        assert_eq!(TicketStatus::Resolved.toggled(), TicketStatus::Pending);
        assert_eq!(
            TicketStatus::Unknown("closed".into()).toggled(),
            TicketStatus::Pending
        );
    }

    #[test]
    fn admin_ticket_decodes_flattened_record() {
        let json = r#"{
            "id": 7,
            "description": "printer broken",
            "priority": "alta",
            "status": "pendente",
            "created_at": "2024-05-10T12:00:00Z",
            "email": "a@x.com"
        }"#;
        let ticket: AdminTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.ticket.id, 7);
        assert_eq!(ticket.ticket.priority, Priority::High);
        assert_eq!(ticket.ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.email, "a@x.com");
    }

    #[test]
    fn unknown_wire_values_survive_decoding() {
        let json = r#"{"id":1,"description":"x","priority":"critica","status":"arquivado","created_at":""}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.priority.as_str(), "critica");
        assert_eq!(ticket.status.as_str(), "arquivado");
        let encoded = serde_json::to_value(&ticket).unwrap();
        assert_eq!(encoded["priority"], "critica");
    }

    #[test]
    fn preview_truncates_by_characters() {
        let ticket = Ticket {
            id: 1,
            description: "é".repeat(130),
            priority: Priority::Low,
            status: TicketStatus::Pending,
            created_at: Timestamp::from("2024-01-01T00:00:00Z"),
        };
        let preview = ticket.preview(DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert!(ticket.is_truncated(DESCRIPTION_PREVIEW_CHARS));
    }
}
