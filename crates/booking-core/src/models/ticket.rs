//! Ticket and ticket type models
//!
//! Only a paid, in-person ticket whose type includes hotel lets its holder
//! book a room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    /// Ticket reserved, payment pending
    #[default]
    Reserved,
    /// Ticket paid
    Paid,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Reserved => write!(f, "RESERVED"),
            TicketStatus::Paid => write!(f, "PAID"),
        }
    }
}

impl TicketStatus {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "RESERVED" => Some(TicketStatus::Reserved),
            "PAID" => Some(TicketStatus::Paid),
            _ => None,
        }
    }

    /// Check if the ticket has been paid
    pub fn is_paid(&self) -> bool {
        matches!(self, TicketStatus::Paid)
    }
}

/// Ticket category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    /// Online attendance, no physical presence
    pub is_remote: bool,
    /// Hotel stay bundled with the ticket
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket entity, loaded together with its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type: TicketType,
}

impl Ticket {
    /// Whether the ticket entitles its holder to a hotel room
    pub fn allows_hotel_booking(&self) -> bool {
        self.status.is_paid() && !self.ticket_type.is_remote && self.ticket_type.includes_hotel
    }
}
