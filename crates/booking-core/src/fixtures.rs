//! Deterministic fixture builders for tests
//!
//! Every builder returns a fully populated value with fixed ids and
//! timestamps. Override individual fields with struct-update syntax:
//!
//! ```ignore
//! use booking_core::{fixtures, models::Room};
//!
//! let room = Room { capacity: 3, ..fixtures::room() };
//! assert_eq!(room.capacity, 3);
//! ```

use crate::models::{
    Address, Booking, BookingWithRoom, Enrollment, Hotel, Room, Ticket, TicketStatus, TicketType,
    User,
};
use chrono::{DateTime, Utc};

/// 2023-01-01T00:00:00Z
pub fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_672_531_200, 0).unwrap_or_default()
}

pub fn user() -> User {
    User {
        id: 1,
        email: "guest@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$fixture".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn address(enrollment_id: i32) -> Address {
    Address {
        id: 1,
        cep: "04538-133".to_string(),
        street: "Avenida Brigadeiro Faria Lima".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        number: "3252".to_string(),
        neighborhood: "Itaim Bibi".to_string(),
        address_detail: Some("de 3252 ao fim - lado par".to_string()),
        enrollment_id,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Enrollment for user 1, with one address
pub fn enrollment() -> Enrollment {
    Enrollment {
        id: 1,
        name: "Maria Silva".to_string(),
        cpf: "52998224725".to_string(),
        birthday: DateTime::from_timestamp(631_152_000, 0).unwrap_or_default(),
        phone: "(11) 98765-4321".to_string(),
        user_id: 1,
        created_at: timestamp(),
        updated_at: timestamp(),
        addresses: vec![address(1)],
    }
}

/// In-person ticket type with hotel included
pub fn ticket_type() -> TicketType {
    TicketType {
        id: 1,
        name: "Presencial + Hotel".to_string(),
        price: 600,
        is_remote: false,
        includes_hotel: true,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn ticket(ticket_type: TicketType, enrollment_id: i32, status: TicketStatus) -> Ticket {
    Ticket {
        id: 1,
        ticket_type_id: ticket_type.id,
        enrollment_id,
        status,
        created_at: timestamp(),
        updated_at: timestamp(),
        ticket_type,
    }
}

pub fn hotel() -> Hotel {
    Hotel {
        id: 1,
        name: "Hotel Copacabana".to_string(),
        image: "https://example.com/hotel.png".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Room 1 of hotel 1, capacity 2
pub fn room() -> Room {
    Room {
        id: 1,
        name: "Room 1".to_string(),
        capacity: 2,
        hotel_id: 1,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn booking(user_id: i32, room_id: i32) -> Booking {
    Booking {
        id: 1,
        user_id,
        room_id,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// `count` bookings of `room` by `user_id`, with ids 1..=count
pub fn bookings(user_id: i32, room: &Room, count: usize) -> Vec<Booking> {
    (1..=count)
        .map(|n| Booking {
            id: i32::try_from(n).unwrap_or(i32::MAX),
            ..booking(user_id, room.id)
        })
        .collect()
}

/// Booking 1 of user 1 in [`room`]
pub fn booking_with_room() -> BookingWithRoom {
    let room = room();
    BookingWithRoom {
        booking: booking(1, room.id),
        room,
    }
}
