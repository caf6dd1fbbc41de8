//! Hotel and room models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: i32,

    /// Room label, e.g. "1020"
    pub name: String,

    /// Maximum number of simultaneous bookings
    pub capacity: i32,

    /// Owning hotel
    pub hotel_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Whether `occupancy` existing bookings leave no room for another one
    pub fn is_full(&self, occupancy: usize) -> bool {
        i64::try_from(occupancy).unwrap_or(i64::MAX) >= i64::from(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use crate::models::Room;

    #[test]
    fn test_room_is_full() {
        let room = Room {
            capacity: 3,
            ..fixtures::room()
        };

        assert!(!room.is_full(0));
        assert!(!room.is_full(2));
        assert!(room.is_full(3));
        assert!(room.is_full(4));
    }

    #[test]
    fn test_zero_capacity_room_is_always_full() {
        let room = Room {
            capacity: 0,
            ..fixtures::room()
        };

        assert!(room.is_full(0));
    }
}
