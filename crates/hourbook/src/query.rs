//! Search criteria for finding rooms.

use serde::{Deserialize, Serialize};

use crate::Room;

/// Filters for [`BookingSystem::find_rooms`].
///
/// Every supplied filter must match; a `None` field is not applied at
/// all, so the default query matches every room.
///
/// [`BookingSystem::find_rooms`]: crate::BookingSystem::find_rooms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomQuery {
    /// Exact building name to match.
    pub building: Option<String>,
    /// Minimum capacity, inclusive.
    pub min_capacity: Option<u32>,
    /// Require the room to be free at this hour.
    pub free_at: Option<u8>,
}

impl RoomQuery {
    /// A query with no filters — matches every room.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to rooms in `building`.
    pub fn in_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Restricts matches to rooms holding at least `capacity` people.
    pub fn with_min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }

    /// Restricts matches to rooms with `hour` still free.
    pub fn free_at(mut self, hour: u8) -> Self {
        self.free_at = Some(hour);
        self
    }

    pub(crate) fn matches(&self, room: &Room) -> bool {
        self.building
            .as_deref()
            .is_none_or(|b| room.building() == b)
            && self
                .min_capacity
                .is_none_or(|min| room.capacity() >= min)
            && self.free_at.is_none_or(|hour| room.is_available(hour))
    }
}
