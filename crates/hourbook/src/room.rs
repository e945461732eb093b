//! A bookable room: identity, location, capacity, and reserved hours.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BookingError;

/// Number of bookable slots in a day. Valid hours are `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u8 = 24;

/// A unique identifier for a room.
///
/// Newtype over the user-supplied id string, so a room id can't be
/// confused with a building name in a signature. `#[serde(transparent)]`
/// keeps the JSON form a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lets a `HashMap<RoomId, _>` be queried with a plain `&str`.
impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A bookable room.
///
/// Rooms are created through [`BookingSystem::add_room`] and mutated only
/// by booking an hour. There is no cancellation — a booked hour stays
/// booked for the life of the process.
///
/// [`BookingSystem::add_room`]: crate::BookingSystem::add_room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    building: String,
    capacity: u32,
    /// Hours already reserved. A `BTreeSet` can't hold duplicates and
    /// iterates in sorted order, which is exactly what display needs.
    booked_hours: BTreeSet<u8>,
}

impl Room {
    pub(crate) fn new(id: RoomId, building: String, capacity: u32) -> Self {
        Self {
            id,
            building,
            capacity,
            booked_hours: BTreeSet::new(),
        }
    }

    /// The room's unique id.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// The building this room is in.
    pub fn building(&self) -> &str {
        &self.building
    }

    /// How many people the room holds.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The reserved hours, in ascending order.
    pub fn booked_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.booked_hours.iter().copied()
    }

    /// Returns `true` if `hour` is not reserved.
    ///
    /// Pure membership test — an out-of-range hour is simply "available",
    /// since such a value can never be stored.
    pub fn is_available(&self, hour: u8) -> bool {
        !self.booked_hours.contains(&hour)
    }

    /// Reserves `hour` on this room.
    ///
    /// Fails with [`BookingError::AlreadyBooked`] if the hour is taken,
    /// or [`BookingError::InvalidArgument`] if `hour` is past 23. The
    /// availability check runs first, matching the original behavior;
    /// the order is unobservable because out-of-range hours are rejected
    /// before they can ever be stored.
    pub fn book(&mut self, hour: u8) -> Result<(), BookingError> {
        if !self.is_available(hour) {
            return Err(BookingError::AlreadyBooked {
                room: self.id.clone(),
                hour,
            });
        }
        if hour >= HOURS_PER_DAY {
            return Err(BookingError::InvalidArgument(format!(
                "hour must be between 0 and 23, got {hour}"
            )));
        }

        self.booked_hours.insert(hour);
        tracing::debug!(room = %self.id, hour, "hour booked");
        Ok(())
    }
}

/// Human-readable room summary: one line of metadata, one line of hours.
///
/// ```text
/// Room: 101 | Building: Main | Capacity: 30
/// Booked hours: 9, 14
/// ```
///
/// Prints `None` when no hours are booked.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Room: {} | Building: {} | Capacity: {}",
            self.id, self.building, self.capacity
        )?;
        if self.booked_hours.is_empty() {
            write!(f, "Booked hours: None")
        } else {
            let hours: Vec<String> =
                self.booked_hours.iter().map(u8::to_string).collect();
            write!(f, "Booked hours: {}", hours.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(RoomId::from("101"), "Main".to_owned(), 30)
    }

    #[test]
    fn test_new_room_is_fully_available() {
        let room = room();
        for hour in 0..HOURS_PER_DAY {
            assert!(room.is_available(hour));
        }
    }

    #[test]
    fn test_book_marks_hour_unavailable() {
        let mut room = room();
        room.book(9).unwrap();
        assert!(!room.is_available(9));
        assert!(room.is_available(10));
    }

    #[test]
    fn test_book_same_hour_twice_fails() {
        let mut room = room();
        room.book(9).unwrap();
        let err = room.book(9).unwrap_err();
        assert!(matches!(err, BookingError::AlreadyBooked { hour: 9, .. }));
    }

    #[test]
    fn test_book_out_of_range_fails() {
        let mut room = room();
        let err = room.book(24).unwrap_err();
        assert!(matches!(err, BookingError::InvalidArgument(_)));
        let err = room.book(255).unwrap_err();
        assert!(matches!(err, BookingError::InvalidArgument(_)));
    }

    #[test]
    fn test_boundary_hours_are_bookable() {
        let mut room = room();
        room.book(0).unwrap();
        room.book(23).unwrap();
        assert_eq!(room.booked_hours().collect::<Vec<_>>(), vec![0, 23]);
    }

    #[test]
    fn test_failed_booking_leaves_availability_unchanged() {
        let mut room = room();
        room.book(9).unwrap();

        let before: Vec<bool> =
            (0..HOURS_PER_DAY).map(|h| room.is_available(h)).collect();
        let _ = room.book(9); // AlreadyBooked
        let _ = room.book(24); // InvalidArgument
        let after: Vec<bool> =
            (0..HOURS_PER_DAY).map(|h| room.is_available(h)).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_display_sorted_hours() {
        let mut room = room();
        room.book(14).unwrap();
        room.book(9).unwrap();
        assert_eq!(
            room.to_string(),
            "Room: 101 | Building: Main | Capacity: 30\nBooked hours: 9, 14"
        );
    }

    #[test]
    fn test_display_none_when_empty() {
        assert!(room().to_string().ends_with("Booked hours: None"));
    }

    #[test]
    fn test_room_id_serializes_transparently() {
        let mut room = room();
        room.book(9).unwrap();
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["id"], "101");
        assert_eq!(json["booked_hours"], serde_json::json!([9]));
    }
}
