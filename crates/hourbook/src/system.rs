//! Booking system: registers rooms and routes bookings to them.

use std::collections::HashMap;

use crate::{BookingError, Room, RoomId, RoomQuery};

/// Owns every registered room and is the entry point for all booking
/// operations from higher layers (the menu, tests).
///
/// Rooms live in a `Vec` so queries return them in the order they were
/// registered; the index maps each id to its slot in that list. A room,
/// once registered, is never removed (key invariant — slots are stable).
#[derive(Debug, Default)]
pub struct BookingSystem {
    /// All rooms, in registration order.
    rooms: Vec<Room>,
    /// Maps each room id to its slot in `rooms`.
    index: HashMap<RoomId, usize>,
}

impl BookingSystem {
    /// Creates a new, empty booking system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new room with no booked hours.
    ///
    /// Fails with [`BookingError::AlreadyExists`] if the id is taken.
    pub fn add_room(
        &mut self,
        id: impl Into<RoomId>,
        building: impl Into<String>,
        capacity: u32,
    ) -> Result<(), BookingError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(BookingError::AlreadyExists(id));
        }

        self.index.insert(id.clone(), self.rooms.len());
        self.rooms.push(Room::new(id.clone(), building.into(), capacity));
        tracing::info!(room = %id, "room registered");
        Ok(())
    }

    /// Reserves `hour` on the room with the given id.
    ///
    /// Fails with [`BookingError::NotFound`] for an unknown id; room-level
    /// errors ([`BookingError::AlreadyBooked`],
    /// [`BookingError::InvalidArgument`]) propagate unchanged.
    pub fn book(&mut self, id: &str, hour: u8) -> Result<(), BookingError> {
        let slot = self.slot(id)?;
        self.rooms[slot].book(hour)
    }

    /// Returns every room matching all of the query's filters, in
    /// registration order. An empty query returns all rooms.
    pub fn find_rooms(&self, query: &RoomQuery) -> Vec<&Room> {
        self.rooms.iter().filter(|room| query.matches(room)).collect()
    }

    /// Returns the room with the given id, for display.
    ///
    /// Fails with [`BookingError::NotFound`] if absent.
    pub fn view_room(&self, id: &str) -> Result<&Room, BookingError> {
        let slot = self.slot(id)?;
        Ok(&self.rooms[slot])
    }

    /// Returns the number of registered rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are registered.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over all rooms in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    fn slot(&self, id: &str) -> Result<usize, BookingError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| BookingError::NotFound(RoomId::from(id)))
    }
}
