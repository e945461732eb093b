//! Error types for the booking layer.

use crate::RoomId;

/// Errors that can occur during booking operations.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// No room with this id is registered.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The hour is already reserved on this room.
    #[error("hour {hour} in room {room} is already booked")]
    AlreadyBooked {
        /// The room the booking was attempted on.
        room: RoomId,
        /// The contested hour.
        hour: u8,
    },

    /// A room with this id has already been registered.
    #[error("room {0} already exists")]
    AlreadyExists(RoomId),

    /// A parameter is out of range or failed to parse.
    /// For example, an hour outside 0..=23.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
