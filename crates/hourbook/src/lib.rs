//! In-memory hourly room booking.
//!
//! Register rooms, reserve hourly timeslots, and query rooms by building,
//! capacity, or availability. Everything lives in one owned
//! [`BookingSystem`] value — no persistence, no concurrency, no network.
//!
//! # Key types
//!
//! - [`BookingSystem`] — registers rooms, routes bookings, runs queries
//! - [`Room`] — one bookable room and its reserved hours
//! - [`RoomQuery`] — optional filters for [`BookingSystem::find_rooms`]
//! - [`BookingError`] — everything that can go wrong

mod error;
mod query;
mod room;
mod system;

pub use error::BookingError;
pub use query::RoomQuery;
pub use room::{HOURS_PER_DAY, Room, RoomId};
pub use system::BookingSystem;
