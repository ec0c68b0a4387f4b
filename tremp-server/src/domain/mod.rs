//! Domain types for the ride-share board.
//!
//! This module contains the core domain model types that represent
//! validated transport data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod bus;
mod days;
mod ride;
mod time;

pub use bus::BusLine;
pub use days::{InvalidWeekday, MAX_WEEKDAY, WeekdaySet, weekday_index};
pub use ride::{InvalidRideKind, Recurrence, Ride, RideId, RideKind, UserId};
pub use time::{DayTime, TimeError, TimeRange};
