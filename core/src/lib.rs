//! # Barbershop Core
//!
//! The in-memory scheduling model of a single-barber shop.
//!
//! * **[`schedule`]**: the barber's free slots per working day.
//! * **[`people`]**: identity records (`Person`) and the `Barber` / `Client` roles.
//! * **[`shop`]**: the aggregate that books, edits and cancels against the schedule.
//! * **[`directory`]**: registered members by national ID, doubling as the login table.
//! * **[`session`]**: which operations an authenticated member may reach.
//! * **[`revenue`]**: booking revenue against the barber's salary.
//! * **[`state`]**: [`AppState`], everything a running session mutates.
//!
//! The central invariant: free slots and bookings partition each day's slots,
//! so no (day, slot) pair can be booked twice.

pub mod directory;
pub mod people;
pub mod revenue;
pub mod schedule;
pub mod session;
pub mod shop;
pub mod state;

pub use directory::{Directory, Member, Role};
pub use people::{Barber, Client, NationalId, Person};
pub use schedule::ScheduleRegistry;
pub use session::{Capability, Session};
pub use shop::{ClientUpdate, Shop};
pub use state::AppState;
