//! # People
//!
//! * [`Person`]: name plus national ID, the identity every role shares.
//! * [`Barber`]: a person with a salary who owns the shop's free-slot schedule.
//! * [`Client`]: a person holding one booking (service, price, day, slot).
//!
//! A visitor is just a [`Person`] with no role-specific data, see
//! [`crate::directory::Role`].

mod barber;
mod client;
mod person;

pub use barber::Barber;
pub use client::Client;
pub use person::{NationalId, Person};
