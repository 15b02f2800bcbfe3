//! # Calendar
//!
//! The shop works a fixed six-day week and hands out one slot per whole hour.
//!
//! * [`Weekday`]: Monday through Saturday. Sunday is a closed day and is not
//!   modelled at all.
//! * [`HourRange`]: an inclusive opening range, expanded into slot labels
//!   such as `"9h"`, `"10h"`.

mod hours;
mod weekday;

pub use hours::{HourRange, slot_label};
pub use weekday::Weekday;
