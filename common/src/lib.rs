//! # Barbershop Common
//!
//! Vocabulary shared by every crate in the workspace.
//!
//! * **[`calendar`]**: the fixed working week and hour-based slot labels.
//! * **[`catalog`]**: the service menu with its fixed prices.
//! * **[`error`]**: [`ShopError`], the error type of every domain operation.
//! * **[`config`]**: runtime options collected from the command line.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;

pub use error::{Result, ShopError};
