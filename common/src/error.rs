//! Error types for scheduling operations

use thiserror::Error;

use crate::calendar::Weekday;

/// Every failure a schedule, shop or directory operation can report.
///
/// These are user-input errors: the session loop renders them and shows the
/// menu again, they never end the program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    /// The name does not match one of the six working days
    #[error("invalid day: '{0}'")]
    InvalidDay(String),

    /// The slot is not free on that day
    #[error("slot {slot} is not available on {day}")]
    SlotNotFound { day: Weekday, slot: String },

    /// No booking carries that ID
    #[error("no booking found for ID {0}")]
    ClientNotFound(String),

    /// The ID is already taken by another member
    #[error("ID {0} is already registered")]
    DuplicateId(String),

    /// A menu option outside of the listed range
    #[error("invalid option: {0}")]
    InvalidSelection(String),

    /// Text given where a number was expected
    #[error("'{0}' is not a valid number")]
    InvalidNumericInput(String),

    /// An answer that could not be read as text
    #[error("answer to '{0}' is not valid text")]
    InvalidText(String),

    /// A required answer was left blank
    #[error("{0} must not be empty")]
    EmptyField(String),

    #[error("invalid hours {open}h-{close}h: expected 0 <= open <= close <= 23")]
    InvalidHourRange { open: u8, close: u8 },

    #[error("no barber registered yet, register a barber first")]
    NoBarber,

    #[error("the shop already has a barber ({0})")]
    BarberAlreadyRegistered(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, ShopError>;
