use crate::error::ShopError;

const LAST_HOUR: u8 = 23;

/// Label of the one-hour slot starting at `hour`, e.g. `"14h"`.
pub fn slot_label(hour: u8) -> String {
    format!("{hour}h")
}

/// Inclusive range of opening hours for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourRange {
    open: u8,
    close: u8,
}

impl HourRange {
    /// Both ends must be within 0-23 and `open` must not be after `close`.
    pub fn new(open: u8, close: u8) -> Result<Self, ShopError> {
        if open > close || close > LAST_HOUR {
            return Err(ShopError::InvalidHourRange { open, close });
        }
        Ok(Self { open, close })
    }

    /// One slot label per whole hour, `close` included.
    pub fn labels(&self) -> impl Iterator<Item = String> {
        (self.open..=self.close).map(slot_label)
    }
}
