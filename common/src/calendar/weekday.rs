use std::fmt;
use std::str::FromStr;

use crate::error::ShopError;

/// A working day of the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All working days in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Maps a 1-based menu option to a day.
    pub fn from_menu_index(option: usize) -> Result<Self, ShopError> {
        option
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
            .ok_or_else(|| ShopError::InvalidSelection(option.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ShopError;

    /// Parses a day name, case-insensitive.
    ///
    /// Accepts English names and the Portuguese names the shop's staff use
    /// ("Segunda", "Terça", ..., "Sábado"), with or without accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let day = match lower.as_str() {
            "monday" | "segunda" => Weekday::Monday,
            "tuesday" | "terça" | "terca" => Weekday::Tuesday,
            "wednesday" | "quarta" => Weekday::Wednesday,
            "thursday" | "quinta" => Weekday::Thursday,
            "friday" | "sexta" => Weekday::Friday,
            "saturday" | "sábado" | "sabado" => Weekday::Saturday,
            _ => return Err(ShopError::InvalidDay(s.trim().to_string())),
        };
        Ok(day)
    }
}
