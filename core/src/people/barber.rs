use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_common::{Result, ShopError};

use super::Person;
use crate::schedule::ScheduleRegistry;

#[derive(Debug, Clone, PartialEq)]
pub struct Barber {
    pub person: Person,
    pub salary: f64,
    pub schedule: ScheduleRegistry,
}

impl Barber {
    pub fn new(person: Person, salary: f64) -> Self {
        Self {
            person,
            salary,
            schedule: ScheduleRegistry::new(),
        }
    }

    /// A salary must be a finite amount, zero or more.
    pub fn check_salary(salary: f64) -> Result<f64> {
        if !salary.is_finite() || salary < 0.0 {
            return Err(ShopError::InvalidNumericInput(salary.to_string()));
        }
        Ok(salary)
    }

    /// Builder-style helper that opens `hours` on `day`.
    pub fn with_hours(mut self, day: Weekday, hours: HourRange) -> Self {
        self.schedule.open_hours(day, hours);
        self
    }
}
