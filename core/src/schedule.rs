//! The barber's free-slot registry.
//!
//! Every working day always has an entry, possibly empty. A slot that is in a
//! day's sequence is free; booking takes it out, cancelling puts it back.

use std::collections::BTreeMap;

use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_common::{Result, ShopError};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRegistry {
    free: BTreeMap<Weekday, Vec<String>>,
}

impl Default for ScheduleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRegistry {
    /// A registry with all six days present and no free slots.
    pub fn new() -> Self {
        let free = Weekday::ALL.iter().map(|day| (*day, Vec::new())).collect();
        Self { free }
    }

    /// Appends a slot to the day. Labels are not deduplicated.
    pub fn add_free_slot(&mut self, day: Weekday, slot: impl Into<String>) {
        self.day_mut(day).push(slot.into());
    }

    /// Removes the first occurrence of `slot` from the day.
    pub fn remove_free_slot(&mut self, day: Weekday, slot: &str) -> Result<()> {
        let slots = self.day_mut(day);
        let Some(idx) = slots.iter().position(|free| free == slot) else {
            return Err(ShopError::SlotNotFound {
                day,
                slot: slot.to_string(),
            });
        };
        slots.remove(idx);
        Ok(())
    }

    pub fn list_free_slots(&self, day: Weekday) -> &[String] {
        self.free.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_free(&self, day: Weekday, slot: &str) -> bool {
        self.list_free_slots(day).iter().any(|free| free == slot)
    }

    /// Opens every hour of `hours` on `day`, skipping labels that are already free.
    pub fn open_hours(&mut self, day: Weekday, hours: HourRange) {
        for label in hours.labels() {
            if !self.is_free(day, &label) {
                self.add_free_slot(day, label);
            }
        }
    }

    pub fn total_free(&self) -> usize {
        self.free.values().map(Vec::len).sum()
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        self.free.entry(day).or_default()
    }
}
