//! # Shop
//!
//! The aggregate root: one barber, whose schedule holds the free slots, and the
//! bookings taken out of that schedule, in the order they were made.
//!
//! Every mutation keeps the partition intact. A booked (day, slot) is never
//! free, and a cancelled or moved booking returns its slot to the schedule.

use barbershop_common::calendar::Weekday;
use barbershop_common::config::CancelPolicy;
use barbershop_common::{Result, ShopError};
use tracing::{debug, info};

use crate::people::{Barber, Client, NationalId};

/// Field changes for [`Shop::edit`].
///
/// `None` keeps the current value. `Some` overwrites it, an empty string
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub desired_service: Option<String>,
    pub price: Option<f64>,
    pub day: Option<Weekday>,
    pub desired_slot: Option<String>,
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Shop {
    barber: Barber,
    bookings: Vec<Client>,
    cancel_policy: CancelPolicy,
}

impl Shop {
    pub fn new(barber: Barber) -> Self {
        Self {
            barber,
            bookings: Vec::new(),
            cancel_policy: CancelPolicy::default(),
        }
    }

    pub fn with_cancel_policy(mut self, cancel_policy: CancelPolicy) -> Self {
        self.cancel_policy = cancel_policy;
        self
    }

    pub fn barber(&self) -> &Barber {
        &self.barber
    }

    pub fn list_available(&self, day: Weekday) -> &[String] {
        self.barber.schedule.list_free_slots(day)
    }

    /// Books the client's (day, slot) if it is free.
    ///
    /// Returns `false` and leaves the shop untouched when the slot is taken or
    /// was never opened.
    #[must_use]
    pub fn book(&mut self, client: Client) -> bool {
        if self
            .barber
            .schedule
            .remove_free_slot(client.day, &client.desired_slot)
            .is_err()
        {
            debug!(day = %client.day, slot = %client.desired_slot, "slot unavailable");
            return false;
        }

        info!(
            client = %client.id(),
            day = %client.day,
            slot = %client.desired_slot,
            "booking confirmed"
        );
        self.bookings.push(client);
        true
    }

    pub fn list_bookings(&self) -> &[Client] {
        &self.bookings
    }

    /// Applies `update` to the first booking with `id`.
    ///
    /// Moving a booking is all-or-nothing: the new (day, slot) must be free,
    /// otherwise `SlotNotFound` is returned and neither the booking nor the
    /// schedule change.
    pub fn edit(&mut self, id: &NationalId, update: ClientUpdate) -> Result<()> {
        let idx = self
            .position(id)
            .ok_or_else(|| ShopError::ClientNotFound(id.to_string()))?;

        let booking = &self.bookings[idx];
        let old_day = booking.day;
        let old_slot = booking.desired_slot.clone();
        let new_day = update.day.unwrap_or(old_day);
        let new_slot = update.desired_slot.unwrap_or_else(|| old_slot.clone());

        if (new_day, new_slot.as_str()) != (old_day, old_slot.as_str()) {
            self.barber.schedule.remove_free_slot(new_day, &new_slot)?;
            self.barber.schedule.add_free_slot(old_day, old_slot);
            debug!(client = %id, day = %new_day, slot = %new_slot, "booking moved");
        }

        let booking = &mut self.bookings[idx];
        if let Some(name) = update.name {
            booking.person.name = name;
        }
        if let Some(service) = update.desired_service {
            booking.desired_service = service;
        }
        if let Some(price) = update.price {
            booking.price = price;
        }
        booking.day = new_day;
        booking.desired_slot = new_slot;

        info!(client = %id, "booking updated");
        Ok(())
    }

    /// Cancels the bookings with `id`, as many as the cancel policy allows,
    /// and frees their slots. Returns the removed bookings.
    pub fn cancel(&mut self, id: &NationalId) -> Result<Vec<Client>> {
        let removed: Vec<Client> = match self.cancel_policy {
            CancelPolicy::First => {
                let idx = self
                    .position(id)
                    .ok_or_else(|| ShopError::ClientNotFound(id.to_string()))?;
                vec![self.bookings.remove(idx)]
            }
            CancelPolicy::All => {
                let (removed, kept) = std::mem::take(&mut self.bookings)
                    .into_iter()
                    .partition(|booking| booking.id() == id);
                self.bookings = kept;
                removed
            }
        };

        if removed.is_empty() {
            return Err(ShopError::ClientNotFound(id.to_string()));
        }

        for booking in &removed {
            self.barber
                .schedule
                .add_free_slot(booking.day, booking.desired_slot.clone());
        }

        info!(client = %id, count = removed.len(), "booking cancelled");
        Ok(removed)
    }

    fn position(&self, id: &NationalId) -> Option<usize> {
        self.bookings.iter().position(|booking| booking.id() == id)
    }
}
