//! Application state threaded through every session loop.

use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_common::catalog::Service;
use barbershop_common::config::Config;
use barbershop_common::{Result, ShopError};
use tracing::warn;

use crate::directory::{Directory, Member};
use crate::people::{Barber, Client, Person};
use crate::shop::Shop;

/// The directory of members and, once a barber registered, the shop.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub directory: Directory,
    shop: Option<Shop>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            directory: Directory::new(),
            shop: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shop(&self) -> Result<&Shop> {
        self.shop.as_ref().ok_or(ShopError::NoBarber)
    }

    pub fn shop_mut(&mut self) -> Result<&mut Shop> {
        self.shop.as_mut().ok_or(ShopError::NoBarber)
    }

    /// Registers the shop's barber and opens the shop with the given hours.
    ///
    /// Days missing from `hours` stay closed.
    pub fn register_barber(
        &mut self,
        name: &str,
        id: &str,
        salary: f64,
        hours: &[(Weekday, HourRange)],
    ) -> Result<&Member> {
        if let Some(shop) = &self.shop {
            return Err(ShopError::BarberAlreadyRegistered(
                shop.barber().person.name.clone(),
            ));
        }

        let salary = Barber::check_salary(salary)?;
        let member = self.directory.register_barber(name, id, salary)?;

        let mut barber = Barber::new(member.person.clone(), salary);
        for (day, range) in hours {
            barber.schedule.open_hours(*day, *range);
        }
        self.shop = Some(Shop::new(barber).with_cancel_policy(self.config.cancel_policy));

        Ok(member)
    }

    /// Registers a client together with their first booking.
    ///
    /// If the slot turns out to be taken the registration is undone, so a
    /// failed booking leaves no member behind.
    pub fn register_client(
        &mut self,
        name: &str,
        id: &str,
        service: Service,
        day: Weekday,
        slot: &str,
    ) -> Result<()> {
        if !self.directory.has_barber() {
            return Err(ShopError::NoBarber);
        }

        let person = self.directory.register_client(name, id)?.person.clone();
        let national_id = person.national_id().clone();
        let booked = self.shop_mut()?.book(Client::new(person, service, day, slot));

        if !booked {
            warn!(id = %national_id, "booking failed, registration rolled back");
            self.directory.remove(&national_id);
            return Err(ShopError::SlotNotFound {
                day,
                slot: slot.to_string(),
            });
        }
        Ok(())
    }

    pub fn register_visitor(&mut self, name: &str, id: &str) -> Result<&Member> {
        self.directory.register_visitor(name, id)
    }

    /// Books on behalf of an existing or walk-in person. Reported as a
    /// `SlotNotFound` error rather than a bare `false` so the caller can
    /// render it.
    pub fn book(&mut self, person: Person, service: Service, day: Weekday, slot: &str) -> Result<()> {
        if person.national_id().is_empty() {
            return Err(ShopError::EmptyField("national ID".into()));
        }
        let shop = self.shop_mut()?;
        if shop.book(Client::new(person, service, day, slot)) {
            Ok(())
        } else {
            Err(ShopError::SlotNotFound {
                day,
                slot: slot.to_string(),
            })
        }
    }

    pub fn authenticate(&self, id: &str) -> Option<&Member> {
        self.directory.authenticate(id)
    }
}
