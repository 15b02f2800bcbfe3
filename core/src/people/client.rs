use barbershop_common::calendar::Weekday;
use barbershop_common::catalog::Service;

use super::{NationalId, Person};

/// One booking request. Once accepted by the shop it is a confirmed booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub person: Person,
    pub desired_service: String,
    pub price: f64,
    pub day: Weekday,
    pub desired_slot: String,
}

impl Client {
    pub fn new(person: Person, service: Service, day: Weekday, slot: impl Into<String>) -> Self {
        Self {
            person,
            desired_service: service.name.to_string(),
            price: service.price,
            day,
            desired_slot: slot.into(),
        }
    }

    pub fn id(&self) -> &NationalId {
        self.person.national_id()
    }
}
