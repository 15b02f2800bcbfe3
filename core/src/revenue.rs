//! Booking revenue compared against the barber's salary. Recomputed on demand.

use crate::people::{Barber, Client};

pub fn total_revenue(bookings: &[Client]) -> f64 {
    bookings.iter().map(|booking| booking.price).sum()
}

pub fn exceeds_salary(barber: &Barber, bookings: &[Client]) -> bool {
    total_revenue(bookings) > barber.salary
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueReport {
    pub total: f64,
    pub salary: f64,
    pub bookings: usize,
}

impl RevenueReport {
    pub fn compute(barber: &Barber, bookings: &[Client]) -> Self {
        Self {
            total: total_revenue(bookings),
            salary: barber.salary,
            bookings: bookings.len(),
        }
    }

    pub fn exceeds_salary(&self) -> bool {
        self.total > self.salary
    }
}
