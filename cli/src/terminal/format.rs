use crate::terminal::colors;
use barbershop_core::Client;
use colored::*;

pub type Detail = (String, ColoredString);

pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn slots(slots: &[String]) -> ColoredString {
    if slots.is_empty() {
        return "no free slots".italic().color(colors::SEPARATOR);
    }
    slots.join(", ").color(colors::SLOT)
}

pub fn booking_to_details(booking: &Client) -> Vec<Detail> {
    vec![
        ("ID".to_string(), booking.id().to_string().color(colors::ACCENT)),
        ("Service".to_string(), booking.desired_service.normal()),
        ("Price".to_string(), money(booking.price).color(colors::MONEY)),
        (
            "When".to_string(),
            format!("{} {}", booking.day, booking.desired_slot).color(colors::SLOT),
        ),
    ]
}

pub fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".green().bold()
    } else {
        "no".color(colors::WARNING).bold()
    }
}
