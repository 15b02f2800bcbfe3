//! What each capability does once picked from a session menu.

use std::io::{BufRead, Write};

use barbershop_common::ShopError;
use barbershop_core::revenue::RevenueReport;
use barbershop_core::{AppState, Capability, ClientUpdate, NationalId, Person, Role, Session};
use colored::*;

use super::pick;
use crate::terminal::prompt::Prompter;
use crate::terminal::{colors, format, print};

pub fn dispatch<R: BufRead, W: Write>(
    capability: Capability,
    state: &mut AppState,
    session: &Session,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    if !session.allows(capability) {
        return Err(ShopError::InvalidSelection(capability.label().to_string()).into());
    }

    match capability {
        Capability::ListSlots => list_slots(state, prompt),
        Capability::Book => book(state, session, prompt),
        Capability::ListBookings => list_bookings(state),
        Capability::Edit => edit(state, prompt),
        Capability::Cancel => cancel(state, prompt),
        Capability::Revenue => revenue(state),
    }
}

fn list_slots<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let day = pick::day(prompt)?;
    let shop = state.shop()?;
    print::aligned_lines(vec![
        (day.name(), format::slots(shop.list_available(day))),
        ("Free this week", shop.barber().schedule.total_free().to_string().normal()),
    ]);
    Ok(())
}

/// Clients book for themselves, the barber books for someone else.
fn book<R: BufRead, W: Write>(
    state: &mut AppState,
    session: &Session,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    state.shop()?;

    let person = match session.role() {
        Role::Client => session.member().person.clone(),
        _ => {
            let name = prompt.required_text("Client name")?;
            let id = prompt.required_text("Client national ID")?;
            Person::new(name, id.as_str())
        }
    };

    let service = pick::service(prompt)?;
    let day = pick::day(prompt)?;
    let Some(slot) = pick::slot(prompt, day, state.shop()?.list_available(day))? else {
        return Ok(());
    };

    let name = person.name.clone();
    state.book(person, service, day, &slot)?;
    print::success(
        &format!("{name} booked {} on {day} at {slot}", service.name),
        state.config().quiet,
    );
    Ok(())
}

fn list_bookings(state: &AppState) -> anyhow::Result<()> {
    let bookings = state.shop()?.list_bookings();
    if bookings.is_empty() {
        print::nothing_to_show("No bookings yet");
        return Ok(());
    }

    for (idx, booking) in bookings.iter().enumerate() {
        print::tree_head(idx + 1, &booking.person.name);
        print::as_tree_one_level(format::booking_to_details(booking));
    }
    Ok(())
}

/// Blank answers keep the current value. A new day or slot is reserved
/// before the old one is released, so a taken slot leaves the booking as it was.
fn edit<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let id = NationalId::new(prompt.text("Client national ID")?);
    let Some(current) = state
        .shop()?
        .list_bookings()
        .iter()
        .find(|booking| booking.id() == &id)
        .cloned()
    else {
        return Err(ShopError::ClientNotFound(id.to_string()).into());
    };

    let name = prompt.optional_text(&format!("New name (blank to keep '{}')", current.person.name))?;
    let service = pick::optional_service(prompt)?;
    let day = pick::optional_day(prompt)?;
    let target_day = day.unwrap_or(current.day);
    let slot = pick::optional_slot(prompt, target_day, state.shop()?.list_available(target_day))?;

    let update = ClientUpdate {
        name,
        desired_service: service.map(|service| service.name.to_string()),
        price: service.map(|service| service.price),
        day,
        desired_slot: slot,
    };
    if update.is_empty() {
        print::nothing_to_show("Nothing to change");
        return Ok(());
    }

    state.shop_mut()?.edit(&id, update)?;
    print::success(&format!("Booking of {id} updated"), state.config().quiet);
    Ok(())
}

fn cancel<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let id = NationalId::new(prompt.text("Client national ID")?);
    let removed = state.shop_mut()?.cancel(&id)?;

    for booking in &removed {
        print::print_status(format!(
            "Released {} on {}",
            booking.desired_slot.color(colors::SLOT),
            booking.day
        ));
    }
    print::success(
        &format!("Cancelled {} booking(s) of {id}", removed.len()),
        state.config().quiet,
    );
    Ok(())
}

fn revenue(state: &AppState) -> anyhow::Result<()> {
    let shop = state.shop()?;
    let report = RevenueReport::compute(shop.barber(), shop.list_bookings());

    print::aligned_lines(vec![
        ("Bookings", report.bookings.to_string().normal()),
        ("Revenue", format::money(report.total).color(colors::MONEY)),
        ("Salary", format::money(report.salary).normal()),
        ("Exceeds salary", format::yes_no(report.exceeds_salary())),
    ]);
    Ok(())
}
