//! Numbered pickers shared by registration and the session menus.

use std::io::{BufRead, Write};

use barbershop_common::ShopError;
use barbershop_common::calendar::Weekday;
use barbershop_common::catalog::{self, CATALOG, Service};

use crate::terminal::format;
use crate::terminal::print;
use crate::terminal::prompt::Prompter;

pub fn service<R: BufRead, W: Write>(prompt: &mut Prompter<R, W>) -> anyhow::Result<Service> {
    print_services();
    let option: usize = prompt.number("Service")?;
    Ok(catalog::select(option)?)
}

/// Like [`service`] but a blank answer keeps the current one.
pub fn optional_service<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<Option<Service>> {
    print_services();
    match prompt.optional_number::<usize>("Service (blank to keep)")? {
        Some(option) => Ok(Some(catalog::select(option)?)),
        None => Ok(None),
    }
}

pub fn day<R: BufRead, W: Write>(prompt: &mut Prompter<R, W>) -> anyhow::Result<Weekday> {
    print_days();
    let option: usize = prompt.number("Day")?;
    Ok(Weekday::from_menu_index(option)?)
}

pub fn optional_day<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<Option<Weekday>> {
    print_days();
    match prompt.optional_number::<usize>("Day (blank to keep)")? {
        Some(option) => Ok(Some(Weekday::from_menu_index(option)?)),
        None => Ok(None),
    }
}

/// Picks one of the free slots of `day`. `None` when the day has none left.
pub fn slot<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    day: Weekday,
    free: &[String],
) -> anyhow::Result<Option<String>> {
    if free.is_empty() {
        print::nothing_to_show(&format!("No free slots on {day}"));
        return Ok(None);
    }
    print::options(free);
    let option: usize = prompt.number("Slot")?;
    let slot = option
        .checked_sub(1)
        .and_then(|idx| free.get(idx))
        .ok_or_else(|| ShopError::InvalidSelection(option.to_string()))?;
    Ok(Some(slot.clone()))
}

/// Like [`slot`] but a blank answer keeps the current slot.
pub fn optional_slot<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    day: Weekday,
    free: &[String],
) -> anyhow::Result<Option<String>> {
    print::print_status(format!("Free on {day}: {}", format::slots(free)));
    print::options(free);
    let Some(option) = prompt.optional_number::<usize>("Slot (blank to keep)")? else {
        return Ok(None);
    };
    let slot = option
        .checked_sub(1)
        .and_then(|idx| free.get(idx))
        .ok_or_else(|| ShopError::InvalidSelection(option.to_string()))?;
    Ok(Some(slot.clone()))
}

fn print_services() {
    let labels: Vec<String> = CATALOG
        .iter()
        .map(|service| format!("{}: {}", service.name, format::money(service.price)))
        .collect();
    print::options(&labels);
}

fn print_days() {
    let labels: Vec<&str> = Weekday::ALL.iter().map(Weekday::name).collect();
    print::options(&labels);
}
