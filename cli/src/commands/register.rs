use std::io::{BufRead, Write};

use barbershop_common::ShopError;
use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_core::{AppState, Barber};
use tracing::warn;

use super::pick;
use crate::terminal::print;
use crate::terminal::prompt::Prompter;

pub fn barber<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    if let Ok(shop) = state.shop() {
        return Err(ShopError::BarberAlreadyRegistered(shop.barber().person.name.clone()).into());
    }

    let name = prompt.required_text("Name")?;
    let id = unused_id(state, prompt)?;
    let salary = Barber::check_salary(prompt.number("Salary")?)?;

    let mut hours = Vec::with_capacity(Weekday::ALL.len());
    for day in Weekday::ALL {
        hours.push((day, opening_hours(prompt, day)?));
    }

    state.register_barber(&name, &id, salary, &hours)?;
    print::success(&format!("Barber {name} registered"), state.config().quiet);
    Ok(())
}

/// Registers a client together with their first booking.
pub fn client<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    state.shop()?;

    let name = prompt.required_text("Name")?;
    let id = unused_id(state, prompt)?;
    let service = pick::service(prompt)?;
    let day = pick::day(prompt)?;
    let Some(slot) = pick::slot(prompt, day, state.shop()?.list_available(day))? else {
        return Ok(());
    };

    state.register_client(&name, &id, service, day, &slot)?;
    print::success(
        &format!("{name} booked {} on {day} at {slot}", service.name),
        state.config().quiet,
    );
    Ok(())
}

pub fn visitor<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let name = prompt.required_text("Name")?;
    let id = unused_id(state, prompt)?;
    state.register_visitor(&name, &id)?;
    print::success(&format!("Visitor {name} registered"), state.config().quiet);
    Ok(())
}

/// Asks for the ID and rejects a taken one before any further question.
fn unused_id<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<String> {
    let id = prompt.required_text("National ID")?;
    if state.directory.contains(&id) {
        return Err(ShopError::DuplicateId(id).into());
    }
    Ok(id)
}

/// Asks until both hours parse and form a valid range.
fn opening_hours<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    day: Weekday,
) -> anyhow::Result<HourRange> {
    loop {
        let attempt = prompt
            .number::<u8>(&format!("{day} - opening hour (0-23)"))
            .and_then(|open| {
                let close = prompt.number::<u8>(&format!("{day} - closing hour (0-23)"))?;
                Ok(HourRange::new(open, close)?)
            });

        match attempt {
            Ok(range) => return Ok(range),
            Err(err) => match err.downcast_ref::<ShopError>() {
                Some(shop_err) => warn!("{shop_err}"),
                None => return Err(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn week(open: u8, close: u8) -> String {
        format!("{open}\n{close}\n").repeat(Weekday::ALL.len())
    }

    #[test]
    fn barber_registration_reads_hours_for_every_day() {
        let mut state = AppState::default();
        let mut prompt = prompter(&format!("Ana\n1\n1000\n{}", week(9, 11)));

        barber(&mut state, &mut prompt).unwrap();

        let shop = state.shop().unwrap();
        for day in Weekday::ALL {
            assert_eq!(shop.list_available(day), ["9h", "10h", "11h"]);
        }
        assert_eq!(shop.barber().salary, 1000.0);
    }

    #[test]
    fn invalid_hours_are_asked_again() {
        let mut state = AppState::default();
        // Monday: out of order, then non-numeric, then valid
        let input = format!("Ana\n1\n1000\n12\n9\nten\n9\n11\n{}", week(8, 8).split_off(4));
        let mut prompt = prompter(&input);

        barber(&mut state, &mut prompt).unwrap();

        let shop = state.shop().unwrap();
        assert_eq!(shop.list_available(Weekday::Monday), ["9h", "10h", "11h"]);
        assert_eq!(shop.list_available(Weekday::Saturday), ["8h"]);
    }

    #[test]
    fn taken_id_is_rejected_before_other_questions() {
        let mut state = AppState::default();
        state.register_visitor("Cid", "3").unwrap();
        let mut prompt = prompter("Ana\n3\n");

        let err = barber(&mut state, &mut prompt).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ShopError>(),
            Some(&ShopError::DuplicateId("3".into()))
        );
        assert!(state.shop().is_err());
    }

    #[test]
    fn blank_id_is_refused_before_other_questions() {
        let mut state = AppState::default();
        let mut prompt = prompter("Cid\n\n");

        let err = visitor(&mut state, &mut prompt).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ShopError>(),
            Some(&ShopError::EmptyField("National ID".into()))
        );
        assert!(state.directory.is_empty());
    }

    #[test]
    fn unusable_salary_stops_before_the_hours() {
        for salary in ["NaN", "-100"] {
            let mut state = AppState::default();
            // no hours follow: the flow must stop at the salary
            let mut prompt = prompter(&format!("Ana\n1\n{salary}\n"));

            let err = barber(&mut state, &mut prompt).unwrap_err();

            assert!(matches!(
                err.downcast_ref::<ShopError>(),
                Some(ShopError::InvalidNumericInput(_))
            ));
            assert!(state.shop().is_err());
        }
    }

    #[test]
    fn client_registration_books_the_chosen_slot() {
        let mut state = AppState::default();
        let mut prompt = prompter(&format!("Ana\n1\n1000\n{}Bob\n2\n4\n1\n2\n", week(9, 11)));

        barber(&mut state, &mut prompt).unwrap();
        client(&mut state, &mut prompt).unwrap();

        let shop = state.shop().unwrap();
        assert_eq!(shop.list_bookings().len(), 1);
        assert_eq!(shop.list_bookings()[0].desired_slot, "10h");
        assert_eq!(shop.list_bookings()[0].price, 12.0);
        assert_eq!(shop.list_available(Weekday::Monday), ["9h", "11h"]);
        assert!(state.authenticate("2").is_some());
    }

    #[test]
    fn client_registration_without_barber_fails() {
        let mut state = AppState::default();
        let mut prompt = prompter("");
        let err = client(&mut state, &mut prompt).unwrap_err();
        assert_eq!(err.downcast_ref::<ShopError>(), Some(&ShopError::NoBarber));
    }
}
