#![cfg(test)]
use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_common::catalog;
use barbershop_common::config::{CancelPolicy, Config};
use barbershop_common::ShopError;
use barbershop_core::revenue::{self, RevenueReport};
use barbershop_core::{AppState, ClientUpdate, Person};

fn open_week(state: &mut AppState, open: u8, close: u8) {
    let hours: Vec<(Weekday, HourRange)> = Weekday::ALL
        .iter()
        .map(|day| (*day, HourRange::new(open, close).unwrap()))
        .collect();
    state.register_barber("Ana", "1", 30.0, &hours).unwrap();
}

/// Ana opens 9h-11h, Bob takes Monday 10h, and the slot can't be taken twice.
#[test]
fn registration_then_booking_partitions_the_day() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 11);

    state
        .register_client("Bob", "2", catalog::select(4).unwrap(), Weekday::Monday, "10h")
        .unwrap();

    let shop = state.shop().unwrap();
    assert_eq!(shop.list_available(Weekday::Monday), ["9h", "11h"]);
    assert_eq!(shop.list_available(Weekday::Tuesday), ["9h", "10h", "11h"]);
    assert_eq!(shop.list_bookings().len(), 1);

    let booking = &shop.list_bookings()[0];
    assert_eq!(booking.person.name, "Bob");
    assert_eq!(booking.desired_service, "Social");
    assert_eq!(booking.price, 12.0);
    assert_eq!(booking.day, Weekday::Monday);
    assert_eq!(booking.desired_slot, "10h");
}

#[test]
fn taken_slot_cannot_be_booked_again() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 11);
    state
        .register_client("Bob", "2", catalog::select(4).unwrap(), Weekday::Monday, "10h")
        .unwrap();

    let err = state
        .book(Person::new("Eva", "5"), catalog::select(1).unwrap(), Weekday::Monday, "10h")
        .unwrap_err();

    assert_eq!(
        err,
        ShopError::SlotNotFound {
            day: Weekday::Monday,
            slot: "10h".into()
        }
    );
    assert_eq!(state.shop().unwrap().list_bookings().len(), 1);
}

#[test]
fn failed_first_booking_leaves_no_client_behind() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 9);

    let err = state
        .register_client("Bob", "2", catalog::select(1).unwrap(), Weekday::Monday, "14h")
        .unwrap_err();

    assert!(matches!(err, ShopError::SlotNotFound { .. }));
    assert!(state.authenticate("2").is_none());
    assert_eq!(state.shop().unwrap().list_available(Weekday::Monday), ["9h"]);
}

/// Cancelling must hand the slot back. A cancel that only drops the booking
/// would lose the hour for good.
#[test]
fn cancel_restores_the_slot() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 11);
    state
        .register_client("Bob", "2", catalog::select(4).unwrap(), Weekday::Monday, "10h")
        .unwrap();

    let removed = state.shop_mut().unwrap().cancel(&"2".into()).unwrap();

    let shop = state.shop().unwrap();
    assert_eq!(removed.len(), 1);
    assert!(shop.list_bookings().is_empty());
    assert_eq!(shop.list_available(Weekday::Monday), ["9h", "11h", "10h"]);

    // and the hour is bookable again
    state
        .book(Person::new("Eva", "5"), catalog::select(2).unwrap(), Weekday::Monday, "10h")
        .unwrap();
}

#[test]
fn cancel_policy_decides_how_many_bookings_go() {
    let book_twice = |state: &mut AppState| {
        open_week(state, 9, 10);
        for slot in ["9h", "10h"] {
            state
                .book(Person::new("Bob", "2"), catalog::select(1).unwrap(), Weekday::Friday, slot)
                .unwrap();
        }
    };

    let mut all = AppState::default();
    book_twice(&mut all);
    assert_eq!(all.shop_mut().unwrap().cancel(&"2".into()).unwrap().len(), 2);
    assert!(all.shop().unwrap().list_bookings().is_empty());

    let mut first = AppState::new(Config {
        cancel_policy: CancelPolicy::First,
        ..Config::default()
    });
    book_twice(&mut first);
    let removed = first.shop_mut().unwrap().cancel(&"2".into()).unwrap();
    assert_eq!(removed[0].desired_slot, "9h");
    assert_eq!(first.shop().unwrap().list_bookings().len(), 1);
    assert_eq!(first.shop().unwrap().list_available(Weekday::Friday), ["9h"]);
}

#[test]
fn cancel_unknown_id_changes_nothing() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 10);

    let err = state.shop_mut().unwrap().cancel(&"404".into()).unwrap_err();

    assert_eq!(err, ShopError::ClientNotFound("404".into()));
    assert_eq!(state.shop().unwrap().list_available(Weekday::Monday), ["9h", "10h"]);
}

#[test]
fn edit_moves_the_booking_between_days() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 10);
    state
        .register_client("Bob", "2", catalog::select(4).unwrap(), Weekday::Monday, "9h")
        .unwrap();

    let update = ClientUpdate {
        day: Some(Weekday::Wednesday),
        desired_slot: Some("10h".into()),
        ..ClientUpdate::default()
    };
    state.shop_mut().unwrap().edit(&"2".into(), update).unwrap();

    let shop = state.shop().unwrap();
    assert_eq!(shop.list_available(Weekday::Monday), ["10h", "9h"]);
    assert_eq!(shop.list_available(Weekday::Wednesday), ["9h"]);
    assert_eq!(shop.list_bookings()[0].day, Weekday::Wednesday);
}

#[test]
fn edit_into_a_taken_slot_is_rejected_whole() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 10);
    state
        .register_client("Bob", "2", catalog::select(4).unwrap(), Weekday::Monday, "9h")
        .unwrap();
    state
        .register_client("Eva", "5", catalog::select(1).unwrap(), Weekday::Monday, "10h")
        .unwrap();

    let update = ClientUpdate {
        name: Some("Robert".into()),
        desired_slot: Some("10h".into()),
        ..ClientUpdate::default()
    };
    let err = state.shop_mut().unwrap().edit(&"2".into(), update).unwrap_err();

    assert!(matches!(err, ShopError::SlotNotFound { .. }));
    let bob = &state.shop().unwrap().list_bookings()[0];
    assert_eq!(bob.person.name, "Bob");
    assert_eq!(bob.desired_slot, "9h");
}

#[test]
fn revenue_follows_the_bookings() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 11);

    let shop = state.shop().unwrap();
    assert_eq!(revenue::total_revenue(shop.list_bookings()), 0.0);
    assert!(!revenue::exceeds_salary(shop.barber(), shop.list_bookings()));

    for (option, slot) in [(1, "9h"), (2, "10h"), (3, "11h")] {
        state
            .book(Person::new("Bob", "2"), catalog::select(option).unwrap(), Weekday::Monday, slot)
            .unwrap();
    }

    let shop = state.shop().unwrap();
    let report = RevenueReport::compute(shop.barber(), shop.list_bookings());
    assert_eq!(report.total, 48.0);
    assert_eq!(report.bookings, 3);
    assert!(report.exceeds_salary());
}

#[test]
fn revenue_of_three_standard_cuts() {
    let mut state = AppState::default();
    open_week(&mut state, 9, 11);
    for (option, slot) in [(1, "9h"), (2, "10h"), (1, "11h")] {
        state
            .book(Person::new("Bob", "2"), catalog::select(option).unwrap(), Weekday::Tuesday, slot)
            .unwrap();
    }

    let shop = state.shop().unwrap();
    assert_eq!(revenue::total_revenue(shop.list_bookings()), 45.0);
    // 45 against a salary of 30
    assert!(revenue::exceeds_salary(shop.barber(), shop.list_bookings()));
}

#[test]
fn no_shop_before_a_barber() {
    let mut state = AppState::default();

    assert_eq!(state.shop().unwrap_err(), ShopError::NoBarber);
    assert_eq!(
        state
            .book(Person::new("Bob", "2"), catalog::select(1).unwrap(), Weekday::Monday, "9h")
            .unwrap_err(),
        ShopError::NoBarber
    );
}
