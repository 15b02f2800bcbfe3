#![cfg(test)]
use barbershop_common::calendar::{HourRange, Weekday};
use barbershop_common::catalog;
use barbershop_common::ShopError;
use barbershop_core::{AppState, Capability, Role, Session};

fn state() -> AppState {
    let mut state = AppState::default();
    let hours = [(Weekday::Saturday, HourRange::new(8, 12).unwrap())];
    state.register_barber("Ana", "1", 1000.0, &hours).unwrap();
    state
        .register_client("Bob", "2", catalog::select(1).unwrap(), Weekday::Saturday, "8h")
        .unwrap();
    state.register_visitor("Cid", "3").unwrap();
    state
}

#[test]
fn every_role_authenticates_by_id() {
    let state = state();

    let ana = state.authenticate("1").unwrap();
    assert_eq!(ana.person.name, "Ana");
    assert_eq!(ana.role, Role::Barber { salary: 1000.0 });

    assert_eq!(state.authenticate("2").unwrap().role, Role::Client);
    assert_eq!(state.authenticate("3").unwrap().role, Role::Visitor);
    assert!(state.authenticate("4").is_none());
}

#[test]
fn ids_are_compared_trimmed() {
    let state = state();
    assert_eq!(state.authenticate(" 2 ").unwrap().person.name, "Bob");
}

/// Any role colliding with any other role's ID is refused and nothing changes.
#[test]
fn ids_are_unique_across_roles() {
    let mut state = state();
    let before = state.directory.len();
    let free_before = state.shop().unwrap().list_available(Weekday::Saturday).to_vec();

    for id in ["1", "2", "3"] {
        assert_eq!(
            state
                .register_client("Dan", id, catalog::select(2).unwrap(), Weekday::Saturday, "9h")
                .unwrap_err(),
            ShopError::DuplicateId(id.into())
        );
        assert_eq!(
            state.register_visitor("Dan", id).unwrap_err(),
            ShopError::DuplicateId(id.into())
        );
        assert_eq!(
            state.directory.register_barber("Dan", id, 1.0).unwrap_err(),
            ShopError::DuplicateId(id.into())
        );
    }

    assert_eq!(state.directory.len(), before);
    assert_eq!(state.shop().unwrap().list_available(Weekday::Saturday), free_before);
    assert_eq!(state.shop().unwrap().list_bookings().len(), 1);
}

#[test]
fn only_one_barber_per_shop() {
    let mut state = state();
    let err = state.register_barber("Eli", "9", 500.0, &[]).unwrap_err();

    assert_eq!(err, ShopError::BarberAlreadyRegistered("Ana".into()));
    assert!(state.authenticate("9").is_none());
}

#[test]
fn sessions_expose_only_their_role_menu() {
    let state = state();
    let barber = Session::start(state.authenticate("1").unwrap().clone());
    let client = Session::start(state.authenticate("2").unwrap().clone());
    let visitor = Session::start(state.authenticate("3").unwrap().clone());

    assert!(barber.allows(Capability::Cancel));
    assert!(barber.allows(Capability::Revenue));
    assert_eq!(client.menu(), [Capability::ListSlots, Capability::Book]);
    assert!(!client.allows(Capability::Edit));
    assert!(visitor.menu().is_empty());
}

#[test]
fn sunday_and_unknown_days_are_invalid() {
    for name in ["Domingo", "Funday", "Sunday"] {
        let err = name.parse::<Weekday>().unwrap_err();
        assert_eq!(err, ShopError::InvalidDay(name.into()));
    }
    assert_eq!("segunda".parse::<Weekday>().unwrap(), Weekday::Monday);
    assert_eq!("Saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
}
