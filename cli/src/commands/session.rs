use std::io::{BufRead, Write};

use barbershop_common::ShopError;
use barbershop_core::{AppState, Role, Session};
use tracing::warn;

use super::{Flow, actions, recover};
use crate::terminal::print;
use crate::terminal::prompt::Prompter;

/// Authenticates by national ID and runs the member's session menu until
/// they log out.
pub fn login<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let id = prompt.text("National ID")?;
    let Some(member) = state.authenticate(&id).cloned() else {
        warn!("ID {id} not found");
        return Ok(());
    };

    let session = Session::start(member);
    if let Role::Visitor = session.role() {
        print::success(
            &format!("Welcome, {}! Visitors can look around, booking needs a client registration.", session.member().person.name),
            state.config().quiet,
        );
        return Ok(());
    }

    run(state, &session, prompt)
}

fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    session: &Session,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let logout = session.menu().len() + 1;

    loop {
        if state.config().clear_screen {
            prompt.clear()?;
        }
        let title = format!("{} menu - {}", session.role().title(), session.member().person.name);
        print::header(&title, state.config().quiet);
        for (idx, capability) in session.menu().iter().enumerate() {
            print::option(idx + 1, capability.label());
        }
        print::option(logout, "Log out");

        let step = prompt.number::<usize>("Choose an option").and_then(|option| {
            match session.option(option) {
                Some(capability) => {
                    actions::dispatch(capability, state, session, prompt)?;
                    Ok(Flow::Continue)
                }
                None if option == logout => Ok(Flow::Exit),
                None => Err(ShopError::InvalidSelection(option.to_string()).into()),
            }
        });

        if recover(step)? == Flow::Exit {
            return Ok(());
        }
        if state.config().clear_screen {
            prompt.pause()?;
        }
    }
}
