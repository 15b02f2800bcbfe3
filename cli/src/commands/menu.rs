use std::io::{BufRead, Write};

use barbershop_common::ShopError;
use barbershop_core::AppState;

use super::{Flow, recover, register, session};
use crate::terminal::print;
use crate::terminal::prompt::Prompter;

const MAIN_MENU: [&str; 5] = [
    "Register barber",
    "Register client",
    "Register visitor",
    "Log in",
    "Exit",
];

/// The top-level loop. Returns when the user picks "Exit"; closed input
/// surfaces as an error for the caller to decide on.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    loop {
        if state.config().clear_screen {
            prompt.clear()?;
        }
        print::header("main menu", state.config().quiet);
        print::options(&MAIN_MENU);

        let step = prompt
            .number::<usize>("Choose an option")
            .and_then(|option| dispatch(option, state, prompt));

        if recover(step)? == Flow::Exit {
            return Ok(());
        }
        if state.config().clear_screen {
            prompt.pause()?;
        }
    }
}

fn dispatch<R: BufRead, W: Write>(
    option: usize,
    state: &mut AppState,
    prompt: &mut Prompter<R, W>,
) -> anyhow::Result<Flow> {
    match option {
        1 => register::barber(state, prompt)?,
        2 => register::client(state, prompt)?,
        3 => register::visitor(state, prompt)?,
        4 => session::login(state, prompt)?,
        5 => return Ok(Flow::Exit),
        _ => return Err(ShopError::InvalidSelection(option.to_string()).into()),
    }
    Ok(Flow::Continue)
}
