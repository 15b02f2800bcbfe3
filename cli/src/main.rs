mod commands;
mod terminal;

use barbershop_core::AppState;
use commands::{CommandLine, menu};
use terminal::logging;
use terminal::print;
use terminal::prompt::{PromptError, Prompter};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    if commands.no_color {
        colored::control::set_override(false);
    }

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let mut state = AppState::new(cfg);
    let mut prompt = Prompter::stdin();

    match menu::run(&mut state, &mut prompt) {
        Ok(()) => {}
        // stdin ran dry, same as picking "Exit"
        Err(err) if err.is::<PromptError>() => print::print(""),
        Err(err) => return Err(err),
    }

    if state.config().quiet == 0 {
        print::centerln("Goodbye!");
    }
    print::end_of_program();
    Ok(())
}
