pub mod actions;
pub mod menu;
pub mod pick;
pub mod register;
pub mod session;

use barbershop_common::ShopError;
use barbershop_common::config::{CancelPolicy, Config};
use clap::{ArgAction, Parser};
use tracing::warn;

#[derive(Parser)]
#[command(name = "barbershop")]
#[command(about = "Appointment book for a one-barber shop.")]
pub struct CommandLine {
    /// Do not print the banner at start-up
    #[arg(long)]
    pub no_banner: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Clear the screen between menus and wait for Enter after each action
    #[arg(long)]
    pub clear: bool,
    /// Bookings removed when cancelling an ID that holds several: 'all' or 'first'
    #[arg(long, default_value_t = CancelPolicy::All)]
    pub cancel: CancelPolicy,
    /// Less output: -q hides headers, -qq also hides success notices
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            clear_screen: self.clear,
            cancel_policy: self.cancel,
        }
    }
}

/// Whether a menu loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Turns a domain error into a warning on screen and carries on with the
/// menu. Anything else (closed input, I/O) still ends the loop.
pub fn recover(step: anyhow::Result<Flow>) -> anyhow::Result<Flow> {
    match step {
        Ok(flow) => Ok(flow),
        Err(err) => match err.downcast_ref::<ShopError>() {
            Some(shop_err) => {
                warn!("{shop_err}");
                Ok(Flow::Continue)
            }
            None => Err(err),
        },
    }
}
