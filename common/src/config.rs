use std::fmt;
use std::str::FromStr;

/// Runtime options, collected once from the command line and passed down by
/// reference.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skip the banner printed at start-up.
    pub no_banner: bool,
    /// 0 prints everything, 1 hides section headers, 2 also hides success notices.
    pub quiet: u8,
    /// Clear the terminal before every screen and wait for Enter after each action.
    pub clear_screen: bool,
    /// What `cancel` does when several bookings share one ID.
    pub cancel_policy: CancelPolicy,
}

/// Client identity and booking identity are the same key, so one ID can hold
/// several bookings. This decides how many of them a cancellation removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Remove every booking with the ID.
    #[default]
    All,
    /// Remove only the oldest booking with the ID.
    First,
}

impl FromStr for CancelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CancelPolicy::All),
            "first" => Ok(CancelPolicy::First),
            other => Err(format!("invalid cancel policy: {other} (expected 'all' or 'first')")),
        }
    }
}

impl fmt::Display for CancelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelPolicy::All => f.write_str("all"),
            CancelPolicy::First => f.write_str("first"),
        }
    }
}
