//! Capability gate for an authenticated member.
//!
//! The menu a member sees is built from [`Session::menu`], so an operation
//! outside the role's capability set is simply not offered. This shapes the
//! interface, it does not protect anything: IDs are the only credential.

use std::fmt;

use crate::directory::{Member, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ListSlots,
    Book,
    ListBookings,
    Edit,
    Cancel,
    Revenue,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::ListSlots => "List available slots",
            Capability::Book => "Book a slot",
            Capability::ListBookings => "List bookings",
            Capability::Edit => "Edit a booking",
            Capability::Cancel => "Cancel a booking",
            Capability::Revenue => "Revenue report",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    member: Member,
}

impl Session {
    /// Opens a session for an authenticated member.
    pub fn start(member: Member) -> Self {
        Self { member }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    pub fn role(&self) -> &Role {
        &self.member.role
    }

    pub fn menu(&self) -> &'static [Capability] {
        self.member.role.capabilities()
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.menu().contains(&capability)
    }

    /// Picks the capability behind a 1-based menu option.
    ///
    /// `None` for options past the held capabilities, which is where the
    /// menu's own entries (like logging out) begin.
    pub fn option(&self, option: usize) -> Option<Capability> {
        option.checked_sub(1).and_then(|idx| self.menu().get(idx)).copied()
    }
}
