//! # Directory
//!
//! Everyone who registered, keyed by national ID. The same table serves as
//! the login: the ID is the only credential, there is no password.

use std::collections::HashMap;

use barbershop_common::{Result, ShopError};
use tracing::info;

use crate::people::{NationalId, Person};
use crate::session::Capability;

/// The role a member registered with.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Barber { salary: f64 },
    Client,
    Visitor,
}

impl Role {
    /// Operations this role may reach from its session menu, in menu order.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Barber { .. } => &[
                Capability::ListSlots,
                Capability::Book,
                Capability::ListBookings,
                Capability::Edit,
                Capability::Cancel,
                Capability::Revenue,
            ],
            Role::Client => &[Capability::ListSlots, Capability::Book],
            Role::Visitor => &[],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Barber { .. } => "barber",
            Role::Client => "client",
            Role::Visitor => "visitor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub person: Person,
    pub role: Role,
}

impl Member {
    pub fn id(&self) -> &NationalId {
        self.person.national_id()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    members: HashMap<NationalId, Member>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_barber(&mut self, name: &str, id: &str, salary: f64) -> Result<&Member> {
        self.register(Person::new(name, id), Role::Barber { salary })
    }

    pub fn register_client(&mut self, name: &str, id: &str) -> Result<&Member> {
        self.register(Person::new(name, id), Role::Client)
    }

    pub fn register_visitor(&mut self, name: &str, id: &str) -> Result<&Member> {
        self.register(Person::new(name, id), Role::Visitor)
    }

    pub fn authenticate(&self, id: &str) -> Option<&Member> {
        self.members.get(&NationalId::new(id))
    }

    pub fn has_barber(&self) -> bool {
        self.members
            .values()
            .any(|member| matches!(member.role, Role::Barber { .. }))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(&NationalId::new(id))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drops a member. Used to roll back a registration whose follow-up step failed.
    pub(crate) fn remove(&mut self, id: &NationalId) -> Option<Member> {
        self.members.remove(id)
    }

    fn register(&mut self, person: Person, role: Role) -> Result<&Member> {
        let id = person.national_id().clone();
        if id.is_empty() {
            return Err(ShopError::EmptyField("national ID".into()));
        }
        if self.members.contains_key(&id) {
            return Err(ShopError::DuplicateId(id.to_string()));
        }

        info!(id = %id, role = role.title(), "member registered");
        Ok(self.members.entry(id).or_insert(Member { person, role }))
    }
}
