use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::caller::Address;

/// The set of addresses the owner has delegated officiating rights to.
/// Only the owner may change it; officials cannot delegate further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officials {
    members: HashSet<Address>,
}

impl Officials {
    /// Add an official. Returns false if they were already one.
    pub fn add(&mut self, official: Address) -> bool {
        self.members.insert(official)
    }

    /// Remove an official. Returns false if they were not one.
    pub fn remove(&mut self, official: Address) -> bool {
        self.members.remove(&official)
    }

    pub fn contains(&self, address: Address) -> bool {
        self.members.contains(&address)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
