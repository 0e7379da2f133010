use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use hmac::{digest::Output, Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::Config;

use super::caller::Address;

pub type HmacSha256 = Hmac<Sha256>;

/// The stored form of a VIN: its keyed digest. Raw VINs are never retained.
pub type VinDigest = Output<HmacSha256>;

/// A voter identification number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vin(pub u64);

impl Vin {
    /// Digest this VIN under the configured key. Equal VINs digest
    /// identically, which is what makes duplicate registration detectable
    /// without keeping the raw number around.
    pub fn into_digest(self, config: &Config) -> VinDigest {
        let mut hmac = HmacSha256::new_from_slice(config.hmac_secret())
            .expect("HMAC can take key of any size");
        hmac.update(&self.0.to_le_bytes());
        hmac.finalize().into_bytes()
    }
}

impl Display for Vin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Core voter data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterCore {
    /// Voter unique ID: the keyed digest of their VIN.
    pub vin_digest: VinDigest,
    /// Whether an official has verified this voter's identity.
    pub verified: bool,
    /// Whether this voter has cast a vote in the current round.
    pub has_voted: bool,
}

impl VoterCore {
    /// Create a new, unverified voter.
    pub fn new(vin: Vin, config: &Config) -> Self {
        Self {
            // Do not directly store potentially sensitive identity numbers.
            vin_digest: vin.into_digest(config),
            verified: false,
            has_voted: false,
        }
    }

    /// Verified and yet to vote this round.
    pub fn eligible(&self) -> bool {
        self.verified && !self.has_voted
    }
}

/// Registered voters keyed by VIN digest, plus the bindings from caller
/// addresses to the VIN they are entitled to vote under.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    voters: HashMap<VinDigest, VoterCore>,
    bindings: HashMap<Address, VinDigest>,
}

impl IdentityRegistry {
    /// Register a voter record. Returns false if that VIN is already taken.
    pub fn register(&mut self, voter: VoterCore) -> bool {
        match self.voters.entry(voter.vin_digest.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(voter);
                true
            }
        }
    }

    /// Mark the voter as verified. Idempotent. Returns false if the VIN is
    /// not registered.
    pub fn verify(&mut self, digest: &VinDigest) -> bool {
        match self.voters.get_mut(digest) {
            Some(voter) => {
                voter.verified = true;
                true
            }
            None => false,
        }
    }

    /// Bind `address` as the sole caller entitled to vote under `digest`,
    /// replacing any previous binding for that VIN.
    /// Returns the previously bound address if the binding moved.
    pub fn bind(&mut self, address: Address, digest: VinDigest) -> Option<Address> {
        let previous = self
            .bindings
            .iter()
            .find(|(bound, d)| **d == digest && **bound != address)
            .map(|(bound, _)| *bound);
        if let Some(previous) = previous {
            self.bindings.remove(&previous);
        }
        self.bindings.insert(address, digest);
        previous
    }

    /// Resolve a caller address to the voter record it is bound to.
    pub fn resolve(&self, address: Address) -> Option<&VoterCore> {
        let digest = self.bindings.get(&address)?;
        self.voters.get(digest)
    }

    /// Flag the voter bound to `address` as having voted.
    /// Returns false if the address resolves to no voter.
    pub fn mark_voted(&mut self, address: Address) -> bool {
        let digest = match self.bindings.get(&address) {
            Some(digest) => digest,
            None => return false,
        };
        match self.voters.get_mut(digest) {
            Some(voter) => {
                voter.has_voted = true;
                true
            }
            None => false,
        }
    }

    /// Clear `has_voted` across the register for a fresh voting round.
    /// Verified status and bindings survive.
    pub fn reset_has_voted(&mut self) {
        for voter in self.voters.values_mut() {
            voter.has_voted = false;
        }
    }

    /// Number of registered voters.
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Number of voters who have voted this round.
    pub fn voted_count(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted).count()
    }
}
