use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller address: the transport-level identity behind an operation.
/// Distinct from a VIN, which identifies a voter rather than a caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", HEXLOWER.encode(&self.0))
    }
}

#[derive(Debug, Error)]
pub enum ParseAddressError {
    #[error("Expected 20 address bytes, got {0}")]
    Length(usize),
    #[error(transparent)]
    Hex(#[from] data_encoding::DecodeError),
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        let bytes = HEXLOWER_PERMISSIVE.decode(hex.as_bytes())?;
        let len = bytes.len();
        bytes
            .try_into()
            .map(Address)
            .map_err(|_| ParseAddressError::Length(len))
    }
}

impl TryFrom<String> for Address {
    type Error = ParseAddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

/// The authenticated identity of a caller, established by whatever transport
/// carried the call. Threaded explicitly into every identity-dependent
/// operation; the ledger has no ambient notion of a "current sender" and
/// never trusts an address passed as ordinary data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallerContext {
    address: Address,
}

impl CallerContext {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// The address that invoked the current operation.
    pub fn address(&self) -> Address {
        self.address
    }
}
