use thiserror::Error;

use crate::model::{caller::Address, voter::Vin, CandidateIndex};

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a ledger operation can fail.
/// A failed operation has no side effect: the ledger is left exactly as the
/// caller found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unauthorized: {0} is not the owner or a government official")]
    Unauthorized(Address),
    #[error("VIN {0} is already registered")]
    AlreadyRegistered(Vin),
    #[error("No registered voter with VIN {0}")]
    UnknownVoter(Vin),
    #[error("Invalid election duration: {0} seconds")]
    InvalidDuration(i64),
    #[error("The election window is not open")]
    ElectionClosed,
    #[error("No candidate with index {0}")]
    UnknownCandidate(CandidateIndex),
    #[error("{0} is not eligible to vote")]
    NotEligible(Address),
}
