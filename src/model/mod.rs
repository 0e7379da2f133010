pub mod caller;
pub mod candidate;
pub mod officials;
pub mod view;
pub mod voter;
pub mod window;

/// Candidate indexes are ordinals assigned in registration order.
pub type CandidateIndex = u32;
