use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, CandidateRegistry};
use super::CandidateIndex;

/// The candidate roster as the external interface reports it: parallel
/// name/index sequences in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateList {
    pub names: Vec<String>,
    pub indexes: Vec<CandidateIndex>,
}

impl From<&CandidateRegistry> for CandidateList {
    fn from(registry: &CandidateRegistry) -> Self {
        Self {
            names: registry.iter().map(|c| c.name.clone()).collect(),
            indexes: registry.iter().map(|c| c.index).collect(),
        }
    }
}

/// Current counts per candidate, ordered like [`CandidateList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTotals {
    pub names: Vec<String>,
    pub counts: Vec<u64>,
}

impl From<&CandidateRegistry> for VoteTotals {
    fn from(registry: &CandidateRegistry) -> Self {
        Self {
            names: registry.iter().map(|c| c.name.clone()).collect(),
            counts: registry.iter().map(|c| c.vote_count).collect(),
        }
    }
}

/// The current leader and their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadingCandidate {
    pub name: String,
    pub vote_count: u64,
}

impl From<&Candidate> for LeadingCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            vote_count: candidate.vote_count,
        }
    }
}

/// The window as the overview card reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionStatus {
    pub ongoing: bool,
    pub end_time: Option<DateTime<Utc>>,
}
