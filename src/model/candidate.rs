use serde::{Deserialize, Serialize};

use super::CandidateIndex;

/// A single candidate on the ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Ordinal assigned at registration, stable for the whole cycle.
    pub index: CandidateIndex,
    /// Display name. Names are not unique; the index is the identity.
    pub name: String,
    /// Votes received so far this cycle.
    pub vote_count: u64,
}

/// The ordered candidate roster for the current election cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    /// Append candidates in the given order, assigning sequential indexes.
    /// Returns how many were added.
    pub fn add<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.candidates.len();
        for name in names {
            let index = self.candidates.len() as CandidateIndex;
            self.candidates.push(Candidate {
                index,
                name,
                vote_count: 0,
            });
        }
        self.candidates.len() - before
    }

    pub fn get(&self, index: CandidateIndex) -> Option<&Candidate> {
        self.candidates.get(index as usize)
    }

    pub fn contains(&self, index: CandidateIndex) -> bool {
        (index as usize) < self.candidates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Clear the roster. Numbering restarts at zero on the next `add`.
    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    /// Zero every counter, leaving the roster itself intact.
    pub fn reset_votes(&mut self) {
        for candidate in &mut self.candidates {
            candidate.vote_count = 0;
        }
    }

    /// Record one vote for the candidate at `index`.
    /// Returns the new count, or None if there is no such candidate.
    pub fn record_vote(&mut self, index: CandidateIndex) -> Option<u64> {
        let candidate = self.candidates.get_mut(index as usize)?;
        candidate.vote_count += 1;
        Some(candidate.vote_count)
    }

    /// Total votes recorded across all candidates.
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.vote_count).sum()
    }

    /// The candidate with the most votes. A tie goes to the lowest index
    /// (first registered), so repeated calls on unchanged state agree.
    pub fn leading(&self) -> Option<&Candidate> {
        let mut leader: Option<&Candidate> = None;
        for candidate in &self.candidates {
            match leader {
                Some(current) if candidate.vote_count <= current.vote_count => {}
                _ => leader = Some(candidate),
            }
        }
        leader
    }
}
