use chrono::{DateTime, Duration, Utc};
use log::{info, warn};

use crate::error::{Error, Result};
use crate::model::{
    caller::{Address, CallerContext},
    candidate::{Candidate, CandidateRegistry},
    officials::Officials,
    view::{CandidateList, ElectionStatus, LeadingCandidate, VoteTotals},
    voter::{IdentityRegistry, Vin, VoterCore},
    window::ElectionWindow,
    CandidateIndex,
};
use crate::Config;

/// The election authority: a single owned value holding every register the
/// operations below act on.
///
/// Mutating operations validate all their preconditions before touching any
/// state, so a failed call leaves the ledger exactly as it found it.
/// Officiating operations require the caller to be the owner or a current
/// official; [`Ledger::vote`] is the one mutation open to the public.
pub struct Ledger {
    config: Config,
    owner: Address,
    officials: Officials,
    candidates: CandidateRegistry,
    voters: IdentityRegistry,
    window: ElectionWindow,
}

impl Ledger {
    /// Create a ledger owned by `owner`: empty registers, no election window.
    pub fn new(owner: Address, config: Config) -> Self {
        Self {
            config,
            owner,
            officials: Officials::default(),
            candidates: CandidateRegistry::default(),
            voters: IdentityRegistry::default(),
            window: ElectionWindow::unset(),
        }
    }

    /// The address that constructed the ledger. Fixed for its lifetime.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Require `caller` to be the owner or a current official.
    fn authorize(&self, caller: &CallerContext) -> Result<()> {
        let address = caller.address();
        if address == self.owner || self.officials.contains(address) {
            Ok(())
        } else {
            Err(Error::Unauthorized(address))
        }
    }

    /// Require `caller` to be the owner. Officials do not pass.
    fn authorize_owner(&self, caller: &CallerContext) -> Result<()> {
        let address = caller.address();
        if address == self.owner {
            Ok(())
        } else {
            Err(Error::Unauthorized(address))
        }
    }

    /// Delegate officiating rights to `official`. Owner only; adding an
    /// existing official is a no-op.
    pub fn add_govt_official(&mut self, caller: &CallerContext, official: Address) -> Result<()> {
        self.authorize_owner(caller)?;
        if self.officials.add(official) {
            info!("Added government official {official}");
        }
        Ok(())
    }

    /// Withdraw officiating rights from `official`. Owner only; removing a
    /// non-official is a no-op.
    pub fn remove_govt_official(
        &mut self,
        caller: &CallerContext,
        official: Address,
    ) -> Result<()> {
        self.authorize_owner(caller)?;
        if self.officials.remove(official) {
            info!("Removed government official {official}");
        }
        Ok(())
    }

    pub fn officials_count(&self) -> usize {
        self.officials.len()
    }

    /// Register candidates in the given order, assigning sequential indexes.
    pub fn add_candidates(&mut self, caller: &CallerContext, names: Vec<String>) -> Result<()> {
        self.authorize(caller)?;
        if self.election_ongoing() {
            warn!("Roster change while the election window is open");
        }
        let added = self.candidates.add(names);
        info!(
            "Registered {added} candidates ({} on the roster)",
            self.candidates.len()
        );
        Ok(())
    }

    /// The roster in index order, as parallel name/index sequences.
    pub fn get_candidates(&self) -> CandidateList {
        CandidateList::from(&self.candidates)
    }

    /// Indexed single-candidate getter.
    pub fn candidate(&self, index: CandidateIndex) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Clear the roster; numbering restarts at zero. Voters are untouched.
    pub fn reset_candidates(&mut self, caller: &CallerContext) -> Result<()> {
        self.authorize(caller)?;
        if self.election_ongoing() {
            warn!("Roster cleared while the election window is open");
        }
        self.candidates.clear();
        info!("Candidate roster cleared");
        Ok(())
    }

    /// Register a voter by VIN: unverified and yet to vote.
    pub fn add_vin(&mut self, caller: &CallerContext, vin: Vin) -> Result<()> {
        self.authorize(caller)?;
        let voter = VoterCore::new(vin, &self.config);
        if !self.voters.register(voter) {
            return Err(Error::AlreadyRegistered(vin));
        }
        info!("Registered VIN {vin} ({} voters)", self.voters.len());
        Ok(())
    }

    /// Mark the voter registered under `vin` as verified, and bind `voter`
    /// as the caller address entitled to vote under it. Idempotent;
    /// re-verifying with a different address moves the binding.
    pub fn verify_voter(&mut self, caller: &CallerContext, vin: Vin, voter: Address) -> Result<()> {
        self.authorize(caller)?;
        let digest = vin.into_digest(&self.config);
        if !self.voters.verify(&digest) {
            return Err(Error::UnknownVoter(vin));
        }
        if let Some(previous) = self.voters.bind(voter, digest) {
            warn!("VIN {vin} re-bound from {previous} to {voter}");
        }
        info!("Verified VIN {vin} for {voter}");
        Ok(())
    }

    /// Clear every voter's voted flag, enabling a fresh round without
    /// re-verification.
    pub fn reset_has_voted(&mut self, caller: &CallerContext) -> Result<()> {
        self.authorize(caller)?;
        self.voters.reset_has_voted();
        info!("Cleared voted flags for a fresh round");
        Ok(())
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Open (or re-open) the election window to close `duration_seconds`
    /// from now. The duration must be positive.
    pub fn set_election_time(
        &mut self,
        caller: &CallerContext,
        duration_seconds: i64,
    ) -> Result<()> {
        self.authorize(caller)?;
        if duration_seconds <= 0 {
            return Err(Error::InvalidDuration(duration_seconds));
        }
        let end_time = self
            .window
            .open_for(Duration::seconds(duration_seconds), Utc::now());
        info!("Election window open for {duration_seconds}s, closes at {end_time}");
        Ok(())
    }

    /// Whether the window is open right now. Derived from the clock on every
    /// call: once the end time passes, this reports false without any
    /// explicit closing operation.
    pub fn election_ongoing(&self) -> bool {
        self.window.ongoing_at(Utc::now())
    }

    /// When the window closes; None until it has first been opened.
    pub fn election_end_time(&self) -> Option<DateTime<Utc>> {
        self.window.end_time()
    }

    pub fn election_status(&self) -> ElectionStatus {
        ElectionStatus {
            ongoing: self.election_ongoing(),
            end_time: self.election_end_time(),
        }
    }

    /// Cast the caller's vote for the candidate at `candidate`.
    ///
    /// Open to any caller; eligibility comes from the binding set up by
    /// [`Ledger::verify_voter`]. Preconditions are checked in a fixed order
    /// and the first failure wins: window open, candidate exists, caller
    /// bound to a verified voter who has not yet voted.
    pub fn vote(&mut self, caller: &CallerContext, candidate: CandidateIndex) -> Result<()> {
        if !self.election_ongoing() {
            return Err(Error::ElectionClosed);
        }
        if !self.candidates.contains(candidate) {
            return Err(Error::UnknownCandidate(candidate));
        }
        let address = caller.address();
        let eligible = self
            .voters
            .resolve(address)
            .map(VoterCore::eligible)
            .unwrap_or(false);
        if !eligible {
            return Err(Error::NotEligible(address));
        }

        // All preconditions hold; the two mutations now land together.
        let marked = self.voters.mark_voted(address);
        let recorded = self.candidates.record_vote(candidate);
        assert!(marked && recorded.is_some()); // Both checked above.
        info!("Vote recorded for candidate {candidate}");
        Ok(())
    }

    /// Current counts in roster order, as parallel name/count sequences.
    pub fn get_votes(&self) -> VoteTotals {
        VoteTotals::from(&self.candidates)
    }

    /// The candidate with the most votes, ties broken by lowest index.
    /// None only when the roster is empty.
    pub fn get_leading_candidate(&self) -> Option<LeadingCandidate> {
        self.candidates.leading().map(LeadingCandidate::from)
    }

    /// Zero every candidate's counter. The roster and the voters' voted
    /// flags survive; pair with [`Ledger::reset_has_voted`] to also let
    /// voters vote again.
    pub fn reset_votes(&mut self, caller: &CallerContext) -> Result<()> {
        self.authorize(caller)?;
        self.candidates.reset_votes();
        info!("Vote counters reset");
        Ok(())
    }
}
