use std::time::Instant;

use anyhow::{ensure, Result};
use clap::Parser;
use rand::seq::SliceRandom;

use election_ledger::model::caller::{Address, CallerContext};
use election_ledger::model::voter::Vin;
use election_ledger::{Config, Ledger};

#[rustfmt::skip]
const CANDIDATES: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Dave",
    "Eve",
    "Fred",
    "Grace",
    "Henry",
    "Irene",
    "Joe",
];

#[derive(Parser)]
struct Args {
    /// Number of candidates on the ballot.
    #[arg(long, default_value_t = 10)]
    candidates: usize,

    /// Number of registered, verified voters.
    #[arg(long, default_value_t = 100_000)]
    voters: u64,

    /// Election window length in seconds.
    #[arg(long, default_value_t = 3600)]
    duration: i64,
}

fn voter_address(index: u64) -> Address {
    let mut bytes = [0_u8; 20];
    bytes[..8].copy_from_slice(&index.to_le_bytes());
    Address::new(bytes)
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        (1..=CANDIDATES.len()).contains(&args.candidates),
        "--candidates must be between 1 and {}",
        CANDIDATES.len()
    );

    let owner = Address::new([0xff; 20]);
    let owner_ctx = CallerContext::new(owner);
    let mut ledger = Ledger::new(owner, Config::new("benchmark-hmac-secret"));

    let names = CANDIDATES[..args.candidates]
        .iter()
        .map(|name| name.to_string())
        .collect();
    ledger.add_candidates(&owner_ctx, names)?;
    ledger.set_election_time(&owner_ctx, args.duration)?;

    // Register and verify the electorate.
    let start = Instant::now();
    for index in 0..args.voters {
        let vin = Vin(1_000_000 + index);
        ledger.add_vin(&owner_ctx, vin)?;
        ledger.verify_voter(&owner_ctx, vin, voter_address(index))?;
    }
    let registration = start.elapsed();

    // One vote per voter, spread randomly across the ballot.
    let indexes: Vec<u32> = (0..args.candidates as u32).collect();
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    for index in 0..args.voters {
        let choice = *indexes.choose(&mut rng).expect("ballot is non-empty");
        ledger.vote(&CallerContext::new(voter_address(index)), choice)?;
    }
    let voting = start.elapsed();

    println!(
        "Registered and verified {} voters in {registration:?}",
        args.voters
    );
    println!(
        "Cast {} votes in {voting:?} ({:.0} votes/sec)",
        args.voters,
        args.voters as f64 / voting.as_secs_f64()
    );

    let totals = ledger.get_votes();
    for (name, count) in totals.names.iter().zip(&totals.counts) {
        println!("{name:>8}: {count}");
    }
    if let Some(leader) = ledger.get_leading_candidate() {
        println!("Leader: {} with {} votes", leader.name, leader.vote_count);
    }

    Ok(())
}
