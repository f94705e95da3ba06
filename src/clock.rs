//! Pure stage evaluation. Nothing here reads storage or the block timestamp:
//! callers pass `now` and the relevant flags, so the same inputs always give
//! the same stage.

use crate::types::{LedgerPhase, Stage};

pub const ONE_DAY: u64 = 86_400;

/// Length of the accepting-votes window: 23 days.
pub const VOTING_PERIOD: u64 = 1_987_200;

/// Voting may be enabled at most this long before a round starts.
pub const LOCKOUT_PERIOD: u64 = 180 * ONE_DAY;

/// Length of each claim window: 365 days.
pub const CLAIM_WINDOW: u64 = 31_536_000;

/// Quorum rates are expressed out of 1000.
pub const MAX_QUORUM_RATE: u64 = 1_000;

pub const DEFAULT_QUORUM_RATE: u64 = 600;

/// Timing of the round that has not been finalized yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RoundWindow {
    pub start_time: u64,
}

impl RoundWindow {
    pub fn voting_end(&self) -> u64 {
        self.start_time.saturating_add(VOTING_PERIOD)
    }

    /// Earliest moment the notary may enable voting for this round.
    pub fn lockout_end(&self) -> u64 {
        self.start_time.saturating_sub(LOCKOUT_PERIOD)
    }
}

/// `open_round` is `None` between a failed result and the next `openRound`.
pub fn stage_at(now: u64, enabled: bool, passed: bool, open_round: Option<RoundWindow>) -> Stage {
    if passed {
        return Stage::Passed;
    }
    if !enabled {
        return Stage::LockOut;
    }

    match open_round {
        None => Stage::PendingVoting,
        Some(round) if now < round.start_time => Stage::PendingVoting,
        Some(round) if now < round.voting_end() => Stage::AcceptingVotes,
        Some(_) => Stage::PendingResult,
    }
}

pub fn phase_at(
    now: u64,
    enabled: bool,
    claim_start: u64,
    primary_duration: u64,
    secondary_duration: u64,
) -> LedgerPhase {
    if !enabled {
        return LedgerPhase::Disabled;
    }

    let primary_end = claim_start.saturating_add(primary_duration);
    let secondary_end = primary_end.saturating_add(secondary_duration);

    if now < claim_start {
        LedgerPhase::Active
    } else if now < primary_end {
        LedgerPhase::PrimaryClaimOpen
    } else if now < secondary_end {
        LedgerPhase::SecondaryClaimOpen
    } else {
        LedgerPhase::Closed
    }
}

