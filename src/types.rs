multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stage — derived phase of the voting engine
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Voting not yet enabled by the notary.
    LockOut,
    /// Enabled, waiting for the open round to start (or for a new round).
    PendingVoting,
    /// Inside the voting period of the open round.
    AcceptingVotes,
    /// Voting period elapsed, result not yet computed.
    PendingResult,
    /// A round passed. Terminal.
    Passed,
}

// ============================================================
// Ledger phase — derived phase of the distribution ledger
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LedgerPhase {
    /// Not armed. Configuration may change.
    Disabled,
    /// Armed, claim windows not started yet (start override in the future).
    Active,
    /// First claim window, pays `rate`.
    PrimaryClaimOpen,
    /// Second claim window, pays `unclaimed_rate` to those who skipped the first.
    SecondaryClaimOpen,
    /// Both windows elapsed. Only the manager's remainder sweep is left.
    Closed,
}

// ============================================================
// Proposal — one per voting round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub quorum_rate: u64,
    pub start_time: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub finalized: bool,
    pub did_pass: bool,
    /// Yes-ratio out of 1000, recorded by `calcProposalResult` (0 until then).
    pub result_ratio: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(start_time: u64, quorum_rate: u64) -> Self {
        Proposal {
            quorum_rate,
            start_time,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            finalized: false,
            did_pass: false,
            result_ratio: 0,
        }
    }
}
