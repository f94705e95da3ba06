// Error messages, grouped by category. The prefix names the category.

// ── Wrong stage ──

pub const ERR_NOT_LOCK_OUT: &str = "wrong stage: voting can only be enabled during lock-out";
pub const ERR_LOCK_OUT_NOT_OVER: &str = "wrong stage: round is more than 180 days away";
pub const ERR_LIQUIDATOR_NOT_SET: &str = "wrong stage: liquidator not set";
pub const ERR_NOT_PENDING_VOTING: &str = "wrong stage: quorum rate can only change while pending voting";
pub const ERR_NO_OPEN_ROUND: &str = "wrong stage: no round open";
pub const ERR_NOT_ACCEPTING_VOTES: &str = "wrong stage: not accepting votes";
pub const ERR_NOT_PENDING_RESULT: &str = "wrong stage: voting period has not ended";
pub const ERR_VOTE_PASSED: &str = "wrong stage: vote already passed";
pub const ERR_ROUND_OPEN: &str = "wrong stage: a round is already open";
pub const ERR_NOT_PRIMARY_WINDOW: &str = "wrong stage: claim window not open";
pub const ERR_NOT_SECONDARY_WINDOW: &str = "wrong stage: unclaimed window not open";

// ── Unauthorized ──

pub const ERR_NOT_OWNER: &str = "unauthorized: caller is not the owner";
pub const ERR_NOT_NOTARY: &str = "unauthorized: caller is not the notary";
pub const ERR_NOT_MANAGER: &str = "unauthorized: caller is not the manager";
pub const ERR_NOT_VOTING_ENGINE: &str = "unauthorized: only a passing vote can trigger liquidation";

// ── Already done ──

pub const ERR_ALREADY_ENABLED: &str = "already done: voting already enabled";
pub const ERR_ALREADY_VOTED: &str = "already done: already voted this round";
pub const ERR_RESULT_FINALIZED: &str = "already done: result already finalized";
pub const ERR_LIQUIDATOR_ALREADY_SET: &str = "already done: liquidator already set";
pub const ERR_ALREADY_TRIGGERED: &str = "already done: liquidation already triggered";
pub const ERR_ALREADY_CLAIMED: &str = "already done: funds already claimed";

// ── Invalid argument ──

pub const ERR_INVALID_QUORUM_RATE: &str = "invalid argument: quorum rate above 1000";
pub const ERR_NO_VOTING_POWER: &str = "invalid argument: no voting power";
pub const ERR_INVALID_START_TIME: &str = "invalid argument: invalid start time";
pub const ERR_INVALID_RATE: &str = "invalid argument: rate must be positive";
pub const ERR_INVALID_TOKEN: &str = "invalid argument: invalid token identifier";
pub const ERR_PAYOUT_IS_VOTING_TOKEN: &str = "invalid argument: payout token must differ from the voting token";
pub const ERR_NOTHING_TO_CLAIM: &str = "invalid argument: nothing to claim";
pub const ERR_LEDGER_ACTIVE: &str = "invalid argument: liquidator already active";
pub const ERR_WRONG_PAYMENT: &str = "invalid argument: payment must be the payout token";
pub const ERR_WRONG_VOTING_PAYMENT: &str = "invalid argument: payment must be the voting token";
pub const ERR_INVALID_LIQUIDATOR: &str = "invalid argument: liquidator must be this contract";

// ── Not yet eligible ──

pub const ERR_WINDOWS_NOT_ELAPSED: &str = "not yet eligible: claim windows still running";

// ── Escrow ──

pub const ERR_INSUFFICIENT_ESCROW: &str = "insufficient escrow: not enough payout funds";
