multiversx_sc::imports!();

use crate::clock::{self, RoundWindow, MAX_QUORUM_RATE, VOTING_PERIOD};
use crate::errors::*;
use crate::liquidator;
use crate::types::{Proposal, Stage};

// ============================================================
// Voting engine
// Rounds of token-weighted yes/no voting on liquidation.
// The stage is never stored: it is derived from the block
// timestamp and the flags below on every call.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule: liquidator::LiquidatorModule {
    fn init_voting(
        &self,
        voting_token: TokenIdentifier,
        notary: ManagedAddress,
        first_round_start: u64,
    ) {
        require!(voting_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(first_round_start > 0, ERR_INVALID_START_TIME);

        self.voting_token().set(&voting_token);
        self.notary().set(&notary);
        self.voting_enabled().set(false);
        self.vote_passed().set(false);
        self.round_count().set(0u64);

        self.create_round(0, first_round_start, clock::DEFAULT_QUORUM_RATE);
    }

    // ========================================================
    // ENDPOINT: setLiquidator
    // Wires the ledger a passing vote will arm. One-time, and
    // only the ledger hosted in this contract is accepted.
    // ========================================================

    #[endpoint(setLiquidator)]
    fn set_liquidator(&self, liquidator: ManagedAddress) {
        self.require_owner();
        require!(self.liquidator().is_empty(), ERR_LIQUIDATOR_ALREADY_SET);
        require!(
            liquidator == self.blockchain().get_sc_address(),
            ERR_INVALID_LIQUIDATOR
        );

        self.liquidator().set(&liquidator);
        self.liquidator_set_event(&liquidator);
    }

    // ========================================================
    // ENDPOINT: enableVoting
    // Notary releases the lock-out, at most 180 days before the round.
    // ========================================================

    #[endpoint(enableVoting)]
    fn enable_voting(&self) {
        self.require_notary();
        require!(!self.voting_enabled().get(), ERR_ALREADY_ENABLED);
        require!(self.current_stage() == Stage::LockOut, ERR_NOT_LOCK_OUT);
        require!(!self.liquidator().is_empty(), ERR_LIQUIDATOR_NOT_SET);

        if let Some(round) = self.open_round_window() {
            let now = self.blockchain().get_block_timestamp();
            require!(now >= round.lockout_end(), ERR_LOCK_OUT_NOT_OVER);
        }

        self.voting_enabled().set(true);
        self.voting_enabled_event(self.current_round().get());
    }

    // ========================================================
    // ENDPOINT: changeQuorumRate
    // Only before the open round starts accepting votes. There is
    // nothing to change between a failed round and `openRound`.
    // ========================================================

    #[endpoint(changeQuorumRate)]
    fn change_quorum_rate(&self, quorum_rate: u64) {
        self.require_notary();
        require!(
            self.current_stage() == Stage::PendingVoting,
            ERR_NOT_PENDING_VOTING
        );
        require!(self.round_open().get(), ERR_NO_OPEN_ROUND);
        require!(quorum_rate <= MAX_QUORUM_RATE, ERR_INVALID_QUORUM_RATE);

        let round = self.current_round().get();
        self.current_rate().set(quorum_rate);
        self.proposals(round).update(|p| p.quorum_rate = quorum_rate);

        self.quorum_rate_changed_event(round, quorum_rate);
    }

    // ========================================================
    // ENDPOINT: openRound
    // After a failed round, schedules the next one.
    // ========================================================

    #[endpoint(openRound)]
    fn open_round(&self, start_time: u64, quorum_rate: u64) {
        self.require_notary();
        require!(!self.vote_passed().get(), ERR_VOTE_PASSED);
        require!(!self.round_open().get(), ERR_ROUND_OPEN);
        require!(quorum_rate <= MAX_QUORUM_RATE, ERR_INVALID_QUORUM_RATE);

        let now = self.blockchain().get_block_timestamp();
        let previous_start = self.proposals(self.current_round().get()).get().start_time;
        require!(
            start_time > now && start_time > previous_start,
            ERR_INVALID_START_TIME
        );

        let round = self.round_count().get();
        self.create_round(round, start_time, quorum_rate);
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the voting-token amount sent with the call; the
    // tokens go straight back to the voter.
    // ========================================================

    #[payable("*")]
    #[endpoint(vote)]
    fn vote(&self, is_yes: bool) {
        require!(
            self.current_stage() == Stage::AcceptingVotes,
            ERR_NOT_ACCEPTING_VOTES
        );

        let caller = self.blockchain().get_caller();
        let round = self.current_round().get();
        require!(!self.voted(round, &caller).get(), ERR_ALREADY_VOTED);

        let weight = self.voting_token_payment(ERR_NO_VOTING_POWER);

        self.proposals(round).update(|p| {
            if is_yes {
                p.yes_votes += &weight;
            } else {
                p.no_votes += &weight;
            }
        });
        self.voted(round, &caller).set(true);

        let token = self.voting_token().get();
        self.send().direct_esdt(&caller, &token, 0, &weight);

        self.vote_cast_event(round, &caller, is_yes, &weight);
    }

    // ========================================================
    // ENDPOINT: ping
    // No state change; lets callers observe the stage at the
    // current block.
    // ========================================================

    #[endpoint(ping)]
    fn ping(&self) -> Stage {
        self.current_stage()
    }

    // ========================================================
    // ENDPOINT: calcProposalResult
    // Anyone, once per round, after the voting period.
    // ========================================================

    #[endpoint(calcProposalResult)]
    fn calc_proposal_result(&self) -> bool {
        require!(
            !self.vote_passed().get() && self.round_open().get(),
            ERR_RESULT_FINALIZED
        );
        require!(
            self.current_stage() == Stage::PendingResult,
            ERR_NOT_PENDING_RESULT
        );

        let round = self.current_round().get();
        let mut proposal = self.proposals(round).get();

        let total = &proposal.yes_votes + &proposal.no_votes;
        let ratio = if total == 0u64 {
            0
        } else {
            ((&proposal.yes_votes * MAX_QUORUM_RATE) / &total)
                .to_u64()
                .unwrap_or_default()
        };
        let did_pass = total > 0u64 && ratio >= proposal.quorum_rate;

        proposal.finalized = true;
        proposal.did_pass = did_pass;
        proposal.result_ratio = ratio;
        self.proposals(round).set(&proposal);
        self.round_open().set(false);

        self.proposal_result_event(round, did_pass, ratio);

        if did_pass {
            self.vote_passed().set(true);
            self.arm_liquidation();
        }

        did_pass
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_notary(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.notary().get(), ERR_NOT_NOTARY);
    }

    fn create_round(&self, round: u64, start_time: u64, quorum_rate: u64) {
        self.proposals(round).set(Proposal::new(start_time, quorum_rate));
        self.current_round().set(round);
        self.round_count().set(round + 1);
        self.current_rate().set(quorum_rate);
        self.round_open().set(true);

        self.round_opened_event(round, start_time, quorum_rate);
    }

    fn open_round_window(&self) -> Option<RoundWindow> {
        if !self.round_open().get() {
            return None;
        }
        let proposal = self.proposals(self.current_round().get()).get();
        Some(RoundWindow {
            start_time: proposal.start_time,
        })
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCurrentStage)]
    fn current_stage(&self) -> Stage {
        clock::stage_at(
            self.blockchain().get_block_timestamp(),
            self.voting_enabled().get(),
            self.vote_passed().get(),
            self.open_round_window(),
        )
    }

    #[view(getProposal)]
    fn get_proposal(&self, round: u64) -> Proposal<Self::Api> {
        self.proposals(round).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, round: u64, voter: &ManagedAddress) -> bool {
        self.voted(round, voter).get()
    }

    #[view(getVotingPeriod)]
    fn voting_period(&self) -> u64 {
        VOTING_PERIOD
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] round: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] is_yes: bool,
        weight: &BigUint,
    );

    #[event("proposalResult")]
    fn proposal_result_event(
        &self,
        #[indexed] round: u64,
        #[indexed] did_pass: bool,
        ratio: u64,
    );

    #[event("roundOpened")]
    fn round_opened_event(
        &self,
        #[indexed] round: u64,
        #[indexed] start_time: u64,
        quorum_rate: u64,
    );

    #[event("votingEnabled")]
    fn voting_enabled_event(&self, #[indexed] round: u64);

    #[event("quorumRateChanged")]
    fn quorum_rate_changed_event(&self, #[indexed] round: u64, quorum_rate: u64);

    #[event("liquidatorSet")]
    fn liquidator_set_event(&self, #[indexed] liquidator: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Roles ──

    #[view(getNotary)]
    #[storage_mapper("notary")]
    fn notary(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLiquidator)]
    #[storage_mapper("liquidator")]
    fn liquidator(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Engine flags ──

    #[view(isVotingEnabled)]
    #[storage_mapper("votingEnabled")]
    fn voting_enabled(&self) -> SingleValueMapper<bool>;

    #[view(hasVotePassed)]
    #[storage_mapper("votePassed")]
    fn vote_passed(&self) -> SingleValueMapper<bool>;

    #[view(getCurrentRate)]
    #[storage_mapper("currentRate")]
    fn current_rate(&self) -> SingleValueMapper<u64>;

    // ── Rounds ──

    #[view(getCurrentRound)]
    #[storage_mapper("currentRound")]
    fn current_round(&self) -> SingleValueMapper<u64>;

    #[view(getRoundCount)]
    #[storage_mapper("roundCount")]
    fn round_count(&self) -> SingleValueMapper<u64>;

    #[view(isRoundOpen)]
    #[storage_mapper("roundOpen")]
    fn round_open(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("proposals")]
    fn proposals(&self, round: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voted")]
    fn voted(&self, round: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
