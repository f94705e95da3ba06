multiversx_sc::imports!();

use crate::clock::{self, CLAIM_WINDOW};
use crate::errors::*;
use crate::types::LedgerPhase;

// ============================================================
// Distribution ledger
// Armed once by a passing vote, then pays the payout token
// pro-rata to voting-token holders across two claim windows.
// Claims hand the voting tokens in, so a balance is paid once.
// ============================================================

#[multiversx_sc::module]
pub trait LiquidatorModule {
    fn init_liquidator(
        &self,
        manager: ManagedAddress,
        payout_token: TokenIdentifier,
        rate: u64,
        unclaimed_rate: u64,
    ) {
        self.require_payout_token(&payout_token);
        require!(rate > 0 && unclaimed_rate > 0, ERR_INVALID_RATE);

        self.manager().set(&manager);
        self.payout_token().set(&payout_token);
        self.rate().set(rate);
        self.unclaimed_rate().set(unclaimed_rate);
        self.claim_funds_duration().set(CLAIM_WINDOW);
        self.claim_unclaimed_duration().set(CLAIM_WINDOW);
        self.ledger_enabled().set(false);
    }

    // ========================================================
    // Configuration — manager only, while disabled
    // ========================================================

    #[endpoint(setStartTime)]
    fn set_start_time(&self, start_time: u64) {
        self.require_manager_config();
        require!(start_time > 0, ERR_INVALID_START_TIME);

        self.start_time_override().set(start_time);
        self.start_time_set_event(start_time);
    }

    #[endpoint(setRate)]
    fn set_rate(&self, rate: u64) {
        self.require_manager_config();
        require!(rate > 0, ERR_INVALID_RATE);

        self.rate().set(rate);
        self.rate_set_event(rate);
    }

    #[endpoint(setUnclaimedRate)]
    fn set_unclaimed_rate(&self, unclaimed_rate: u64) {
        self.require_manager_config();
        require!(unclaimed_rate > 0, ERR_INVALID_RATE);

        self.unclaimed_rate().set(unclaimed_rate);
        self.unclaimed_rate_set_event(unclaimed_rate);
    }

    #[endpoint(setNewErc20Token)]
    fn set_new_payout_token(&self, token: TokenIdentifier) {
        self.require_manager_config();
        self.require_payout_token(&token);

        self.payout_token().set(&token);
        self.payout_token_set_event(&token);
    }

    #[endpoint(setManager)]
    fn set_manager(&self, manager: ManagedAddress) {
        self.require_owner();
        require!(!self.ledger_enabled().get(), ERR_LEDGER_ACTIVE);
        self.manager().set(&manager);
    }

    // ========================================================
    // Arming
    // ========================================================

    /// The engine lives in this contract, so no outside account,
    /// the owner included, can arm the ledger through here.
    #[endpoint(triggerLiquidation)]
    fn trigger_liquidation(&self) {
        require!(!self.ledger_enabled().get(), ERR_ALREADY_TRIGGERED);
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_sc_address(),
            ERR_NOT_VOTING_ENGINE
        );

        self.arm_liquidation();
    }

    /// One-shot Disabled → Active transition, reached from a passing result.
    fn arm_liquidation(&self) {
        require!(!self.ledger_enabled().get(), ERR_ALREADY_TRIGGERED);

        let now = self.blockchain().get_block_timestamp();
        let claim_start = core::cmp::max(now, self.start_time_override().get());

        self.ledger_enabled().set(true);
        self.claim_start().set(claim_start);
        self.liquidation_triggered_event(claim_start);
    }

    // ========================================================
    // Escrow funding
    // ========================================================

    #[payable("*")]
    #[endpoint(depositProceeds)]
    fn deposit_proceeds(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.payout_token().get(),
            ERR_WRONG_PAYMENT
        );
        require!(payment.amount > 0u64, ERR_WRONG_PAYMENT);

        let caller = self.blockchain().get_caller();
        self.proceeds_deposited_event(&caller, &payment.amount);
    }

    // ========================================================
    // Claims
    // ========================================================

    #[payable("*")]
    #[endpoint(claimFunds)]
    fn claim_funds(&self) {
        require!(
            self.current_state() == LedgerPhase::PrimaryClaimOpen,
            ERR_NOT_PRIMARY_WINDOW
        );

        let caller = self.blockchain().get_caller();
        require!(!self.claimed(&caller).get(), ERR_ALREADY_CLAIMED);

        let tokens = self.voting_token_payment(ERR_NOTHING_TO_CLAIM);
        let payout = self.payout_for(&tokens, self.rate().get());

        self.claimed(&caller).set(true);
        self.send_payout(&caller, &payout);
        self.funds_claimed_event(&caller, &payout);
    }

    #[payable("*")]
    #[endpoint(claimUnclaimFunds)]
    fn claim_unclaimed_funds(&self) {
        require!(
            self.current_state() == LedgerPhase::SecondaryClaimOpen,
            ERR_NOT_SECONDARY_WINDOW
        );

        let caller = self.blockchain().get_caller();
        require!(
            !self.claimed(&caller).get() && !self.claimed_unclaimed(&caller).get(),
            ERR_ALREADY_CLAIMED
        );

        let tokens = self.voting_token_payment(ERR_NOTHING_TO_CLAIM);
        let payout = self.payout_for(&tokens, self.unclaimed_rate().get());

        self.claimed_unclaimed(&caller).set(true);
        self.send_payout(&caller, &payout);
        self.unclaimed_funds_claimed_event(&caller, &payout);
    }

    #[endpoint(claimRemainder)]
    fn claim_remainder(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.manager().get(), ERR_NOT_MANAGER);

        require!(
            self.current_state() == LedgerPhase::Closed,
            ERR_WINDOWS_NOT_ELAPSED
        );

        let remainder = self.escrow_balance();
        if remainder > 0u64 {
            self.send_payout(&to, &remainder);
        }
        self.remainder_claimed_event(&to, &remainder);
    }

    // ========================================================
    // Internal helpers
    // ========================================================

    fn require_manager_config(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.manager().get(), ERR_NOT_MANAGER);
        require!(!self.ledger_enabled().get(), ERR_LEDGER_ACTIVE);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_NOT_OWNER
        );
    }

    fn require_payout_token(&self, token: &TokenIdentifier) {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            token != &self.voting_token().get(),
            ERR_PAYOUT_IS_VOTING_TOKEN
        );
    }

    /// Amount of voting tokens sent with the call. `none_err` is raised
    /// when nothing was sent.
    fn voting_token_payment(&self, none_err: &str) -> BigUint {
        let payments = self.call_value().all_esdt_transfers();
        require!(!payments.is_empty(), none_err);
        require!(payments.len() == 1, ERR_WRONG_VOTING_PAYMENT);

        let payment = payments.get(0);
        require!(
            payment.token_identifier == self.voting_token().get(),
            ERR_WRONG_VOTING_PAYMENT
        );
        require!(payment.amount > 0u64, none_err);
        payment.amount.clone()
    }

    /// Handed-in voting tokens times `rate`, checked against escrow.
    fn payout_for(&self, tokens: &BigUint, rate: u64) -> BigUint {
        let payout = tokens * rate;
        require!(payout <= self.escrow_balance(), ERR_INSUFFICIENT_ESCROW);
        payout
    }

    fn send_payout(&self, to: &ManagedAddress, amount: &BigUint) {
        let token = self.payout_token().get();
        self.send().direct_esdt(to, &token, 0, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCurrentState)]
    fn current_state(&self) -> LedgerPhase {
        clock::phase_at(
            self.blockchain().get_block_timestamp(),
            self.ledger_enabled().get(),
            self.claim_start().get(),
            self.claim_funds_duration().get(),
            self.claim_unclaimed_duration().get(),
        )
    }

    #[view(getEscrowBalance)]
    fn escrow_balance(&self) -> BigUint {
        let token = self.payout_token().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0)
    }

    #[view(hasClaimed)]
    fn has_claimed(&self, account: &ManagedAddress) -> bool {
        self.claimed(account).get()
    }

    #[view(hasClaimedUnclaimed)]
    fn has_claimed_unclaimed(&self, account: &ManagedAddress) -> bool {
        self.claimed_unclaimed(account).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("liquidationTriggered")]
    fn liquidation_triggered_event(&self, #[indexed] claim_start: u64);

    #[event("proceedsDeposited")]
    fn proceeds_deposited_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("fundsClaimed")]
    fn funds_claimed_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("unclaimedFundsClaimed")]
    fn unclaimed_funds_claimed_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("remainderClaimed")]
    fn remainder_claimed_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("startTimeSet")]
    fn start_time_set_event(&self, #[indexed] start_time: u64);

    #[event("rateSet")]
    fn rate_set_event(&self, #[indexed] rate: u64);

    #[event("unclaimedRateSet")]
    fn unclaimed_rate_set_event(&self, #[indexed] unclaimed_rate: u64);

    #[event("payoutTokenSet")]
    fn payout_token_set_event(&self, #[indexed] token: &TokenIdentifier);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Roles ──

    #[view(getManager)]
    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Payout configuration ──

    #[view(getVotingToken)]
    #[storage_mapper("votingToken")]
    fn voting_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPayoutToken)]
    #[storage_mapper("payoutToken")]
    fn payout_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRate)]
    #[storage_mapper("rate")]
    fn rate(&self) -> SingleValueMapper<u64>;

    #[view(getUnclaimedRate)]
    #[storage_mapper("unclaimedRate")]
    fn unclaimed_rate(&self) -> SingleValueMapper<u64>;

    #[view(getStartTimeOverride)]
    #[storage_mapper("startTimeOverride")]
    fn start_time_override(&self) -> SingleValueMapper<u64>;

    #[view(getClaimFundsDuration)]
    #[storage_mapper("claimFundsDuration")]
    fn claim_funds_duration(&self) -> SingleValueMapper<u64>;

    #[view(getClaimUnclaimedDuration)]
    #[storage_mapper("claimUnclaimedDuration")]
    fn claim_unclaimed_duration(&self) -> SingleValueMapper<u64>;

    // ── Ledger state ──

    #[view(isEnabled)]
    #[storage_mapper("ledgerEnabled")]
    fn ledger_enabled(&self) -> SingleValueMapper<bool>;

    #[view(getClaimStart)]
    #[storage_mapper("claimStart")]
    fn claim_start(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("claimed")]
    fn claimed(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("claimedUnclaimed")]
    fn claimed_unclaimed(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;
}
