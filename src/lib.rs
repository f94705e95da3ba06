#![no_std]

multiversx_sc::imports!();

pub mod clock;
pub mod errors;
pub mod liquidator;
pub mod types;
pub mod voting;

// ============================================================
// Contract
// Liquidation referendum plus the ledger it arms. The voting
// engine and the distribution ledger are separate modules with
// separate storage; they meet only at `arm_liquidation`.
// ============================================================

#[multiversx_sc::contract]
pub trait LiquidationVoting: voting::VotingModule + liquidator::LiquidatorModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        voting_token: TokenIdentifier,
        notary: ManagedAddress,
        first_round_start: u64,
        manager: ManagedAddress,
        payout_token: TokenIdentifier,
        rate: u64,
        unclaimed_rate: u64,
    ) {
        self.init_voting(voting_token, notary, first_round_start);
        self.init_liquidator(manager, payout_token, rate, unclaimed_rate);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
