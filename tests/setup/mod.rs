#![allow(dead_code)]

use liquidation_voting::clock::ONE_DAY;
use liquidation_voting::liquidator::LiquidatorModule;
use liquidation_voting::types::{LedgerPhase, Stage};
use liquidation_voting::voting::VotingModule;
use liquidation_voting::LiquidationVoting;
use multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopEncode};
use multiversx_sc::types::Address;
use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::{
    managed_address, managed_token_id, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper, TxResult},
};

pub const WASM_PATH: &str = "output/liquidation-voting.wasm";

pub const VOTE_TOKEN: &[u8] = b"SRC-123456";
pub const PAYOUT_TOKEN: &[u8] = b"WETH-abcdef";

/// 2022-12-01, 2023-12-01, 2024-12-01
pub const START_TIMES: [u64; 3] = [1_669_852_800, 1_701_388_800, 1_733_011_200];

pub const RATE: u64 = 10;
pub const UNCLAIMED_RATE: u64 = 5;

pub const INVESTOR_BALANCES: [u64; 3] = [10_000, 20_000, 30_000];

pub struct VotingSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> liquidation_voting::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub notary: Address,
    pub manager: Address,
    pub investors: Vec<Address>,
    /// Holds no voting tokens.
    pub outsider: Address,
    pub sc: ContractObjWrapper<liquidation_voting::ContractObj<DebugApi>, Builder>,
}

impl<Builder> VotingSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> liquidation_voting::ContractObj<DebugApi>,
{
    pub fn new(builder: Builder) -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();

        let owner = b_mock.create_user_account(&rust_zero);
        let notary = b_mock.create_user_account(&rust_zero);
        let manager = b_mock.create_user_account(&rust_zero);
        let outsider = b_mock.create_user_account(&rust_zero);

        let mut investors = Vec::new();
        for balance in INVESTOR_BALANCES {
            let investor = b_mock.create_user_account(&rust_zero);
            b_mock.set_esdt_balance(&investor, VOTE_TOKEN, &rust_biguint!(balance));
            investors.push(investor);
        }

        let sc = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

        b_mock.set_block_timestamp(START_TIMES[0] - 365 * ONE_DAY);
        b_mock
            .execute_tx(&owner, &sc, &rust_zero, |sc| {
                sc.init(
                    managed_token_id!(VOTE_TOKEN),
                    managed_address!(&notary),
                    START_TIMES[0],
                    managed_address!(&manager),
                    managed_token_id!(PAYOUT_TOKEN),
                    RATE,
                    UNCLAIMED_RATE,
                );
            })
            .assert_ok();

        VotingSetup {
            b_mock,
            owner,
            notary,
            manager,
            investors,
            outsider,
            sc,
        }
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    /// Points the engine at the ledger hosted in the same contract.
    pub fn link_liquidator(&mut self) {
        let sc_address = self.sc.address_ref().clone();
        self.b_mock
            .execute_tx(&self.owner, &self.sc, &rust_biguint!(0u64), |sc| {
                sc.set_liquidator(managed_address!(&sc_address));
            })
            .assert_ok();
    }

    pub fn enable_voting(&mut self) -> TxResult {
        let notary = self.notary.clone();
        self.b_mock
            .execute_tx(&notary, &self.sc, &rust_biguint!(0u64), |sc| {
                sc.enable_voting();
            })
    }

    pub fn change_quorum_rate(&mut self, caller: &Address, quorum_rate: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0u64), |sc| {
                sc.change_quorum_rate(quorum_rate);
            })
    }

    pub fn open_round(&mut self, caller: &Address, start_time: u64, quorum_rate: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0u64), |sc| {
                sc.open_round(start_time, quorum_rate);
            })
    }

    /// Votes with the voter's whole voting-token balance.
    pub fn vote(&mut self, voter: &Address, is_yes: bool) -> TxResult {
        let balance = self.vote_token_balance(voter);
        self.vote_with(voter, balance, is_yes)
    }

    /// A zero amount sends no payment at all.
    pub fn vote_with(&mut self, voter: &Address, amount: u64, is_yes: bool) -> TxResult {
        if amount == 0 {
            return self
                .b_mock
                .execute_tx(voter, &self.sc, &rust_biguint!(0u64), |sc| {
                    sc.vote(is_yes);
                });
        }
        self.b_mock.execute_esdt_transfer(
            voter,
            &self.sc,
            VOTE_TOKEN,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.vote(is_yes);
            },
        )
    }

    /// Primary-window claim handing in the holder's whole balance.
    pub fn claim_funds(&mut self, holder: &Address) -> TxResult {
        let balance = self.vote_token_balance(holder);
        self.claim_funds_with(holder, balance)
    }

    pub fn claim_funds_with(&mut self, holder: &Address, amount: u64) -> TxResult {
        if amount == 0 {
            return self
                .b_mock
                .execute_tx(holder, &self.sc, &rust_biguint!(0u64), |sc| {
                    sc.claim_funds();
                });
        }
        self.b_mock.execute_esdt_transfer(
            holder,
            &self.sc,
            VOTE_TOKEN,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.claim_funds();
            },
        )
    }

    /// Secondary-window claim handing in the holder's whole balance.
    pub fn claim_unclaimed(&mut self, holder: &Address) -> TxResult {
        let balance = self.vote_token_balance(holder);
        if balance == 0 {
            return self
                .b_mock
                .execute_tx(holder, &self.sc, &rust_biguint!(0u64), |sc| {
                    sc.claim_unclaimed_funds();
                });
        }
        self.b_mock.execute_esdt_transfer(
            holder,
            &self.sc,
            VOTE_TOKEN,
            0,
            &rust_biguint!(balance),
            |sc| {
                sc.claim_unclaimed_funds();
            },
        )
    }

    pub fn vote_token_balance(&self, account: &Address) -> u64 {
        self.b_mock
            .get_esdt_balance(account, VOTE_TOKEN, 0)
            .to_u64_digits()
            .first()
            .copied()
            .unwrap_or_default()
    }

    /// Moves voting tokens between two user accounts.
    pub fn transfer_vote_tokens(&mut self, from: &Address, to: &Address, amount: u64) {
        let from_balance = self.vote_token_balance(from);
        let to_balance = self.vote_token_balance(to);
        self.b_mock
            .set_esdt_balance(from, VOTE_TOKEN, &rust_biguint!(from_balance - amount));
        self.b_mock
            .set_esdt_balance(to, VOTE_TOKEN, &rust_biguint!(to_balance + amount));
    }

    pub fn calc_result(&mut self, caller: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0u64), |sc| {
                sc.calc_proposal_result();
            })
    }

    /// Drives round 0 to a passing result and returns the arming time.
    pub fn pass_vote(&mut self) -> u64 {
        self.link_liquidator();
        self.set_time(START_TIMES[0] - 180 * ONE_DAY + 1);
        self.enable_voting().assert_ok();

        self.set_time(START_TIMES[0]);
        let voter = self.investors[2].clone();
        self.vote(&voter, true).assert_ok();

        let finalize_time = START_TIMES[0] + 23 * ONE_DAY + 1;
        self.set_time(finalize_time);
        let caller = self.outsider.clone();
        self.calc_result(&caller).assert_ok();

        assert_eq!(self.stage(), Stage::Passed);
        finalize_time
    }

    pub fn stage(&mut self) -> Stage {
        let mut stage = Stage::LockOut;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                stage = sc.current_stage();
            })
            .assert_ok();
        stage
    }

    pub fn ledger_phase(&mut self) -> LedgerPhase {
        let mut phase = LedgerPhase::Disabled;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                phase = sc.current_state();
            })
            .assert_ok();
        phase
    }

    pub fn fund_escrow(&mut self, amount: u64) {
        let sc_address = self.sc.address_ref().clone();
        self.b_mock
            .set_esdt_balance(&sc_address, PAYOUT_TOKEN, &rust_biguint!(amount));
    }
}

/// Topics and data of the first log named `identifier`. Topic 0 is the
/// event name; the rest are the indexed arguments.
pub fn find_event(result: &TxResult, identifier: &[u8]) -> (Vec<Vec<u8>>, Vec<u8>) {
    let log = result
        .result_logs
        .iter()
        .find(|log| log.topics.first().map(|t| t.as_slice()) == Some(identifier))
        .unwrap_or_else(|| panic!("no {} event", String::from_utf8_lossy(identifier)));
    (log.topics.clone(), log.data.concat())
}

pub fn has_event(result: &TxResult, identifier: &[u8]) -> bool {
    result
        .result_logs
        .iter()
        .any(|log| log.topics.first().map(|t| t.as_slice()) == Some(identifier))
}

/// Top-encoded bytes, as they appear in event topics and data.
pub fn encoded<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}
