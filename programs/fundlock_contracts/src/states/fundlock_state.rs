// libraries
use anchor_lang::prelude::*;

// local imports
use crate::constants::ALLOWED_WITHDRAWAL_LIMIT;

/// Custody vault set for one (access controller, token validator) pair.
/// `trade_lock` and `release_lock` are durations in seconds.
#[account]
#[derive(InitSpace)]
pub struct Fundlock {
    pub access_controller: Pubkey,
    pub token_validator: Pubkey,
    pub trade_lock: i64,
    pub release_lock: i64,
    pub bump: u8,
}

/// Per-client accounting for one pooled token vault.
///
/// `amount` is the client's total inside the vault, including funds
/// queued for withdrawal; the free balance is
/// `amount - Withdrawals.active_withdrawals_amount`.
/// `collateral_amount` tracks receipt tokens held on the client's
/// behalf in the external lending reserve.
#[account]
#[derive(InitSpace)]
pub struct ClientBalance {
    pub amount: u64,
    pub collateral_amount: u64,
    pub token: Pubkey,
    pub client: Pubkey,
    pub client_ata: Pubkey,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithdrawalState {
    pub amount: u64,
    pub timestamp: i64,
}

/// FIFO withdrawal queue for one client balance, capped at
/// ALLOWED_WITHDRAWAL_LIMIT entries.
///
/// Invariant: `active_withdrawals_amount` equals the sum of all queued
/// entry amounts.
#[account]
#[derive(InitSpace)]
pub struct Withdrawals {
    #[max_len(ALLOWED_WITHDRAWAL_LIMIT)]
    pub withdrawal_queue: Vec<WithdrawalState>,
    pub active_withdrawals_amount: u64,
    pub client: Pubkey,
    pub client_balance: Pubkey,
    pub bump: u8,
}
