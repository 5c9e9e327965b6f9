// libraries
use anchor_lang::prelude::*;

/// One market per (underlying, strike) token pair. The multipliers
/// bridge each side's whitelisted precision to its native decimals:
/// multiplier = 10^(native_decimals - whitelisted_precision).
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    pub access_controller: Pubkey,
    pub token_validator: Pubkey,
    pub fundlock: Pubkey,
    pub underlying_token: Pubkey,
    pub strike_token: Pubkey,
    pub underlying_multiplier: i64,
    pub strike_multiplier: i64,
    pub bump: u8,
}

/// Unique per ledger and contract id.
#[account]
#[derive(InitSpace)]
pub struct Contract {
    pub contract_id: u64,
    pub bump: u8,
}

/// Unique per contract and client. `size` is signed, shorts run negative.
#[account]
#[derive(InitSpace)]
pub struct Position {
    pub contract_id: u64,
    pub client: Pubkey,
    pub size: i64,
    pub bump: u8,
}
