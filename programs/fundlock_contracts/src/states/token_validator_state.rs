// libraries
use anchor_lang::prelude::*;

/// Whitelist registry. One per access controller.
#[account]
#[derive(InitSpace)]
pub struct TokenValidator {
    pub access_controller: Pubkey,
    pub bump: u8,
}

/// One entry per accepted mint. `token_decimals` is read from the mint
/// on-chain, `token_precision` is the backend's accounting precision;
/// the gap between the two becomes the ledger multiplier.
#[account]
#[derive(InitSpace)]
pub struct WhitelistedToken {
    pub token_mint: Pubkey,
    pub token_decimals: u8,
    pub token_precision: u8,
    pub bump: u8,
}
