// libraries
use anchor_lang::prelude::*;

/// Root of the permission graph. One per admin identity, the admin
/// field is set once at init and never changes.
#[account]
#[derive(InitSpace)]
pub struct AccessController {
    pub admin: Pubkey,
    pub bump: u8,
}

/// A named role under an access controller. `member_count` tracks the
/// number of live Member accounts derived from this role.
#[account]
#[derive(InitSpace)]
pub struct Role {
    #[max_len(32)]
    pub role: String,
    pub member_count: u32,
    pub bump: u8,
}

/// Membership record. Existence of the account is the grant; closing
/// the account is the revocation.
#[account]
#[derive(InitSpace)]
pub struct Member {
    pub member: Pubkey,
    pub bump: u8,
}
