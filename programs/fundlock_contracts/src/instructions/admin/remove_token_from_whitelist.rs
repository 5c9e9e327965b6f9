//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

//local imports
use crate::constants::*;
use crate::states::{AccessController, Member, Role, TokenValidator, WhitelistedToken};

pub fn handle(ctx: Context<RemoveTokenFromWhitelist>) -> Result<()> {
    msg!(
        "Token {} removed from whitelist",
        ctx.accounts.token_to_remove.key()
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveTokenFromWhitelist<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        seeds = [ROLE_SEED, access_controller.key().as_ref(), Roles::Admin.as_str().as_bytes()],
        bump = role.bump,
    )]
    pub role: Box<Account<'info, Role>>,
    #[account(
        seeds = [MEMBER_SEED, role.key().as_ref(), admin.key().as_ref()],
        bump = member.bump,
    )]
    pub member: Box<Account<'info, Member>>,
    #[account(
        seeds = [TOKEN_VALIDATOR_SEED, access_controller.key().as_ref()],
        bump = token_validator.bump,
    )]
    pub token_validator: Box<Account<'info, TokenValidator>>,
    pub token_to_remove: Box<Account<'info, Mint>>,
    // Closing the account removes the token from the whitelist; any
    // later operation referencing the mint fails to resolve this PDA
    #[account(
        mut,
        close = admin,
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), token_to_remove.key().as_ref()],
        bump = whitelisted_token.bump,
    )]
    pub whitelisted_token: Box<Account<'info, WhitelistedToken>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
