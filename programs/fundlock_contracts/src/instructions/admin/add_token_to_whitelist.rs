//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Member, Role, TokenValidator, WhitelistedToken};

pub fn handle(ctx: Context<AddTokenToWhitelist>, token_precision: u8) -> Result<()> {
    let token = &ctx.accounts.new_token_to_whitelist;
    require!(
        token_precision <= token.decimals,
        ErrorCode::InvalidPrecision
    );

    let whitelisted_token = &mut ctx.accounts.whitelisted_token;
    whitelisted_token.token_mint = token.key();
    whitelisted_token.token_decimals = token.decimals;
    whitelisted_token.token_precision = token_precision;
    whitelisted_token.bump = ctx.bumps.whitelisted_token;

    msg!(
        "Token {} whitelisted with decimals {} and precision {}",
        token.key(),
        token.decimals,
        token_precision
    );

    Ok(())
}

#[derive(Accounts)]
pub struct AddTokenToWhitelist<'info> {
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
    #[account(
        constraint = new_token_to_whitelist.decimals > 0 @ ErrorCode::NonFungibleToken
    )]
    pub new_token_to_whitelist: Box<Account<'info, Mint>>,
    #[account(
        init,
        payer = admin,
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), new_token_to_whitelist.key().as_ref()],
        bump,
        space = 8 + WhitelistedToken::INIT_SPACE,
    )]
    pub whitelisted_token: Box<Account<'info, WhitelistedToken>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
