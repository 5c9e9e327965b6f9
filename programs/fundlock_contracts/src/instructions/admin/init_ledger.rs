//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

//local imports
use crate::constants::*;
use crate::states::{AccessController, Fundlock, Ledger, Member, Role, TokenValidator, WhitelistedToken};
use crate::utils::precision_multiplier;

pub fn handle(ctx: Context<InitLedger>) -> Result<()> {
    let underlying_multiplier = precision_multiplier(
        ctx.accounts.underlying_token.decimals,
        ctx.accounts.whitelisted_underlying_token.token_precision,
    );
    let strike_multiplier = precision_multiplier(
        ctx.accounts.strike_token.decimals,
        ctx.accounts.whitelisted_strike_token.token_precision,
    );

    let ledger = &mut ctx.accounts.ledger;
    ledger.access_controller = ctx.accounts.access_controller.key();
    ledger.token_validator = ctx.accounts.token_validator.key();
    ledger.fundlock = ctx.accounts.fundlock.key();
    ledger.underlying_token = ctx.accounts.underlying_token.key();
    ledger.strike_token = ctx.accounts.strike_token.key();
    ledger.underlying_multiplier = underlying_multiplier;
    ledger.strike_multiplier = strike_multiplier;
    ledger.bump = ctx.bumps.ledger;

    msg!(
        "Ledger initialized, underlying multiplier {}, strike multiplier {}",
        underlying_multiplier,
        strike_multiplier
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitLedger<'info> {
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
        seeds = [FUNDLOCK_SEED, access_controller.key().as_ref(), token_validator.key().as_ref()],
        bump = fundlock.bump,
    )]
    pub fundlock: Box<Account<'info, Fundlock>>,
    pub underlying_token: Box<Account<'info, Mint>>,
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), underlying_token.key().as_ref()],
        bump = whitelisted_underlying_token.bump,
    )]
    pub whitelisted_underlying_token: Box<Account<'info, WhitelistedToken>>,
    pub strike_token: Box<Account<'info, Mint>>,
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), strike_token.key().as_ref()],
        bump = whitelisted_strike_token.bump,
    )]
    pub whitelisted_strike_token: Box<Account<'info, WhitelistedToken>>,
    #[account(
        init,
        payer = admin,
        seeds = [
            LEDGER_SEED,
            access_controller.key().as_ref(),
            token_validator.key().as_ref(),
            underlying_token.key().as_ref(),
            strike_token.key().as_ref(),
        ],
        bump,
        space = 8 + Ledger::INIT_SPACE,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
