//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::states::{AccessController, Fundlock, Member, Role, TokenValidator};

pub fn handle(ctx: Context<InitFundlock>, trade_lock: i64, release_lock: i64) -> Result<()> {
    let fundlock = &mut ctx.accounts.fundlock;
    fundlock.access_controller = ctx.accounts.access_controller.key();
    fundlock.token_validator = ctx.accounts.token_validator.key();
    fundlock.trade_lock = trade_lock;
    fundlock.release_lock = release_lock;
    fundlock.bump = ctx.bumps.fundlock;

    msg!(
        "Fundlock initialized, trade lock {}s, release lock {}s",
        trade_lock,
        release_lock
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitFundlock<'info> {
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
        init,
        payer = admin,
        seeds = [FUNDLOCK_SEED, access_controller.key().as_ref(), token_validator.key().as_ref()],
        bump,
        space = 8 + Fundlock::INIT_SPACE,
    )]
    pub fundlock: Box<Account<'info, Fundlock>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
