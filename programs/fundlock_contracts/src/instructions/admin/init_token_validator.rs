//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::states::{AccessController, Member, Role, TokenValidator};

pub fn handle(ctx: Context<InitTokenValidator>) -> Result<()> {
    let token_validator = &mut ctx.accounts.token_validator;
    token_validator.access_controller = ctx.accounts.access_controller.key();
    token_validator.bump = ctx.bumps.token_validator;

    msg!("Token validator initialized");

    Ok(())
}

#[derive(Accounts)]
pub struct InitTokenValidator<'info> {
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
        init,
        payer = admin,
        seeds = [TOKEN_VALIDATOR_SEED, access_controller.key().as_ref()],
        bump,
        space = 8 + TokenValidator::INIT_SPACE,
    )]
    pub token_validator: Box<Account<'info, TokenValidator>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
