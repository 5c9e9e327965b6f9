//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Member, Role};

pub fn handle(ctx: Context<CheckRole>, role_checked: String, member_pk: Pubkey) -> Result<()> {
    // Resolving the member PDA already proves the grant exists; this
    // guards against a stale account with mismatched contents
    require!(
        ctx.accounts.member.member == member_pk,
        ErrorCode::NoRole
    );

    msg!("{} holds role {}", member_pk, role_checked);

    Ok(())
}

#[derive(Accounts)]
#[instruction(role_checked: String, member_pk: Pubkey)]
pub struct CheckRole<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        seeds = [ROLE_SEED, access_controller.key().as_ref(), role_checked.as_bytes()],
        bump = role.bump,
    )]
    pub role: Box<Account<'info, Role>>,
    #[account(
        seeds = [MEMBER_SEED, role.key().as_ref(), member_pk.as_ref()],
        bump = member.bump,
    )]
    pub member: Box<Account<'info, Member>>,
}
