//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Member, Role};

pub fn handle(ctx: Context<RenounceRole>, role_renounced: String, member_pk: Pubkey) -> Result<()> {
    let role = &mut ctx.accounts.role;
    role.member_count = role.member_count.saturating_sub(1);

    msg!(
        "{} renounced role {}, {} members remain",
        member_pk,
        role_renounced,
        role.member_count
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(role_renounced: String, member_pk: Pubkey)]
pub struct RenounceRole<'info> {
    // Only the member itself can renounce its role
    #[account(
        mut,
        constraint = caller.key() == member_pk @ ErrorCode::Unauthorized
    )]
    pub caller: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        mut,
        seeds = [ROLE_SEED, access_controller.key().as_ref(), role_renounced.as_bytes()],
        bump = role.bump,
    )]
    pub role: Box<Account<'info, Role>>,
    #[account(
        mut,
        close = caller,
        seeds = [MEMBER_SEED, role.key().as_ref(), member_pk.as_ref()],
        bump = member.bump,
    )]
    pub member: Box<Account<'info, Member>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
