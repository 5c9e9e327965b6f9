//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Member, Role};

pub fn handle(ctx: Context<RevokeRole>, role_revoked: String, member_pk: Pubkey) -> Result<()> {
    let role = &mut ctx.accounts.role;
    role.member_count = role.member_count.saturating_sub(1);

    msg!(
        "Role {} revoked from {}, {} members remain",
        role_revoked,
        member_pk,
        role.member_count
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(role_revoked: String, member_pk: Pubkey)]
pub struct RevokeRole<'info> {
    #[account(
        mut,
        constraint = admin.key() == access_controller.admin @ ErrorCode::UnauthorizedAdmin
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        mut,
        seeds = [ROLE_SEED, access_controller.key().as_ref(), role_revoked.as_bytes()],
        bump = role.bump,
    )]
    pub role: Box<Account<'info, Role>>,
    // Closing the member account is the revocation, rent goes back to
    // the admin
    #[account(
        mut,
        close = admin,
        seeds = [MEMBER_SEED, role.key().as_ref(), member_pk.as_ref()],
        bump = member.bump,
    )]
    pub member: Box<Account<'info, Member>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
