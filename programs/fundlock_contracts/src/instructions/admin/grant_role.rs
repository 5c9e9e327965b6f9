//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Member, Role};

pub fn handle(ctx: Context<GrantRole>, role_granted: String, new_member: Pubkey) -> Result<()> {
    require!(
        Roles::is_valid_role(&role_granted),
        ErrorCode::InvalidRole
    );

    let role = &mut ctx.accounts.role;
    role.role = role_granted.clone();
    role.member_count += 1;
    role.bump = ctx.bumps.role;

    let member = &mut ctx.accounts.member;
    member.member = new_member;
    member.bump = ctx.bumps.member;

    msg!("User {} granted role {}", new_member, role_granted);

    Ok(())
}

#[derive(Accounts)]
#[instruction(role_granted: String, new_member: Pubkey)]
pub struct GrantRole<'info> {
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
        init_if_needed,
        payer = admin,
        seeds = [ROLE_SEED, access_controller.key().as_ref(), role_granted.as_bytes()],
        bump,
        space = 8 + Role::INIT_SPACE,
    )]
    pub role: Box<Account<'info, Role>>,
    // A second grant for the same member fails here: the member account
    // already exists
    #[account(
        init,
        payer = admin,
        seeds = [MEMBER_SEED, role.key().as_ref(), new_member.as_ref()],
        bump,
        space = 8 + Member::INIT_SPACE,
    )]
    pub member: Box<Account<'info, Member>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
