//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::states::{AccessController, Member, Role};

pub fn handle(ctx: Context<InitAccessController>) -> Result<()> {
    let access_controller = &mut ctx.accounts.access_controller;
    access_controller.admin = ctx.accounts.admin.key();
    access_controller.bump = ctx.bumps.access_controller;

    // The signer becomes the first and only member of the admin role
    let role = &mut ctx.accounts.role;
    role.role = Roles::Admin.as_str().to_string();
    role.member_count = 1;
    role.bump = ctx.bumps.role;

    let member = &mut ctx.accounts.member;
    member.member = ctx.accounts.admin.key();
    member.bump = ctx.bumps.member;

    msg!(
        "Access controller initialized with admin {}",
        ctx.accounts.admin.key()
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitAccessController<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [ACCESS_CONTROLLER_SEED, admin.key().as_ref()],
        bump,
        space = 8 + AccessController::INIT_SPACE,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        init,
        payer = admin,
        seeds = [ROLE_SEED, access_controller.key().as_ref(), Roles::Admin.as_str().as_bytes()],
        bump,
        space = 8 + Role::INIT_SPACE,
    )]
    pub role: Box<Account<'info, Role>>,
    #[account(
        init,
        payer = admin,
        seeds = [MEMBER_SEED, role.key().as_ref(), admin.key().as_ref()],
        bump,
        space = 8 + Member::INIT_SPACE,
    )]
    pub member: Box<Account<'info, Member>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
