//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, ClientBalance, Fundlock, Member, Role, TokenValidator, Withdrawals};
use crate::utils::{apply_balance_change, read_pda_account, write_pda_account};

// Remaining accounts carry one (client_balance, withdrawals) pair per
// batch entry, in entry order.
pub fn handle<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateBalancesFundlock<'info>>,
    amounts: Vec<i64>,
    tokens: Vec<Pubkey>,
    clients_ata: Vec<Pubkey>,
    backend_id: u64,
) -> Result<()> {
    require!(
        !amounts.is_empty() && amounts.len() == tokens.len() && amounts.len() == clients_ata.len(),
        ErrorCode::InvalidRemainingAccounts
    );
    require!(
        ctx.remaining_accounts.len() == amounts.len() * 2,
        ErrorCode::InvalidRemainingAccounts
    );

    let trade_lock = ctx.accounts.fundlock.trade_lock;
    let now = Clock::get()?.unix_timestamp;

    for i in 0..amounts.len() {
        let balance_info = &ctx.remaining_accounts[i * 2];
        let withdrawals_info = &ctx.remaining_accounts[i * 2 + 1];

        let mut client_balance: ClientBalance = read_pda_account(balance_info)?;
        let mut withdrawals: Withdrawals = read_pda_account(withdrawals_info)?;

        require!(
            client_balance.token == tokens[i] && client_balance.client_ata == clients_ata[i],
            ErrorCode::AccountOrderViolated
        );
        require!(
            withdrawals.client_balance == balance_info.key(),
            ErrorCode::AccountOrderViolated
        );

        apply_balance_change(&mut client_balance, &mut withdrawals, amounts[i], trade_lock, now)?;

        write_pda_account(&client_balance, balance_info)?;
        write_pda_account(&withdrawals, withdrawals_info)?;

        msg!(
            "Client {} balance adjusted by {} to {}",
            client_balance.client,
            amounts[i],
            client_balance.amount
        );
    }

    msg!("Balances updated successfully! Backend ID: {}", backend_id);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateBalancesFundlock<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

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
        seeds = [MEMBER_SEED, role.key().as_ref(), caller.key().as_ref()],
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
}
