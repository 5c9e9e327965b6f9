//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, ClientBalance, Fundlock, TokenValidator, WhitelistedToken, WithdrawalState, Withdrawals};
use crate::utils::free_balance;

pub fn handle(ctx: Context<WithdrawFundlock>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::AmountZero);

    let client_balance = &ctx.accounts.client_balance;
    let withdrawals = &mut ctx.accounts.withdrawals;

    require!(
        withdrawals.withdrawal_queue.len() < ALLOWED_WITHDRAWAL_LIMIT,
        ErrorCode::WithdrawalQueueFull
    );
    // Only the part of the balance not already queued can be withdrawn
    require!(
        free_balance(client_balance, withdrawals) >= amount,
        ErrorCode::InsufficientBalance
    );

    let withdrawal = WithdrawalState {
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    };
    withdrawals.withdrawal_queue.push(withdrawal);
    withdrawals.active_withdrawals_amount += amount;

    let index = withdrawals.withdrawal_queue.len() - 1;
    msg!(
        "Withdrawal queued: client={}, token={}, amount={}, index={}",
        ctx.accounts.client.key(),
        ctx.accounts.token.key(),
        amount,
        index
    );
    msg!(
        "Active withdrawals amount: {}",
        withdrawals.active_withdrawals_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFundlock<'info> {
    #[account(mut)]
    pub client: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
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
    pub token: Box<Account<'info, Mint>>,
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), token.key().as_ref()],
        bump = whitelisted_token.bump,
    )]
    pub whitelisted_token: Box<Account<'info, WhitelistedToken>>,
    #[account(
        seeds = [FUNDLOCK_TOKEN_VAULT_SEED, fundlock.key().as_ref(), token.key().as_ref()],
        bump,
        token::mint = token,
        token::authority = fundlock,
    )]
    pub fundlock_token_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        constraint = client_ata.mint == token.key() && client_ata.owner == client.key()
    )]
    pub client_ata: Box<Account<'info, TokenAccount>>,
    #[account(
        seeds = [CLIENT_BALANCE_SEED, fundlock_token_vault.key().as_ref(), client_ata.key().as_ref()],
        bump = client_balance.bump,
    )]
    pub client_balance: Box<Account<'info, ClientBalance>>,
    #[account(
        mut,
        seeds = [WITHDRAWALS_SEED, fundlock.key().as_ref(), client_balance.key().as_ref()],
        bump = withdrawals.bump,
    )]
    pub withdrawals: Box<Account<'info, Withdrawals>>,
}
