//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, ClientBalance, Fundlock, TokenValidator, WhitelistedToken, Withdrawals};

pub fn handle(ctx: Context<ReleaseFundlock>, index: u64) -> Result<()> {
    let withdrawals = &mut ctx.accounts.withdrawals;
    require!(
        (index as usize) < withdrawals.withdrawal_queue.len(),
        ErrorCode::InvalidWithdrawalIndex
    );

    let entry = withdrawals.withdrawal_queue[index as usize];
    let now = Clock::get()?.unix_timestamp;
    require!(
        now - entry.timestamp >= ctx.accounts.fundlock.release_lock,
        ErrorCode::ReleaseLockActive
    );
    require!(
        ctx.accounts.fundlock_token_vault.amount >= entry.amount,
        ErrorCode::InsufficientVaultFunds
    );

    let access_controller_key = ctx.accounts.access_controller.key();
    let token_validator_key = ctx.accounts.token_validator.key();
    let fundlock_seeds: &[&[&[u8]]] = &[&[
        FUNDLOCK_SEED,
        access_controller_key.as_ref(),
        token_validator_key.as_ref(),
        &[ctx.accounts.fundlock.bump],
    ]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.fundlock_token_vault.to_account_info(),
        to: ctx.accounts.client_ata.to_account_info(),
        authority: ctx.accounts.fundlock.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        fundlock_seeds,
    );
    token::transfer(cpi_ctx, entry.amount)?;

    // Update State
    withdrawals.withdrawal_queue.remove(index as usize);
    withdrawals.active_withdrawals_amount -= entry.amount;
    ctx.accounts.client_balance.amount -= entry.amount;

    msg!(
        "Released {} to client {}, {} still queued",
        entry.amount,
        ctx.accounts.client.key(),
        withdrawals.active_withdrawals_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseFundlock<'info> {
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
        mut,
        seeds = [FUNDLOCK_TOKEN_VAULT_SEED, fundlock.key().as_ref(), token.key().as_ref()],
        bump,
        token::mint = token,
        token::authority = fundlock,
    )]
    pub fundlock_token_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = client_ata.mint == token.key() && client_ata.owner == client.key()
    )]
    pub client_ata: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
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

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
}
