//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

//local imports
use crate::constants::*;
use crate::states::{AccessController, ClientBalance, Fundlock, TokenValidator, WhitelistedToken, Withdrawals};
use crate::utils::free_balance;

// Reporting utility, mutates nothing and is callable by anyone
pub fn handle(ctx: Context<BalanceSheetFundlock>) -> Result<()> {
    let client_balance = &ctx.accounts.client_balance;
    let withdrawals = &ctx.accounts.withdrawals;

    msg!(
        "Client {} token {}: balance={}, free={}, queued={}, collateral={}",
        client_balance.client,
        client_balance.token,
        client_balance.amount,
        free_balance(client_balance, withdrawals),
        withdrawals.active_withdrawals_amount,
        client_balance.collateral_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct BalanceSheetFundlock<'info> {
    pub caller: Signer<'info>,

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
    pub client_ata: Box<Account<'info, TokenAccount>>,
    #[account(
        seeds = [CLIENT_BALANCE_SEED, fundlock_token_vault.key().as_ref(), client_ata.key().as_ref()],
        bump = client_balance.bump,
    )]
    pub client_balance: Box<Account<'info, ClientBalance>>,
    #[account(
        seeds = [WITHDRAWALS_SEED, fundlock.key().as_ref(), client_balance.key().as_ref()],
        bump = withdrawals.bump,
    )]
    pub withdrawals: Box<Account<'info, Withdrawals>>,
}
