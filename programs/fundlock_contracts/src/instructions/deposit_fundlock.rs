//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, ClientBalance, Fundlock, TokenValidator, WhitelistedToken, Withdrawals};

pub fn handle(ctx: Context<DepositFundlock>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::AmountZero);
    require!(
        ctx.accounts.whitelisted_token.token_mint == ctx.accounts.token.key(),
        ErrorCode::TokenNotWhitelisted
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.client_ata.to_account_info(),
        to: ctx.accounts.fundlock_token_vault.to_account_info(),
        authority: ctx.accounts.client.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Update State
    let client_balance = &mut ctx.accounts.client_balance;
    client_balance.amount += amount;
    client_balance.token = ctx.accounts.token.key();
    client_balance.client = ctx.accounts.client.key();
    client_balance.client_ata = ctx.accounts.client_ata.key();
    client_balance.bump = ctx.bumps.client_balance;

    let withdrawals = &mut ctx.accounts.withdrawals;
    withdrawals.client = ctx.accounts.client.key();
    withdrawals.client_balance = client_balance.key();
    withdrawals.bump = ctx.bumps.withdrawals;

    msg!(
        "Client {} deposited {} of {} into the fundlock",
        ctx.accounts.client.key(),
        amount,
        ctx.accounts.token.key()
    );

    Ok(())
}

#[derive(Accounts)]
pub struct DepositFundlock<'info> {
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
    #[account(
        constraint = token.decimals > 0 @ ErrorCode::NonFungibleToken
    )]
    pub token: Box<Account<'info, Mint>>,
    // Resolving this PDA fails for a mint that was never whitelisted,
    // before any client account gets created
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), token.key().as_ref()],
        bump = whitelisted_token.bump,
    )]
    pub whitelisted_token: Box<Account<'info, WhitelistedToken>>,
    #[account(
        init_if_needed,
        payer = client,
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
        init_if_needed,
        payer = client,
        seeds = [CLIENT_BALANCE_SEED, fundlock_token_vault.key().as_ref(), client_ata.key().as_ref()],
        bump,
        space = 8 + ClientBalance::INIT_SPACE,
    )]
    pub client_balance: Box<Account<'info, ClientBalance>>,
    #[account(
        init_if_needed,
        payer = client,
        seeds = [WITHDRAWALS_SEED, fundlock.key().as_ref(), client_balance.key().as_ref()],
        bump,
        space = 8 + Withdrawals::INIT_SPACE,
    )]
    pub withdrawals: Box<Account<'info, Withdrawals>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
