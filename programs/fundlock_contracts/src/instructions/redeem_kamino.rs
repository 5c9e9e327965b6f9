//libraries
use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions;
use anchor_spl::token::{Mint, Token, TokenAccount};

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::kamino::{self, KaminoLending, ReserveAccounts};
use crate::states::{AccessController, ClientBalance, Fundlock, TokenValidator, WhitelistedToken};

pub fn handle(ctx: Context<RedeemKamino>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::AmountZero);
    require!(
        ctx.accounts.client_balance.collateral_amount >= amount,
        ErrorCode::InsufficientBalance
    );

    let access_controller_key = ctx.accounts.access_controller.key();
    let token_validator_key = ctx.accounts.token_validator.key();
    let fundlock_seeds: &[&[u8]] = &[
        FUNDLOCK_SEED,
        access_controller_key.as_ref(),
        token_validator_key.as_ref(),
        &[ctx.accounts.fundlock.bump],
    ];

    let vault_before = ctx.accounts.fundlock_token_vault.amount;

    let fundlock_info = ctx.accounts.fundlock.to_account_info();
    let liquidity_mint_info = ctx.accounts.token.to_account_info();
    let collateral_mint_info = ctx.accounts.reserve_collateral_token.to_account_info();
    let token_vault_info = ctx.accounts.fundlock_token_vault.to_account_info();
    let collateral_vault_info = ctx.accounts.fundlock_collateral_vault.to_account_info();
    let token_program_info = ctx.accounts.token_program.to_account_info();
    let instructions_info = ctx.accounts.instructions.to_account_info();
    let kamino_program_info = ctx.accounts.kamino_program.to_account_info();

    let reserve_accounts = ReserveAccounts {
        owner: &fundlock_info,
        reserve: &ctx.accounts.reserve,
        lending_market: &ctx.accounts.lending_market,
        lending_market_authority: &ctx.accounts.lending_market_authority,
        reserve_liquidity_mint: &liquidity_mint_info,
        reserve_liquidity_supply: &ctx.accounts.reserve_liquidity_supply,
        reserve_collateral_mint: &collateral_mint_info,
        user_source: &collateral_vault_info,
        user_destination: &token_vault_info,
        collateral_token_program: &token_program_info,
        liquidity_token_program: &token_program_info,
        instruction_sysvar: &instructions_info,
        kamino_program: &kamino_program_info,
    };
    kamino::redeem_reserve_collateral(&reserve_accounts, amount, fundlock_seeds)?;

    ctx.accounts.fundlock_token_vault.reload()?;
    let redeemed_liquidity = ctx.accounts.fundlock_token_vault.amount - vault_before;

    // Update State
    let client_balance = &mut ctx.accounts.client_balance;
    client_balance.collateral_amount -= amount;
    client_balance.amount += redeemed_liquidity;

    msg!(
        "Client {} redeemed {} collateral of {} for {} liquidity",
        ctx.accounts.client.key(),
        amount,
        ctx.accounts.token.key(),
        redeemed_liquidity
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RedeemKamino<'info> {
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
    #[account(mut)]
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
        constraint = client_ata.mint == token.key() && client_ata.owner == client.key()
    )]
    pub client_ata: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        seeds = [CLIENT_BALANCE_SEED, fundlock_token_vault.key().as_ref(), client_ata.key().as_ref()],
        bump = client_balance.bump,
    )]
    pub client_balance: Box<Account<'info, ClientBalance>>,

    // Accounts owned and validated by the Kamino program, passed
    // through verbatim
    /// CHECK: validated by the lending program
    #[account(mut)]
    pub reserve: AccountInfo<'info>,
    /// CHECK: validated by the lending program
    pub lending_market: AccountInfo<'info>,
    /// CHECK: validated by the lending program
    pub lending_market_authority: AccountInfo<'info>,
    /// CHECK: validated by the lending program
    #[account(mut)]
    pub reserve_liquidity_supply: AccountInfo<'info>,
    #[account(mut)]
    pub reserve_collateral_token: Box<Account<'info, Mint>>,
    #[account(
        mut,
        seeds = [FUNDLOCK_COLLATERAL_VAULT_SEED, fundlock_token_vault.key().as_ref(), reserve_collateral_token.key().as_ref()],
        bump,
        token::mint = reserve_collateral_token,
        token::authority = fundlock,
    )]
    pub fundlock_collateral_vault: Box<Account<'info, TokenAccount>>,
    pub kamino_program: Program<'info, KaminoLending>,
    /// CHECK: InstructionsSysvar account
    #[account(address = instructions::ID)]
    pub instructions: UncheckedAccount<'info>,

    // Programs and Sysvars
    pub token_program: Program<'info, Token>,
}
