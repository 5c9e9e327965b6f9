//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, ClientBalance, Fundlock, Ledger, Member, Role, TokenValidator, WhitelistedToken, Withdrawals};
use crate::types::FundMovementParam;
use crate::utils::{apply_balance_change, read_pda_account, write_pda_account};

// Remaining accounts carry four accounts per movement, in movement
// order: the client's (balance, withdrawals) pair for the underlying
// token, then the pair for the strike token. Pairs for a zero amount
// are passed but left untouched.
pub fn handle<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateFundMovements<'info>>,
    fund_movements: Vec<FundMovementParam>,
    backend_id: u64,
) -> Result<()> {
    require!(!fund_movements.is_empty(), ErrorCode::EmptyFundMovements);
    require!(
        ctx.remaining_accounts.len() == fund_movements.len() * 4,
        ErrorCode::InvalidRemainingAccounts
    );

    let ledger = &ctx.accounts.ledger;
    let trade_lock = ctx.accounts.fundlock.trade_lock;
    let now = Clock::get()?.unix_timestamp;

    for (i, movement) in fund_movements.iter().enumerate() {
        require!(
            movement.underlying_amount != 0 || movement.strike_amount != 0,
            ErrorCode::EmptyFundMovements
        );

        if movement.underlying_amount != 0 {
            let delta = movement
                .underlying_amount
                .checked_mul(ledger.underlying_multiplier)
                .ok_or(ErrorCode::Overflow)?;
            settle_side(
                &ctx.remaining_accounts[i * 4],
                &ctx.remaining_accounts[i * 4 + 1],
                movement.client,
                ledger.underlying_token,
                delta,
                trade_lock,
                now,
            )?;
        }
        if movement.strike_amount != 0 {
            let delta = movement
                .strike_amount
                .checked_mul(ledger.strike_multiplier)
                .ok_or(ErrorCode::Overflow)?;
            settle_side(
                &ctx.remaining_accounts[i * 4 + 2],
                &ctx.remaining_accounts[i * 4 + 3],
                movement.client,
                ledger.strike_token,
                delta,
                trade_lock,
                now,
            )?;
        }
    }

    msg!("Fund movements updated successfully, backend id {}", backend_id);

    Ok(())
}

fn settle_side(
    balance_info: &AccountInfo,
    withdrawals_info: &AccountInfo,
    client: Pubkey,
    token: Pubkey,
    delta: i64,
    trade_lock: i64,
    now: i64,
) -> Result<()> {
    let mut client_balance: ClientBalance = read_pda_account(balance_info)?;
    let mut withdrawals: Withdrawals = read_pda_account(withdrawals_info)?;

    require!(
        client_balance.client == client && client_balance.token == token,
        ErrorCode::AccountOrderViolated
    );
    require!(
        withdrawals.client_balance == balance_info.key(),
        ErrorCode::AccountOrderViolated
    );

    apply_balance_change(&mut client_balance, &mut withdrawals, delta, trade_lock, now)?;

    write_pda_account(&client_balance, balance_info)?;
    write_pda_account(&withdrawals, withdrawals_info)?;

    msg!("Client {} moved {} of {}", client, delta, token);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFundMovements<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        seeds = [ROLE_SEED, access_controller.key().as_ref(), Roles::UtilityAccount.as_str().as_bytes()],
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
    pub underlying_token: Box<Account<'info, Mint>>,
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), underlying_token.key().as_ref()],
        bump = whitelisted_underlying_token.bump,
    )]
    pub whitelisted_underlying_token: Box<Account<'info, WhitelistedToken>>,
    pub strike_token: Box<Account<'info, Mint>>,
    #[account(
        seeds = [WHITELISTED_TOKEN_SEED, token_validator.key().as_ref(), strike_token.key().as_ref()],
        bump = whitelisted_strike_token.bump,
    )]
    pub whitelisted_strike_token: Box<Account<'info, WhitelistedToken>>,
    #[account(
        seeds = [
            LEDGER_SEED,
            access_controller.key().as_ref(),
            token_validator.key().as_ref(),
            underlying_token.key().as_ref(),
            strike_token.key().as_ref(),
        ],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}
