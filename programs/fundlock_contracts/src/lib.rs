// libraries
use anchor_lang::prelude::*;

//local imports
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod kamino;
pub mod states;
pub mod types;
pub mod utils;

// crates
use crate::constants::*;
use crate::instructions::*;
use crate::types::*;
use crate::utils::*;

#[cfg(feature = "dev")]
declare_id!("8iMAf8W48NJQkH6bq2N7LCWqS5s2wk4YjuBeH6xAUEsg");

#[cfg(feature = "prod")]
declare_id!("9aSGkFU8wcgaDnB8Y2DhB7vC7SzEc6B5b1HroiA1vNfq");

#[program]
pub mod fundlock_contracts {

    use super::*;

    /**
     * Create the access controller account
     * The signer becomes the immutable admin and the sole member of the
     * admin role
     */
    pub fn init_access_controller(ctx: Context<InitAccessController>) -> Result<()> {
        init_access_controller::handle(ctx)
    }

    /**
     * Grant a role to a member
     *
     * Should only be called by the access controller admin
     */
    pub fn grant_role(
        ctx: Context<GrantRole>,
        role_granted: String,
        new_member: Pubkey,
    ) -> Result<()> {
        grant_role::handle(ctx, role_granted, new_member)
    }

    /**
     * Revoke a member's role, closing its member account
     *
     * Should only be called by the access controller admin
     */
    pub fn revoke_role(
        ctx: Context<RevokeRole>,
        role_revoked: String,
        member_pk: Pubkey,
    ) -> Result<()> {
        revoke_role::handle(ctx, role_revoked, member_pk)
    }

    /**
     * Renounce one's own role, closing the member account
     */
    pub fn renounce_role(
        ctx: Context<RenounceRole>,
        role_renounced: String,
        member_pk: Pubkey,
    ) -> Result<()> {
        renounce_role::handle(ctx, role_renounced, member_pk)
    }

    /**
     * Assert that a member holds a role, fails when the membership
     * account does not exist
     */
    pub fn check_role(
        ctx: Context<CheckRole>,
        role_checked: String,
        member_pk: Pubkey,
    ) -> Result<()> {
        check_role::handle(ctx, role_checked, member_pk)
    }

    /**
     * Create the token validator for this access controller
     *
     * Should only be called by an admin member
     */
    pub fn init_token_validator(ctx: Context<InitTokenValidator>) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.admin.key())?;
        init_token_validator::handle(ctx)
    }

    /**
     * Whitelist a mint, recording its on-chain decimals and the
     * backend accounting precision
     *
     * Should only be called by an admin member
     */
    pub fn add_token_to_whitelist(
        ctx: Context<AddTokenToWhitelist>,
        token_precision: u8,
    ) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.admin.key())?;
        add_token_to_whitelist::handle(ctx, token_precision)
    }

    /**
     * Drop a mint from the whitelist, later operations referencing it
     * will fail
     *
     * Should only be called by an admin member
     */
    pub fn remove_token_from_whitelist(ctx: Context<RemoveTokenFromWhitelist>) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.admin.key())?;
        remove_token_from_whitelist::handle(ctx)
    }

    /**
     * Create the fundlock for this (access controller, token validator)
     * pair with its trade and release lock durations
     *
     * Should only be called by an admin member
     */
    pub fn init_fundlock(
        ctx: Context<InitFundlock>,
        trade_lock: i64,
        release_lock: i64,
    ) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.admin.key())?;
        init_fundlock::handle(ctx, trade_lock, release_lock)
    }

    /**
     * Deposit tokens from the client's account into the pooled vault
     */
    pub fn deposit_fundlock(ctx: Context<DepositFundlock>, amount: u64) -> Result<()> {
        deposit_fundlock::handle(ctx, amount)
    }

    /**
     * Queue a withdrawal of part of the client's free balance
     */
    pub fn withdraw_fundlock(ctx: Context<WithdrawFundlock>, amount: u64) -> Result<()> {
        withdraw_fundlock::handle(ctx, amount)
    }

    /**
     * Pay out a queued withdrawal once its release lock has elapsed
     */
    pub fn release_fundlock(ctx: Context<ReleaseFundlock>, index: u64) -> Result<()> {
        release_fundlock::handle(ctx, index)
    }

    /**
     * Apply a batch of signed balance adjustments
     *
     * Remaining accounts carry one (client balance, withdrawals) pair
     * per entry, in entry order
     *
     * Should only be called by an admin member
     */
    pub fn update_balances_fundlock<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateBalancesFundlock<'info>>,
        amounts: Vec<i64>,
        tokens: Vec<Pubkey>,
        clients_ata: Vec<Pubkey>,
        backend_id: u64,
    ) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.caller.key())?;
        update_balances_fundlock::handle(ctx, amounts, tokens, clients_ata, backend_id)
    }

    /**
     * Log a client's balance sheet for one token
     */
    pub fn balance_sheet_fundlock(ctx: Context<BalanceSheetFundlock>) -> Result<()> {
        balance_sheet_fundlock::handle(ctx)
    }

    /**
     * Create the ledger for an (underlying, strike) token pair and
     * compute both precision multipliers
     *
     * Should only be called by an admin member
     */
    pub fn init_ledger(ctx: Context<InitLedger>) -> Result<()> {
        assert_admin_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.admin.key())?;
        init_ledger::handle(ctx)
    }

    /**
     * Realize settlement movements between the ledger's token pair
     *
     * Remaining accounts carry four accounts per movement: the client's
     * (balance, withdrawals) pair for the underlying token, then for
     * the strike token
     *
     * Should only be called by a utility account member
     */
    pub fn update_fund_movements<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateFundMovements<'info>>,
        fund_movements: Vec<FundMovementParam>,
        backend_id: u64,
    ) -> Result<()> {
        assert_role_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.caller.key(), Roles::UtilityAccount)?;
        update_fund_movements::handle(ctx, fund_movements, backend_id)
    }

    /**
     * Idempotently create contracts and set or grow client positions
     *
     * Remaining accounts carry one (contract, position) PDA pair per
     * entry, in entry order
     *
     * Should only be called by a utility account member
     */
    pub fn create_contracts_and_positions<'info>(
        ctx: Context<'_, '_, '_, 'info, CreateContractsAndPositions<'info>>,
        positions: Vec<PositionParam>,
    ) -> Result<()> {
        assert_role_member(&ctx.accounts.role, &ctx.accounts.member, &ctx.accounts.caller.key(), Roles::UtilityAccount)?;
        create_contracts_and_positions::handle(ctx, positions)
    }

    /**
     * Move vault liquidity into the external lending reserve, receipt
     * tokens are tracked as the client's collateral amount
     */
    pub fn deposit_kamino(ctx: Context<DepositKamino>, amount: u64) -> Result<()> {
        deposit_kamino::handle(ctx, amount)
    }

    /**
     * Redeem receipt tokens from the external lending reserve back
     * into the pooled vault
     */
    pub fn redeem_kamino(ctx: Context<RedeemKamino>, amount: u64) -> Result<()> {
        redeem_kamino::handle(ctx, amount)
    }
}
