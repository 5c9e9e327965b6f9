use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("Only an admin member can perform this action.")]
    UnauthorizedAdmin,
    #[msg("The provided role name does not exist.")]
    InvalidRole,
    #[msg("This member does not have the requested role assigned.")]
    NoRole,
    #[msg("Token is not fungible.")]
    NonFungibleToken,
    #[msg("Whitelisted precision exceeds the mint decimals.")]
    InvalidPrecision,
    #[msg("Token has not been whitelisted.")]
    TokenNotWhitelisted,
    #[msg("Amount must be greater than zero.")]
    AmountZero,
    #[msg("Insufficient available balance.")]
    InsufficientBalance,
    #[msg("Withdrawal queue is at capacity.")]
    WithdrawalQueueFull,
    #[msg("Release lock has not elapsed for this withdrawal.")]
    ReleaseLockActive,
    #[msg("Queued funds are past their trade lock and reserved for release.")]
    TradeLockActive,
    #[msg("Withdrawal index is out of bounds.")]
    InvalidWithdrawalIndex,
    #[msg("The vault does not hold enough tokens.")]
    InsufficientVaultFunds,
    #[msg("Batch arguments and remaining accounts are misaligned.")]
    InvalidRemainingAccounts,
    #[msg("Account does not match the batch entry at its position.")]
    AccountOrderViolated,
    #[msg("Fund movement list is empty or a movement carries no amounts.")]
    EmptyFundMovements,
    #[msg("An overflow occurs.")]
    Overflow,
}
