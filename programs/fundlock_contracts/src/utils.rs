// libraries
use anchor_lang::prelude::*;
use anchor_lang::system_program;

// local imports
use crate::constants::Roles;
use crate::errors::ErrorCode;
use crate::states::{ClientBalance, Member, Role, Withdrawals};

// Asserts the caller is a live member of the admin role
pub fn assert_admin_member(role: &Role, member: &Member, caller: &Pubkey) -> Result<()> {
    assert_role_member(role, member, caller, Roles::Admin)
}

// Asserts the caller is a live member of the expected role
pub fn assert_role_member(
    role: &Role,
    member: &Member,
    caller: &Pubkey,
    expected: Roles,
) -> Result<()> {
    let unauthorized = match expected {
        Roles::Admin => ErrorCode::UnauthorizedAdmin,
        _ => ErrorCode::Unauthorized,
    };
    if role.role != expected.as_str() {
        return Err(unauthorized.into());
    }
    if member.member != *caller {
        return Err(unauthorized.into());
    }
    Ok(())
}

/// The part of the client's balance not reserved by queued withdrawals.
pub fn free_balance(balance: &ClientBalance, withdrawals: &Withdrawals) -> u64 {
    balance
        .amount
        .saturating_sub(withdrawals.active_withdrawals_amount)
}

/// Raw units per one unit of backend precision.
pub fn precision_multiplier(decimals: u8, precision: u8) -> i64 {
    10_i64.pow((decimals - precision) as u32)
}

/// Covers `shortage` out of the withdrawal queue during settlement.
///
/// Only entries still inside their trade lock window
/// (now < timestamp + trade_lock) are reachable; older entries are
/// reserved for release. Entries are consumed in queue order, drained
/// entries are removed and `active_withdrawals_amount` shrinks by the
/// consumed total.
pub fn fund_from_withdrawal_queue(
    withdrawals: &mut Withdrawals,
    shortage: u64,
    trade_lock: i64,
    now: i64,
) -> Result<()> {
    require!(
        withdrawals.active_withdrawals_amount >= shortage,
        ErrorCode::InsufficientBalance
    );
    let mut left_to_fund = shortage;
    let mut index = 0;
    while left_to_fund > 0 && index < withdrawals.withdrawal_queue.len() {
        let entry = withdrawals.withdrawal_queue[index];
        if entry.timestamp + trade_lock <= now {
            index += 1;
            continue;
        }
        let taken = entry.amount.min(left_to_fund);
        left_to_fund -= taken;
        withdrawals.active_withdrawals_amount -= taken;
        if taken == entry.amount {
            withdrawals.withdrawal_queue.remove(index);
        } else {
            withdrawals.withdrawal_queue[index].amount -= taken;
            index += 1;
        }
        msg!("Funded {} from the withdrawal queue", taken);
    }
    // Queued funds exist but sit outside the trade window
    require!(left_to_fund == 0, ErrorCode::TradeLockActive);
    Ok(())
}

/// Applies one signed settlement delta to a client balance.
///
/// Credits go straight to the balance. Debits consume the free balance
/// first and reach into the withdrawal queue for any shortage.
pub fn apply_balance_change(
    balance: &mut ClientBalance,
    withdrawals: &mut Withdrawals,
    delta: i64,
    trade_lock: i64,
    now: i64,
) -> Result<()> {
    if delta >= 0 {
        balance.amount = balance
            .amount
            .checked_add(delta as u64)
            .ok_or(ErrorCode::Overflow)?;
        return Ok(());
    }
    let debit = delta.unsigned_abs();
    let free = free_balance(balance, withdrawals);
    if debit > free {
        fund_from_withdrawal_queue(withdrawals, debit - free, trade_lock, now)?;
    }
    balance.amount = balance
        .amount
        .checked_sub(debit)
        .ok_or(ErrorCode::InsufficientBalance)?;
    Ok(())
}

/// Deserializes a program-owned account passed through remaining accounts.
pub fn read_pda_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require!(
        info.owner == &crate::ID,
        ErrorCode::InvalidRemainingAccounts
    );
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice)
}

/// Writes an account back after mutating it outside of Anchor's
/// declared-accounts lifecycle.
pub fn write_pda_account<T: AccountSerialize>(value: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut cursor: &mut [u8] = &mut data;
    value.try_serialize(&mut cursor)?;
    Ok(())
}

/// System-program CPI that materializes a PDA passed through remaining
/// accounts, paid for by the caller and owned by this program.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let lamports = Rent::get()?.minimum_balance(space);
    let signer_seeds_outer: &[&[&[u8]]] = &[signer_seeds];
    let cpi_ctx = CpiContext::new_with_signer(
        system_program.clone(),
        system_program::CreateAccount {
            from: payer.clone(),
            to: new_account.clone(),
        },
        signer_seeds_outer,
    );
    system_program::create_account(cpi_ctx, lamports, space as u64, &crate::ID)
}
