//! CPI plumbing for the Kamino lending reserve.
//!
//! The fundlock treats Kamino as an opaque collateral custodian: vault
//! liquidity goes in, receipt tokens come back, and the reserve-side
//! accounts pass through verbatim. Instructions are built by hand
//! against the deployed program's ABI.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

pub mod kamino_lending {
    use anchor_lang::declare_id;
    declare_id!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");
}

#[derive(Clone)]
pub struct KaminoLending;

impl anchor_lang::Id for KaminoLending {
    fn id() -> Pubkey {
        kamino_lending::ID
    }
}

const DEPOSIT_RESERVE_LIQUIDITY_DISCM: [u8; 8] = [169, 201, 30, 126, 6, 205, 102, 68];
const REDEEM_RESERVE_COLLATERAL_DISCM: [u8; 8] = [234, 117, 181, 125, 185, 142, 220, 29];

/// Account set shared by both directions of the bridge. Field names
/// follow the reserve program's ABI; `user_source` / `user_destination`
/// are the fundlock-owned vaults on our side.
pub struct ReserveAccounts<'a, 'info> {
    pub owner: &'a AccountInfo<'info>,
    pub reserve: &'a AccountInfo<'info>,
    pub lending_market: &'a AccountInfo<'info>,
    pub lending_market_authority: &'a AccountInfo<'info>,
    pub reserve_liquidity_mint: &'a AccountInfo<'info>,
    pub reserve_liquidity_supply: &'a AccountInfo<'info>,
    pub reserve_collateral_mint: &'a AccountInfo<'info>,
    pub user_source: &'a AccountInfo<'info>,
    pub user_destination: &'a AccountInfo<'info>,
    pub collateral_token_program: &'a AccountInfo<'info>,
    pub liquidity_token_program: &'a AccountInfo<'info>,
    pub instruction_sysvar: &'a AccountInfo<'info>,
    pub kamino_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> ReserveAccounts<'a, 'info> {
    fn to_infos(&self) -> Vec<AccountInfo<'info>> {
        vec![
            self.owner.clone(),
            self.reserve.clone(),
            self.lending_market.clone(),
            self.lending_market_authority.clone(),
            self.reserve_liquidity_mint.clone(),
            self.reserve_liquidity_supply.clone(),
            self.reserve_collateral_mint.clone(),
            self.user_source.clone(),
            self.user_destination.clone(),
            self.collateral_token_program.clone(),
            self.liquidity_token_program.clone(),
            self.instruction_sysvar.clone(),
        ]
    }

    fn to_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(*self.owner.key, true),
            AccountMeta::new(*self.reserve.key, false),
            AccountMeta::new_readonly(*self.lending_market.key, false),
            AccountMeta::new_readonly(*self.lending_market_authority.key, false),
            AccountMeta::new(*self.reserve_liquidity_mint.key, false),
            AccountMeta::new(*self.reserve_liquidity_supply.key, false),
            AccountMeta::new(*self.reserve_collateral_mint.key, false),
            AccountMeta::new(*self.user_source.key, false),
            AccountMeta::new(*self.user_destination.key, false),
            AccountMeta::new_readonly(*self.collateral_token_program.key, false),
            AccountMeta::new_readonly(*self.liquidity_token_program.key, false),
            AccountMeta::new_readonly(*self.instruction_sysvar.key, false),
        ]
    }

    fn invoke(&self, discriminator: [u8; 8], amount: u64, signer_seeds: &[&[u8]]) -> Result<()> {
        let mut data = Vec::with_capacity(16);
        data.extend_from_slice(&discriminator);
        data.extend_from_slice(&amount.to_le_bytes());
        let ix = Instruction {
            program_id: *self.kamino_program.key,
            accounts: self.to_metas(),
            data,
        };
        invoke_signed(&ix, &self.to_infos(), &[signer_seeds])?;
        Ok(())
    }
}

/// Moves `liquidity_amount` from the source vault into the reserve,
/// minting receipt tokens to the destination vault.
pub fn deposit_reserve_liquidity(
    accounts: &ReserveAccounts,
    liquidity_amount: u64,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    accounts.invoke(DEPOSIT_RESERVE_LIQUIDITY_DISCM, liquidity_amount, signer_seeds)
}

/// Burns `collateral_amount` receipt tokens from the source vault and
/// returns the matching liquidity to the destination vault.
pub fn redeem_reserve_collateral(
    accounts: &ReserveAccounts,
    collateral_amount: u64,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    accounts.invoke(REDEEM_RESERVE_COLLATERAL_DISCM, collateral_amount, signer_seeds)
}
